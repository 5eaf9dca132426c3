//! Mock PPS interrupt line implementation for testing

use crate::platform::traits::PpsSourceInterface;

/// Mock PPS interrupt line
///
/// Tracks the mask state and how many times the line was unmasked, for
/// verifying arm/disarm sequencing.
#[derive(Debug, Default)]
pub struct MockPpsSource {
    enabled: bool,
    enable_calls: u32,
}

impl MockPpsSource {
    /// Create a new masked PPS line
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the interrupt is currently unmasked
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of times the interrupt was unmasked
    pub fn enable_calls(&self) -> u32 {
        self.enable_calls
    }
}

impl PpsSourceInterface for MockPpsSource {
    fn enable(&mut self) {
        self.enabled = true;
        self.enable_calls += 1;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pps_starts_masked() {
        let pps = MockPpsSource::new();
        assert!(!pps.is_enabled());
    }

    #[test]
    fn enable_disable_tracks_state() {
        let mut pps = MockPpsSource::new();
        pps.enable();
        assert!(pps.is_enabled());
        pps.disable();
        assert!(!pps.is_enabled());
        assert_eq!(pps.enable_calls(), 1);
    }
}
