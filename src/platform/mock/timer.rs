//! Mock timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock timer
///
/// Advances simulated time on each delay and counts delay calls so tests
/// can assert the settling delay actually happened.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    delay_calls: u32,
}

impl MockTimer {
    /// Create a new mock timer at t = 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of delay calls issued
    pub fn delay_calls(&self) -> u32 {
        self.delay_calls
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.now_us = self.now_us.wrapping_add(us as u64);
        self.delay_calls += 1;
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_advance_simulated_time() {
        let mut timer = MockTimer::new();
        timer.delay_us(1500).unwrap();
        timer.delay_ms(2).unwrap();
        assert_eq!(timer.now_us(), 3500);
        assert_eq!(timer.now_ms(), 3);
        assert_eq!(timer.delay_calls(), 2);
    }
}
