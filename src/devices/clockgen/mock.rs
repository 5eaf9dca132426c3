//! Mock clock generator implementation for testing

use crate::devices::traits::ClockGenerator;
use crate::platform::Result;
use heapless::Vec;

/// A single recorded clock generator call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockGenOp {
    /// `set_frequency(channel, centi_hz, enable_output)`
    SetFrequency {
        channel: u8,
        centi_hz: u64,
        enable_output: bool,
    },
    /// `enable_output(channel, on)`
    EnableOutput { channel: u8, on: bool },
    /// `set_correction(correction)`
    SetCorrection(i32),
}

/// Call capacity: one full run issues ~3 calls per iteration plus setup
/// and completion, so 128 leaves headroom.
const OP_CAPACITY: usize = 128;

/// Mock clock generator
///
/// Records every call in order so tests can verify both the values written
/// and the correction-before-frequency ordering rule.
#[derive(Debug, Default)]
pub struct MockClockGenerator {
    ops: Vec<ClockGenOp, OP_CAPACITY>,
    correction: i32,
}

impl MockClockGenerator {
    /// Create a new mock generator with no recorded calls
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first
    pub fn ops(&self) -> &[ClockGenOp] {
        &self.ops
    }

    /// The most recently written correction factor
    pub fn correction(&self) -> i32 {
        self.correction
    }

    fn record(&mut self, op: ClockGenOp) {
        // Recording is best-effort; dropping beyond capacity keeps the mock
        // fire-and-forget like the real bus write path.
        let _ = self.ops.push(op);
    }
}

impl ClockGenerator for MockClockGenerator {
    fn set_frequency(&mut self, channel: u8, centi_hz: u64, enable_output: bool) -> Result<()> {
        self.record(ClockGenOp::SetFrequency {
            channel,
            centi_hz,
            enable_output,
        });
        Ok(())
    }

    fn enable_output(&mut self, channel: u8, on: bool) -> Result<()> {
        self.record(ClockGenOp::EnableOutput { channel, on });
        Ok(())
    }

    fn set_correction(&mut self, correction: i32) -> Result<()> {
        self.correction = correction;
        self.record(ClockGenOp::SetCorrection(correction));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut clockgen = MockClockGenerator::new();
        clockgen.set_correction(-6813).unwrap();
        clockgen.set_frequency(2, 320_000_000, true).unwrap();
        clockgen.enable_output(2, false).unwrap();

        assert_eq!(
            clockgen.ops(),
            &[
                ClockGenOp::SetCorrection(-6813),
                ClockGenOp::SetFrequency {
                    channel: 2,
                    centi_hz: 320_000_000,
                    enable_output: true
                },
                ClockGenOp::EnableOutput { channel: 2, on: false },
            ]
        );
        assert_eq!(clockgen.correction(), -6813);
    }
}
