//! Calibration run configuration

use super::error::ConfigError;
use crate::platform::EdgeTrigger;

/// Fixed-point scale: hundredths of Hz per Hz
pub const CENTI_HZ_PER_HZ: u64 = 100;

/// Measurement windows per calibration run
pub const RUN_ITERATIONS: u8 = 24;

/// PPS pulses integrated per measurement window (seconds)
pub const WINDOW_PULSES: u16 = 10;

/// Settling delay after a correction is applied, before the next window
pub const SETTLE_DELAY_MS: u32 = 10;

/// Parameters for a calibration run
///
/// Constant for the lifetime of a run. `target_centi_hz` is the expected
/// pulse count of the clock-under-test over exactly one second, expressed
/// in hundredths of Hz; at the default 10-pulse window this gives 0.1 Hz
/// measurement resolution.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalConfig {
    /// Target frequency of the calibration output, hundredths of Hz
    pub target_centi_hz: u64,
    /// PPS pulses per measurement window
    pub window_pulses: u16,
    /// Generator channel carrying the calibration clock
    pub cal_channel: u8,
    /// Generator channel carrying the park clock
    pub park_channel: u8,
    /// Nominal park clock frequency, Hz
    pub park_freq_hz: u64,
    /// How the PPS interrupt line triggers on this board
    pub edge_trigger: EdgeTrigger,
    /// Processor clock feeding the pulse counter, Hz
    pub system_clock_hz: u32,
}

impl CalConfig {
    /// Highest calibration frequency the counter can sample reliably,
    /// hundredths of Hz.
    ///
    /// Each pulse must outlast the processor clock period to latch, which
    /// caps sampling at half the system clock; dividing by 2.5 leaves a
    /// safety margin. An 8 MHz part lands on 3.2 MHz.
    pub fn counter_ceiling_centi_hz(&self) -> u64 {
        self.system_clock_hz as u64 * CENTI_HZ_PER_HZ * 2 / 5
    }

    /// Validate the configuration before starting a run
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a zero window, a zero target, or a
    /// target above the counter's sampling ceiling. These are fatal to
    /// starting a run; nothing checks them again per iteration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_pulses == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if self.target_centi_hz == 0 {
            return Err(ConfigError::ZeroTarget);
        }
        if self.target_centi_hz > self.counter_ceiling_centi_hz() {
            return Err(ConfigError::TargetAboveCounterCeiling);
        }
        Ok(())
    }
}
