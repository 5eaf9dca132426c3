//! Calibration error types

use crate::platform::PlatformError;
use core::fmt;

/// Configuration errors, checked once before a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Measurement window of zero pulses
    ZeroWindow,
    /// Target frequency of zero
    ZeroTarget,
    /// Target frequency above the counter's safe sampling ceiling
    TargetAboveCounterCeiling,
}

/// Errors that abort a calibration run
///
/// A zero measurement is *not* represented here; it is a per-iteration
/// fault reported through the diagnostics sink while the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// Invalid run configuration
    Config(ConfigError),
    /// A collaborator device call failed
    Platform(PlatformError),
}

impl From<ConfigError> for CalibrationError {
    fn from(e: ConfigError) -> Self {
        CalibrationError::Config(e)
    }
}

impl From<PlatformError> for CalibrationError {
    fn from(e: PlatformError) -> Self {
        CalibrationError::Platform(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWindow => write!(f, "measurement window is zero pulses"),
            ConfigError::ZeroTarget => write!(f, "target frequency is zero"),
            ConfigError::TargetAboveCounterCeiling => {
                write!(f, "target frequency exceeds counter sampling ceiling")
            }
        }
    }
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::Config(e) => write!(f, "configuration error: {}", e),
            CalibrationError::Platform(e) => write!(f, "platform error: {}", e),
        }
    }
}
