//! Clock generator trait
//!
//! Functional contract for an Si5351-class programmable clock generator.
//! Register-level programming belongs to the driver behind this trait; the
//! calibration core only sets frequencies, toggles outputs, and pushes the
//! correction factor.

use crate::platform::Result;

/// Clock generator interface
///
/// Frequencies are fixed-point, in hundredths of Hz, matching the
/// calibration core's measurement unit.
///
/// # Ordering Invariant
///
/// A new correction factor takes effect only on the next `set_frequency`
/// call for the channel, so callers must `set_correction` *before*
/// rewriting the frequency.
pub trait ClockGenerator {
    /// Program an output channel to the given frequency
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ClockGen` if the channel is invalid, the
    /// frequency is out of range, or the bus transaction fails.
    fn set_frequency(&mut self, channel: u8, centi_hz: u64, enable_output: bool) -> Result<()>;

    /// Enable or disable an output channel without reprogramming it
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ClockGen` on an invalid channel or bus
    /// failure.
    fn enable_output(&mut self, channel: u8, on: bool) -> Result<()>;

    /// Set the frequency correction factor, in hundredths of Hz equivalent
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ClockGen` on bus failure.
    fn set_correction(&mut self, correction: i32) -> Result<()>;
}
