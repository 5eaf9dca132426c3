//! Pulse counter interface trait
//!
//! The pulse counter is a fixed-width hardware counter clocked externally by
//! the clock-under-test (Timer1 on AVR-class parts, a general-purpose timer
//! in external-clock mode elsewhere). It wraps at its modulus and raises an
//! overflow interrupt on each wrap; the calibration core extends it to a
//! wide count with a software overflow tally.

/// Pulse counter interface trait
///
/// # Safety Invariants
///
/// - All methods may be called from interrupt context; implementations must
///   be register-level operations that cannot block or fail.
/// - Only one owner per counter instance; concurrent access is mediated by
///   the calibration core's shared-state cell.
pub trait PulseCounterInterface {
    /// Enable the counter's external clock input so it counts pulses
    fn start(&mut self);

    /// Disable the counter's external clock input, freezing the count
    fn stop(&mut self);

    /// Zero the count register
    fn reset(&mut self);

    /// Read the current count register value
    ///
    /// Only meaningful while the counter is stopped or from within a
    /// critical section; a free-running read may race the overflow tally.
    fn read(&self) -> u32;

    /// The counter's wrap-around size (e.g. 65 536 for a 16-bit counter)
    fn modulus(&self) -> u64;

    /// Enable or disable the counter-overflow interrupt
    fn set_overflow_interrupt(&mut self, enabled: bool);

    /// Clear a pending overflow indication left over from before arming
    fn clear_pending_overflow(&mut self);
}
