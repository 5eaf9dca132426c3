//! GPS PPS interrupt line trait
//!
//! The PPS source delivers the GPS pulse-per-second signal as an interrupt.
//! Depending on the board wiring, the line either supports a true
//! rising-edge trigger or only an any-edge trigger that fires on both
//! transitions and must be demultiplexed in software.

/// How the PPS interrupt line triggers
///
/// Selected once at configuration time; the capture logic never branches on
/// this per edge beyond the parity filter for `AnyEdge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeTrigger {
    /// Hardware fires only on rising edges; every interrupt is a pulse
    Rising,
    /// Hardware fires on both transitions; every second interrupt is a
    /// pulse, tracked by a toggling parity flag
    AnyEdge,
}

/// PPS interrupt line interface trait
///
/// # Safety Invariants
///
/// - `disable` may be called from the PPS interrupt handler itself (the
///   window-boundary pulse masks its own source).
/// - Implementations must not block.
pub trait PpsSourceInterface {
    /// Unmask the PPS interrupt
    ///
    /// Implementations must clear any pending edge indication before
    /// unmasking, so a stale latched edge cannot fire immediately.
    fn enable(&mut self);

    /// Mask the PPS interrupt
    fn disable(&mut self);
}
