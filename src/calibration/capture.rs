//! Interrupt-side capture state
//!
//! One [`Capture`] owns everything the two interrupt handlers touch: the
//! pulse counter, the PPS interrupt line, the pulse index, the overflow
//! tally, the edge parity and the completion flag. It lives inside a
//! [`crate::core::traits::SharedState`] cell; interrupt handlers call
//! [`Capture::on_pps_transition`] / [`Capture::on_counter_overflow`] through
//! it, the foreground arms and reads through it, and the cell's critical
//! section is what makes the multi-word read of counter value plus tally
//! atomic.
//!
//! Pulse accounting: pulse index 0 is the arm point. The first accepted
//! pulse (index 1) zeroes the counter and the tally and starts integration;
//! pulse index `window + 1` stops the counter, masks the PPS interrupt and
//! raises the completion flag, so exactly `window` seconds elapse between
//! the first and last accepted pulse.

use super::frequency;
use crate::platform::{EdgeTrigger, PpsSourceInterface, PulseCounterInterface};

/// Capture state plus the peripherals the interrupt handlers drive
pub struct Capture<C, P> {
    counter: C,
    pps: P,
    trigger: EdgeTrigger,
    window_pulses: u16,
    pulse_index: u16,
    overflow_tally: u32,
    /// Variant B only: toggles on every electrical transition; a pulse is
    /// accepted on every second transition, N transitions yielding
    /// floor(N/2) pulses
    rising_parity: bool,
    armed: bool,
    complete: bool,
}

impl<C, P> Capture<C, P>
where
    C: PulseCounterInterface,
    P: PpsSourceInterface,
{
    /// Wrap the counter and PPS peripherals with idle capture state
    pub fn new(counter: C, pps: P, trigger: EdgeTrigger, window_pulses: u16) -> Self {
        Self {
            counter,
            pps,
            trigger,
            window_pulses,
            pulse_index: 0,
            overflow_tally: 0,
            rising_parity: false,
            armed: false,
            complete: false,
        }
    }

    /// One-time hardware setup before a run
    ///
    /// Counter zeroed and clocking with its overflow interrupt live, PPS
    /// interrupt left masked until the first window is armed. Safe to call
    /// again between runs.
    pub fn configure(&mut self) {
        self.pps.disable();
        self.counter.reset();
        self.counter.clear_pending_overflow();
        self.counter.set_overflow_interrupt(true);
        self.counter.start();
        self.pulse_index = 0;
        self.overflow_tally = 0;
        self.rising_parity = false;
        self.armed = false;
        self.complete = false;
    }

    /// Arm one measurement window
    ///
    /// Clears the completion flag and the pulse accounting, restarts the
    /// counter clock and overflow interrupt, then unmasks the PPS
    /// interrupt. From here on only interrupt context mutates this state
    /// until the completion flag is raised.
    pub fn arm(&mut self) {
        self.complete = false;
        self.pulse_index = 0;
        self.overflow_tally = 0;
        self.rising_parity = false;
        self.counter.clear_pending_overflow();
        self.counter.set_overflow_interrupt(true);
        self.counter.start();
        self.pps.enable();
        self.armed = true;
    }

    /// PPS interrupt entry point, one call per electrical transition
    ///
    /// With `EdgeTrigger::Rising` every call is a pulse. With
    /// `EdgeTrigger::AnyEdge` the handler fires on both transitions and
    /// only every second call counts; which electrical polarity lands on
    /// the counted half does not matter as long as it is consistent, and
    /// the toggle makes it so.
    pub fn on_pps_transition(&mut self) {
        if self.trigger == EdgeTrigger::AnyEdge {
            self.rising_parity = !self.rising_parity;
            if self.rising_parity {
                // First half of the pulse; the second transition counts
                return;
            }
        }

        self.pulse_index += 1;

        if self.pulse_index == 1 {
            // First accepted pulse: begin integration from zero
            self.counter.reset();
            self.counter.clear_pending_overflow();
            self.overflow_tally = 0;
        } else if self.pulse_index == self.window_pulses + 1 {
            // Window closed: freeze the count and mask our own source
            self.pps.disable();
            self.counter.stop();
            self.rising_parity = false;
            self.armed = false;
            self.complete = true;
        }
    }

    /// Counter-overflow interrupt entry point
    pub fn on_counter_overflow(&mut self) {
        self.overflow_tally = self.overflow_tally.wrapping_add(1);
    }

    /// Whether the current window has closed
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether a window is armed and still integrating
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Counter register value, for diagnostics
    pub fn counter_value(&self) -> u32 {
        self.counter.read()
    }

    /// Overflow tally, for diagnostics
    pub fn overflow_tally(&self) -> u32 {
        self.overflow_tally
    }

    /// Widened pulse count for the closed window
    ///
    /// Only meaningful after [`Capture::is_complete`] returned true; the
    /// caller reads it inside the same shared-state cell access that
    /// masked the interrupt sources, so counter value and tally cannot
    /// tear.
    pub fn raw_count(&self) -> u64 {
        frequency::raw_count(self.counter.read(), self.overflow_tally, self.counter.modulus())
    }

    /// Direct access to the counter, for test scripting
    #[cfg(any(test, feature = "mock"))]
    pub fn counter_mut(&mut self) -> &mut C {
        &mut self.counter
    }

    /// Direct access to the PPS line, for test assertions
    #[cfg(any(test, feature = "mock"))]
    pub fn pps(&self) -> &P {
        &self.pps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockPpsSource, MockPulseCounter};

    fn capture(trigger: EdgeTrigger) -> Capture<MockPulseCounter, MockPpsSource> {
        let mut cap = Capture::new(MockPulseCounter::new(), MockPpsSource::new(), trigger, 10);
        cap.configure();
        cap
    }

    #[test]
    fn configure_leaves_pps_masked_and_counter_clocking() {
        let cap = capture(EdgeTrigger::Rising);
        assert!(!cap.pps().is_enabled());
        assert!(!cap.is_complete());
        assert!(!cap.is_armed());
    }

    #[test]
    fn first_pulse_resets_counter_and_tally() {
        let mut cap = capture(EdgeTrigger::Rising);
        cap.arm();
        cap.counter_mut().set_count(777);
        cap.on_counter_overflow();
        cap.counter_mut().set_pending_overflow();

        cap.on_pps_transition();

        assert_eq!(cap.counter_value(), 0);
        assert_eq!(cap.overflow_tally(), 0);
        assert!(!cap.counter_mut().has_pending_overflow());
        assert!(!cap.is_complete());
    }

    #[test]
    fn window_closes_on_pulse_eleven() {
        let mut cap = capture(EdgeTrigger::Rising);
        cap.arm();
        assert!(cap.is_armed());

        for _ in 0..10 {
            cap.on_pps_transition();
            assert!(!cap.is_complete());
        }
        cap.on_pps_transition();

        assert!(cap.is_complete());
        assert!(!cap.is_armed());
        assert!(!cap.pps().is_enabled());
        assert!(!cap.counter_mut().is_running());
    }

    #[test]
    fn completion_flag_false_while_armed_true_after() {
        let mut cap = capture(EdgeTrigger::Rising);
        cap.arm();
        assert!(!cap.is_complete());
        for _ in 0..11 {
            cap.on_pps_transition();
        }
        assert!(cap.is_complete());

        // Rearming clears it again
        cap.arm();
        assert!(!cap.is_complete());
    }

    #[test]
    fn any_edge_counts_every_second_transition() {
        let mut cap = capture(EdgeTrigger::AnyEdge);
        cap.arm();

        // 22 electrical transitions = 11 accepted pulses = window closed
        for _ in 0..21 {
            cap.on_pps_transition();
            assert!(!cap.is_complete());
        }
        cap.on_pps_transition();
        assert!(cap.is_complete());
    }

    #[test]
    fn any_edge_accepts_floor_half_of_transitions() {
        // Use a wide window so the window boundary is never hit
        let mut cap = Capture::new(
            MockPulseCounter::new(),
            MockPpsSource::new(),
            EdgeTrigger::AnyEdge,
            1000,
        );
        cap.configure();
        cap.arm();

        for n in 1..=25u16 {
            cap.on_pps_transition();
            assert_eq!(cap.pulse_index, n / 2);
        }
    }

    #[test]
    fn raw_count_combines_counter_and_tally() {
        let mut cap = capture(EdgeTrigger::Rising);
        cap.arm();
        cap.on_pps_transition();
        for _ in 0..488 {
            cap.on_counter_overflow();
        }
        cap.counter_mut().set_count(18_432);
        for _ in 0..10 {
            cap.on_pps_transition();
        }

        assert!(cap.is_complete());
        // 488 * 65536 + 18432 = 32 million, a perfect 3.2 MHz window
        assert_eq!(cap.raw_count(), 32_000_000);
    }

    #[test]
    fn overflow_tally_survives_mid_window() {
        let mut cap = capture(EdgeTrigger::Rising);
        cap.arm();
        cap.on_pps_transition();
        cap.on_counter_overflow();
        cap.on_counter_overflow();
        assert_eq!(cap.overflow_tally(), 2);
    }
}
