//! Scripted interrupt delivery for host tests
//!
//! [`SimulatedInterrupts`] is a [`SharedState`] cell over a mock-peripheral
//! [`Capture`] that plays the part of the interrupt contexts: before each
//! foreground access it delivers any pending "interrupts" for the armed
//! window — the PPS transitions and counter overflows a real run would see
//! between two foreground polls. The controller loop then runs on the host
//! byte-for-byte as it would under hardware interrupts, including the
//! busy-wait on the completion flag.

use super::capture::Capture;
use super::config::CENTI_HZ_PER_HZ;
use crate::core::traits::SharedState;
use crate::platform::mock::{MockPpsSource, MockPulseCounter};
use crate::platform::EdgeTrigger;
use core::cell::{Cell, RefCell};
use heapless::Vec;

/// What one measurement window observes at completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSample {
    /// Counter register value when the window closes
    pub counter: u32,
    /// Overflow interrupts delivered during the window
    pub overflows: u32,
}

impl WindowSample {
    /// Build the sample a clock of the given frequency would produce
    pub fn from_centi_hz(centi_hz: u64, window_pulses: u16) -> Self {
        let raw = centi_hz * window_pulses as u64 / CENTI_HZ_PER_HZ;
        Self {
            counter: (raw % MockPulseCounter::MODULUS) as u32,
            overflows: (raw / MockPulseCounter::MODULUS) as u32,
        }
    }
}

/// Scripted windows per simulator
const SCRIPT_CAPACITY: usize = 32;

/// Shared capture cell with scripted interrupt delivery
pub struct SimulatedInterrupts {
    cap: RefCell<Capture<MockPulseCounter, MockPpsSource>>,
    trigger: EdgeTrigger,
    script: RefCell<Vec<WindowSample, SCRIPT_CAPACITY>>,
    cursor: Cell<usize>,
    repeating: Cell<Option<WindowSample>>,
}

impl SimulatedInterrupts {
    /// Create a simulator around fresh mock peripherals
    pub fn new(trigger: EdgeTrigger, window_pulses: u16) -> Self {
        Self {
            cap: RefCell::new(Capture::new(
                MockPulseCounter::new(),
                MockPpsSource::new(),
                trigger,
                window_pulses,
            )),
            trigger,
            script: RefCell::new(Vec::new()),
            cursor: Cell::new(0),
            repeating: Cell::new(None),
        }
    }

    /// Queue one window's worth of observations
    ///
    /// # Panics
    ///
    /// Panics if more than `SCRIPT_CAPACITY` windows are queued.
    pub fn script(&self, sample: WindowSample) {
        self.script
            .borrow_mut()
            .push(sample)
            .expect("window script full");
    }

    /// Sample to replay once the queue is exhausted
    pub fn script_repeating(&self, sample: WindowSample) {
        self.repeating.set(Some(sample));
    }

    fn next_sample(&self) -> WindowSample {
        let script = self.script.borrow();
        let cursor = self.cursor.get();
        if cursor < script.len() {
            self.cursor.set(cursor + 1);
            script[cursor]
        } else {
            // An empty script with no fallback models "no PPS edges": the
            // real contract is an unbounded wait, which in a test is better
            // surfaced as a panic than a hang.
            self.repeating.get().expect("no PPS window scripted")
        }
    }

    /// Deliver the interrupts for the armed window, if any
    fn pump(&self) {
        let mut cap = self.cap.borrow_mut();
        if !cap.is_armed() {
            return;
        }

        let sample = self.next_sample();
        let transitions_per_pulse = match self.trigger {
            EdgeTrigger::Rising => 1,
            EdgeTrigger::AnyEdge => 2,
        };

        // First accepted pulse zeroes the counter and starts integration
        for _ in 0..transitions_per_pulse {
            cap.on_pps_transition();
        }

        // The window's pulses arrive
        for _ in 0..sample.overflows {
            cap.on_counter_overflow();
        }
        cap.counter_mut().set_count(sample.counter);

        // Remaining PPS pulses up to and including the window boundary
        while !cap.is_complete() {
            for _ in 0..transitions_per_pulse {
                cap.on_pps_transition();
            }
        }
    }
}

impl SharedState<Capture<MockPulseCounter, MockPpsSource>> for SimulatedInterrupts {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Capture<MockPulseCounter, MockPpsSource>) -> R,
    {
        self.pump();
        f(&self.cap.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Capture<MockPulseCounter, MockPpsSource>) -> R,
    {
        self.pump();
        f(&mut self.cap.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_from_centi_hz_round_trips_through_raw_count() {
        let sample = WindowSample::from_centi_hz(320_000_000, 10);
        assert_eq!(sample.overflows, 488);
        assert_eq!(sample.counter, 18_432);
        assert_eq!(488 * MockPulseCounter::MODULUS + 18_432, 32_000_000);
    }

    #[test]
    fn pump_completes_an_armed_window() {
        let sim = SimulatedInterrupts::new(EdgeTrigger::Rising, 10);
        sim.script(WindowSample::from_centi_hz(320_000_000, 10));

        sim.with_mut(|cap| cap.arm());
        assert!(sim.with(|cap| cap.is_complete()));
        assert_eq!(sim.with(|cap| cap.raw_count()), 32_000_000);
    }

    #[test]
    fn pump_is_idle_without_an_armed_window() {
        let sim = SimulatedInterrupts::new(EdgeTrigger::Rising, 10);
        // No script needed: nothing is armed, so nothing is delivered
        assert!(!sim.with(|cap| cap.is_complete()));
    }

    #[test]
    fn repeating_sample_covers_many_windows() {
        let sim = SimulatedInterrupts::new(EdgeTrigger::Rising, 10);
        sim.script_repeating(WindowSample::from_centi_hz(100_000, 10));

        for _ in 0..3 {
            sim.with_mut(|cap| cap.arm());
            assert!(sim.with(|cap| cap.is_complete()));
            assert_eq!(sim.with(|cap| cap.raw_count()), 10_000);
        }
    }
}
