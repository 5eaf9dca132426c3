//! Mock pulse counter implementation for testing

use crate::platform::traits::PulseCounterInterface;

/// Mock pulse counter
///
/// Models a 16-bit hardware counter (modulus 65 536). Tests inject a count
/// value directly with [`MockPulseCounter::set_count`]; overflow interrupts
/// are delivered by calling the capture's overflow handler, not by the mock.
#[derive(Debug)]
pub struct MockPulseCounter {
    count: u32,
    running: bool,
    overflow_irq_enabled: bool,
    pending_overflow: bool,
    resets: u32,
}

impl MockPulseCounter {
    /// Counter wrap-around size, matching a 16-bit hardware timer
    pub const MODULUS: u64 = 65_536;

    /// Create a new stopped mock counter
    pub fn new() -> Self {
        Self {
            count: 0,
            running: false,
            overflow_irq_enabled: false,
            pending_overflow: false,
            resets: 0,
        }
    }

    /// Set the count register value (simulates pulses having arrived)
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    /// Latch a stale overflow indication (simulates a wrap before arming)
    pub fn set_pending_overflow(&mut self) {
        self.pending_overflow = true;
    }

    /// Whether the external clock input is currently enabled
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the overflow interrupt is currently enabled
    pub fn overflow_irq_enabled(&self) -> bool {
        self.overflow_irq_enabled
    }

    /// Whether a stale overflow indication is still pending
    pub fn has_pending_overflow(&self) -> bool {
        self.pending_overflow
    }

    /// Number of times the count register was zeroed
    pub fn resets(&self) -> u32 {
        self.resets
    }
}

impl Default for MockPulseCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseCounterInterface for MockPulseCounter {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn reset(&mut self) {
        self.count = 0;
        self.resets += 1;
    }

    fn read(&self) -> u32 {
        self.count
    }

    fn modulus(&self) -> u64 {
        Self::MODULUS
    }

    fn set_overflow_interrupt(&mut self, enabled: bool) {
        self.overflow_irq_enabled = enabled;
    }

    fn clear_pending_overflow(&mut self) {
        self.pending_overflow = false;
    }
}
