//! Mock platform implementations for testing
//!
//! Mock peripherals that let the calibration core run on the host without
//! hardware. Available during test builds and when the `mock` feature is
//! enabled.

mod counter;
mod pps;
mod timer;

pub use counter::MockPulseCounter;
pub use pps::MockPpsSource;
pub use timer::MockTimer;
