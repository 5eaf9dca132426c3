//! Clock generator implementations
//!
//! Only the mock lives here; real Si5351-class drivers implement
//! [`crate::devices::traits::ClockGenerator`] out of tree.

#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(any(test, feature = "mock"))]
pub use mock::{ClockGenOp, MockClockGenerator};
