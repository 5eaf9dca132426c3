//! Core traits for platform-agnostic calibration logic.
//!
//! The calibration core never touches a synchronization primitive directly;
//! everything shared between interrupt context and the foreground goes
//! through [`sync::SharedState`], with a critical-section implementation on
//! hardware and a `RefCell` implementation on the host.

pub mod sync;

pub use sync::{MockState, SharedState};

#[cfg(feature = "embassy")]
pub use sync::IrqState;
