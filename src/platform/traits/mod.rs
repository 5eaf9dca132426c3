//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod counter;
pub mod pps;
pub mod timer;

// Re-export trait interfaces
pub use counter::PulseCounterInterface;
pub use pps::{EdgeTrigger, PpsSourceInterface};
pub use timer::TimerInterface;

#[cfg(feature = "embassy")]
pub use timer::EmbassyTimer;
