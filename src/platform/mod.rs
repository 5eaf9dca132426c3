//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the peripherals the
//! calibration engine touches: the free-running pulse counter clocked by the
//! clock-under-test, the GPS PPS interrupt line, and a delay timer. All
//! platform-specific code must stay behind these traits.

pub mod error;
pub mod traits;

// Mock implementations for host testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{EdgeTrigger, PpsSourceInterface, PulseCounterInterface, TimerInterface};
