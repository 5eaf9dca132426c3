//! Core infrastructure
//!
//! Ambient concerns shared across the crate: logging macros and the
//! interrupt-shared state abstraction.

pub mod logging;
pub mod traits;
