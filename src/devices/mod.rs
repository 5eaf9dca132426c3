//! Device contracts
//!
//! Collaborator devices the calibration core drives but does not own.
//!
//! ## Modules
//!
//! - `traits`: device trait definitions (`ClockGenerator`)
//! - `clockgen`: clock generator implementations (mock)

pub mod clockgen;
pub mod traits;
