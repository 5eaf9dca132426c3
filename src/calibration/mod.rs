//! Frequency counter and Huff-n-Puff calibration loop
//!
//! The self-calibration core: a GPS PPS signal gates a free-running hardware
//! counter clocked by the generator's calibration output. Each ten-pulse
//! window yields a sub-Hz frequency estimate; the controller nudges the
//! generator's correction factor one fixed step toward the target per window
//! and re-programs the generator, for a fixed 24 iterations per run.
//!
//! ## Modules
//!
//! - `capture`: interrupt-side state (pulse accounting, overflow tally,
//!   completion flag) plus the peripherals it drives
//! - `frequency`: fixed-point count/frequency math and the step law
//! - `session`: the foreground controller (`Calibrator`)
//! - `config`: run parameters and one-time validation
//! - `diag`: diagnostics sink contract
//! - `sim`: scripted interrupt delivery for host tests

pub mod capture;
pub mod config;
pub mod diag;
pub mod error;
pub mod frequency;
pub mod session;

#[cfg(any(test, feature = "mock"))]
pub mod sim;

pub use capture::Capture;
pub use config::CalConfig;
pub use diag::{DiagnosticsSink, FaultCode, LogDiagnostics};
pub use error::{CalibrationError, ConfigError};
pub use session::{CalibrationOutcome, Calibrator};
