#![cfg_attr(not(test), no_std)]

//! ppscal - Self-calibration engine for GPS-disciplined frequency beacons
//!
//! Measures the real output frequency of a programmable clock generator
//! against the GPS pulse-per-second time base and converges a correction
//! factor with a Huff-n-Puff step loop, so the generator stays on frequency
//! without an oven-controlled oscillator.

// Platform abstraction layer (pulse counter, PPS line, timer)
pub mod platform;

// Ambient infrastructure (logging, interrupt-shared state)
pub mod core;

// Collaborator device contracts (clock generator)
pub mod devices;

// The frequency counter and calibration controller
pub mod calibration;
