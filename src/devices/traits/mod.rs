//! Device trait definitions

pub mod clockgen;

pub use clockgen::ClockGenerator;
