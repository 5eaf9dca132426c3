//! Diagnostics sink contract
//!
//! Per-iteration measurement records and fault reports. Fire-and-forget:
//! sinks must not block and cannot fail the calling context, so nothing
//! here returns `Result`.

/// Fault codes reported through the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultCode {
    /// Measured frequency of zero: the calibration clock never reached the
    /// counter input during the window
    ZeroMeasurement,
}

/// Diagnostics sink for calibration runs
pub trait DiagnosticsSink {
    /// Raw per-window numbers: iteration index, overflow tally, counter
    /// register value
    fn record_measurement(&mut self, iteration: u8, overflow_tally: u32, raw_counter: u32);

    /// Correction bookkeeping: measured frequency in hundredths of Hz, the
    /// correction before and after the step
    fn record_calibration(&mut self, measured_centi_hz: u64, old_correction: i32, new_correction: i32);

    /// Unrecoverable measurement fault with a context word (iteration)
    fn record_fault(&mut self, code: FaultCode, context: u32);
}

/// Diagnostics sink routing to the crate log macros
#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl DiagnosticsSink for LogDiagnostics {
    fn record_measurement(&mut self, iteration: u8, overflow_tally: u32, raw_counter: u32) {
        crate::log_debug!(
            "cal iter {} overflow tally {} counter {}",
            iteration,
            overflow_tally,
            raw_counter
        );
    }

    fn record_calibration(&mut self, measured_centi_hz: u64, old_correction: i32, new_correction: i32) {
        crate::log_info!(
            "cal measured {} cHz correction {} -> {}",
            measured_centi_hz,
            old_correction,
            new_correction
        );
    }

    fn record_fault(&mut self, code: FaultCode, context: u32) {
        crate::log_error!("cal fault {:?} at iteration {}", code, context);
    }
}


// ============================================================================
// Mock sink (testing)
// ============================================================================

#[cfg(any(test, feature = "mock"))]
pub use mock::MockDiagnostics;

#[cfg(any(test, feature = "mock"))]
mod mock {
    use super::{DiagnosticsSink, FaultCode};
    use heapless::Vec;

    /// One run is 24 iterations; 32 slots leave headroom
    const RECORD_CAPACITY: usize = 32;

    /// Recording diagnostics sink for test assertions
    #[derive(Debug, Default)]
    pub struct MockDiagnostics {
        /// `(iteration, overflow_tally, raw_counter)` records
        pub measurements: Vec<(u8, u32, u32), RECORD_CAPACITY>,
        /// `(measured_centi_hz, old_correction, new_correction)` records
        pub calibrations: Vec<(u64, i32, i32), RECORD_CAPACITY>,
        /// `(code, context)` records
        pub faults: Vec<(FaultCode, u32), RECORD_CAPACITY>,
    }

    impl MockDiagnostics {
        /// Create an empty sink
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DiagnosticsSink for MockDiagnostics {
        fn record_measurement(&mut self, iteration: u8, overflow_tally: u32, raw_counter: u32) {
            let _ = self.measurements.push((iteration, overflow_tally, raw_counter));
        }

        fn record_calibration(
            &mut self,
            measured_centi_hz: u64,
            old_correction: i32,
            new_correction: i32,
        ) {
            let _ = self
                .calibrations
                .push((measured_centi_hz, old_correction, new_correction));
        }

        fn record_fault(&mut self, code: FaultCode, context: u32) {
            let _ = self.faults.push((code, context));
        }
    }
}
