//! Calibration controller
//!
//! The foreground side of the loop: arm a window, busy-wait on the
//! completion flag raised from interrupt context, read the widened count
//! atomically, scale it, step the correction, re-program the generator,
//! settle, repeat for a fixed 24 windows. At ten seconds per window a run
//! takes about four minutes; slow, but numerically stable given the 0.1 Hz
//! resolution.

use super::capture::Capture;
use super::config::{CalConfig, CENTI_HZ_PER_HZ, RUN_ITERATIONS, SETTLE_DELAY_MS};
use super::diag::{DiagnosticsSink, FaultCode};
use super::error::CalibrationError;
use super::frequency;
use crate::core::traits::SharedState;
use crate::devices::traits::ClockGenerator;
use crate::platform::{PpsSourceInterface, PulseCounterInterface, TimerInterface};

/// Result of a completed calibration run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationOutcome {
    /// Correction factor after the final iteration
    pub correction: i32,
    /// Iterations that measured zero and were skipped for correction
    pub faulted_iterations: u8,
}

/// Calibration session controller
///
/// Owns the clock generator, diagnostics sink, timer, configuration and the
/// running correction factor. The correction persists across runs of the
/// same `Calibrator` (coarse run on cold start, fine runs after), but not
/// across power cycles; persistence belongs to the caller.
pub struct Calibrator<G, D, T> {
    clockgen: G,
    diag: D,
    timer: T,
    config: CalConfig,
    correction: i32,
}

impl<G, D, T> Calibrator<G, D, T>
where
    G: ClockGenerator,
    D: DiagnosticsSink,
    T: TimerInterface,
{
    /// Create a controller seeded with the board's known correction factor
    pub fn new(clockgen: G, diag: D, timer: T, config: CalConfig, initial_correction: i32) -> Self {
        Self {
            clockgen,
            diag,
            timer,
            config,
            correction: initial_correction,
        }
    }

    /// The current correction factor
    pub fn correction(&self) -> i32 {
        self.correction
    }

    /// The run configuration
    pub fn config(&self) -> &CalConfig {
        &self.config
    }

    /// Arm the hardware for a fresh run
    ///
    /// Validates the configuration, sets up the capture hardware with the
    /// PPS interrupt still masked, turns the park clock off and starts the
    /// calibration clock on the target frequency. Idempotent at run
    /// boundaries.
    ///
    /// # Errors
    ///
    /// Returns `CalibrationError::Config` for an invalid configuration and
    /// `CalibrationError::Platform` if a generator call fails.
    pub fn prepare<S, C, P>(&mut self, shared: &S) -> Result<(), CalibrationError>
    where
        S: SharedState<Capture<C, P>>,
        C: PulseCounterInterface,
        P: PpsSourceInterface,
    {
        self.config.validate()?;

        shared.with_mut(|cap| cap.configure());

        self.clockgen.enable_output(self.config.park_channel, false)?;
        self.clockgen
            .set_frequency(self.config.cal_channel, self.config.target_centi_hz, true)?;
        Ok(())
    }

    /// Execute one full calibration run
    ///
    /// `step` is the fixed Huff-n-Puff step in correction units, chosen by
    /// the caller: coarse for a cold start, fine for steady state. The
    /// first window of every run reads artificially low and is discarded
    /// without touching the correction, but still consumes one of the 24
    /// iterations. A zero measurement is recorded as a fault and skipped;
    /// the run continues.
    ///
    /// The wait for each window has no timeout by contract: if PPS edges
    /// never arrive this never returns, and the caller's watchdog is the
    /// backstop.
    ///
    /// # Errors
    ///
    /// Returns `CalibrationError::Platform` if a generator call fails;
    /// measurement faults are not errors.
    pub fn run<S, C, P>(&mut self, shared: &S, step: i32) -> Result<CalibrationOutcome, CalibrationError>
    where
        S: SharedState<Capture<C, P>>,
        C: PulseCounterInterface,
        P: PpsSourceInterface,
    {
        let mut faulted_iterations: u8 = 0;

        for iteration in 0..RUN_ITERATIONS {
            shared.with_mut(|cap| cap.arm());

            // Interrupt context closes the window and raises the flag after
            // window+1 accepted pulses; the foreground has nothing else to
            // do until then.
            while !shared.with(|cap| cap.is_complete()) {
                core::hint::spin_loop();
            }

            // Single cell access covers counter value and tally, so the
            // pair cannot tear.
            let (counter_value, overflow_tally, raw) =
                shared.with(|cap| (cap.counter_value(), cap.overflow_tally(), cap.raw_count()));

            // The first window of a run reads low; consume the slot
            // without correcting. Empirical, inherited behavior.
            if iteration == 0 {
                continue;
            }

            let measured = frequency::measured_centi_hz(raw, self.config.window_pulses);
            let old_correction = self.correction;

            if measured == 0 {
                faulted_iterations += 1;
                self.diag
                    .record_fault(FaultCode::ZeroMeasurement, iteration as u32);
            } else {
                self.correction =
                    frequency::huff_n_puff(old_correction, measured, self.config.target_centi_hz, step);
            }

            self.diag
                .record_measurement(iteration, overflow_tally, counter_value);
            self.diag
                .record_calibration(measured, old_correction, self.correction);

            // Correction first, then the frequency rewrite that consumes it
            self.clockgen.set_correction(self.correction)?;
            self.clockgen
                .set_frequency(self.config.cal_channel, self.config.target_centi_hz, true)?;

            // Let the generator settle before measuring it again
            self.timer.delay_ms(SETTLE_DELAY_MS)?;
        }

        // Run complete: calibration output off, park clock restored
        self.clockgen.enable_output(self.config.cal_channel, false)?;
        self.clockgen.set_frequency(
            self.config.park_channel,
            self.config.park_freq_hz * CENTI_HZ_PER_HZ,
            true,
        )?;

        Ok(CalibrationOutcome {
            correction: self.correction,
            faulted_iterations,
        })
    }
}
