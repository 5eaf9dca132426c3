//! End-to-end calibration runs on the host
//!
//! Drives the full controller loop through the scripted interrupt simulator
//! and mock peripherals (via the `mock` feature).

use ppscal::calibration::config::WINDOW_PULSES;
use ppscal::calibration::diag::MockDiagnostics;
use ppscal::calibration::sim::{SimulatedInterrupts, WindowSample};
use ppscal::calibration::{CalConfig, Calibrator};
use ppscal::devices::clockgen::MockClockGenerator;
use ppscal::platform::mock::MockTimer;
use ppscal::platform::EdgeTrigger;

const TARGET: u64 = 320_000_000; // 3.2 MHz in hundredths of Hz

fn config(edge_trigger: EdgeTrigger) -> CalConfig {
    CalConfig {
        target_centi_hz: TARGET,
        window_pulses: WINDOW_PULSES,
        cal_channel: 2,
        park_channel: 1,
        park_freq_hz: 108_000_000,
        edge_trigger,
        system_clock_hz: 8_000_000,
    }
}

/// A generator 2 Hz low converges onto the target: once the scripted
/// readings cross the target the correction oscillates within one step.
#[test]
fn cold_start_walks_the_correction_toward_the_target() {
    let shared = SimulatedInterrupts::new(EdgeTrigger::Rising, WINDOW_PULSES);

    // Discarded first window, then readings that improve by 10 hundredths
    // of Hz per applied step until they sit on the target.
    shared.script(WindowSample::from_centi_hz(TARGET - 200, WINDOW_PULSES));
    for i in 0..23u64 {
        let error = 200u64.saturating_sub(i * 10);
        shared.script(WindowSample::from_centi_hz(TARGET - error, WINDOW_PULSES));
    }

    let mut cal = Calibrator::new(
        MockClockGenerator::new(),
        MockDiagnostics::new(),
        MockTimer::new(),
        config(EdgeTrigger::Rising),
        0,
    );

    cal.prepare(&shared).unwrap();
    let outcome = cal.run(&shared, 10).unwrap();

    assert_eq!(outcome.faulted_iterations, 0);
    // 20 low readings then 3 on-target: exactly 20 downward steps
    assert_eq!(outcome.correction, -200);
    assert_eq!(cal.correction(), -200);
}

/// Correction carries over between runs of the same calibrator: a coarse
/// run followed by a fine run starts the fine run from the coarse result.
#[test]
fn correction_persists_across_runs() {
    let shared = SimulatedInterrupts::new(EdgeTrigger::Rising, WINDOW_PULSES);
    shared.script_repeating(WindowSample::from_centi_hz(TARGET + 50, WINDOW_PULSES));

    let mut cal = Calibrator::new(
        MockClockGenerator::new(),
        MockDiagnostics::new(),
        MockTimer::new(),
        config(EdgeTrigger::Rising),
        0,
    );

    cal.prepare(&shared).unwrap();
    let coarse = cal.run(&shared, 100).unwrap();
    assert_eq!(coarse.correction, 23 * 100);

    cal.prepare(&shared).unwrap();
    let fine = cal.run(&shared, 10).unwrap();
    assert_eq!(fine.correction, 23 * 100 + 23 * 10);
}

/// Variant B wiring (any-edge PPS interrupt) produces the same run as
/// variant A for the same scripted clock.
#[test]
fn any_edge_and_rising_edge_runs_agree() {
    let mut outcomes = Vec::new();

    for trigger in [EdgeTrigger::Rising, EdgeTrigger::AnyEdge] {
        let shared = SimulatedInterrupts::new(trigger, WINDOW_PULSES);
        shared.script_repeating(WindowSample::from_centi_hz(TARGET - 50, WINDOW_PULSES));

        let mut cal = Calibrator::new(
            MockClockGenerator::new(),
            MockDiagnostics::new(),
            MockTimer::new(),
            config(trigger),
            4300,
        );
        cal.prepare(&shared).unwrap();
        outcomes.push(cal.run(&shared, 100).unwrap().correction);
    }

    assert_eq!(outcomes[0], outcomes[1]);
    assert_eq!(outcomes[0], 4300 - 23 * 100);
}

/// A dead counter mid-run is reported and skipped without ending the run.
#[test]
fn faulted_windows_do_not_abort_a_run() {
    let shared = SimulatedInterrupts::new(EdgeTrigger::Rising, WINDOW_PULSES);
    shared.script(WindowSample::from_centi_hz(TARGET, WINDOW_PULSES));
    shared.script(WindowSample { counter: 0, overflows: 0 });
    shared.script(WindowSample { counter: 0, overflows: 0 });
    shared.script_repeating(WindowSample::from_centi_hz(TARGET, WINDOW_PULSES));

    let mut cal = Calibrator::new(
        MockClockGenerator::new(),
        MockDiagnostics::new(),
        MockTimer::new(),
        config(EdgeTrigger::Rising),
        -6813,
    );

    cal.prepare(&shared).unwrap();
    let outcome = cal.run(&shared, 100).unwrap();

    assert_eq!(outcome.faulted_iterations, 2);
    assert_eq!(outcome.correction, -6813);
}
