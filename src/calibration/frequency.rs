//! Fixed-point frequency math
//!
//! Pure arithmetic shared by the capture and the controller: widening the
//! hardware count with the overflow tally, scaling a window count into
//! hundredths of Hz, and the Huff-n-Puff step law. All integer, no floats.

use super::config::CENTI_HZ_PER_HZ;

/// Widen a hardware counter reading with its overflow tally.
///
/// Exact for any counter value and tally: the result fits u64 with a
/// 16-bit counter and a 32-bit tally (48 bits of count), far beyond what a
/// ten-second window can accumulate.
pub fn raw_count(counter: u32, overflow_tally: u32, modulus: u64) -> u64 {
    counter as u64 + overflow_tally as u64 * modulus
}

/// Scale a raw window count into hundredths of Hz.
///
/// With the default ten-pulse window this multiplies by exactly ten: the
/// count resolves tenths of Hz, the fixed-point unit is hundredths.
/// Linear in `raw`: doubling the count doubles the result.
pub fn measured_centi_hz(raw: u64, window_pulses: u16) -> u64 {
    raw * CENTI_HZ_PER_HZ / window_pulses as u64
}

/// Huff-n-Puff correction step.
///
/// Nudges the correction one fixed step toward the target based only on the
/// sign of the error, never its magnitude. A measurement of zero is the
/// fault sentinel (a true zero-Hz reading is physically impossible here)
/// and leaves the correction unchanged; the caller reports the fault.
pub fn huff_n_puff(correction: i32, measured_centi_hz: u64, target_centi_hz: u64, step: i32) -> i32 {
    if measured_centi_hz == 0 || measured_centi_hz == target_centi_hz {
        correction
    } else if measured_centi_hz < target_centi_hz {
        correction - step
    } else {
        correction + step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULUS: u64 = 65_536;
    const TARGET: u64 = 320_000_000; // 3.2 MHz in hundredths of Hz

    #[test]
    fn raw_count_is_exact() {
        assert_eq!(raw_count(0, 0, MODULUS), 0);
        assert_eq!(raw_count(1234, 0, MODULUS), 1234);
        assert_eq!(raw_count(0, 1, MODULUS), 65_536);
        assert_eq!(raw_count(65_535, 488, MODULUS), 65_535 + 488 * 65_536);
        // No precision loss near the top of the tally range
        assert_eq!(
            raw_count(65_535, u32::MAX, MODULUS),
            65_535 + (u32::MAX as u64) * 65_536
        );
    }

    #[test]
    fn measured_frequency_is_linear_in_raw_count() {
        let raw = 16_000_000;
        assert_eq!(measured_centi_hz(2 * raw, 10), 2 * measured_centi_hz(raw, 10));
    }

    #[test]
    fn exact_count_measures_the_target() {
        // 3.2 MHz for 10 seconds = 32 million pulses
        let raw = 32_000_000;
        assert_eq!(measured_centi_hz(raw, 10), TARGET);
    }

    #[test]
    fn step_law_moves_toward_the_target() {
        assert_eq!(huff_n_puff(0, TARGET - 50, TARGET, 100), -100);
        assert_eq!(huff_n_puff(0, TARGET + 50, TARGET, 100), 100);
        assert_eq!(huff_n_puff(4300, TARGET, TARGET, 100), 4300);
    }

    #[test]
    fn zero_measurement_leaves_correction_unchanged() {
        assert_eq!(huff_n_puff(-6813, 0, TARGET, 100), -6813);
    }

    #[test]
    fn step_magnitude_is_fixed_regardless_of_error() {
        // 1 Hz off and 1 kHz off get the same nudge
        assert_eq!(huff_n_puff(0, TARGET - 100, TARGET, 20), -20);
        assert_eq!(huff_n_puff(0, TARGET - 100_000, TARGET, 20), -20);
    }
}
