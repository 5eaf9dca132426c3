//! Timer interface trait

use crate::platform::Result;

/// Timer interface trait
///
/// Platform implementations provide blocking delays and a monotonic
/// microsecond clock. The calibration core uses this only for the short
/// settling delay after a correction is applied.
pub trait TimerInterface {
    /// Delay for the given number of microseconds
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Delay for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()>;

    /// Microseconds since boot
    fn now_us(&self) -> u64;

    /// Milliseconds since boot
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}

/// Embassy-backed timer for hardware targets
#[cfg(feature = "embassy")]
#[derive(Debug, Default)]
pub struct EmbassyTimer;

#[cfg(feature = "embassy")]
impl TimerInterface for EmbassyTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        embassy_time::block_for(embassy_time::Duration::from_micros(us as u64));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        embassy_time::block_for(embassy_time::Duration::from_millis(ms as u64));
        Ok(())
    }

    fn now_us(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}
