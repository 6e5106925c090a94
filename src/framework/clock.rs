//! # Simulation Clock
//!
//! Every timestamp in the simulation is a number of milliseconds since the
//! table opened. The clock reads [`tokio::time::Instant`], so a test running on
//! paused time sees the same arithmetic as a live run.

use std::time::Duration;
use tokio::time::Instant;

/// Monotonic millisecond time source anchored at the simulation start.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    /// Starts a clock at the current instant.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the start.
    pub fn now_ms(&self) -> u64 {
        duration_ms(self.start.elapsed())
    }
}

/// Whole milliseconds in a duration, saturating at `u64::MAX`.
pub fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_clock_counts_from_start() {
        let clock = Clock::start();
        assert_eq!(clock.now_ms(), 0);

        tokio::time::advance(Duration::from_millis(250)).await;
        assert_eq!(clock.now_ms(), 250);
    }

    #[test]
    fn test_duration_ms_truncates() {
        assert_eq!(duration_ms(Duration::from_micros(1_999)), 1);
        assert_eq!(duration_ms(Duration::from_secs(2)), 2_000);
    }
}
