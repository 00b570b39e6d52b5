//! Wall-clock timing for single variant invocations.

use std::time::{Duration, Instant};

/// Timer started immediately before a measured call.
pub struct BenchTimer {
    start: Instant,
}

impl BenchTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since `start`.
    pub fn stop(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_measures_positive() {
        let timer = BenchTimer::start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();
        assert!(
            elapsed >= Duration::from_millis(10),
            "Timer should measure at least 10ms (got {elapsed:?})"
        );
    }
}
