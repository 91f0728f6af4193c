/// Timing helpers for the solver comparison.
///
/// Provides an RAII-style stopwatch that reports its elapsed time through `tracing`.
use std::time::Instant;

use tracing::debug;

/// A timing scope that measures elapsed wall-clock time.
///
/// The elapsed time is logged at `debug` level when dropped.
pub struct Stopwatch {
    start: Instant,
    name: &'static str,
}

impl Stopwatch {
    /// Starts a new timing scope.
    pub fn new(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    /// Gets elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        debug!(scope = self.name, elapsed_ms = self.elapsed_ms(), "timing scope closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_stopwatch_measures_time() {
        let watch = Stopwatch::new("test");
        thread::sleep(Duration::from_millis(10));
        let elapsed = watch.elapsed_ms();
        assert!(elapsed >= 10.0, "Expected at least 10ms, got {elapsed}");
        assert_eq!(watch.name(), "test");
    }

    #[test]
    fn test_stopwatch_is_monotonic() {
        let watch = Stopwatch::new("monotonic");
        let first = watch.elapsed_ms();
        let second = watch.elapsed_ms();
        assert!(second >= first);
    }
}
