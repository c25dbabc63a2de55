//! Monotonic elapsed-time source for delayed-trigger scheduling.
//!
//! The [`Chronometer`] is owned by the
//! [`TriggerManager`](crate::triggers::TriggerManager) and is the only clock
//! the core consults. It accumulates wall time from a monotonic
//! [`Instant`] baseline and can be stopped, restarted, and reset.

use std::time::{Duration, Instant};

/// Start/stop chronometer reporting elapsed seconds since it was started.
///
/// Stopping freezes the reading; starting again resumes accumulation from
/// the frozen value. [`reset`](Chronometer::reset) drops the accumulated
/// time entirely.
#[derive(Debug, Default)]
pub struct Chronometer {
    origin: Option<Instant>,
    accumulated: Duration,
}

impl Chronometer {
    /// Create a stopped chronometer with zero elapsed time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or resume the chronometer. No-op if already running.
    pub fn start(&mut self) {
        if self.origin.is_none() {
            self.origin = Some(Instant::now());
        }
    }

    /// Stop the chronometer, freezing the elapsed reading.
    pub fn stop(&mut self) {
        if let Some(origin) = self.origin.take() {
            self.accumulated += origin.elapsed();
        }
    }

    /// Drop all accumulated time. The chronometer ends up stopped.
    pub fn reset(&mut self) {
        self.origin = None;
        self.accumulated = Duration::ZERO;
    }

    /// Elapsed time in seconds, including the running segment if any.
    pub fn elapsed(&self) -> f64 {
        let running = self.origin.map(|o| o.elapsed()).unwrap_or(Duration::ZERO);
        (self.accumulated + running).as_secs_f64()
    }

    /// Whether the chronometer is currently running.
    pub fn is_running(&self) -> bool {
        self.origin.is_some()
    }

    /// Artificially advance the elapsed reading. Test-only scheduling hook.
    #[cfg(test)]
    pub(crate) fn advance(&mut self, seconds: f64) {
        self.accumulated += Duration::from_secs_f64(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_new_chronometer_is_stopped_at_zero() {
        let chrono = Chronometer::new();
        assert!(!chrono.is_running());
        assert_eq!(chrono.elapsed(), 0.0);
    }

    #[test]
    fn test_stop_freezes_reading() {
        let mut chrono = Chronometer::new();
        chrono.start();
        sleep(Duration::from_millis(5));
        chrono.stop();
        let frozen = chrono.elapsed();
        assert!(frozen > 0.0);
        sleep(Duration::from_millis(5));
        assert_eq!(chrono.elapsed(), frozen);
    }

    #[test]
    fn test_reset_drops_accumulated_time() {
        let mut chrono = Chronometer::new();
        chrono.start();
        chrono.advance(2.0);
        chrono.reset();
        assert!(!chrono.is_running());
        assert_eq!(chrono.elapsed(), 0.0);
    }

    #[test]
    fn test_restart_resumes_from_frozen_value() {
        let mut chrono = Chronometer::new();
        chrono.start();
        chrono.advance(1.0);
        chrono.stop();
        let frozen = chrono.elapsed();
        chrono.start();
        assert!(chrono.elapsed() >= frozen);
    }
}
