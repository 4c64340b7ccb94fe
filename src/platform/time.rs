//! Monotonic time sources

use std::cell::Cell;
use std::time::Instant;

/// Monotonic clock in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for tests and headless runs.
///
/// Each read advances the clock by `step`, which lets a time-boxed search
/// run out of budget after a fixed number of reads.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<f64>,
    step: f64,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self::with_step(start, 0.0)
    }

    pub fn with_step(start: f64, step: f64) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }

    pub fn set(&self, t: f64) {
        self.now.set(t);
    }

    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        let t = self.now.get();
        self.now.set(t + self.step);
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_steps_on_read() {
        let clock = ManualClock::with_step(1.0, 0.5);
        assert_eq!(clock.now(), 1.0);
        assert_eq!(clock.now(), 1.5);
        clock.set(10.0);
        assert_eq!(clock.now(), 10.0);
    }

    #[test]
    fn test_manual_clock_without_step_is_still() {
        let clock = ManualClock::new(2.0);
        assert_eq!(clock.now(), 2.0);
        assert_eq!(clock.now(), 2.0);
        clock.advance(0.25);
        assert_eq!(clock.now(), 2.25);
    }

    #[test]
    fn test_system_clock_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
