use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Monotonic clock abstraction for debounce timing across the stack.
///
/// The core never sleeps; it only reads the clock when input arrives and when
/// the host calls `poll()`. Injecting a clock keeps the quiet-period logic
/// deterministic in tests.
pub trait Clock {
    fn now(&self) -> Instant;

    /// Milliseconds elapsed since `epoch`, saturating at 0 on underflow.
    fn ms_since(&self, epoch: Instant) -> u64 {
        let dur = self.now().saturating_duration_since(epoch);
        dur.as_millis() as u64
    }
}

/// Default, real-time monotonic clock backed by std::time::Instant.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl MonotonicClock {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock: now() = origin + offset.
///
/// Used by tests and by hosts that drive virtual time (e.g. a simulation
/// harness replaying a keystroke log).
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Advance the clock by the given duration.
    pub fn advance(&self, d: Duration) {
        if let Ok(mut off) = self.offset.lock() {
            *off = off.saturating_add(d);
        }
    }

    /// Set the absolute offset relative to origin.
    pub fn set_offset(&self, d: Duration) {
        if let Ok(mut off) = self.offset.lock() {
            *off = d;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let off = self.offset.lock().map(|g| *g).unwrap_or(Duration::ZERO);
        self.origin + off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clk = ManualClock::new();
        let epoch = clk.now();
        assert_eq!(clk.ms_since(epoch), 0);
        clk.advance(Duration::from_millis(150));
        assert_eq!(clk.ms_since(epoch), 150);
        clk.advance(Duration::from_millis(25));
        assert_eq!(clk.ms_since(epoch), 175);
    }

    #[test]
    fn ms_since_saturates_before_epoch() {
        let clk = ManualClock::new();
        clk.advance(Duration::from_millis(50));
        let epoch = clk.now();
        clk.set_offset(Duration::ZERO);
        assert_eq!(clk.ms_since(epoch), 0);
    }
}
