use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::sample::Sample;

/// Monotonic time source a `FrameTimer` reads at each ping.
///
/// Successive `now()` calls must never go backwards.
pub trait Clock {
    type Instant: Copy + Debug + PartialOrd;

    fn now(&self) -> Self::Instant;

    /// Time elapsed from `earlier` to `later`, zero if `later` precedes it.
    fn elapsed(&self, earlier: Self::Instant, later: Self::Instant) -> Duration;

    /// `later - earlier` in seconds, negative when `later` precedes `earlier`.
    fn elapsed_secs<T: Sample>(&self, earlier: Self::Instant, later: Self::Instant) -> T {
        if later < earlier {
            T::from_signed_duration(self.elapsed(later, earlier), true)
        } else {
            T::from_duration(self.elapsed(earlier, later))
        }
    }
}

/// Wall-clock source backed by `std::time::Instant`.
#[derive(Debug, Copy, Clone, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Instant = Instant;

    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn elapsed(&self, earlier: Instant, later: Instant) -> Duration {
        later.saturating_duration_since(earlier)
    }
}

/// Hand-driven clock for tests and simulated time.
///
/// Instants are offsets from the clock's origin. Clones share the same
/// current time, so a test can keep one handle and move a timer's clock
/// forward from outside.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset from the origin.
    pub fn offset(&self) -> Duration {
        self.offset.get()
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get().saturating_add(by));
    }

    /// Advances by a fractional number of seconds.
    pub fn advance_secs(&self, secs: f64) {
        self.advance(Duration::from_secs_f64(secs));
    }

    /// Jumps to `to`. Targets earlier than the current offset are ignored.
    pub fn set(&self, to: Duration) {
        if to > self.offset.get() {
            self.offset.set(to);
        }
    }
}

impl Clock for ManualClock {
    type Instant = Duration;

    #[inline]
    fn now(&self) -> Duration {
        self.offset.get()
    }

    #[inline]
    fn elapsed(&self, earlier: Duration, later: Duration) -> Duration {
        later.saturating_sub(earlier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── MonotonicClock ────────────────────────────────────────────────────

    #[test]
    fn monotonic_never_goes_backwards() {
        let clock = MonotonicClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
        assert_eq!(clock.elapsed(b, a), Duration::ZERO);
    }

    // ── ManualClock ───────────────────────────────────────────────────────

    #[test]
    fn manual_starts_at_origin() {
        assert_eq!(ManualClock::new().now(), Duration::ZERO);
    }

    #[test]
    fn clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(Duration::from_millis(16));
        assert_eq!(clock.now(), Duration::from_millis(16));
    }

    #[test]
    fn set_ignores_earlier_targets() {
        let clock = ManualClock::new();
        clock.set(Duration::from_secs(5));
        clock.set(Duration::from_secs(2));
        assert_eq!(clock.offset(), Duration::from_secs(5));
    }

    #[test]
    fn elapsed_saturates() {
        let clock = ManualClock::new();
        let d = clock.elapsed(Duration::from_secs(3), Duration::from_secs(1));
        assert_eq!(d, Duration::ZERO);
    }

    #[test]
    fn elapsed_secs_is_signed() {
        let clock = ManualClock::new();
        let (a, b) = (Duration::from_secs(1), Duration::from_secs(3));
        assert_eq!(clock.elapsed_secs::<f64>(a, b), 2.0);
        assert_eq!(clock.elapsed_secs::<f64>(b, a), -2.0);
    }
}
