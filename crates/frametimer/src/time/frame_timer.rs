use super::clock::{Clock, MonotonicClock};
use super::sample::{Sample, count};
use crate::error::FrameTimerError;

/// Point-in-time view of a timer's measurements.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats<T> {
    /// Duration of the most recent frame, in seconds.
    pub frame_time: T,

    /// Mean frame duration over the current window.
    pub frame_time_average: T,

    pub fps: T,
    pub fps_average: T,

    /// Number of samples the averages cover.
    pub samples: usize,
}

/// Rolling frame timer.
///
/// Each `ping()` records the time since the previous ping into a fixed-size
/// ring of samples. The window sum is maintained incrementally, so every
/// operation except `set_capacity` is O(1).
///
/// Averages are taken over the samples actually recorded, not over the
/// capacity, so they are meaningful from the first ping on.
///
/// Not thread-safe; wrap it in a lock if several threads ping one timer.
#[derive(Debug, Clone)]
pub struct FrameTimer<T = f32, C: Clock = MonotonicClock> {
    clock: C,
    samples: Box<[T]>,
    write_index: usize,
    filled: usize,
    running_sum: T,
    last_timestamp: C::Instant,
}

impl<T: Sample> FrameTimer<T, MonotonicClock> {
    /// Creates a timer over the last `capacity` frames using the system clock.
    pub fn new(capacity: usize) -> Result<Self, FrameTimerError> {
        Self::with_clock(capacity, MonotonicClock)
    }
}

impl<T: Sample, C: Clock> FrameTimer<T, C> {
    /// Creates a timer reading time from `clock`.
    ///
    /// The reference timestamp is the clock's current time, so the first
    /// `ping()` measures the time since construction.
    pub fn with_clock(capacity: usize, clock: C) -> Result<Self, FrameTimerError> {
        if capacity < 1 {
            return Err(FrameTimerError::InvalidCapacity { requested: capacity });
        }
        Ok(Self::build(capacity, clock))
    }

    fn build(capacity: usize, clock: C) -> Self {
        let last_timestamp = clock.now();
        Self {
            clock,
            samples: vec![T::zero(); capacity].into_boxed_slice(),
            write_index: 0,
            filled: 0,
            running_sum: T::zero(),
            last_timestamp,
        }
    }

    /// Resizes the window and discards every recorded sample.
    ///
    /// On error nothing changes. The reference timestamp is kept either way.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), FrameTimerError> {
        if capacity < 1 {
            return Err(FrameTimerError::InvalidCapacity { requested: capacity });
        }

        log::debug!(
            "frame timer window {} -> {}, dropping {} samples",
            self.samples.len(),
            capacity,
            self.filled
        );

        self.samples = vec![T::zero(); capacity].into_boxed_slice();
        self.write_index = 0;
        self.filled = 0;
        self.running_sum = T::zero();
        Ok(())
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Moves the reference point without recording a frame.
    ///
    /// Use after a pause so the gap is not counted as a frame.
    pub fn set_timestamp(&mut self, at: C::Instant) {
        self.last_timestamp = at;
    }

    /// `set_timestamp` with the clock's current time.
    pub fn resync(&mut self) {
        self.last_timestamp = self.clock.now();
    }

    #[inline]
    pub fn timestamp(&self) -> C::Instant {
        self.last_timestamp
    }

    /// Records a frame boundary.
    pub fn ping(&mut self) {
        let now = self.clock.now();
        let delta: T = self.clock.elapsed_secs(self.last_timestamp, now);
        self.last_timestamp = now;

        // Slots not yet written hold zero, so the eviction is a no-op until the first wrap.
        let evicted = self.samples[self.write_index];
        self.running_sum = self.running_sum - evicted + delta;
        self.samples[self.write_index] = delta;

        self.write_index = (self.write_index + 1) % self.samples.len();
        if self.filled < self.samples.len() {
            self.filled += 1;
        }
    }

    /// Duration of the most recent frame in seconds, zero before the first ping.
    pub fn frame_time(&self) -> T {
        let cap = self.samples.len();
        self.samples[(self.write_index + cap - 1) % cap]
    }

    /// Mean frame duration over the recorded samples, zero before the first ping.
    pub fn frame_time_average(&self) -> T {
        if self.filled == 0 {
            return T::zero();
        }
        self.running_sum / count(self.filled)
    }

    /// Instantaneous frame rate.
    ///
    /// Unguarded: a zero frame time (including before the first ping) yields
    /// the float's `inf` or `NaN`.
    pub fn fps(&self) -> T {
        T::one() / self.frame_time()
    }

    /// Average frame rate over the window, computed as `samples / sum`.
    ///
    /// Unguarded like `fps()`: `NaN` before the first ping, `inf` if every
    /// recorded frame took zero time.
    pub fn fps_average(&self) -> T {
        count::<T>(self.filled) / self.running_sum
    }

    /// Number of samples currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.filled
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled == self.samples.len()
    }

    /// Samples in the window, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = T> + '_ {
        let cap = self.samples.len();
        let start = (self.write_index + cap - self.filled) % cap;
        (0..self.filled).map(move |i| self.samples[(start + i) % cap])
    }

    pub fn stats(&self) -> FrameStats<T> {
        FrameStats {
            frame_time: self.frame_time(),
            frame_time_average: self.frame_time_average(),
            fps: self.fps(),
            fps_average: self.fps_average(),
            samples: self.filled,
        }
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<T: Sample, C: Clock + Default> Default for FrameTimer<T, C> {
    /// Single-frame window on a default clock.
    fn default() -> Self {
        Self::build(1, C::default())
    }
}
