use std::fmt::Debug;
use std::time::Duration;

use num_traits::{Float, NumCast};

/// Numeric type a `FrameTimer` stores its samples in.
///
/// Only floating-point types implement this: a zero frame time makes `fps()`
/// divide by zero, and IEEE floats turn that into `inf`/`NaN` instead of a trap.
pub trait Sample: Float + Debug {
    /// Converts an elapsed duration to fractional seconds.
    fn from_duration(d: Duration) -> Self;

    /// Signed seconds: `from_duration(d)` negated when `negative`.
    #[inline]
    fn from_signed_duration(d: Duration, negative: bool) -> Self {
        let secs = Self::from_duration(d);
        if negative { -secs } else { secs }
    }
}

impl Sample for f32 {
    #[inline]
    fn from_duration(d: Duration) -> Self {
        d.as_secs_f32()
    }
}

impl Sample for f64 {
    #[inline]
    fn from_duration(d: Duration) -> Self {
        d.as_secs_f64()
    }
}

/// Sample count as `T`. Every `usize` fits a float range, overflow reads as `inf`.
#[inline]
pub(crate) fn count<T: Sample>(n: usize) -> T {
    <T as NumCast>::from(n).unwrap_or_else(T::infinity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_fractional_seconds() {
        assert_eq!(f32::from_duration(Duration::from_millis(250)), 0.25);
        assert_eq!(f64::from_duration(Duration::from_micros(1_500)), 0.0015);
    }

    #[test]
    fn zero_duration_is_zero() {
        assert_eq!(f64::from_duration(Duration::ZERO), 0.0);
    }

    #[test]
    fn signed_duration_negates() {
        let d = Duration::from_secs(2);
        assert_eq!(f64::from_signed_duration(d, true), -2.0);
        assert_eq!(f32::from_signed_duration(d, false), 2.0);
    }

    #[test]
    fn count_converts_exactly() {
        assert_eq!(count::<f32>(3), 3.0);
        assert_eq!(count::<f64>(120), 120.0);
    }
}
