//! Time subsystem.
//!
//! Frame timing over an abstract monotonic clock.
//! Intended usage:
//! - one `FrameTimer` per loop being measured
//! - call `ping()` once per frame boundary, then read `frame_time()`, `fps()`
//!   or their window averages
//! - call `resync()` after a pause so the gap is not recorded as a frame

mod clock;
mod frame_timer;
mod sample;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use frame_timer::{FrameStats, FrameTimer};
pub use sample::Sample;
