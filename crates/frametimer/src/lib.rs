//! Frame timer crate.
//!
//! Measures the time between successive frame boundaries and reports the
//! last frame's duration and rate alongside their averages over a fixed
//! window of recent frames.

pub mod error;
pub mod time;

pub use error::FrameTimerError;
pub use time::{FrameStats, FrameTimer};
