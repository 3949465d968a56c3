use std::time::Duration;

/// Fixed per-frame time budget for a paced loop.
pub struct FrameScheduler {
    frame_budget: Duration,
}

impl FrameScheduler {
    /// Budget for `target_fps` frames per second. Zero is treated as 1 fps.
    pub fn new(target_fps: u32) -> Self {
        let fps = u64::from(target_fps.max(1));
        Self {
            frame_budget: Duration::from_nanos(1_000_000_000 / fps),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time left in the budget after `spent`, zero once it is exhausted.
    pub fn remaining(&self, spent: Duration) -> Duration {
        self.frame_budget.saturating_sub(spent)
    }
}
