use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use frametimer::FrameTimer;

use crate::config::DemoConfig;
use crate::scheduler::FrameScheduler;

/// Stall injected at `pause_at`, long enough to wreck the averages if it were recorded.
const PAUSE: Duration = Duration::from_millis(750);

/// Paced loop that feeds a frame timer and reports what it measures.
pub struct DemoLoop {
    config: DemoConfig,
    scheduler: FrameScheduler,
    timer: FrameTimer<f64>,
}

impl DemoLoop {
    pub fn new(config: DemoConfig) -> Result<Self> {
        let timer = FrameTimer::new(config.capacity)
            .with_context(|| format!("creating frame timer (capacity={})", config.capacity))?;
        let scheduler = FrameScheduler::new(config.target_fps);
        Ok(Self {
            config,
            scheduler,
            timer,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        log::info!(
            "target_fps={} budget={:?} window={} frames={}",
            self.config.target_fps,
            self.scheduler.frame_budget(),
            self.timer.capacity(),
            self.config.frames
        );

        // Start the first frame from here, not from construction.
        self.timer.resync();

        let report_every = self.config.report_every.max(1);

        for frame in 0..self.config.frames {
            let frame_start = Instant::now();
            simulate_work(self.scheduler.frame_budget(), frame);

            let remaining = self.scheduler.remaining(frame_start.elapsed());
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
            self.timer.ping();

            if (frame + 1) % report_every == 0 {
                self.report(frame + 1);
            }

            if self.config.pause_at == Some(frame) {
                log::info!("stalling for {PAUSE:?}, gap will not be recorded");
                thread::sleep(PAUSE);
                self.timer.resync();
            }
        }

        self.report(self.config.frames);
        Ok(())
    }

    fn report(&self, frame: u64) {
        let stats = self.timer.stats();
        log::info!(
            "frame={frame} dt={:.2}ms avg={:.2}ms fps={:.1} avg_fps={:.1} (n={})",
            stats.frame_time * 1000.0,
            stats.frame_time_average * 1000.0,
            stats.fps,
            stats.fps_average,
            stats.samples
        );
    }
}

/// Busy-waits for between a quarter and the whole of `budget`, varying by frame.
fn simulate_work(budget: Duration, frame: u64) {
    let share = (frame % 4 + 1) as u32;
    let work = budget * share / 4;
    let start = Instant::now();
    while start.elapsed() < work {
        std::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(capacity: usize) -> DemoConfig {
        DemoConfig {
            capacity,
            target_fps: 1000,
            frames: 8,
            report_every: 4,
            pause_at: None,
        }
    }

    #[test]
    fn zero_capacity_fails_with_context() {
        let err = DemoLoop::new(config(0)).err().unwrap();
        assert_eq!(err.to_string(), "creating frame timer (capacity=0)");
        assert!(err.root_cause().to_string().contains("must be at least 1"));
    }

    #[test]
    fn zero_report_interval_reports_every_frame() {
        let mut demo = DemoLoop::new(DemoConfig {
            report_every: 0,
            frames: 3,
            ..config(2)
        })
        .unwrap();
        demo.run().unwrap();
        assert!(demo.timer.is_full());
    }

    #[test]
    fn short_run_fills_window() {
        let mut demo = DemoLoop::new(config(4)).unwrap();
        demo.run().unwrap();
        assert!(demo.timer.is_full());
        assert!(demo.timer.frame_time_average() > 0.0);
    }
}
