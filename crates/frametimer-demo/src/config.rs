/// Demo loop configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Averaging window handed to the frame timer. Not validated here.
    pub capacity: usize,
    pub target_fps: u32,
    /// Frames to run before exiting.
    pub frames: u64,
    /// Log a stats line every this many frames.
    pub report_every: u64,
    /// Frame after which the loop stalls once and then resyncs the timer.
    pub pause_at: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let frames = env_positive("FRAMETIMER_FRAMES").unwrap_or(360);
        Self {
            capacity: env_parse("FRAMETIMER_CAPACITY").unwrap_or(60),
            target_fps: env_positive("FRAMETIMER_TARGET_FPS")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(60),
            frames,
            report_every: env_positive("FRAMETIMER_REPORT_EVERY").unwrap_or(60),
            pause_at: Some(frames / 2),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

fn env_positive(key: &str) -> Option<u64> {
    env_parse::<u64>(key).filter(|v| *v > 0)
}
