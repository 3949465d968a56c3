mod config;
mod logging;
mod runner;
mod scheduler;

use anyhow::Result;

use crate::config::DemoConfig;
use crate::logging::{init_logging, LoggingConfig};
use crate::runner::DemoLoop;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();
    log::debug!("{config:?}");

    DemoLoop::new(config)?.run()
}
