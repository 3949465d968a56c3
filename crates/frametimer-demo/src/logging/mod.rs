//! Logger setup for the demo binary.
//!
//! The library only talks to the `log` facade; picking `env_logger` as the
//! backend is the application's call.

mod init;

pub use init::{init_logging, LoggingConfig};
