//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only uses the `log`
//! facade; the `env_logger` backend is installed by the host.

mod init;

pub use init::{init_logging, LoggingConfig};
