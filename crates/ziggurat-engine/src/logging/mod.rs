//! Logging utilities.
//!
//! Centralizes logger initialization for hosts and demos. The engine itself
//! only ever speaks through the standard `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
