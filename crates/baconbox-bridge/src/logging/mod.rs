//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only talks to the `log`
//! facade and targets the variant's log tag, which the default filter shows
//! at `debug`.

mod init;

pub use init::{init_logging, LoggingConfig};
