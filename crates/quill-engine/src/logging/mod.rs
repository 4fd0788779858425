//! Logger setup.
//!
//! The engine itself only uses the `log` facade; binaries pick the backend.
//! [`init_logging`] wires up `env_logger` for the common case.

mod init;

pub use init::{init_logging, LoggingConfig};
