//! Logging utilities.
//!
//! The crate logs through the `log` facade only: `debug!` on structural
//! changes, `trace!` per drag step and `warn!` when the host misuses the
//! handle model. [`init_logging`] installs an `env_logger` backend for hosts
//! and tools that do not bring their own.

mod init;

pub use init::{LoggingConfig, init_logging};
