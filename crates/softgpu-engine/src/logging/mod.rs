//! Logging utilities.
//!
//! The engine logs through the `log` facade only:
//! - `trace`: operations that were no-ops because a handle was not live
//! - `debug`: object lifecycle and per-draw summaries
//! - `warn`: ignored out-of-range transfers or indices, draws without a program
//!
//! [`init_logging`] installs `env_logger` as the backend for binaries that
//! do not bring their own.

mod init;

pub use init::{LoggingConfig, init_logging};
