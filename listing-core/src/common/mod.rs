//! Common infrastructure
//!
//! - Logging setup
//! - Audit and security log macros

pub mod logger;

#[cfg(test)]
pub(crate) mod capture;

pub use logger::{cleanup_old_logs, init_logger, init_logger_with_file};
