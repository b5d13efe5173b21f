//! Shared types for the listing workspace
//!
//! Error codes and the data models exchanged between the core crate and
//! whatever host renders the listing screens.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use http;
