//! Unified error system for the listing core
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! Only storage failures and refused administrative actions become
//! an [`AppError`]. Unresolved identities, unowned records and bad price
//! input are recovered inside the core and never reach this type.
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 6xxx: Product errors
//! - 7xxx: Interest errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::ProductNotFound).with_detail("id", "p1");
//! assert_eq!(err.code.code(), 6001);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
