//! Unified error codes for the listing core
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 6xxx: Product errors
//! - 7xxx: Interest errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,

    // ==================== 1xxx: Auth ====================
    /// Actor is not authenticated
    NotAuthenticated = 1001,
    /// Role context has not finished loading
    ContextNotResolved = 1002,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Superadmin role required
    SuperAdminRequired = 2002,
    /// Superadmin cannot revoke their own elevation
    CannotRevokeSelf = 2003,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,

    // ==================== 7xxx: Interest ====================
    /// Interest lead references an unknown or hidden product
    InterestParentMissing = 7001,

    // ==================== 9xxx: System ====================
    /// Storage collaborator error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",

            // Auth
            ErrorCode::NotAuthenticated => "Actor is not authenticated",
            ErrorCode::ContextNotResolved => "Role context is still loading",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::SuperAdminRequired => "Superadmin role is required",
            ErrorCode::CannotRevokeSelf => "Cannot revoke own superadmin privilege",

            // Product
            ErrorCode::ProductNotFound => "Product not found",

            // Interest
            ErrorCode::InterestParentMissing => "Interest references an unknown product",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::ContextNotResolved),

            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::SuperAdminRequired),
            2003 => Ok(ErrorCode::CannotRevokeSelf),

            6001 => Ok(ErrorCode::ProductNotFound),

            7001 => Ok(ErrorCode::InterestParentMissing),

            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
