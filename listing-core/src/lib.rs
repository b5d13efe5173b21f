//! Listing Core - access control and price reconciliation for marketplace listings
//!
//! # Modules
//!
//! - **auth**: role registry, edit decisions, ownership scoping
//! - **pricing**: price / original price / discount reconciliation
//! - **services**: dashboard loading, listing authoring, role administration
//! - **db**: storage collaborator traits and an in-memory store
//! - **core**: configuration and process setup
//! - **common**: logging
//!
//! ```text
//! listing-core/src/
//! ├── auth/       # RoleRegistry, ContextState, evaluate, scope
//! ├── pricing/    # PriceReconciler
//! ├── services/   # ListingService, RoleAdmin
//! ├── db/         # ProductStore, InterestStore, RoleStore, MemoryStore
//! ├── core/       # Config
//! └── common/     # logger
//! ```

pub mod auth;
pub mod common;
pub mod core;
pub mod db;
pub mod pricing;
pub mod services;

pub use auth::{ContextState, IdentityProvider, RoleRegistry, evaluate, scope, scope_related};
pub use common::logger::{cleanup_old_logs, init_logger, init_logger_with_file};
pub use crate::core::{Config, setup_environment};
pub use db::{MemoryStore, RepoError, RepoResult};
pub use pricing::{PriceField, PriceReconciler};
pub use services::{ListingService, RoleAdmin};

/// Security event on the `security` target
///
/// The level token selects the tracing level, so denials stay visible under
/// a `warn` filter. Fields accept the usual tracing specifiers.
///
/// ```no_run
/// listing_core::security_log!(WARN, "edit_denied", actor_id = "u1", product_id = "p2");
/// ```
#[macro_export]
macro_rules! security_log {
    (WARN, $event:expr, $($arg:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            level = "WARN",
            $($arg)*
        );
    };
    (ERROR, $event:expr, $($arg:tt)*) => {
        tracing::error!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            level = "ERROR",
            $($arg)*
        );
    };
    (INFO, $event:expr, $($arg:tt)*) => {
        tracing::info!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            level = "INFO",
            $($arg)*
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::common::capture::EventCapture;
    use tracing::Level;

    #[test]
    fn test_security_log_uses_requested_level() {
        let capture = EventCapture::default();
        tracing::subscriber::with_default(capture.subscriber(), || {
            security_log!(WARN, "edit_denied", actor_id = "u1");
            security_log!(ERROR, "lookup_failed", actor_id = %"u2");
            security_log!(INFO, "role_checked", actor_id = "u3");
        });

        assert_eq!(
            capture.security_levels(),
            vec![Level::WARN, Level::ERROR, Level::INFO]
        );
    }
}
