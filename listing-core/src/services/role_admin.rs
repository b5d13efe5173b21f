//! Role Administration
//!
//! The administrative action that mutates the role registry. Only a
//! resolved superadmin context may use it.

use crate::db::RoleStore;
use crate::{audit_log, security_log};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{RoleContext, RoleName, RoleRecord};
use std::sync::Arc;

#[derive(Clone)]
pub struct RoleAdmin {
    store: Arc<dyn RoleStore>,
}

impl RoleAdmin {
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self { store }
    }

    fn require_super_admin(by: &RoleContext, action: &str) -> AppResult<()> {
        if by.is_super_admin {
            return Ok(());
        }
        security_log!(
            WARN,
            "super_admin_required",
            actor_id = %by.actor_id(),
            action = %action
        );
        Err(AppError::new(ErrorCode::SuperAdminRequired))
    }

    /// Set the role label of an actor
    pub async fn assign_role(
        &self,
        by: &RoleContext,
        target_id: &str,
        role: RoleName,
    ) -> AppResult<RoleRecord> {
        Self::require_super_admin(by, "assign_role")?;
        if target_id.trim().is_empty() {
            return Err(AppError::validation("Target actor id is required"));
        }

        let record = self
            .store
            .save_role(RoleRecord {
                actor_id: target_id.to_string(),
                role,
                updated_at: chrono::Utc::now().timestamp_millis(),
            })
            .await?;

        audit_log!(
            by.actor_id(),
            "assign_role",
            format!("actor:{}", target_id),
            format!("role={}", role)
        );
        Ok(record)
    }

    /// Add or remove an actor from the elevated-privilege set
    ///
    /// A superadmin cannot revoke their own elevation.
    pub async fn set_super_admin(
        &self,
        by: &RoleContext,
        target_id: &str,
        elevated: bool,
    ) -> AppResult<()> {
        Self::require_super_admin(by, "set_super_admin")?;
        if target_id.trim().is_empty() {
            return Err(AppError::validation("Target actor id is required"));
        }
        if !elevated && target_id == by.actor_id() {
            return Err(AppError::new(ErrorCode::CannotRevokeSelf));
        }

        self.store.set_super_admin(target_id, elevated).await?;

        audit_log!(
            by.actor_id(),
            if elevated { "grant_super_admin" } else { "revoke_super_admin" },
            format!("actor:{}", target_id)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::RoleRegistry;
    use crate::db::MemoryStore;
    use shared::models::Actor;

    fn setup() -> (RoleAdmin, RoleRegistry) {
        let store = Arc::new(MemoryStore::with_super_admins(["root"]));
        (RoleAdmin::new(store.clone()), RoleRegistry::new(store))
    }

    #[tokio::test]
    async fn test_super_admin_assigns_roles() {
        let (admin, registry) = setup();
        let root = registry.resolve_role(&Actor::authenticated("root")).await;

        let record = admin.assign_role(&root, "u1", RoleName::Admin).await.unwrap();
        assert_eq!(record.role, RoleName::Admin);

        let u1 = registry.resolve_role(&Actor::authenticated("u1")).await;
        assert_eq!(u1.role, RoleName::Admin);
        assert!(!u1.is_super_admin);
    }

    #[tokio::test]
    async fn test_non_super_admin_is_refused() {
        let (admin, registry) = setup();
        let u1 = registry.resolve_role(&Actor::authenticated("u1")).await;

        let err = admin.assign_role(&u1, "u1", RoleName::Admin).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SuperAdminRequired);

        let err = admin.set_super_admin(&u1, "u1", true).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SuperAdminRequired);
    }

    #[tokio::test]
    async fn test_grant_and_revoke_elevation() {
        let (admin, registry) = setup();
        let root = registry.resolve_role(&Actor::authenticated("root")).await;

        admin.set_super_admin(&root, "u1", true).await.unwrap();
        assert!(registry.resolve_role(&Actor::authenticated("u1")).await.is_super_admin);

        admin.set_super_admin(&root, "u1", false).await.unwrap();
        assert!(!registry.resolve_role(&Actor::authenticated("u1")).await.is_super_admin);
    }

    #[tokio::test]
    async fn test_cannot_revoke_self() {
        let (admin, registry) = setup();
        let root = registry.resolve_role(&Actor::authenticated("root")).await;
        let err = admin.set_super_admin(&root, "root", false).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CannotRevokeSelf);
        assert!(registry.resolve_role(&Actor::authenticated("root")).await.is_super_admin);
    }

    #[tokio::test]
    async fn test_blank_target_rejected() {
        let (admin, registry) = setup();
        let root = registry.resolve_role(&Actor::authenticated("root")).await;
        let err = admin.assign_role(&root, "  ", RoleName::Editor).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let err = admin.set_super_admin(&root, "", true).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
