//! Role Registry
//!
//! Read-only lookup of an actor's role label and superadmin membership.
//! Lookup failures degrade to a plain editor context and never grant
//! elevation.

use crate::db::RoleStore;
use crate::security_log;
use shared::models::{Actor, RoleContext, RoleName};
use std::sync::Arc;

#[derive(Clone)]
pub struct RoleRegistry {
    store: Arc<dyn RoleStore>,
}

impl RoleRegistry {
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self { store }
    }

    /// Resolve the privilege snapshot for an authenticated actor
    ///
    /// Callers check [`Actor::is_authenticated`] first. An anonymous actor
    /// passed here anyway gets the editor default without any lookup.
    pub async fn resolve_role(&self, actor: &Actor) -> RoleContext {
        if !actor.is_authenticated {
            security_log!(WARN, "role_lookup_unauthenticated", actor_id = %actor.id);
            return RoleContext::editor(actor.clone());
        }

        let (role, elevated) = futures::join!(
            self.store.find_role(&actor.id),
            self.store.is_super_admin(&actor.id)
        );

        let role = match role {
            Ok(Some(record)) => record.role,
            Ok(None) => RoleName::default(),
            Err(e) => {
                tracing::warn!(actor_id = %actor.id, error = %e, "Role lookup failed, using editor");
                RoleName::default()
            }
        };

        let is_super_admin = match elevated {
            Ok(flag) => flag,
            Err(e) => {
                security_log!(
                    WARN,
                    "super_admin_lookup_failed",
                    actor_id = %actor.id,
                    error = %e
                );
                false
            }
        };

        tracing::debug!(actor_id = %actor.id, role = %role, is_super_admin, "Role resolved");
        RoleContext::new(actor.clone(), role, is_super_admin)
    }
}
