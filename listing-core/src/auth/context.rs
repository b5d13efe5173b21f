//! Role context loading state
//!
//! A view holds a [`ContextState`] while the registry lookup is in flight.
//! Anything other than `Resolved` fails closed.

use super::registry::RoleRegistry;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Actor, RoleContext};

/// Identity collaborator
pub trait IdentityProvider: Send + Sync {
    /// Signed-in actor, if any
    fn current_actor(&self) -> Option<Actor>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextState {
    /// Role lookup not finished
    Loading,
    /// No signed-in actor
    Unauthenticated,
    Resolved(RoleContext),
}

impl ContextState {
    /// Resolve the context for the current actor
    ///
    /// The registry is only consulted for authenticated actors.
    pub async fn load(actor: Option<Actor>, registry: &RoleRegistry) -> Self {
        match actor {
            Some(actor) if actor.is_authenticated => {
                Self::Resolved(registry.resolve_role(&actor).await)
            }
            _ => Self::Unauthenticated,
        }
    }

    /// Resolve the context for whoever the identity collaborator reports
    pub async fn load_current(identity: &dyn IdentityProvider, registry: &RoleRegistry) -> Self {
        Self::load(identity.current_actor(), registry).await
    }

    pub fn resolved(&self) -> Option<&RoleContext> {
        match self {
            Self::Resolved(ctx) => Some(ctx),
            _ => None,
        }
    }

    /// Only a resolved superadmin context is elevated
    pub fn is_super_admin(&self) -> bool {
        self.resolved().is_some_and(|ctx| ctx.is_super_admin)
    }

    /// Context for operations that must not run on an unresolved state
    pub fn require(&self) -> AppResult<&RoleContext> {
        match self {
            Self::Resolved(ctx) => Ok(ctx),
            Self::Loading => Err(AppError::new(ErrorCode::ContextNotResolved)),
            Self::Unauthenticated => Err(AppError::not_authenticated()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use std::sync::Arc;

    struct FixedIdentity(Option<Actor>);

    impl IdentityProvider for FixedIdentity {
        fn current_actor(&self) -> Option<Actor> {
            self.0.clone()
        }
    }

    fn registry() -> RoleRegistry {
        RoleRegistry::new(Arc::new(MemoryStore::with_super_admins(["root"])))
    }

    #[tokio::test]
    async fn test_load_states() {
        let registry = registry();

        let state = ContextState::load(None, &registry).await;
        assert_eq!(state, ContextState::Unauthenticated);

        let state = ContextState::load(Some(Actor::anonymous()), &registry).await;
        assert_eq!(state, ContextState::Unauthenticated);

        let state = ContextState::load(Some(Actor::authenticated("root")), &registry).await;
        assert!(state.is_super_admin());
        assert_eq!(state.require().unwrap().actor_id(), "root");
    }

    #[tokio::test]
    async fn test_load_current_uses_identity_provider() {
        let registry = registry();
        let identity = FixedIdentity(Some(Actor::authenticated("u1")));
        let state = ContextState::load_current(&identity, &registry).await;
        assert!(!state.is_super_admin());
        assert_eq!(state.resolved().map(|c| c.actor_id()), Some("u1"));
    }

    #[test]
    fn test_unresolved_states_fail_closed() {
        assert!(!ContextState::Loading.is_super_admin());
        assert_eq!(
            ContextState::Loading.require().unwrap_err().code,
            ErrorCode::ContextNotResolved
        );
        assert_eq!(
            ContextState::Unauthenticated.require().unwrap_err().code,
            ErrorCode::NotAuthenticated
        );
    }
}
