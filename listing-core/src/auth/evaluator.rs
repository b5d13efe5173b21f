//! Access Evaluator
//!
//! Single source of the edit decision. Visibility is decided by
//! [`scope`](super::scope::scope) before a record ever reaches this module,
//! so a decision for a surfaced record always has `can_view == true`.

use super::context::ContextState;
use shared::models::{AccessDecision, OwnedRecord, RoleContext};

/// Whether the context's actor created the record
///
/// A record without an owner, or with an empty owner id, is owned by nobody.
pub fn is_owner<R: OwnedRecord + ?Sized>(context: &RoleContext, record: &R) -> bool {
    match record.owner_id() {
        Some(owner) if !owner.is_empty() => owner == context.actor_id(),
        _ => false,
    }
}

/// Decide mutability of a surfaced record
pub fn evaluate<R: OwnedRecord + ?Sized>(context: &RoleContext, record: &R) -> AccessDecision {
    let can_edit = context.is_super_admin || is_owner(context, record);
    if !can_edit {
        tracing::trace!(
            actor_id = %context.actor_id(),
            record_id = %record.record_id(),
            "Edit not permitted"
        );
    }
    AccessDecision::surfaced(can_edit)
}

/// Decide against a possibly unresolved context; anything unresolved is denied
pub fn evaluate_state<R: OwnedRecord + ?Sized>(state: &ContextState, record: &R) -> AccessDecision {
    match state.resolved() {
        Some(context) => evaluate(context, record),
        None => AccessDecision::denied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Actor, RoleName};

    struct Row {
        id: &'static str,
        owner: Option<&'static str>,
    }

    impl OwnedRecord for Row {
        fn record_id(&self) -> &str {
            self.id
        }

        fn owner_id(&self) -> Option<&str> {
            self.owner
        }
    }

    fn editor(id: &str) -> RoleContext {
        RoleContext::editor(Actor::authenticated(id))
    }

    fn super_admin(id: &str) -> RoleContext {
        RoleContext::new(Actor::authenticated(id), RoleName::Superadmin, true)
    }

    #[test]
    fn test_owner_can_edit() {
        let row = Row { id: "p1", owner: Some("u1") };
        let decision = evaluate(&editor("u1"), &row);
        assert!(decision.can_edit());
        assert!(decision.can_view());
    }

    #[test]
    fn test_non_owner_cannot_edit() {
        let row = Row { id: "p2", owner: Some("u2") };
        let decision = evaluate(&editor("u1"), &row);
        assert!(!decision.can_edit());
        assert!(decision.can_view());
    }

    #[test]
    fn test_admin_label_without_elevation_cannot_edit_others() {
        let ctx = RoleContext::new(Actor::authenticated("u1"), RoleName::Admin, false);
        let row = Row { id: "p2", owner: Some("u2") };
        assert!(!evaluate(&ctx, &row).can_edit());
    }

    #[test]
    fn test_unowned_record_only_editable_by_super_admin() {
        let legacy = Row { id: "p3", owner: None };
        let blank = Row { id: "p4", owner: Some("") };

        assert!(!evaluate(&editor("u1"), &legacy).can_edit());
        assert!(!evaluate(&editor(""), &blank).can_edit());
        assert!(evaluate(&super_admin("root"), &legacy).can_edit());
        assert!(evaluate(&super_admin("root"), &blank).can_edit());
    }

    #[test]
    fn test_unresolved_state_denies_everything() {
        let row = Row { id: "p1", owner: Some("u1") };
        for state in [ContextState::Loading, ContextState::Unauthenticated] {
            let decision = evaluate_state(&state, &row);
            assert!(!decision.can_edit());
            assert!(!decision.can_view());
        }
        let resolved = ContextState::Resolved(editor("u1"));
        assert!(evaluate_state(&resolved, &row).can_edit());
    }
}
