//! Data Scope Filter
//!
//! Reduces record collections to what an actor may see. Pure functions over
//! snapshots; safe to call concurrently from any number of live views.

use super::context::ContextState;
use super::evaluator::is_owner;
use serde::Serialize;
use shared::models::{ChildRecord, InterestLead, OwnedRecord, Product, RoleContext};
use std::collections::HashSet;

/// Records visible to the context, order preserved
///
/// Superadmins see everything. Everyone else sees exactly the records
/// they own.
pub fn scope<I, R>(records: I, context: &RoleContext) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    R: OwnedRecord,
{
    if context.is_super_admin {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|record| is_owner(context, record))
        .collect()
}

/// [`scope`] against a possibly unresolved context; unresolved yields nothing
pub fn scope_state<I, R>(records: I, state: &ContextState) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    R: OwnedRecord,
{
    match state.resolved() {
        Some(context) => scope(records, context),
        None => Vec::new(),
    }
}

/// Ids of already-scoped parent records
pub fn visible_ids<'a, P: OwnedRecord + 'a>(
    scoped_parents: impl IntoIterator<Item = &'a P>,
) -> HashSet<&'a str> {
    scoped_parents
        .into_iter()
        .map(|parent| parent.record_id())
        .collect()
}

/// Keep children whose parent id is in the visible set, order preserved
///
/// Children without a parent id are dropped. Any owner copy carried on the
/// child is ignored.
pub fn scope_children<I, C>(children: I, visible_parents: &HashSet<&str>) -> Vec<C>
where
    I: IntoIterator<Item = C>,
    C: ChildRecord,
{
    children
        .into_iter()
        .filter(|child| {
            child
                .parent_id()
                .is_some_and(|parent| visible_parents.contains(parent))
        })
        .collect()
}

/// Two-step scoping of a parent/child relation
///
/// Parents are scoped first; children are then kept only when their parent
/// survived. Both inputs must be complete snapshots.
pub fn scope_related<P, C>(parents: Vec<P>, children: Vec<C>, context: &RoleContext) -> (Vec<P>, Vec<C>)
where
    P: OwnedRecord,
    C: ChildRecord,
{
    let parents = scope(parents, context);
    let children = {
        let visible = visible_ids(&parents);
        scope_children(children, &visible)
    };
    (parents, children)
}

/// Aggregate figures for a dashboard, from scoped sequences only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScopedCounts {
    pub products: usize,
    /// Scoped products currently shown on the storefront
    pub visible_products: usize,
    pub interests: usize,
}

impl ScopedCounts {
    pub fn tally(products: &[Product], interests: &[InterestLead]) -> Self {
        Self {
            products: products.len(),
            visible_products: products.iter().filter(|p| p.is_visible()).count(),
            interests: interests.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Actor, PriceState, RoleName};

    fn product(id: &str, owner: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            owner_id: owner.map(str::to_string),
            name: format!("Product {}", id),
            description: None,
            pricing: PriceState::default(),
            visible: None,
            created_at: 0,
        }
    }

    fn interest(id: &str, product_id: Option<&str>, owner_copy: Option<&str>) -> InterestLead {
        InterestLead {
            id: id.to_string(),
            product_id: product_id.map(str::to_string),
            name: "Buyer".to_string(),
            contact: None,
            message: None,
            owner_id: owner_copy.map(str::to_string),
            created_at: 0,
        }
    }

    fn editor(id: &str) -> RoleContext {
        RoleContext::editor(Actor::authenticated(id))
    }

    fn super_admin() -> RoleContext {
        RoleContext::new(Actor::authenticated("root"), RoleName::Superadmin, true)
    }

    fn ids<R: OwnedRecord>(records: &[R]) -> Vec<&str> {
        records.iter().map(|r| r.record_id()).collect()
    }

    #[test]
    fn test_owner_only_scope_preserves_order() {
        let products = vec![
            product("p3", Some("u1")),
            product("p1", Some("u2")),
            product("p2", Some("u1")),
            product("p4", None),
        ];
        let scoped = scope(&products, &editor("u1"));
        assert_eq!(ids(&scoped), vec!["p3", "p2"]);
    }

    #[test]
    fn test_super_admin_sees_everything() {
        let products = vec![
            product("p1", Some("u1")),
            product("p2", None),
            product("p3", Some("")),
        ];
        let scoped = scope(products.clone(), &super_admin());
        assert_eq!(scoped, products);
    }

    #[test]
    fn test_unresolved_state_scopes_to_nothing() {
        let products = vec![product("p1", Some("u1"))];
        assert!(scope_state(&products, &ContextState::Loading).is_empty());
        assert!(scope_state(&products, &ContextState::Unauthenticated).is_empty());
        assert_eq!(
            scope_state(&products, &ContextState::Resolved(editor("u1"))).len(),
            1
        );
    }

    #[test]
    fn test_children_follow_parent_ownership_not_owner_copy() {
        let products = vec![product("p1", Some("u1")), product("p2", Some("u2"))];
        let interests = vec![
            // stale copy says u2, parent belongs to u1
            interest("i1", Some("p1"), Some("u2")),
            // copy says u1, parent belongs to u2
            interest("i2", Some("p2"), Some("u1")),
            // no copy at all
            interest("i3", Some("p1"), None),
            // orphan
            interest("i4", None, Some("u1")),
            // parent no longer exists
            interest("i5", Some("p9"), Some("u1")),
        ];

        let (scoped_products, scoped_interests) =
            scope_related(products, interests, &editor("u1"));
        assert_eq!(ids(&scoped_products), vec!["p1"]);
        let interest_ids: Vec<&str> = scoped_interests.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(interest_ids, vec!["i1", "i3"]);
    }

    #[test]
    fn test_super_admin_children_still_need_existing_parent() {
        let products = vec![product("p1", Some("u1"))];
        let interests = vec![
            interest("i1", Some("p1"), None),
            interest("i2", None, None),
            interest("i3", Some("gone"), None),
        ];
        let (_, scoped) = scope_related(products, interests, &super_admin());
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].id, "i1");
    }

    #[test]
    fn test_counts_come_from_scoped_sequences() {
        let mut hidden = product("p2", Some("u1"));
        hidden.visible = Some(false);
        let products = vec![product("p1", Some("u1")), hidden, product("p3", Some("u2"))];
        let interests = vec![
            interest("i1", Some("p1"), None),
            interest("i2", Some("p3"), None),
            interest("i3", Some("p3"), None),
        ];

        let (scoped_products, scoped_interests) =
            scope_related(products, interests, &editor("u1"));
        let counts = ScopedCounts::tally(&scoped_products, &scoped_interests);
        assert_eq!(
            counts,
            ScopedCounts {
                products: 2,
                visible_products: 1,
                interests: 1,
            }
        );
    }
}
