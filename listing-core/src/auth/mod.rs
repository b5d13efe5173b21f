//! Access control and ownership scoping
//!
//! - [`RoleRegistry`] - role label and superadmin lookup
//! - [`ContextState`] - loading state of a view's role context
//! - [`evaluate`] - per-record edit decision
//! - [`scope`] / [`scope_related`] - visibility filtering

pub mod context;
pub mod evaluator;
pub mod registry;
pub mod scope;

pub use context::{ContextState, IdentityProvider};
pub use evaluator::{evaluate, evaluate_state, is_owner};
pub use registry::RoleRegistry;
pub use scope::{ScopedCounts, scope, scope_children, scope_related, scope_state, visible_ids};
