//! Access Model
//!
//! Record traits consulted by scoping and the edit decision handed to the
//! rendering layer.

use serde::Serialize;

/// Record subject to ownership scoping
pub trait OwnedRecord {
    fn record_id(&self) -> &str;

    /// Creator of the record. `None` for legacy or malformed rows.
    fn owner_id(&self) -> Option<&str>;
}

/// Record that belongs to a parent record (e.g. an interest under a product)
pub trait ChildRecord {
    fn record_id(&self) -> &str;

    fn parent_id(&self) -> Option<&str>;
}

impl<T: OwnedRecord + ?Sized> OwnedRecord for &T {
    fn record_id(&self) -> &str {
        (**self).record_id()
    }

    fn owner_id(&self) -> Option<&str> {
        (**self).owner_id()
    }
}

impl<T: ChildRecord + ?Sized> ChildRecord for &T {
    fn record_id(&self) -> &str {
        (**self).record_id()
    }

    fn parent_id(&self) -> Option<&str> {
        (**self).parent_id()
    }
}

/// Per-record answer for the rendering layer
///
/// Fields are private so `can_edit` can never be set without `can_view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    can_view: bool,
    can_edit: bool,
}

impl AccessDecision {
    /// Decision for a record that scoping already surfaced
    pub fn surfaced(can_edit: bool) -> Self {
        Self {
            can_view: true,
            can_edit,
        }
    }

    /// Nothing allowed (unresolved context)
    pub fn denied() -> Self {
        Self {
            can_view: false,
            can_edit: false,
        }
    }

    pub fn can_view(&self) -> bool {
        self.can_view
    }

    pub fn can_edit(&self) -> bool {
        self.can_edit
    }
}
