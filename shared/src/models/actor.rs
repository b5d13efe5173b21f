//! Actor Model

use serde::{Deserialize, Serialize};

/// Identity attempting an operation
///
/// Produced by the identity collaborator. An actor that is not
/// authenticated never reaches the role registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub is_authenticated: bool,
}

impl Actor {
    /// Signed-in actor
    pub fn authenticated(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_authenticated: true,
        }
    }

    /// Anonymous visitor (storefront only)
    pub fn anonymous() -> Self {
        Self {
            id: String::new(),
            is_authenticated: false,
        }
    }
}
