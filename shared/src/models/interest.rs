//! Interest Lead Model

use super::access::ChildRecord;
use serde::{Deserialize, Serialize};

/// A buyer's expression of interest in a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestLead {
    pub id: String,
    /// Parent product
    #[serde(default, alias = "parent_id")]
    pub product_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Copy of the product owner taken when the lead was written.
    /// May be absent or stale; scoping goes through the parent product instead.
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Creation time (unix millis)
    pub created_at: i64,
}

impl ChildRecord for InterestLead {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }
}

/// Create interest payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestCreate {
    pub product_id: String,
    pub name: String,
    pub contact: Option<String>,
    pub message: Option<String>,
}
