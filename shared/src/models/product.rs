//! Product Model

use super::access::OwnedRecord;
use super::price::PriceState;
use serde::{Deserialize, Serialize};

/// Product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// Creator of the listing, fixed at creation.
    /// Missing on some legacy rows; such products are editable by superadmins only.
    #[serde(default)]
    pub owner_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub pricing: PriceState,
    /// Storefront visibility. Absent means visible.
    #[serde(default)]
    pub visible: Option<bool>,
    /// Creation time (unix millis)
    pub created_at: i64,
}

impl Product {
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

impl OwnedRecord for Product {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }
}

/// Create product payload
///
/// The owner is taken from the creating actor, never from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub pricing: PriceState,
    pub visible: Option<bool>,
}

/// Update product payload
///
/// Carries no owner field: ownership never transfers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub pricing: Option<PriceState>,
    pub visible: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_row_without_owner_or_visibility() {
        let json = r#"{"id":"p1","name":"Lamp","price":30,"created_at":0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.owner_id(), None);
        assert!(product.is_visible());
        assert_eq!(product.record_id(), "p1");
    }

    #[test]
    fn test_hidden_product() {
        let json = r#"{"id":"p2","owner_id":"u1","name":"Desk","visible":false,"created_at":0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.is_visible());
        assert_eq!(product.owner_id(), Some("u1"));
        assert_eq!(product.pricing, PriceState::default());
    }
}
