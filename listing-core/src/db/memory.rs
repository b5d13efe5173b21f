//! In-memory document store
//!
//! Implements every storage trait over `DashMap`s. Listing order is
//! insertion order, matching what a document store returns for an
//! unsorted collection read.

use super::{InterestStore, ProductStore, RepoError, RepoResult, RoleStore};
use crate::core::Config;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::{DashMap, DashSet};
use shared::models::{
    InterestCreate, InterestLead, Product, ProductCreate, ProductUpdate, RoleRecord,
};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct MemoryStore {
    seq: AtomicU64,
    products: DashMap<String, (u64, Product)>,
    interests: DashMap<String, (u64, InterestLead)>,
    roles: DashMap<String, RoleRecord>,
    super_admins: DashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an elevated-privilege set
    pub fn with_super_admins<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        for id in ids {
            store.super_admins.insert(id.into());
        }
        store
    }

    /// Store seeded with the configured superadmins
    pub fn from_config(config: &Config) -> Self {
        Self::with_super_admins(config.superadmin_ids.iter().cloned())
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }

    /// Insert a product document as-is (imports, legacy rows)
    pub fn insert_product(&self, product: Product) -> RepoResult<()> {
        match self.products.entry(product.id.clone()) {
            Entry::Occupied(_) => Err(RepoError::Duplicate(format!("product:{}", product.id))),
            Entry::Vacant(slot) => {
                slot.insert((self.next_seq(), product));
                Ok(())
            }
        }
    }

    /// Insert an interest document as-is (imports, legacy rows)
    pub fn insert_interest(&self, interest: InterestLead) -> RepoResult<()> {
        match self.interests.entry(interest.id.clone()) {
            Entry::Occupied(_) => Err(RepoError::Duplicate(format!("interest:{}", interest.id))),
            Entry::Vacant(slot) => {
                slot.insert((self.next_seq(), interest));
                Ok(())
            }
        }
    }
}

fn in_insertion_order<T: Clone>(map: &DashMap<String, (u64, T)>) -> Vec<T> {
    let mut rows: Vec<(u64, T)> = map.iter().map(|entry| entry.value().clone()).collect();
    rows.sort_by_key(|(seq, _)| *seq);
    rows.into_iter().map(|(_, row)| row).collect()
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn find_role(&self, actor_id: &str) -> RepoResult<Option<RoleRecord>> {
        Ok(self.roles.get(actor_id).map(|r| r.value().clone()))
    }

    async fn is_super_admin(&self, actor_id: &str) -> RepoResult<bool> {
        Ok(self.super_admins.contains(actor_id))
    }

    async fn save_role(&self, record: RoleRecord) -> RepoResult<RoleRecord> {
        if record.actor_id.trim().is_empty() {
            return Err(RepoError::Validation("actor id is required".into()));
        }
        self.roles.insert(record.actor_id.clone(), record.clone());
        Ok(record)
    }

    async fn set_super_admin(&self, actor_id: &str, elevated: bool) -> RepoResult<()> {
        if actor_id.trim().is_empty() {
            return Err(RepoError::Validation("actor id is required".into()));
        }
        if elevated {
            self.super_admins.insert(actor_id.to_string());
        } else {
            self.super_admins.remove(actor_id);
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list_products(&self) -> RepoResult<Vec<Product>> {
        Ok(in_insertion_order(&self.products))
    }

    async fn find_product(&self, id: &str) -> RepoResult<Option<Product>> {
        Ok(self.products.get(id).map(|r| r.value().1.clone()))
    }

    async fn create_product(&self, owner_id: &str, data: ProductCreate) -> RepoResult<Product> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("product name is required".into()));
        }
        let product = Product {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: Some(owner_id.to_string()),
            name: data.name,
            description: data.description,
            pricing: data.pricing,
            visible: data.visible,
            created_at: now_millis(),
        };
        self.insert_product(product.clone())?;
        Ok(product)
    }

    async fn update_product(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let mut entry = self
            .products
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(format!("product:{}", id)))?;
        let product = &mut entry.value_mut().1;
        if let Some(name) = data.name {
            product.name = name;
        }
        if let Some(description) = data.description {
            product.description = Some(description);
        }
        if let Some(pricing) = data.pricing {
            product.pricing = pricing;
        }
        if let Some(visible) = data.visible {
            product.visible = Some(visible);
        }
        Ok(product.clone())
    }
}

#[async_trait]
impl InterestStore for MemoryStore {
    async fn list_interests(&self) -> RepoResult<Vec<InterestLead>> {
        Ok(in_insertion_order(&self.interests))
    }

    async fn create_interest(
        &self,
        data: InterestCreate,
        owner_id: Option<String>,
    ) -> RepoResult<InterestLead> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("contact name is required".into()));
        }
        let interest = InterestLead {
            id: uuid::Uuid::new_v4().to_string(),
            product_id: Some(data.product_id),
            name: data.name,
            contact: data.contact,
            message: data.message,
            owner_id,
            created_at: now_millis(),
        };
        self.insert_interest(interest.clone())?;
        Ok(interest)
    }
}
