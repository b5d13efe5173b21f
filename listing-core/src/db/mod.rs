//! Storage Collaborator Boundary
//!
//! Narrow read/write traits over the remote document store. The core only
//! reads through them; writes are issued by the service layer on behalf of
//! the host application.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use shared::error::AppError;
use shared::models::{
    InterestCreate, InterestLead, Product, ProductCreate, ProductUpdate, RoleRecord,
};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(resource) => AppError::not_found(resource),
            RepoError::Duplicate(resource) => AppError::already_exists(resource),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Role lookups and administrative role writes
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn find_role(&self, actor_id: &str) -> RepoResult<Option<RoleRecord>>;

    /// Membership in the elevated-privilege set
    async fn is_super_admin(&self, actor_id: &str) -> RepoResult<bool>;

    async fn save_role(&self, record: RoleRecord) -> RepoResult<RoleRecord>;

    async fn set_super_admin(&self, actor_id: &str, elevated: bool) -> RepoResult<()>;
}

/// Product documents, listed in storage order
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list_products(&self) -> RepoResult<Vec<Product>>;

    async fn find_product(&self, id: &str) -> RepoResult<Option<Product>>;

    async fn create_product(&self, owner_id: &str, data: ProductCreate) -> RepoResult<Product>;

    async fn update_product(&self, id: &str, data: ProductUpdate) -> RepoResult<Product>;
}

/// Interest lead documents, listed in storage order
#[async_trait]
pub trait InterestStore: Send + Sync {
    async fn list_interests(&self) -> RepoResult<Vec<InterestLead>>;

    /// `owner_id` is the parent product's owner at the time of writing
    async fn create_interest(
        &self,
        data: InterestCreate,
        owner_id: Option<String>,
    ) -> RepoResult<InterestLead>;
}
