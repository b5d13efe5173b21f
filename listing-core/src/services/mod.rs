//! Services used by the host application

pub mod listing;
pub mod role_admin;

pub use listing::{Dashboard, ListingService, ScopedProduct, catalog};
pub use role_admin::RoleAdmin;
