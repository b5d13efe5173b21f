//! Data models
//!
//! Products and interest leads as stored, plus the role and access types
//! used to decide what an actor may see.

pub mod access;
pub mod actor;
pub mod interest;
pub mod price;
pub mod product;
pub mod role;

// Re-exports
pub use access::*;
pub use actor::*;
pub use interest::*;
pub use price::*;
pub use product::*;
pub use role::*;
