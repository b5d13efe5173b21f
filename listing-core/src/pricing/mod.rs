//! Listing price authoring
//!
//! Reconciles price, original price and discount on every form edit.

mod reconciler;

pub use reconciler::*;
