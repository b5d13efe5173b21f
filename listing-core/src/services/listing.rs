//! Listing Service
//!
//! Host-side glue between the storage collaborator and the access core:
//! loads collections, scopes them for the current context and decorates
//! each surfaced product with its edit decision.

use crate::auth::{ContextState, RoleRegistry, ScopedCounts, evaluate, scope_related};
use crate::db::{InterestStore, ProductStore};
use crate::pricing::PriceReconciler;
use crate::security_log;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    AccessDecision, Actor, InterestCreate, InterestLead, Product, ProductCreate, ProductUpdate,
    RoleContext,
};
use std::sync::Arc;

/// Product surfaced by scoping, with its edit decision
#[derive(Debug, Clone, Serialize)]
pub struct ScopedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub access: AccessDecision,
}

/// Everything a back-office list view renders
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dashboard {
    /// `None` when the context was not resolved
    pub context: Option<RoleContext>,
    pub products: Vec<ScopedProduct>,
    pub interests: Vec<InterestLead>,
    pub counts: ScopedCounts,
}

/// Storefront listing: products not hidden by their owner, order preserved
pub fn catalog<I>(products: I) -> Vec<Product>
where
    I: IntoIterator<Item = Product>,
{
    products.into_iter().filter(Product::is_visible).collect()
}

#[derive(Clone)]
pub struct ListingService {
    products: Arc<dyn ProductStore>,
    interests: Arc<dyn InterestStore>,
    registry: RoleRegistry,
}

impl ListingService {
    pub fn new(
        products: Arc<dyn ProductStore>,
        interests: Arc<dyn InterestStore>,
        registry: RoleRegistry,
    ) -> Self {
        Self {
            products,
            interests,
            registry,
        }
    }

    /// Resolve the role context for a view load
    pub async fn context_for(&self, actor: Option<Actor>) -> ContextState {
        ContextState::load(actor, &self.registry).await
    }

    /// Resolve the context, then load the dashboard for it
    pub async fn load_dashboard_for(&self, actor: Option<Actor>) -> AppResult<Dashboard> {
        let state = self.context_for(actor).await;
        self.load_dashboard(&state).await
    }

    /// Load and scope products and interests
    ///
    /// Both collections are fetched completely before scoping so the join
    /// and the counts never run on a partial snapshot. An unresolved
    /// context yields an empty dashboard without touching storage.
    pub async fn load_dashboard(&self, state: &ContextState) -> AppResult<Dashboard> {
        let Some(context) = state.resolved() else {
            tracing::debug!(?state, "Dashboard requested without resolved context");
            return Ok(Dashboard::default());
        };

        let (products, interests) = futures::try_join!(
            self.products.list_products(),
            self.interests.list_interests()
        )?;

        let (products, interests) = scope_related(products, interests, context);
        let counts = ScopedCounts::tally(&products, &interests);

        let products = products
            .into_iter()
            .map(|product| {
                let access = evaluate(context, &product);
                ScopedProduct { product, access }
            })
            .collect();

        tracing::debug!(
            actor_id = %context.actor_id(),
            products = counts.products,
            interests = counts.interests,
            "Dashboard loaded"
        );

        Ok(Dashboard {
            context: Some(context.clone()),
            products,
            interests,
            counts,
        })
    }

    /// Public storefront listing
    pub async fn catalog(&self) -> AppResult<Vec<Product>> {
        Ok(catalog(self.products.list_products().await?))
    }

    /// Load a product for its editor; refused unless the context may edit it
    pub async fn product_for_edit(&self, state: &ContextState, id: &str) -> AppResult<Product> {
        let context = state.require()?;
        let product = self
            .products
            .find_product(id)
            .await?
            .ok_or_else(|| AppError::product_not_found(id))?;

        if !evaluate(context, &product).can_edit() {
            security_log!(
                WARN,
                "edit_denied",
                actor_id = %context.actor_id(),
                product_id = %id
            );
            return Err(AppError::permission_denied("Only the owner can edit this product")
                .with_detail("id", id));
        }
        Ok(product)
    }

    /// Create a listing owned by the context's actor
    pub async fn create_listing(
        &self,
        state: &ContextState,
        mut data: ProductCreate,
    ) -> AppResult<Product> {
        let context = state.require()?;
        data.pricing = PriceReconciler::editing(data.pricing).snapshot();
        let product = self
            .products
            .create_product(context.actor_id(), data)
            .await?;
        tracing::info!(actor_id = %context.actor_id(), product_id = %product.id, "Listing created");
        Ok(product)
    }

    /// Persist a price form session for an existing listing
    pub async fn save_pricing(
        &self,
        state: &ContextState,
        id: &str,
        session: &PriceReconciler,
    ) -> AppResult<Product> {
        self.product_for_edit(state, id).await?;
        let update = ProductUpdate {
            pricing: Some(session.snapshot()),
            ..Default::default()
        };
        Ok(self.products.update_product(id, update).await?)
    }

    /// Show or hide a listing on the storefront
    pub async fn set_visibility(
        &self,
        state: &ContextState,
        id: &str,
        visible: bool,
    ) -> AppResult<Product> {
        self.product_for_edit(state, id).await?;
        let update = ProductUpdate {
            visible: Some(visible),
            ..Default::default()
        };
        Ok(self.products.update_product(id, update).await?)
    }

    /// Record a buyer's interest in a storefront product
    ///
    /// The product's current owner is copied onto the lead for display only.
    pub async fn record_interest(&self, data: InterestCreate) -> AppResult<InterestLead> {
        let product = self
            .products
            .find_product(&data.product_id)
            .await?
            .filter(Product::is_visible)
            .ok_or_else(|| {
                AppError::new(ErrorCode::InterestParentMissing)
                    .with_detail("product_id", data.product_id.clone())
            })?;

        let lead = self
            .interests
            .create_interest(data, product.owner_id.clone())
            .await?;
        tracing::info!(interest_id = %lead.id, product_id = %product.id, "Interest recorded");
        Ok(lead)
    }
}
