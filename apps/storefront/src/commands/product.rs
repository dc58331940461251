//! # Product Views
//!
//! The home grid and the product detail page.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Browse Flow                               │
//! │                                                                         │
//! │  HomeView::load() ──► catalog.list_products()                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  user types "dog" ──► ListQuery (300ms debounce)                        │
//! │  user picks "cat" ──► ListQuery (immediate)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  visible() = filter_entries(products, query in effect)                  │
//! │       │                                                                 │
//! │       ├── "Add to cart" ──► CartStore + success notice                  │
//! │       │                                                                 │
//! │       └── open_product(id) ──► /product/{id}                            │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                         ProductDetailView::load(id)                     │
//! │                           ├── add_to_cart()                             │
//! │                           └── buy_now() ──► /checkout + instant item    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use petshop_core::{CatalogEntry, CategoryFilter, LineItem};
use tracing::{debug, info};

use crate::commands::cart::{self, get_cart, CartResponse};
use crate::context::AppContext;
use crate::error::ApiResult;
use crate::services::{Route, Severity};
use crate::state::ListQuery;

// =============================================================================
// Home
// =============================================================================

/// Product grid with search box and category dropdown.
pub struct HomeView {
    ctx: AppContext,
    products: Vec<CatalogEntry>,
    query: ListQuery,
}

impl HomeView {
    pub fn new(ctx: AppContext) -> Self {
        let query = ListQuery::new(ctx.config.search_debounce());
        HomeView {
            ctx,
            products: Vec::new(),
            query,
        }
    }

    /// Fetches the catalog. Returns the number of products.
    pub async fn load(&mut self) -> ApiResult<usize> {
        debug!("home load");
        self.products = self.ctx.catalog.list_products().await?;
        info!(count = self.products.len(), "Catalog loaded");
        Ok(self.products.len())
    }

    pub fn products(&self) -> &[CatalogEntry] {
        &self.products
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.set_search(term);
    }

    pub fn set_category(&mut self, filter: impl Into<CategoryFilter>) {
        self.query.set_category(filter);
    }

    /// Waits for the search box to settle.
    pub async fn settled(&mut self) {
        self.query.settled().await;
    }

    /// Products shown under the query currently in effect.
    pub fn visible(&self) -> Vec<&CatalogEntry> {
        self.query.apply(&self.products)
    }

    /// "Add to cart" on a grid card. Looked up in the catalog, not the
    /// loaded grid.
    pub async fn add_to_cart(&self, product_id: i64) -> ApiResult<CartResponse> {
        debug!(product_id, "home add_to_cart");
        cart::add_to_cart(&self.ctx, product_id).await
    }

    pub fn open_product(&self, product_id: i64) {
        self.ctx.navigate(Route::ProductDetail { id: product_id });
    }
}

// =============================================================================
// Product Detail
// =============================================================================

/// One product with "add to cart" and "buy now".
pub struct ProductDetailView {
    ctx: AppContext,
    product: CatalogEntry,
}

impl ProductDetailView {
    pub async fn load(ctx: AppContext, product_id: i64) -> ApiResult<Self> {
        debug!(product_id, "product detail load");
        let product = ctx.catalog.get_product(product_id).await?;
        Ok(ProductDetailView { ctx, product })
    }

    pub fn product(&self) -> &CatalogEntry {
        &self.product
    }

    pub fn add_to_cart(&self) -> CartResponse {
        debug!(product_id = self.product.id, "detail add_to_cart");
        self.ctx.cart.add_item(&self.product);
        self.ctx
            .notify(Severity::Success, "Added to cart", self.product.title.as_str());
        get_cart(&self.ctx)
    }

    /// Checks out this product alone, quantity 1, without touching the cart.
    pub fn buy_now(&self) -> LineItem {
        debug!(product_id = self.product.id, "buy_now");
        let item = LineItem::from_entry(&self.product);
        self.ctx.navigate(Route::Checkout {
            instant: Some(item.clone()),
        });
        item
    }

    pub fn back(&self) {
        self.ctx.navigate(Route::Back);
    }
}
