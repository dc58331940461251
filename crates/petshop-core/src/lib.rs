//! # petshop-core: Pure Storefront Logic
//!
//! This crate contains the cart and list-query logic of the petshop
//! storefront as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Petshop Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web UI)                            │   │
//! │  │    Home grid ──► Product detail ──► Cart ──► Checkout           │   │
//! │  │    Admin table ──► Add/Edit dialog ──► Delete confirm           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    CartStore, ListQuery (debounced), CheckoutSession, Admin     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ petshop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │   query   │  │   │
//! │  │   │ Catalog-  │  │   Money   │  │   Cart    │  │  filter   │  │   │
//! │  │   │ Entry ... │  │           │  │  Summary  │  │  paginate │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                        ┌───────────┐            │   │
//! │  │   NO I/O • NO TIMERS • PURE FUNCTIONS  │validation │            │   │
//! │  │                                        └───────────┘            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogEntry, LineItem, Category, forms)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart mutations and derived totals
//! - [`query`] - Search/category filtering and pagination
//! - [`validation`] - Checkout and admin form rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use petshop_core::{Cart, CatalogEntry, Category, Money};
//!
//! let food = CatalogEntry {
//!     id: 1,
//!     title: "Cat Food".to_string(),
//!     price: Money::from_cents(1000),
//!     image: "food.png".to_string(),
//!     category: Category::Cat,
//!     description: None,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&food);
//! cart.add_item(&food);
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total_price().to_string(), "$20.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod query;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use query::{filter_entries, paginate, CategoryFilter, Page, QueryState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quiescence window for search-box input, in milliseconds.
///
/// The filtered list only picks up a new search term once typing has paused
/// this long. Category changes are never delayed.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Rows per page in the admin inventory table.
pub const DEFAULT_PAGE_SIZE: usize = 5;
