//! # petshop-catalog: Catalog Data Source Layer
//!
//! Provides access to the product catalog (storefront) and the pet
//! inventory (admin panel).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apps/storefront                                                        │
//! │        │  Arc<dyn ProductCatalog>, Arc<dyn InventoryRepository>         │
//! │        ▼                                                                │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │  petshop-catalog (THIS CRATE)                                     │ │
//! │  │    source   - the async traits                                    │ │
//! │  │    memory   - MemoryCatalog (RwLock<Vec<CatalogEntry>>)           │ │
//! │  │    record   - JSON wire records ⇄ CatalogEntry                     │ │
//! │  │    error    - CatalogError                                        │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  petshop-core (CatalogEntry, EntryDraft, Money)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use petshop_catalog::{MemoryCatalog, ProductCatalog};
//!
//! let catalog = MemoryCatalog::demo()?;
//! let products = catalog.list_products().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod record;
pub mod source;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use memory::MemoryCatalog;
pub use record::{parse_entries, CatalogRecord};
pub use source::{InventoryRepository, ProductCatalog};
