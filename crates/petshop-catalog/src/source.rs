//! # Catalog Sources
//!
//! The two seams the application talks to.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Storefront (home, product detail)       Admin dashboard                │
//! │       │                                       │                         │
//! │       │ list_products()                       │ list_entries()          │
//! │       │ get_product(id)                       │ insert_entry(draft)     │
//! │       ▼                                       │ update_entry(id, draft) │
//! │  ProductCatalog (read-only)                   │ delete_entry(id)        │
//! │                                               ▼                         │
//! │                                  InventoryRepository (CRUD by i64 id)   │
//! │                                                                         │
//! │  Implementations: MemoryCatalog (this crate). A remote HTTP backend     │
//! │  plugs in behind the same traits and maps transport failures to         │
//! │  CatalogError::Unavailable.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use petshop_core::{CatalogEntry, EntryDraft};

use crate::error::CatalogResult;

/// Read-only product listing for the storefront.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Every product, in source order.
    async fn list_products(&self) -> CatalogResult<Vec<CatalogEntry>>;

    /// One product, or `CatalogError::NotFound`.
    async fn get_product(&self, id: i64) -> CatalogResult<CatalogEntry>;
}

/// Inventory CRUD for the admin panel, keyed by integer id.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Every inventory entry, in source order.
    async fn list_entries(&self) -> CatalogResult<Vec<CatalogEntry>>;

    /// Stores a new entry; the repository assigns the id.
    async fn insert_entry(&self, draft: &EntryDraft) -> CatalogResult<CatalogEntry>;

    /// Replaces the entry with `id`.
    async fn update_entry(&self, id: i64, draft: &EntryDraft) -> CatalogResult<CatalogEntry>;

    /// Removes the entry with `id`.
    async fn delete_entry(&self, id: i64) -> CatalogResult<()>;
}
