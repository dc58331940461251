//! # In-Memory Catalog
//!
//! A process-local catalog implementing both [`ProductCatalog`] and
//! [`InventoryRepository`]. Nothing is written to disk; the collection lives
//! as long as the process.
//!
//! ## Usage
//! ```rust,ignore
//! let catalog = MemoryCatalog::demo()?;
//!
//! let products = catalog.list_products().await?;
//! let beagle = catalog.insert_entry(&draft).await?;
//! catalog.delete_entry(beagle.id).await?;
//! ```

use std::path::Path;

use async_trait::async_trait;
use petshop_core::{CatalogEntry, EntryDraft};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::record::parse_entries;
use crate::source::{InventoryRepository, ProductCatalog};

/// Built-in demo catalog.
const DEMO_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Default)]
struct Inner {
    entries: Vec<CatalogEntry>,
    next_id: i64,
}

/// In-memory catalog.
///
/// Ids are assigned as `max(existing) + 1` and never reused within one
/// process, even after deletes.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inner: RwLock<Inner>,
}

impl MemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding `entries` in the given order.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        MemoryCatalog {
            inner: RwLock::new(Inner { entries, next_id }),
        }
    }

    /// Creates a catalog from a JSON array of records.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(Self::from_entries(parse_entries(json)?))
    }

    /// Creates a catalog from a JSON seed file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), "Loaded catalog seed file");
        Ok(catalog)
    }

    /// The built-in demo catalog.
    pub fn demo() -> CatalogResult<Self> {
        Self::from_json(DEMO_SEED)
    }

    fn build_entry(id: i64, draft: &EntryDraft) -> CatalogResult<CatalogEntry> {
        draft
            .to_entry(id)
            .ok_or_else(|| CatalogError::invalid_record(id, "category is required"))
    }
}

#[async_trait]
impl ProductCatalog for MemoryCatalog {
    async fn list_products(&self) -> CatalogResult<Vec<CatalogEntry>> {
        let inner = self.inner.read().await;
        debug!(count = inner.entries.len(), "Listing products");
        Ok(inner.entries.clone())
    }

    async fn get_product(&self, id: i64) -> CatalogResult<CatalogEntry> {
        let inner = self.inner.read().await;
        inner
            .entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Product", id))
    }
}

#[async_trait]
impl InventoryRepository for MemoryCatalog {
    async fn list_entries(&self) -> CatalogResult<Vec<CatalogEntry>> {
        let inner = self.inner.read().await;
        Ok(inner.entries.clone())
    }

    async fn insert_entry(&self, draft: &EntryDraft) -> CatalogResult<CatalogEntry> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id.max(1);
        let entry = Self::build_entry(id, draft)?;

        inner.next_id = id + 1;
        inner.entries.push(entry.clone());
        debug!(id, title = %entry.title, "Inserted inventory entry");
        Ok(entry)
    }

    async fn update_entry(&self, id: i64, draft: &EntryDraft) -> CatalogResult<CatalogEntry> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CatalogError::not_found("Inventory entry", id))?;

        let mut entry = Self::build_entry(id, draft)?;
        // The admin dialog has no description field; keep what the record had
        entry.description = slot.description.take();
        *slot = entry.clone();
        debug!(id, "Updated inventory entry");
        Ok(entry)
    }

    async fn delete_entry(&self, id: i64) -> CatalogResult<()> {
        let mut inner = self.inner.write().await;
        let before = inner.entries.len();
        inner.entries.retain(|e| e.id != id);

        if inner.entries.len() == before {
            return Err(CatalogError::not_found("Inventory entry", id));
        }
        debug!(id, "Deleted inventory entry");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
