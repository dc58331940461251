//! # Catalog Error Types
//!
//! Errors surfaced by catalog data sources.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductCatalog / InventoryRepository                                   │
//! │         │                                                               │
//! │         ├── unknown id ──────────────► CatalogError::NotFound           │
//! │         ├── backend down / refused ──► CatalogError::Unavailable        │
//! │         ├── bad record in payload ───► CatalogError::InvalidRecord      │
//! │         └── malformed JSON / file ───► Serialization / Io               │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                          storefront ApiError (passed through, no retry) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Catalog data source errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Entry not found.
    ///
    /// ## When This Occurs
    /// - Product detail page opened for an id that does not exist
    /// - Admin update/delete of a record someone else already removed
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: i64 },

    /// The data source could not serve the request.
    ///
    /// Remote sources map transport and server failures here.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// A record could not be turned into a catalog entry.
    #[error("Invalid catalog record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },

    /// Payload or seed file is not valid JSON for the expected shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Seed file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        CatalogError::NotFound {
            entity: entity.into(),
            id,
        }
    }

    /// Creates an InvalidRecord error.
    pub fn invalid_record(id: i64, reason: impl Into<String>) -> Self {
        CatalogError::InvalidRecord {
            id,
            reason: reason.into(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
