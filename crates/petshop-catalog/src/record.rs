//! # Wire Records
//!
//! The JSON shape catalog backends speak, and its conversion to
//! [`CatalogEntry`].
//!
//! ```text
//! storefront product          admin pet record
//! ──────────────────          ────────────────
//! { "id": 2,                  { "id": 9,
//!   "title": "Dog Chew Toy",    "name": "Beagle",
//!   "price": 9.99,              "price": 250,
//!   "image": "...",             "image": "data:image/png;base64,...",
//!   "category": "dog" }         "category": "dog" }
//!            │                            │
//!            └──────────┬─────────────────┘
//!                       ▼
//!             CatalogEntry { price: Money(999), category: Dog, .. }
//! ```
//!
//! Decimal prices are converted to cents here, once.

use petshop_core::{CatalogEntry, Category, Money};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// A catalog record as found in JSON payloads and seed files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: i64,

    #[serde(alias = "name")]
    pub title: String,

    /// Decimal price in major units (e.g. `9.99`).
    pub price: f64,

    #[serde(default)]
    pub image: String,

    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TryFrom<CatalogRecord> for CatalogEntry {
    type Error = CatalogError;

    fn try_from(record: CatalogRecord) -> CatalogResult<Self> {
        let price = Money::from_decimal(record.price)
            .filter(|p| !p.is_negative())
            .ok_or_else(|| {
                CatalogError::invalid_record(record.id, format!("bad price {}", record.price))
            })?;

        let category = record.category.parse::<Category>().map_err(|_| {
            CatalogError::invalid_record(
                record.id,
                format!("unknown category '{}'", record.category),
            )
        })?;

        Ok(CatalogEntry {
            id: record.id,
            title: record.title,
            price,
            image: record.image,
            category,
            description: record.description,
        })
    }
}

impl From<&CatalogEntry> for CatalogRecord {
    fn from(entry: &CatalogEntry) -> Self {
        CatalogRecord {
            id: entry.id,
            title: entry.title.clone(),
            price: entry.price.as_decimal(),
            image: entry.image.clone(),
            category: entry.category.as_str().to_string(),
            description: entry.description.clone(),
        }
    }
}

/// Parses a JSON array of records into catalog entries.
///
/// The first invalid record fails the whole payload.
pub fn parse_entries(json: &str) -> CatalogResult<Vec<CatalogEntry>> {
    let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
    records.into_iter().map(CatalogEntry::try_from).collect()
}
