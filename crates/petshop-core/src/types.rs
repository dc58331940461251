//! # Domain Types
//!
//! Core domain types shared by the storefront and the admin panel.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogEntry   │   │    LineItem     │   │   EntryDraft    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │──►│  id (i64)       │   │  id (Option)    │       │
//! │  │  title          │   │  title          │   │  title          │       │
//! │  │  price          │   │  unit_price     │   │  price          │       │
//! │  │  image          │   │  image          │   │  image          │       │
//! │  │  category       │   │  quantity (>=1) │   │  category (Opt) │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    Category     │   closed set: dog | cat | bird | other             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Catalog entries are keyed by the integer id assigned by the data source.
//! A line item carries the same id, which is how the cart aggregates
//! repeated adds of one product.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The closed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dog,
    Cat,
    Bird,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [Category::Dog, Category::Cat, Category::Bird, Category::Other];

    /// Wire label (`"dog"`, `"cat"`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Dog => "dog",
            Category::Cat => "cat",
            Category::Bird => "bird",
            Category::Other => "other",
        }
    }

    /// Human-readable label for dropdowns.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Dog => "Dog",
            Category::Cat => "Cat",
            Category::Bird => "Bird",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses a wire label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// A sellable or manageable item as known to the data source.
///
/// Storefront products call the display field `title`; the admin pet records
/// call it `name`. Both deserialize into `title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogEntry {
    pub id: i64,

    #[serde(alias = "name")]
    pub title: String,

    pub price: Money,

    pub image: String,

    pub category: Category,

    /// Long description, shown on the product detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Line Item
// =============================================================================

/// One catalog entry plus a quantity, inside a cart or a checkout.
///
/// ## Snapshot Pattern
/// Title, price and image are copied from the entry when it is first added.
/// Adding the same id again only bumps the quantity; the stored snapshot is
/// never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: i64,
    pub title: String,
    pub unit_price: Money,
    pub image: String,
    /// Always >= 1.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item with quantity 1 from a catalog entry.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        LineItem {
            id: entry.id,
            title: entry.title.clone(),
            unit_price: entry.price,
            image: entry.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Entry Draft
// =============================================================================

/// The admin add/edit dialog's working copy of an inventory entry.
///
/// `id` is `None` while adding and `Some` while editing an existing record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EntryDraft {
    pub id: Option<i64>,
    pub title: String,
    pub price: Money,
    pub image: String,
    pub category: Option<Category>,
}

impl EntryDraft {
    /// Starts an edit of an existing entry.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        EntryDraft {
            id: Some(entry.id),
            title: entry.title.clone(),
            price: entry.price,
            image: entry.image.clone(),
            category: Some(entry.category),
        }
    }

    /// Builds the entry to store under `id`.
    ///
    /// Returns `None` while no category has been chosen; callers validate the
    /// draft first (see [`crate::validation::validate_entry_draft`]).
    pub fn to_entry(&self, id: i64) -> Option<CatalogEntry> {
        Some(CatalogEntry {
            id,
            title: self.title.trim().to_string(),
            price: self.price,
            image: self.image.trim().to_string(),
            category: self.category?,
            description: None,
        })
    }
}

// =============================================================================
// Checkout Form
// =============================================================================

/// Customer details entered on the checkout page.
///
/// Empty strings mean "not filled in"; email is the only optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
