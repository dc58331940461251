//! # List Query Engine
//!
//! Turns a raw catalog plus the user's search box and category dropdown into
//! the list that is actually shown. The storefront grid and the admin table
//! run exactly the same rule.
//!
//! ## Matching Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  entry is shown  ⇔  category matches  AND  search matches               │
//! │                                                                         │
//! │  category matches:  filter == All  OR  entry.category == filter         │
//! │  search matches:    lowercase(title) contains lowercase(term)           │
//! │                     (empty term matches everything, no trimming)        │
//! │                                                                         │
//! │  Output keeps the relative order of the input.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Debouncing of the search term is a timing concern and lives in the app
//! layer; this module only ever sees the term that is currently in effect.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::{CatalogEntry, Category};

// =============================================================================
// Category Filter
// =============================================================================

/// Single-select category constraint: everything, or one label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    /// No constraint. Also what an unset dropdown means.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Label of the "no filter" sentinel.
    pub const ALL_LABEL: &'static str = "all";

    /// Whether `category` passes this filter.
    #[inline]
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    /// `"all"` and `""` mean no filter; anything else must be a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.pad(Self::ALL_LABEL),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

// =============================================================================
// Query State
// =============================================================================

/// The inputs of one filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    pub search_term: String,
    pub category: CategoryFilter,
}

impl QueryState {
    pub fn new(search_term: impl Into<String>, category: impl Into<CategoryFilter>) -> Self {
        QueryState {
            search_term: search_term.into(),
            category: category.into(),
        }
    }

    /// Whether a single entry is part of the view.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.category.accepts(entry.category)
            && title_contains(&entry.title, &self.search_term)
    }

    /// Shorthand for [`filter_entries`].
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        filter_entries(entries, self)
    }
}

/// Case-insensitive substring test. The term is used as typed.
fn title_contains(title: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&term.to_lowercase())
}

/// Produces the filtered view, preserving the input order.
///
/// ## Example
/// ```rust
/// use petshop_core::query::{filter_entries, CategoryFilter, QueryState};
/// # use petshop_core::{CatalogEntry, Category, Money};
/// # let entry = |id, title: &str| CatalogEntry {
/// #     id, title: title.to_string(), price: Money::zero(),
/// #     image: String::new(), category: Category::Dog, description: None,
/// # };
/// let entries = vec![entry(1, "Dog Toy"), entry(2, "Cat Food"), entry(3, "dog bed")];
/// let query = QueryState::new("dog", CategoryFilter::All);
///
/// let titles: Vec<_> = filter_entries(&entries, &query)
///     .into_iter()
///     .map(|e| e.title.as_str())
///     .collect();
/// assert_eq!(titles, ["Dog Toy", "dog bed"]);
/// ```
pub fn filter_entries<'a>(entries: &'a [CatalogEntry], query: &QueryState) -> Vec<&'a CatalogEntry> {
    entries.iter().filter(|e| query.matches(e)).collect()
}

// =============================================================================
// Pagination
// =============================================================================

/// One page of a filtered view (the admin table shows 5 rows at a time).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based, already clamped to the last page.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }
}

/// Slices `items` into the requested page.
///
/// Out-of-range pages clamp to the last one, so a page index that was valid
/// before a delete or a narrower search still shows rows. An empty input has
/// zero pages and an empty page 0. `per_page` of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.min(total_pages.saturating_sub(1));

    let start = page * per_page;
    let end = (start + per_page).min(total_items);
    let slice = if start < end { &items[start..end] } else { &[] };

    Page {
        items: slice.to_vec(),
        page,
        per_page,
        total_items,
        total_pages,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
