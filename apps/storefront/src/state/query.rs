//! # List Query State
//!
//! The search box and category dropdown of one filtered view. The search
//! term goes through a [`Debouncer`]; the category applies at once.

use std::time::Duration;

use petshop_core::{filter_entries, CatalogEntry, CategoryFilter, QueryState};
use tokio::sync::watch;
use tracing::debug;

use super::debounce::Debouncer;

/// Inputs of a storefront grid or the admin table.
#[derive(Debug)]
pub struct ListQuery {
    search: Debouncer<String>,
    category: CategoryFilter,
}

impl ListQuery {
    /// Creates an unfiltered query with the given search window.
    pub fn new(debounce: Duration) -> Self {
        ListQuery {
            search: Debouncer::new(String::new(), debounce),
            category: CategoryFilter::All,
        }
    }

    /// Records a keystroke in the search box.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        debug!(term = %term, "Search input");
        self.search.push(term);
    }

    /// Changes the category dropdown. Takes effect immediately.
    pub fn set_category(&mut self, filter: impl Into<CategoryFilter>) {
        self.category = filter.into();
        debug!(category = %self.category, "Category filter");
    }

    /// What is typed in the search box right now.
    pub fn search_input(&self) -> &str {
        self.search.input()
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// The query currently in effect: settled term plus current category.
    pub fn state(&self) -> QueryState {
        QueryState {
            search_term: self.search.current(),
            category: self.category,
        }
    }

    /// Filters `entries` with the query in effect.
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        filter_entries(entries, &self.state())
    }

    /// Subscribes to settled search terms.
    pub fn subscribe_search(&self) -> watch::Receiver<String> {
        self.search.subscribe()
    }

    /// Whether a search keystroke is still inside its window.
    pub fn is_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Applies the typed term without waiting.
    pub fn flush(&mut self) {
        self.search.flush();
    }

    /// Waits until the typed term has been applied.
    pub async fn settled(&mut self) {
        self.search.settled().await;
    }
}
