//! # Application Context
//!
//! Handles every view needs: data sources, the shared cart, and the
//! outbound seams. Cloning is cheap; all clones share the same cart.

use std::sync::Arc;

use petshop_catalog::{InventoryRepository, MemoryCatalog, ProductCatalog};

use crate::services::{Navigator, Notice, Notifier, Route, Severity};
use crate::state::{CartStore, StorefrontConfig};

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<StorefrontConfig>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub inventory: Arc<dyn InventoryRepository>,
    pub cart: CartStore,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

impl AppContext {
    pub fn new(
        config: StorefrontConfig,
        catalog: Arc<dyn ProductCatalog>,
        inventory: Arc<dyn InventoryRepository>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        AppContext {
            config: Arc::new(config),
            catalog,
            inventory,
            cart: CartStore::new(),
            notifier,
            navigator,
        }
    }

    /// Storefront and admin panel backed by one in-memory catalog.
    pub fn with_memory_catalog(
        config: StorefrontConfig,
        catalog: Arc<MemoryCatalog>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let inventory: Arc<dyn InventoryRepository> = catalog.clone();
        Self::new(config, catalog, inventory, notifier, navigator)
    }

    /// Raises a notice with the configured lifetime.
    pub fn notify(&self, severity: Severity, summary: &str, detail: impl Into<String>) {
        let notice =
            Notice::new(severity, summary, detail).with_life(self.config.notice_lifetime_ms);
        self.notifier.notify(notice);
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    /// Formats an amount for display.
    pub fn price(&self, amount: petshop_core::Money) -> String {
        self.config.format_currency(amount)
    }
}
