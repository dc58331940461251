//! # Cart Store
//!
//! The single shared cart for the whole storefront.
//!
//! ## Ownership
//! There is exactly one `Cart` per process. Every view gets a cloned
//! [`CartStore`] handle pointing at the same cart; nothing holds a private
//! copy that could drift.
//!
//! ## Change Notification
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  View Action            CartStore              Subscribers              │
//! │  ───────────            ─────────              ───────────              │
//! │                                                                         │
//! │  Add to cart ──────────► add_item() ─────┐                              │
//! │  + / - buttons ────────► inc / dec ──────┤                              │
//! │  Remove ───────────────► remove_item() ──┼─► send_if_modified ─► rx 1   │
//! │  Order placed ─────────► clear() ────────┘    (changed?)       ─► rx 2  │
//! │                                                                 ─► ...  │
//! │  Navbar / cart page ───► snapshot() / summary()  (read only)            │
//! │                                                                         │
//! │  The mutation runs under the channel's write lock and the version bump │
//! │  happens in the same call, so no subscriber can observe a half-applied │
//! │  change. Mutations that change nothing do not notify.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use petshop_core::{Cart, CartSummary, CatalogEntry};
use tokio::sync::watch;
use tracing::debug;

/// Cloneable handle to the shared cart.
///
/// Clones share one cart; there is no way to construct a second cart from a
/// handle. Subscribers receive [`Cart`] snapshots through a
/// [`watch::Receiver`].
#[derive(Debug, Clone)]
pub struct CartStore {
    tx: Arc<watch::Sender<Cart>>,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Cart::new());
        CartStore { tx: Arc::new(tx) }
    }

    /// Subscribes to cart changes.
    ///
    /// The receiver starts with the current cart marked as seen; the next
    /// `changed().await` resolves on the next effective mutation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.tx.subscribe()
    }

    /// Clones the current cart.
    pub fn snapshot(&self) -> Cart {
        self.tx.borrow().clone()
    }

    /// Totals for the navbar preview and cart page.
    pub fn summary(&self) -> CartSummary {
        self.with_cart(|cart| CartSummary::from(cart))
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store.with_cart(|cart| cart.total_item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.tx.borrow();
        f(&cart)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `entry`. Returns `true` (adding always changes state).
    pub fn add_item(&self, entry: &CatalogEntry) -> bool {
        self.mutate("add_item", entry.id, |cart| cart.add_item(entry))
    }

    /// Removes the line with `id`. Returns `false` if it was not in the cart.
    pub fn remove_item(&self, id: i64) -> bool {
        self.mutate("remove_item", id, |cart| cart.remove_item(id))
    }

    /// Adds one to the quantity of `id`.
    pub fn increase_quantity(&self, id: i64) -> bool {
        self.mutate("increase_quantity", id, |cart| cart.increase_quantity(id))
    }

    /// Subtracts one from the quantity of `id`, stopping at 1.
    pub fn decrease_quantity(&self, id: i64) -> bool {
        self.mutate("decrease_quantity", id, |cart| cart.decrease_quantity(id))
    }

    /// Empties the cart.
    pub fn clear(&self) -> bool {
        let changed = self.tx.send_if_modified(Cart::clear);
        debug!(changed, "Cart cleared");
        changed
    }

    fn mutate<F>(&self, op: &'static str, id: i64, f: F) -> bool
    where
        F: FnOnce(&mut Cart) -> bool,
    {
        let changed = self.tx.send_if_modified(f);
        debug!(op, id, changed, "Cart mutation");
        changed
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petshop_core::{Category, Money};

    fn entry(id: i64, cents: i64) -> CatalogEntry {
        CatalogEntry {
            id,
            title: format!("Item {}", id),
            price: Money::from_cents(cents),
            image: format!("{}.png", id),
            category: Category::Dog,
            description: None,
        }
    }

    #[test]
    fn test_clones_share_one_cart() {
        let navbar = CartStore::new();
        let detail_page = navbar.clone();

        detail_page.add_item(&entry(1, 1000));
        detail_page.add_item(&entry(1, 1000));

        assert_eq!(navbar.summary().total_item_count, 2);
        assert_eq!(navbar.summary().total_price, Money::from_cents(2000));
    }

    #[test]
    fn test_subscriber_sees_effective_mutations_only() {
        let store = CartStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.add_item(&entry(1, 500));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().total_item_count(), 1);

        // Already at 1: floor, no notification
        assert!(!store.decrease_quantity(1));
        assert!(!rx.has_changed().unwrap());

        // Unknown id: no-op
        assert!(!store.remove_item(42));
        assert!(!store.increase_quantity(42));
        assert!(!rx.has_changed().unwrap());

        assert!(store.increase_quantity(1));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().get(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_clear_empty_cart_does_not_notify() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        assert!(!store.clear());
        assert!(!rx.has_changed().unwrap());

        store.add_item(&entry(2, 300));
        rx.borrow_and_update();
        assert!(store.clear());
        assert!(rx.has_changed().unwrap());
        assert_eq!(store.summary().total_price, Money::zero());
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_change() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        let writer = store.clone();
        let handle = tokio::spawn(async move {
            writer.add_item(&entry(3, 250));
        });

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().line_count(), 1);
        handle.await.unwrap();
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = CartStore::new();
        store.add_item(&entry(1, 100));
        let before = store.snapshot();

        store.add_item(&entry(2, 100));
        assert_eq!(before.line_count(), 1);
        assert_eq!(store.snapshot().line_count(), 2);
    }
}
