//! # Cart
//!
//! The shopping cart and the values derived from it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Operation                State Change         │
//! │  ───────────              ─────────                ────────────         │
//! │                                                                         │
//! │  Add to cart ────────────► add_item(entry) ──────► qty += 1 or push     │
//! │                                                                         │
//! │  Click "+" ──────────────► increase_quantity(id) ► qty += 1             │
//! │                                                                         │
//! │  Click "-" ──────────────► decrease_quantity(id) ► qty -= 1 (min 1)     │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item(id) ──────► items.remove(i)      │
//! │                                                                         │
//! │  Order placed ───────────► clear() ──────────────► items.clear()        │
//! │                                                                         │
//! │  Navbar / Cart / Checkout ► summary() ───────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line item per id; repeated adds bump the quantity
//! - Quantity never drops below 1: "-" at 1 does nothing
//! - `remove_item` is the ONLY way a line disappears (besides `clear`)
//! - Unknown ids are silently ignored by every mutation
//!
//! Every mutation returns `true` when it changed the cart, so the store
//! layer can skip notifying subscribers on no-ops.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CatalogEntry, LineItem};

/// The shopping cart: line items in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up the line item for `id`.
    pub fn get(&self, id: i64) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Adds one unit of `entry`.
    ///
    /// ## Behavior
    /// - Already in cart: quantity + 1, the stored title/price/image are kept
    /// - Not in cart: appended with quantity 1
    pub fn add_item(&mut self, entry: &CatalogEntry) -> bool {
        if let Some(item) = self.get_mut(entry.id) {
            item.quantity = item.quantity.saturating_add(1);
            return true;
        }

        self.items.push(LineItem::from_entry(entry));
        true
    }

    /// Removes the line for `id`, if any.
    pub fn remove_item(&mut self, id: i64) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != initial_len
    }

    /// Adds one to the quantity of `id`.
    pub fn increase_quantity(&mut self, id: i64) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Subtracts one from the quantity of `id`, stopping at 1.
    ///
    /// A line at quantity 1 is left alone; it is never removed here.
    pub fn decrease_quantity(&mut self, id: i64) -> bool {
        match self.get_mut(id) {
            Some(item) if item.quantity > 1 => {
                item.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> bool {
        let was_empty = self.items.is_empty();
        self.items.clear();
        !was_empty
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities (the navbar badge).
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }

    /// Sum of unit price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        total_price(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Derived totals for display.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }
}

/// Sum of line totals for any list of line items.
///
/// Shared by the cart and by checkouts that bypass it ("buy now").
pub fn total_price(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::line_total).sum()
}

/// Cart totals for the navbar preview, cart page and checkout summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub line_count: usize,
    pub total_item_count: u64,
    pub total_price: Money,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            line_count: cart.line_count(),
            total_item_count: cart.total_item_count(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn entry(id: i64, price_cents: i64) -> CatalogEntry {
        CatalogEntry {
            id,
            title: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            image: format!("{}.png", id),
            category: Category::Dog,
            description: None,
        }
    }

    #[test]
    fn test_add_same_id_aggregates() {
        let mut cart = Cart::new();
        let product = entry(1, 999);

        for _ in 0..5 {
            assert!(cart.add_item(&product));
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_item_count(), 5);
        assert_eq!(cart.get(1).unwrap().quantity, 5);
    }

    #[test]
    fn test_add_existing_keeps_snapshot() {
        let mut cart = Cart::new();
        cart.add_item(&entry(1, 1000));

        let mut changed = entry(1, 1);
        changed.title = "Renamed".to_string();
        changed.image = "other.png".to_string();
        cart.add_item(&changed);

        let item = cart.get(1).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.title, "Product 1");
        assert_eq!(item.unit_price, Money::from_cents(1000));
        assert_eq!(item.image, "1.png");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(&entry(3, 100));
        cart.add_item(&entry(1, 100));
        cart.add_item(&entry(2, 100));
        cart.add_item(&entry(3, 100));

        let ids: Vec<i64> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_decrease_stops_at_one() {
        let mut cart = Cart::new();
        cart.add_item(&entry(1, 500));
        cart.add_item(&entry(1, 500));

        assert!(cart.decrease_quantity(1));
        assert_eq!(cart.get(1).unwrap().quantity, 1);

        assert!(!cart.decrease_quantity(1));
        assert!(!cart.decrease_quantity(1));
        assert_eq!(cart.get(1).unwrap().quantity, 1);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut cart = Cart::new();
        cart.add_item(&entry(1, 500));
        let before = cart.clone();

        assert!(!cart.remove_item(99));
        assert!(!cart.increase_quantity(99));
        assert!(!cart.decrease_quantity(99));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_then_adjust_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&entry(1, 500));
        cart.add_item(&entry(2, 300));

        assert!(cart.remove_item(1));
        assert!(!cart.increase_quantity(1));
        assert!(!cart.decrease_quantity(1));
        assert!(cart.get(1).is_none());
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_increase_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&entry(1, 250));
        assert!(cart.increase_quantity(1));
        assert!(cart.increase_quantity(1));
        assert_eq!(cart.get(1).unwrap().quantity, 3);
        assert_eq!(cart.total_price().cents(), 750);
    }

    #[test]
    fn test_clear_zeroes_totals() {
        let mut cart = Cart::new();
        cart.add_item(&entry(1, 999));
        cart.add_item(&entry(2, 1));
        cart.increase_quantity(2);

        assert!(cart.clear());
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert!(cart.total_price().is_zero());

        // Clearing an empty cart changes nothing
        assert!(!cart.clear());
    }

    #[test]
    fn test_add_twice_totals_twenty() {
        let mut cart = Cart::new();
        cart.add_item(&entry(1, 1000));
        cart.add_item(&entry(1, 1000));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 2);
        assert_eq!(cart.total_price().to_string(), "$20.00");
    }

    #[test]
    fn test_mixed_cart_summary() {
        let mut cart = Cart::new();
        cart.add_item(&entry(1, 500));
        cart.add_item(&entry(1, 500));
        cart.add_item(&entry(2, 300));

        let summary = cart.summary();
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.total_item_count, 3);
        assert_eq!(summary.total_price, Money::from_cents(1300));
        assert_eq!(summary.total_price.to_string(), "$13.00");
    }
}
