//! # Cart Commands
//!
//! Cart page and "add to cart" buttons.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │                   add_to_cart                       cart cleared        │
//! │                   increase / decrease               (checkout.rs)       │
//! │                   remove_from_cart                        │             │
//! │                        │                                  ▼             │
//! │                   clear_cart ─────────────────────► (back to empty)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use petshop_core::{Cart, CartSummary, LineItem};
use serde::Serialize;
use tracing::debug;

use crate::context::AppContext;
use crate::error::ApiResult;
use crate::services::{Route, Severity};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub summary: CartSummary,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            summary: cart.summary(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(ctx: &AppContext) -> CartResponse {
    debug!("get_cart command");
    ctx.cart.with_cart(|cart| CartResponse::from(cart))
}

/// Looks up a product and adds one unit of it.
///
/// ## Behavior
/// - Already in cart: quantity + 1, the stored title and price are kept
/// - Not in cart: appended with quantity 1
/// - Unknown product: `NOT_FOUND`, cart untouched
pub async fn add_to_cart(ctx: &AppContext, product_id: i64) -> ApiResult<CartResponse> {
    debug!(product_id, "add_to_cart command");

    let product = ctx.catalog.get_product(product_id).await?;
    ctx.cart.add_item(&product);
    ctx.notify(Severity::Success, "Added to cart", product.title.as_str());

    Ok(get_cart(ctx))
}

pub fn increase_quantity(ctx: &AppContext, product_id: i64) -> CartResponse {
    debug!(product_id, "increase_quantity command");
    ctx.cart.increase_quantity(product_id);
    get_cart(ctx)
}

/// Never drops below 1; use [`remove_from_cart`] to delete a line.
pub fn decrease_quantity(ctx: &AppContext, product_id: i64) -> CartResponse {
    debug!(product_id, "decrease_quantity command");
    ctx.cart.decrease_quantity(product_id);
    get_cart(ctx)
}

/// Removes a line and raises an info notice naming it.
///
/// Unknown ids are a silent no-op.
pub fn remove_from_cart(ctx: &AppContext, product_id: i64) -> CartResponse {
    debug!(product_id, "remove_from_cart command");

    let title = ctx
        .cart
        .with_cart(|cart| cart.get(product_id).map(|item| item.title.clone()));

    if let Some(title) = title {
        if ctx.cart.remove_item(product_id) {
            ctx.notify(Severity::Info, "Removed", format!("{} removed from cart", title));
        }
    }

    get_cart(ctx)
}

pub fn clear_cart(ctx: &AppContext) -> CartResponse {
    debug!("clear_cart command");
    ctx.cart.clear();
    get_cart(ctx)
}

/// Leaves the cart page for checkout.
pub fn go_to_checkout(ctx: &AppContext) {
    debug!("go_to_checkout command");
    ctx.navigate(Route::Checkout { instant: None });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::testing::TestApp;
    use petshop_core::Money;

    #[tokio::test]
    async fn test_add_to_cart_twice() {
        let app = TestApp::demo();

        add_to_cart(&app.ctx, 2).await.unwrap();
        let cart = add_to_cart(&app.ctx, 2).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.summary.total_price, Money::from_cents(1998));

        let notices = app.notices.take();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].severity, Severity::Success);
        assert_eq!(notices[0].detail, "Dog Chew Toy");
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let app = TestApp::demo();

        let err = add_to_cart(&app.ctx, 999).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&app.ctx).items.is_empty());
        assert!(app.notices.take().is_empty());
    }

    #[tokio::test]
    async fn test_quantity_buttons() {
        let app = TestApp::demo();
        add_to_cart(&app.ctx, 5).await.unwrap();

        assert_eq!(increase_quantity(&app.ctx, 5).items[0].quantity, 2);
        assert_eq!(decrease_quantity(&app.ctx, 5).items[0].quantity, 1);
        // Floor at 1
        assert_eq!(decrease_quantity(&app.ctx, 5).items[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_remove_notifies_only_when_removed() {
        let app = TestApp::demo();
        add_to_cart(&app.ctx, 2).await.unwrap();
        app.notices.take();

        let cart = remove_from_cart(&app.ctx, 2);
        assert!(cart.items.is_empty());
        let notice = app.notices.last().unwrap();
        assert_eq!(notice.severity, Severity::Info);
        assert_eq!(notice.detail, "Dog Chew Toy removed from cart");

        app.notices.take();
        remove_from_cart(&app.ctx, 2);
        assert!(app.notices.take().is_empty());
    }

    #[tokio::test]
    async fn test_go_to_checkout_navigates() {
        let app = TestApp::demo();
        go_to_checkout(&app.ctx);
        assert_eq!(app.routes.current(), Some(Route::Checkout { instant: None }));
    }

    #[tokio::test]
    async fn test_clear_cart() {
        let app = TestApp::demo();
        add_to_cart(&app.ctx, 1).await.unwrap();
        add_to_cart(&app.ctx, 2).await.unwrap();

        let cart = clear_cart(&app.ctx);
        assert!(cart.items.is_empty());
        assert_eq!(cart.summary.total_item_count, 0);
        assert_eq!(cart.summary.total_price, Money::zero());
    }
}
