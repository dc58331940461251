//! # Checkout
//!
//! The checkout page: customer form, confirmation dialog, order placement.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  /checkout                      /checkout + instant item                │
//! │  (lines = live cart)            (lines = [item], cart untouched)        │
//! │        │                                 │                              │
//! │        └──────────────┬──────────────────┘                              │
//! │                       ▼                                                 │
//! │              submit(form) ── invalid ──► warn notice, stay on form      │
//! │                       │                                                 │
//! │                    valid                                                │
//! │                       ▼                                                 │
//! │              ┌──────────────────┐                                       │
//! │              │ Confirm dialog   │── cancel() ──► back to form           │
//! │              └──────────────────┘                                       │
//! │                       │ confirm()                                       │
//! │                       ▼                                                 │
//! │   success notice, clear cart (cart checkout only), /thank-you,          │
//! │   OrderReceipt                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use petshop_core::cart::total_price;
use petshop_core::validation::validate_checkout;
use petshop_core::{CheckoutForm, CoreError, LineItem, Money};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::context::AppContext;
use crate::error::{ApiError, ApiResult};
use crate::services::{Route, Severity};

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub customer: CheckoutForm,
    pub items: Vec<LineItem>,
    pub total: Money,
}

/// State of the checkout page.
pub struct CheckoutSession {
    ctx: AppContext,
    instant: Option<LineItem>,
    form: CheckoutForm,
    awaiting_confirmation: bool,
}

impl CheckoutSession {
    /// Checkout of the whole cart.
    pub fn from_cart(ctx: AppContext) -> Self {
        Self::from_route(ctx, None)
    }

    /// Checkout of a single "buy now" item.
    pub fn instant(ctx: AppContext, item: LineItem) -> Self {
        Self::from_route(ctx, Some(item))
    }

    /// Builds the session from the payload of [`Route::Checkout`].
    pub fn from_route(ctx: AppContext, instant: Option<LineItem>) -> Self {
        debug!(instant = instant.is_some(), "checkout opened");
        CheckoutSession {
            ctx,
            instant,
            form: CheckoutForm::default(),
            awaiting_confirmation: false,
        }
    }

    pub fn is_instant(&self) -> bool {
        self.instant.is_some()
    }

    /// Lines being bought. A cart checkout reflects the cart as it is now.
    pub fn items(&self) -> Vec<LineItem> {
        match &self.instant {
            Some(item) => vec![item.clone()],
            None => self.ctx.cart.with_cart(|cart| cart.items().to_vec()),
        }
    }

    pub fn total(&self) -> Money {
        total_price(&self.items())
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.awaiting_confirmation
    }

    /// Validates the form and opens the confirmation dialog.
    ///
    /// ## Errors
    /// - `INVALID_STATE` when there is nothing to buy
    /// - `VALIDATION_ERROR` naming the first bad field; a warn notice is raised
    pub fn submit(&mut self, form: CheckoutForm) -> ApiResult<()> {
        debug!("checkout submit");
        self.form = form;

        if self.items().is_empty() {
            return Err(CoreError::EmptyCheckout.into());
        }

        if let Err(e) = validate_checkout(&self.form) {
            warn!(field = e.field(), "Checkout form rejected: {}", e);
            self.ctx
                .notify(Severity::Warn, "Please check the form", e.to_string());
            return Err(ApiError::from(CoreError::from(e)));
        }

        self.awaiting_confirmation = true;
        Ok(())
    }

    /// Closes the confirmation dialog without placing the order.
    pub fn cancel(&mut self) {
        debug!("checkout cancel");
        self.awaiting_confirmation = false;
    }

    /// Places the order.
    pub fn confirm(&mut self) -> ApiResult<OrderReceipt> {
        if !self.awaiting_confirmation {
            return Err(ApiError::invalid_state("Order has not been submitted"));
        }

        let items = self.items();
        if items.is_empty() {
            self.awaiting_confirmation = false;
            return Err(CoreError::EmptyCheckout.into());
        }

        let receipt = OrderReceipt {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            customer: self.form.clone(),
            total: total_price(&items),
            items,
        };
        self.awaiting_confirmation = false;

        if !self.is_instant() {
            self.ctx.cart.clear();
        }

        info!(
            order_id = %receipt.order_id,
            lines = receipt.items.len(),
            total = %receipt.total,
            "Order placed"
        );
        self.ctx.notify(
            Severity::Success,
            "Order placed",
            format!("Thank you for shopping at {}", self.ctx.config.store_name),
        );
        self.ctx.navigate(Route::ThankYou);

        Ok(receipt)
    }
}
