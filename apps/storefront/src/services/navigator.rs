//! # Navigation
//!
//! Route changes requested by the views. The checkout route can carry a
//! single instant-purchase item that bypasses the cart.
//!
//! ```text
//!   /                ──► /product/{id} ──(buy now)──► /checkout + LineItem
//!   /cart            ──────────────────────────────► /checkout
//!   /checkout        ──(order confirmed)───────────► /thank-you
//!   /admin
//! ```

use std::sync::{Mutex, PoisonError};

use petshop_core::LineItem;
use serde::Serialize;

/// A destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "camelCase")]
pub enum Route {
    Home,
    ProductDetail { id: i64 },
    Cart,
    Checkout { instant: Option<LineItem> },
    ThankYou,
    Admin,
    /// History back.
    Back,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::ProductDetail { id } => format!("/product/{}", id),
            Route::Cart => "/cart".to_string(),
            Route::Checkout { .. } => "/checkout".to_string(),
            Route::ThankYou => "/thank-you".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::Back => "..".to_string(),
        }
    }
}

/// Router seam.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Records requested routes. The shell and tests read them back.
#[derive(Debug, Default)]
pub struct RouteLog {
    routes: Mutex<Vec<Route>>,
}

impl RouteLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent route.
    pub fn current(&self) -> Option<Route> {
        let routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
        routes.last().cloned()
    }

    pub fn history(&self) -> Vec<Route> {
        let routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
        routes.clone()
    }
}

impl Navigator for RouteLog {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = %route.path(), "Navigate");
        let mut routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
        routes.push(route);
    }
}
