//! # Commands Module
//!
//! Everything a page can ask the backend to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── cart.rs      ◄─── Cart page, add-to-cart buttons
//! ├── product.rs   ◄─── Home grid, product detail, buy now
//! ├── checkout.rs  ◄─── Checkout form, confirmation, receipt
//! └── admin.rs     ◄─── Inventory table, add/edit dialog, delete
//! ```
//!
//! Free functions take the [`AppContext`](crate::context::AppContext) they
//! need; pages with their own state (search box, dialog, confirmation) are
//! structs holding a clone of it.

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod product;

pub use admin::AdminDashboard;
pub use cart::CartResponse;
pub use checkout::{CheckoutSession, OrderReceipt};
pub use product::{HomeView, ProductDetailView};
