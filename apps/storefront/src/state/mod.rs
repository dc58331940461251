//! # State Module
//!
//! Long-lived state shared by the storefront views.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   CartStore      │  │   ListQuery      │  │  StorefrontConfig    │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Arc<watch::     │  │  Debouncer<      │  │  store_name          │  │
//! │  │    Sender<Cart>> │  │    String>       │  │  search_debounce_ms  │  │
//! │  │  one per process │  │  + category      │  │  page_size           │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: clones share one watch channel                           │
//! │  • ListQuery: owned by a single view, no sharing                       │
//! │  • StorefrontConfig: read-only after initialization                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod debounce;
mod query;

pub use cart::CartStore;
pub use config::{ConfigError, StorefrontConfig};
pub use debounce::Debouncer;
pub use query::ListQuery;
