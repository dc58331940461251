//! # Petshop Storefront Library
//!
//! Application layer of the petshop: the pages, the shared cart, search
//! debouncing, checkout, and the admin inventory dashboard.
//!
//! ## Module Organization
//! ```text
//! petshop_storefront/
//! ├── lib.rs          ◄─── You are here (tracing setup & shell loop)
//! ├── context.rs      ◄─── AppContext: data sources + cart + seams
//! ├── state/
//! │   ├── cart.rs     ◄─── CartStore (one cart, watch subscribers)
//! │   ├── debounce.rs ◄─── Debouncer (cancellable delayed publish)
//! │   ├── query.rs    ◄─── ListQuery (debounced search + category)
//! │   └── config.rs   ◄─── StorefrontConfig
//! ├── services/
//! │   ├── notifier.rs ◄─── Notices (toasts)
//! │   └── navigator.rs◄─── Routes
//! ├── commands/
//! │   ├── cart.rs     ◄─── Cart page
//! │   ├── product.rs  ◄─── Home grid, product detail
//! │   ├── checkout.rs ◄─── Checkout form and order placement
//! │   └── admin.rs    ◄─── Inventory dashboard
//! ├── shell.rs        ◄─── Line-oriented driver
//! └── error.rs        ◄─── ApiError for pages, StartupError for the binary
//! ```

pub mod commands;
pub mod context;
pub mod error;
pub mod services;
pub mod shell;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;
use std::sync::Arc;

use petshop_catalog::MemoryCatalog;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::StartupError;
use shell::{Outcome, Shell};
use state::StorefrontConfig;

/// Runs the shell on stdin/stdout until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info, petshop crates at debug; RUST_LOG overrides        │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → PETSHOP_CONFIG toml file → PETSHOP_* variables         │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • seed_path JSON file, or the built-in demo catalog                 │
/// │                                                                         │
/// │  4. Start Shell ──────────────────────────────────────────────────────► │
/// │     • load home grid and admin table, print banner, read lines          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), StartupError> {
    init_tracing();

    let config_path = std::env::var_os("PETSHOP_CONFIG").map(PathBuf::from);
    let config = StorefrontConfig::load(config_path.as_deref())?;
    info!(store = %config.store_name, "Starting petshop storefront");

    let catalog = match &config.seed_path {
        Some(path) => MemoryCatalog::from_json_file(path)?,
        None => MemoryCatalog::demo()?,
    };

    let mut shell = Shell::new(config, Arc::new(catalog));
    let banner = shell.start().await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{}\n", banner).as_bytes()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match shell.execute(&line).await {
            Outcome::Reply(text) if text.is_empty() => {}
            Outcome::Reply(text) => {
                stdout.write_all(format!("{}\n", text).as_bytes()).await?;
            }
            Outcome::Quit => break,
        }
        stdout.flush().await?;
    }

    info!("Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=petshop_storefront=trace` - Trace the app layer only
/// - Default: INFO, DEBUG for petshop crates
///
/// Logs go to stderr so they don't interleave with shell replies.
fn init_tracing() {
    // Directive targets are prefixes: `petshop` covers every petshop_* crate
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,petshop=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
