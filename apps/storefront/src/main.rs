//! # Petshop Shell Entry Point
//!
//! Reads storefront commands from stdin. The actual setup is in lib.rs.
//!
//! ```text
//! $ PETSHOP_SEARCH_DEBOUNCE_MS=0 petshop
//! Petshop: 8 products. Type `help` for commands.
//! search dog
//!   2  Dog Chew Toy                 dog    $9.99
//!   8  Orthopedic Dog Bed           dog    $59.00
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match petshop_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("petshop: {}", e);
            ExitCode::FAILURE
        }
    }
}
