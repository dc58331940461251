//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Where Errors Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  View / Command                                                         │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ├── Catalog failure?   CatalogError ─────────┐                  │
//! │         │                                            ▼                  │
//! │         ├── Form rejected?     ValidationError ──► ApiError ──► UI      │
//! │         │                                            ▲                  │
//! │         ├── Nothing to buy?    CoreError ────────────┘                  │
//! │         │                                                               │
//! │         └── Success ─────────────────────────────────────────────► UI   │
//! │                                                                         │
//! │  Cart mutations never fail: unknown ids are no-ops.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The frontend receives both a machine-readable `code` and a
//! human-readable `message`.

use petshop_catalog::CatalogError;
use petshop_core::CoreError;
use serde::Serialize;

/// Error returned from storefront commands.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 12"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Stable code the page can branch on
    pub code: ErrorCode,

    /// Text shown in the notice
    pub message: String,
}

/// What kind of failure a command hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product or inventory id (404)
    NotFound,

    /// Form input rejected (400)
    ValidationError,

    /// Catalog backend failed or returned garbage (502)
    CatalogUnavailable,

    /// Operation not allowed in the current state (409)
    InvalidState,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// `"<resource> not found: <id>"`
    pub fn not_found(resource: &str, id: i64) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidState, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Backend failures surface as `CATALOG_UNAVAILABLE`; the detail goes to the log.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            CatalogError::Unavailable(reason) => {
                tracing::error!("Catalog unavailable: {}", reason);
                ApiError::new(ErrorCode::CatalogUnavailable, format!("Catalog unavailable: {}", reason))
            }
            CatalogError::InvalidRecord { id, reason } => {
                tracing::error!(id, "Invalid catalog record: {}", reason);
                ApiError::new(
                    ErrorCode::CatalogUnavailable,
                    format!("Catalog returned an invalid record ({})", id),
                )
            }
            CatalogError::Serialization(e) => {
                tracing::error!("Catalog payload could not be decoded: {}", e);
                ApiError::new(ErrorCode::CatalogUnavailable, "Catalog returned malformed data")
            }
            CatalogError::Io(e) => {
                tracing::error!("Catalog I/O failed: {}", e);
                ApiError::internal("Catalog could not be read")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCheckout => ApiError::invalid_state("Nothing to check out"),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for storefront commands.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures that stop the shell from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] crate::state::ConfigError),

    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to start storefront: {0}")]
    Api(#[from] ApiError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
