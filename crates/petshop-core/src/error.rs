//! # Error Types
//!
//! Domain-specific error types for petshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  petshop-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Form input failures                             │
//! │                                                                         │
//! │  petshop-catalog errors (separate crate)                                │
//! │  └── CatalogError     - Data source failures                            │
//! │                                                                         │
//! │  storefront errors (in app)                                             │
//! │  └── ApiError         - What the frontend sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations never produce errors: unknown ids are no-ops.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by storefront rules.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted with nothing to buy.
    #[error("Nothing to check out")]
    EmptyCheckout,

    /// A form was rejected; see the wrapped field error.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form validation errors.
///
/// These block progression locally (checkout, admin edit dialog) and are
/// shown to the user as a warning notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field was left blank (whitespace counts as blank).
    #[error("{field} is required")]
    Required { field: String },

    /// Text exceeds the field's character limit.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A count (phone digits, for one) falls outside `min..=max`.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Zero or negative where only a positive amount makes sense (price).
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Text has the wrong shape, such as an email without a domain.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Choice outside the offered options (category picker).
    #[error("{field} must be one of: {}", allowed.join(", "))]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Name of the offending form field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result alias used across petshop-core.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_checkout_message() {
        assert_eq!(CoreError::EmptyCheckout.to_string(), "Nothing to check out");
    }

    #[test]
    fn test_field_errors_name_their_field() {
        let blank = ValidationError::Required {
            field: "name".into(),
        };
        assert_eq!(blank.to_string(), "name is required");
        assert_eq!(blank.field(), "name");

        let digits = ValidationError::OutOfRange {
            field: "phone digits".into(),
            min: 9,
            max: 11,
        };
        assert_eq!(digits.to_string(), "phone digits must be between 9 and 11");

        let category = ValidationError::NotAllowed {
            field: "category".into(),
            allowed: vec!["cat".into(), "dog".into()],
        };
        assert_eq!(category.to_string(), "category must be one of: cat, dog");
    }

    #[test]
    fn test_field_error_lifts_into_core_error() {
        let err: CoreError = ValidationError::Required {
            field: "address".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid input: address is required");
    }
}
