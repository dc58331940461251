//! # Validation Module
//!
//! Form validation for the checkout page and the admin edit dialog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Form Checks (in order)                    │
//! │                                                                         │
//! │  1. name, phone, address filled in?   ── no ──► Required                │
//! │  2. email given AND malformed?        ── yes ─► InvalidFormat           │
//! │  3. phone 9-11 digits?                ── no ──► InvalidFormat /         │
//! │                                                 OutOfRange              │
//! │  4. OK ──► confirmation dialog                                          │
//! │                                                                         │
//! │  The first failing check wins; the app shows it as a warning notice    │
//! │  and the form stays open.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use petshop_core::validation::{validate_email, validate_phone};
//!
//! assert!(validate_email("buyer@example.com").is_ok());
//! assert!(validate_phone("0912345678").is_ok());
//! assert!(validate_phone("12345").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{CheckoutForm, EntryDraft};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Accepted phone number length, in digits.
pub const PHONE_DIGITS_MIN: usize = 9;
pub const PHONE_DIGITS_MAX: usize = 11;

/// Maximum inventory entry name length.
pub const MAX_TITLE_LEN: usize = 200;

// =============================================================================
// Checkout
// =============================================================================

/// Validates the checkout form.
///
/// ## Rules
/// - `name`, `phone`, `address` must be non-empty
/// - `email` may be empty; when given it must look like `local@domain.tld`
/// - `phone` must be 9 to 11 ASCII digits
pub fn validate_checkout(form: &CheckoutForm) -> ValidationResult<()> {
    require("name", &form.name)?;
    require("phone", &form.phone)?;
    require("address", &form.address)?;

    if !form.email.is_empty() {
        validate_email(&form.email)?;
    }

    validate_phone(&form.phone)
}

/// Validates an email address.
///
/// ## Rules
/// - Exactly one `@`, with something before it
/// - No whitespace anywhere
/// - The domain has a `.` with at least one character on each side
///
/// ## Example
/// ```rust
/// use petshop_core::validation::validate_email;
///
/// assert!(validate_email("a@b.co").is_ok());
/// assert!(validate_email("a@b").is_err());
/// assert!(validate_email("a b@c.de").is_err());
/// assert!(validate_email("a@@b.de").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain '@'"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must be of the form name@domain.tld"));
    }

    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_inner_dot {
        return Err(invalid("domain must contain a '.'"));
    }

    Ok(())
}

/// Validates a phone number: 9 to 11 ASCII digits, nothing else.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    if !(PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&phone.len()) {
        return Err(ValidationError::OutOfRange {
            field: "phone digits".to_string(),
            min: PHONE_DIGITS_MIN as i64,
            max: PHONE_DIGITS_MAX as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Admin Edit Dialog
// =============================================================================

/// Validates an inventory entry draft before insert/update.
///
/// ## Rules
/// - Name must not be blank and at most 200 characters
/// - Price must be greater than zero
/// - Image must not be blank
/// - A category must be chosen
pub fn validate_entry_draft(draft: &EntryDraft) -> ValidationResult<()> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    if !draft.price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if draft.image.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    if draft.category.is_none() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    Ok(())
}

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Category;

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Lan Nguyen".to_string(),
            email: String::new(),
            phone: "0912345678".to_string(),
            address: "12 Hang Bac, Hanoi".to_string(),
        }
    }

    fn draft() -> EntryDraft {
        EntryDraft {
            id: None,
            title: "Beagle".to_string(),
            price: Money::from_cents(25000),
            image: "data:image/png;base64,AAAA".to_string(),
            category: Some(Category::Dog),
        }
    }

    #[test]
    fn test_valid_checkout() {
        assert!(validate_checkout(&form()).is_ok());

        let with_email = CheckoutForm {
            email: "lan@example.vn".to_string(),
            ..form()
        };
        assert!(validate_checkout(&with_email).is_ok());
    }

    #[test]
    fn test_required_fields_checked_first() {
        let missing_name = CheckoutForm {
            name: String::new(),
            phone: "abc".to_string(),
            ..form()
        };
        assert_eq!(
            validate_checkout(&missing_name),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );

        let missing_address = CheckoutForm {
            address: String::new(),
            ..form()
        };
        assert_eq!(validate_checkout(&missing_address).unwrap_err().field(), "address");
    }

    #[test]
    fn test_bad_email_blocks_before_phone() {
        let bad = CheckoutForm {
            email: "not-an-email".to_string(),
            phone: "12".to_string(),
            ..form()
        };
        assert_eq!(validate_checkout(&bad).unwrap_err().field(), "email");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("first.last@sub.example.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("@b.c").is_err());
        assert!(validate_email("a@.c").is_err());
        assert!(validate_email("a@b.").is_err());
        assert!(validate_email("a@b@c.d").is_err());
        assert!(validate_email("a@b .c").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("123456789").is_ok());
        assert!(validate_phone("12345678901").is_ok());

        assert!(matches!(
            validate_phone("12345678"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_phone("123456789012"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_phone("+84912345678"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_phone("091 234 5678").is_err());
    }

    #[test]
    fn test_validate_entry_draft() {
        assert!(validate_entry_draft(&draft()).is_ok());

        let blank_name = EntryDraft {
            title: "   ".to_string(),
            ..draft()
        };
        assert_eq!(validate_entry_draft(&blank_name).unwrap_err().field(), "name");

        let free = EntryDraft {
            price: Money::zero(),
            ..draft()
        };
        assert!(matches!(
            validate_entry_draft(&free),
            Err(ValidationError::MustBePositive { .. })
        ));

        let no_image = EntryDraft {
            image: String::new(),
            ..draft()
        };
        assert_eq!(validate_entry_draft(&no_image).unwrap_err().field(), "image");

        let no_category = EntryDraft {
            category: None,
            ..draft()
        };
        assert_eq!(
            validate_entry_draft(&no_category).unwrap_err().field(),
            "category"
        );
    }
}
