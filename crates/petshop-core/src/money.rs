//! # Money Module
//!
//! Provides the `Money` type for prices and cart totals.
//!
//! Catalog JSON carries prices as decimals (`109.95`). They become whole
//! cents once, in the catalog crate, and every cart line and total after
//! that is integer arithmetic:
//! ```text
//!   catalog JSON        petshop-core            display
//!  ┌────────────┐     ┌─────────────────┐     ┌───────────┐
//!  │ 109.95 f64 │ ──► │ Money(10995)    │ ──► │ "$109.95" │
//!  └────────────┘     │ × qty, Σ lines  │     └───────────┘
//!   from_decimal      └─────────────────┘      Display / config
//! ```
//!
//! ```rust
//! use petshop_core::money::Money;
//!
//! let collar = Money::from_cents(1250);
//! let line = collar.multiply_quantity(2);
//! assert_eq!((line + Money::from_cents(999)).to_string(), "$34.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Float slack allowed when scaling a decimal price to cents.
const SUB_CENT_TOLERANCE: f64 = 1e-6;

/// Whole cents. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Wraps an amount already in cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal price (as found in catalog JSON) to cents.
    ///
    /// The amount must be a whole number of cents, give or take float
    /// representation error. Non-finite input and fractions of a cent yield
    /// `None`, so a stored price is always exactly the catalog's price.
    ///
    /// ## Example
    /// ```rust
    /// use petshop_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(109.95).unwrap().cents(), 10995);
    /// assert_eq!(Money::from_decimal(22.3).unwrap().cents(), 2230);
    /// assert!(Money::from_decimal(0.125).is_none());
    /// assert!(Money::from_decimal(f64::NAN).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let scaled = amount * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > SUB_CENT_TOLERANCE {
            return None;
        }
        Some(Money(cents as i64))
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole dollars, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Cents past the dollar, always `0..=99`.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Back to a decimal, for writing catalog JSON.
    #[inline]
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Price of `qty` units at this unit price.
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// `$12.34` style. `StorefrontConfig::format_currency` handles other symbols.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
