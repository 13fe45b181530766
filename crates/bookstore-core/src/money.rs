//! # Money Module
//!
//! Provides the `Money` type for book prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are stored as whole cents:                                      │
//! │    $40.00 = 4000 cents                                                  │
//! │                                                                         │
//! │  Discounts truncate toward zero:                                        │
//! │    4000 cents at 25% off → 4000 - 4000 * 25 / 100 = 3000 cents         │
//! │    999 cents at 10% off  → 999 - 99 = 900 cents                        │
//! │                                                                         │
//! │  No floating point ever touches a price.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::money::Money;
//!
//! let price = Money::from_cents(4000);
//! let net = price.apply_percent_discount(25);
//! assert_eq!(net.cents(), 3000);
//! assert_eq!(net.to_string(), "$30.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Takes `percent`% off, truncating the discount amount.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::money::Money;
    ///
    /// let price = Money::from_cents(999);
    /// // 10% of 999 is 99.9, truncated to 99
    /// assert_eq!(price.apply_percent_discount(10).cents(), 900);
    /// ```
    ///
    /// `percent` is clamped to 0..=100, so the result always lies between
    /// zero and the original amount.
    pub fn apply_percent_discount(&self, percent: i64) -> Money {
        let percent = percent.clamp(0, 100);
        // i128 keeps amount * percent from overflowing on huge prices
        let discount = (self.0 as i128 * percent as i128) / 100;
        Money::from_cents((self.0 as i128 - discount) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`. Frontends do their own localized formatting.
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

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(4000)), "$40.00");
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_percent_discount() {
        let price = Money::from_cents(4000);
        assert_eq!(price.apply_percent_discount(25).cents(), 3000);
        assert_eq!(price.apply_percent_discount(0).cents(), 4000);
        assert!(price.apply_percent_discount(100).is_zero());
    }

    #[test]
    fn test_percent_discount_truncates() {
        // 33% of 1000 = 330; 15% of 1 = 0.15 → 0
        assert_eq!(Money::from_cents(1000).apply_percent_discount(33).cents(), 670);
        assert_eq!(Money::from_cents(1).apply_percent_discount(15).cents(), 1);
    }

    #[test]
    fn test_discount_on_large_price_does_not_overflow() {
        let price = Money::from_cents(i64::MAX);
        assert_eq!(price.apply_percent_discount(0).cents(), i64::MAX);
        assert_eq!(price.apply_percent_discount(100).cents(), 0);
    }

    #[test]
    fn test_percent_out_of_range_is_clamped() {
        let price = Money::from_cents(1000);
        assert_eq!(price.apply_percent_discount(150).cents(), 0);
        assert_eq!(price.apply_percent_discount(-1).cents(), 1000);
        assert_eq!(Money::from_cents(i64::MAX).apply_percent_discount(-1).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN).apply_percent_discount(100).cents(), 0);
    }
}
