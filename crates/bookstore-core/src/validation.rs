//! # Validation Module
//!
//! Field validators behind the Book setters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validated on Write                                 │
//! │                                                                         │
//! │  book.set_price_cents(n) ───► validate_price_cents(n)                  │
//! │  book.set_discount_percent(p) ► validate_discount_percent(p)           │
//! │  book.set_category(name) ────► validate_category(name, &allowed)       │
//! │           │                                                             │
//! │           ├── Err → field left untouched, error returned               │
//! │           └── Ok  → field assigned                                     │
//! │                                                                         │
//! │  Reads (category(), net_price_cents()) never re-validate.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::category::Categories;
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free books)
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(4000).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-1).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::InvalidPrice { cents });
    }

    Ok(())
}

/// Validates a discount percentage (0 to 100 inclusive).
pub fn validate_discount_percent(percent: i64) -> ValidationResult<()> {
    if !(0..=100).contains(&percent) {
        return Err(ValidationError::InvalidDiscount { percent });
    }

    Ok(())
}

/// Validates a category name against an allow-list.
///
/// ## Example
/// ```rust
/// use bookstore_core::category::Categories;
/// use bookstore_core::validation::validate_category;
///
/// let allowed = Categories::default();
/// assert!(validate_category("Autobiography", &allowed).is_ok());
/// assert!(validate_category("bogus", &allowed).is_err());
/// ```
pub fn validate_category(name: &str, allowed: &Categories) -> ValidationResult<()> {
    if !allowed.contains(name) {
        return Err(ValidationError::InvalidCategory {
            name: name.to_string(),
            allowed: allowed.names(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
