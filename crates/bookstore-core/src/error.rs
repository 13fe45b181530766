//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CatalogError          - Stock and lookup failures                     │
//! │  ├── OutOfStock        - buy() on a book with zero copies              │
//! │  ├── NotFound          - get_book() with an unknown id                 │
//! │  └── Validation ──┐                                                    │
//! │                   ▼                                                     │
//! │  ValidationError       - Setter input rejected                         │
//! │  ├── InvalidPrice      - negative price                                │
//! │  ├── InvalidDiscount   - discount outside 0..=100                      │
//! │  └── InvalidCategory   - name not in the allow-list                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, title, offending value)
//! 3. Errors are enum variants, never String
//! 4. A failed operation never mutates anything

use thiserror::Error;

use crate::book::BookId;

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog and inventory errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No copies left to sell.
    ///
    /// ## User Workflow
    /// ```text
    /// buy(book)  (copies: 0)
    ///      │
    ///      ▼
    /// OutOfStock { id: 7, title: "Spark Joy" }
    ///      │
    ///      ▼
    /// Book is returned to the caller untouched
    /// ```
    #[error("No copies of '{title}' (id {id}) left in stock")]
    OutOfStock { id: BookId, title: String },

    /// No book with this id in the catalog.
    #[error("Book not found: {0}")]
    NotFound(BookId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CatalogError {
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CatalogError::OutOfStock { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }

    pub fn is_invalid_price(&self) -> bool {
        matches!(self, CatalogError::Validation(ValidationError::InvalidPrice { .. }))
    }

    pub fn is_invalid_category(&self) -> bool {
        matches!(self, CatalogError::Validation(ValidationError::InvalidCategory { .. }))
    }

    pub fn is_invalid_discount(&self) -> bool {
        matches!(self, CatalogError::Validation(ValidationError::InvalidDiscount { .. }))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by the Book setters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Price must be zero or more cents.
    #[error("Invalid price {cents}: must not be negative")]
    InvalidPrice { cents: i64 },

    /// Discount must be a whole percentage between 0 and 100.
    #[error("Invalid discount {percent}%: must be between 0 and 100")]
    InvalidDiscount { percent: i64 },

    /// Category is not one of the recognized names.
    #[error("Invalid category '{name}': must be one of {allowed:?}")]
    InvalidCategory { name: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::OutOfStock {
            id: 7,
            title: "Spark Joy".to_string(),
        };
        assert_eq!(err.to_string(), "No copies of 'Spark Joy' (id 7) left in stock");

        let err = CatalogError::NotFound(999);
        assert_eq!(err.to_string(), "Book not found: 999");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidPrice { cents: -1 };
        assert_eq!(err.to_string(), "Invalid price -1: must not be negative");

        let err = ValidationError::InvalidDiscount { percent: 101 };
        assert_eq!(err.to_string(), "Invalid discount 101%: must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_catalog_error() {
        let err: CatalogError = ValidationError::InvalidPrice { cents: -5 }.into();
        assert!(err.is_invalid_price());
        assert!(!err.is_invalid_category());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_kind_predicates() {
        assert!(CatalogError::NotFound(1).is_not_found());
        assert!(CatalogError::OutOfStock {
            id: 1,
            title: String::new()
        }
        .is_out_of_stock());

        let err: CatalogError = ValidationError::InvalidCategory {
            name: "bogus".to_string(),
            allowed: vec![],
        }
        .into();
        assert!(err.is_invalid_category());

        let err: CatalogError = ValidationError::InvalidDiscount { percent: -1 }.into();
        assert!(err.is_invalid_discount());
    }
}
