//! # bookstore-core: Pure Catalog Logic
//!
//! Book records, stock and pricing operations, and id lookup, as pure
//! in-memory code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Embedding application                               │
//! │        (storefront, admin tool, persistence layer, ...)                 │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   book    │  │  catalog  │  │   money   │  │ validation│  │   │
//! │  │   │   Book    │  │  Catalog  │  │   Money   │  │ category  │  │   │
//! │  │   │   buy()   │  │  lookup   │  │ discounts │  │  rules    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`] - The Book entity and `buy`
//! - [`catalog`] - Id-keyed collection of books
//! - [`money`] - Integer-cent money with truncating discounts
//! - [`category`] - Category allow-list
//! - [`validation`] - Field validators behind the setters
//! - [`error`] - Domain error types
//! - [`config`] - Store configuration
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::{buy, Book, Catalog};
//!
//! let catalog = Catalog::from([
//!     (1, Book::new(1, "For the Love of Go", "John Arundel").with_copies(3)),
//!     (2, Book::new(2, "The Power of Go: Tools", "John Arundel")),
//! ]);
//!
//! let book = catalog.get_book(1).unwrap();
//! let sold = buy(&book).unwrap();
//! assert_eq!(sold.copies, 2);
//!
//! assert!(catalog.get_book(999).unwrap_err().is_not_found());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod book;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod logging;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use book::{buy, Book, BookId, BookRecord, BookSeed};
pub use catalog::Catalog;
pub use category::{Categories, DEFAULT_CATEGORIES};
pub use config::StoreConfig;
pub use error::{CatalogError, CatalogResult, ValidationError};
pub use money::Money;
