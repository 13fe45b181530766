//! # Book
//!
//! A single catalog entry with stock, pricing and a validated category.
//!
//! ## Field Access
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             Book                                        │
//! │                                                                         │
//! │  id, title, author      pub       caller-assigned, free-form            │
//! │  copies                 pub u32   can never go negative                 │
//! │  price_cents            private   set_price_cents() validates >= 0      │
//! │  discount_percent       private   set_discount_percent() 0..=100        │
//! │  category               private   set_category() / category()           │
//! │                                                                         │
//! │  Private fields are validated on write, never on read.                  │
//! │  Deserialization goes through the same validators.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::book::{buy, Book};
//!
//! let mut book = Book::new(1, "For the Love of Go", "John Arundel").with_copies(2);
//! book.set_price_cents(4000).unwrap();
//! book.set_discount_percent(25).unwrap();
//! book.set_category("Autobiography").unwrap();
//!
//! let sold = buy(&book).unwrap();
//! assert_eq!(sold.copies, 1);
//! assert_eq!(book.copies, 2);
//! assert_eq!(sold.net_price_cents(), 3000);
//! ```

use serde::de::{DeserializeSeed, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::category::Categories;
use crate::error::{CatalogError, CatalogResult};
use crate::money::Money;
use crate::validation::{validate_category, validate_discount_percent, validate_price_cents};

/// Catalog identifier of a book. Assigned by the caller, never generated here.
pub type BookId = i64;

// =============================================================================
// Book
// =============================================================================

/// A book in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", try_from = "BookRecord")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,

    /// Copies in stock.
    pub copies: u32,

    /// List price in cents, never negative.
    price_cents: i64,

    /// Markdown applied to the list price, 0 to 100.
    discount_percent: i64,

    /// Empty until set_category() succeeds.
    category: String,
}

impl Book {
    /// Creates a book with no stock, no price and no category.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Book {
            id,
            title: title.into(),
            author: author.into(),
            ..Book::default()
        }
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    /// Builder form of [`Book::set_price_cents`].
    pub fn with_price_cents(mut self, price_cents: i64) -> CatalogResult<Self> {
        self.set_price_cents(price_cents)?;
        Ok(self)
    }

    /// Builder form of [`Book::set_discount_percent`].
    pub fn with_discount_percent(mut self, discount_percent: i64) -> CatalogResult<Self> {
        self.set_discount_percent(discount_percent)?;
        Ok(self)
    }

    pub fn in_stock(&self) -> bool {
        self.copies > 0
    }

    /// List price in cents.
    pub fn price_cents(&self) -> i64 {
        self.price_cents
    }

    pub fn discount_percent(&self) -> i64 {
        self.discount_percent
    }

    /// Price after the discount, truncated to whole cents.
    ///
    /// `price_cents - price_cents * discount_percent / 100`
    pub fn net_price_cents(&self) -> i64 {
        self.net_price().cents()
    }

    pub fn net_price(&self) -> Money {
        Money::from_cents(self.price_cents).apply_percent_discount(self.discount_percent)
    }

    /// Sets the list price. Negative prices are rejected and leave the price as it was.
    pub fn set_price_cents(&mut self, price_cents: i64) -> CatalogResult<()> {
        validate_price_cents(price_cents)?;

        debug!(id = self.id, old = self.price_cents, new = price_cents, "Updating price");
        self.price_cents = price_cents;
        Ok(())
    }

    /// Sets the discount. Values outside 0..=100 are rejected.
    pub fn set_discount_percent(&mut self, discount_percent: i64) -> CatalogResult<()> {
        validate_discount_percent(discount_percent)?;

        debug!(id = self.id, discount_percent, "Updating discount");
        self.discount_percent = discount_percent;
        Ok(())
    }

    /// Sets the category, checked against the built-in allow-list.
    ///
    /// ## Rules
    /// - Exact, case-sensitive match
    /// - Empty string is never valid
    /// - On error the current category is kept
    pub fn set_category(&mut self, name: &str) -> CatalogResult<()> {
        self.set_category_in(name, &Categories::default())
    }

    /// Sets the category, checked against a configured allow-list.
    pub fn set_category_in(&mut self, name: &str, allowed: &Categories) -> CatalogResult<()> {
        validate_category(name, allowed)?;

        debug!(id = self.id, category = %name, "Updating category");
        self.category = name.to_string();
        Ok(())
    }

    /// The current category, or `""` if never set.
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Sells one copy.
///
/// Returns the updated book and leaves `book` untouched. Fails with
/// [`CatalogError::OutOfStock`] when there are no copies left.
///
/// ## User Workflow
/// ```text
/// copies: 2 ──► buy() ──► Ok(copies: 1)
/// copies: 1 ──► buy() ──► Ok(copies: 0)
/// copies: 0 ──► buy() ──► Err(OutOfStock)
/// ```
pub fn buy(book: &Book) -> CatalogResult<Book> {
    let Some(remaining) = book.copies.checked_sub(1) else {
        debug!(id = book.id, title = %book.title, "Purchase refused: out of stock");
        return Err(CatalogError::OutOfStock {
            id: book.id,
            title: book.title.clone(),
        });
    };

    debug!(id = book.id, remaining, "Sold one copy");
    Ok(Book {
        copies: remaining,
        ..book.clone()
    })
}

// =============================================================================
// Deserialization
// =============================================================================

/// A book as it arrives over the wire, before validation.
///
/// ## Flow
/// ```text
/// JSON ──► BookRecord ──► into_book_in(&allowed) ──► Book
///                              │
///                              ├── price < 0            → InvalidPrice
///                              ├── discount ∉ 0..=100   → InvalidDiscount
///                              └── category not allowed → InvalidCategory
/// ```
///
/// `Book`'s own `Deserialize` checks against the default categories. Use
/// [`BookSeed`] (or this type directly) when a store configures its own list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: BookId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub copies: u32,
    #[serde(default)]
    pub price_cents: i64,
    #[serde(default)]
    pub discount_percent: i64,
    /// Empty means unset.
    #[serde(default)]
    pub category: String,
}

impl BookRecord {
    /// Validates every private field and builds the Book.
    pub fn into_book_in(self, allowed: &Categories) -> CatalogResult<Book> {
        validate_price_cents(self.price_cents)?;
        validate_discount_percent(self.discount_percent)?;
        if !self.category.is_empty() {
            validate_category(&self.category, allowed)?;
        }

        Ok(Book {
            id: self.id,
            title: self.title,
            author: self.author,
            copies: self.copies,
            price_cents: self.price_cents,
            discount_percent: self.discount_percent,
            category: self.category,
        })
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = CatalogError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        record.into_book_in(&Categories::default())
    }
}

/// Deserializes a [`Book`] against a configured category list.
///
/// ## Example
/// ```rust
/// use bookstore_core::book::BookSeed;
/// use bookstore_core::category::Categories;
/// use serde::de::DeserializeSeed;
///
/// let allowed = Categories::from_names(["Travel"]);
/// let json = r#"{"id":1,"title":"Abroad","category":"Travel"}"#;
/// let mut de = serde_json::Deserializer::from_str(json);
/// let book = BookSeed::new(&allowed).deserialize(&mut de).unwrap();
/// assert_eq!(book.category(), "Travel");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BookSeed<'a> {
    allowed: &'a Categories,
}

impl<'a> BookSeed<'a> {
    pub fn new(allowed: &'a Categories) -> Self {
        BookSeed { allowed }
    }
}

impl<'de> DeserializeSeed<'de> for BookSeed<'_> {
    type Value = Book;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        BookRecord::deserialize(deserializer)?
            .into_book_in(self.allowed)
            .map_err(D::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
