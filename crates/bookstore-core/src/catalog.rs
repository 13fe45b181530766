//! # Catalog
//!
//! In-memory mapping from book id to [`Book`].
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog owns every Book by value.                                      │
//! │                                                                         │
//! │  get_book(2) ──► clone of entry 2 ──► caller mutates freely            │
//! │                                         │                               │
//! │                                         ╳  catalog entry unchanged      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Iteration order is whatever the underlying `HashMap` yields; sort the
//! result of [`Catalog::get_all_books`] before comparing it.

use std::collections::HashMap;

use tracing::debug;

use crate::book::{Book, BookId};
use crate::error::{CatalogError, CatalogResult};

/// Books keyed by id.
///
/// Not synchronized. Wrap it in a lock if several threads need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: HashMap<BookId, Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Builds a catalog keyed by each book's own `id`.
    ///
    /// A later book with a duplicate id replaces the earlier one.
    pub fn from_books<I>(books: I) -> Self
    where
        I: IntoIterator<Item = Book>,
    {
        books.into_iter().map(|book| (book.id, book)).collect()
    }

    /// Every book in the catalog, in no particular order.
    pub fn get_all_books(&self) -> Vec<Book> {
        debug!(count = self.books.len(), "Listing all books");
        self.books.values().cloned().collect()
    }

    /// Looks up a book by id and returns a copy of it.
    ///
    /// ## Errors
    /// [`CatalogError::NotFound`] when no entry has this id.
    pub fn get_book(&self, id: BookId) -> CatalogResult<Book> {
        match self.books.get(&id) {
            Some(book) => {
                debug!(id, title = %book.title, "Found book");
                Ok(book.clone())
            }
            None => {
                debug!(id, "Book not found");
                Err(CatalogError::NotFound(id))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl FromIterator<(BookId, Book)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (BookId, Book)>>(iter: I) -> Self {
        Catalog {
            books: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<BookId, Book>> for Catalog {
    fn from(books: HashMap<BookId, Book>) -> Self {
        Catalog { books }
    }
}

impl<const N: usize> From<[(BookId, Book); N]> for Catalog {
    fn from(entries: [(BookId, Book); N]) -> Self {
        entries.into_iter().collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn two_books() -> Catalog {
        Catalog::from([
            (1, Book::new(1, "For the Love of Go", "")),
            (2, Book::new(2, "The Power of Go: Tools", "")),
        ])
    }

    #[test]
    fn test_get_all_books() {
        let catalog = two_books();

        let mut got = catalog.get_all_books();
        got.sort_by_key(|book| book.id);

        let want = vec![
            Book::new(1, "For the Love of Go", ""),
            Book::new(2, "The Power of Go: Tools", ""),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn test_get_all_books_empty() {
        assert!(Catalog::new().get_all_books().is_empty());
    }

    #[test]
    fn test_get_book() {
        let catalog = two_books();
        let got = catalog.get_book(2).unwrap();
        assert_eq!(got, Book::new(2, "The Power of Go: Tools", ""));
    }

    #[test]
    fn test_get_book_invalid_id() {
        let err = Catalog::new().get_book(999).unwrap_err();
        assert_eq!(err, CatalogError::NotFound(999));

        assert!(two_books().get_book(999).unwrap_err().is_not_found());
    }

    #[test]
    fn test_get_book_returns_copy() {
        let catalog = two_books();

        let mut book = catalog.get_book(1).unwrap();
        book.title = "Changed".to_string();
        book.set_price_cents(5000).unwrap();
        book.set_category("Reference").unwrap();

        let stored = catalog.get_book(1).unwrap();
        assert_eq!(stored.title, "For the Love of Go");
        assert_eq!(stored.price_cents(), 0);
        assert_eq!(stored.category(), "");
    }

    #[test]
    fn test_get_all_books_returns_copies() {
        let catalog = two_books();
        for mut book in catalog.get_all_books() {
            book.copies = 42;
        }
        assert!(catalog.get_all_books().iter().all(|book| book.copies == 0));
    }

    #[test]
    fn test_from_books_keys_by_id() {
        let catalog = Catalog::from_books(vec![
            Book::new(10, "A", "").with_copies(1),
            Book::new(20, "B", ""),
            Book::new(10, "A, second edition", ""),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get_book(10).unwrap().title, "A, second edition");
    }

    #[test]
    fn test_from_hash_map() {
        let mut books = HashMap::new();
        books.insert(5, Book::new(5, "E", ""));
        let catalog = Catalog::from(books);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get_book(5).unwrap().title, "E");
    }
}
