//! Record types for the bookstore catalog.
//!
//! This module defines the data model shared by the storage backend and the
//! interactive frontend. The types are designed for serialization with
//! [`serde`] and round-trip cleanly through JSON and SQLite.

use serde::{Deserialize, Serialize};

/// A single book record in the catalog.
///
/// `id` uniquely identifies the record; it is assigned by the store on
/// insert, or given explicitly when seeding. Titles and authors carry no
/// uniqueness constraint. `quantity` is the stock count and cannot be
/// negative (enforced by the type).
///
/// # Examples
///
/// ```
/// use bookstore_core::Book;
///
/// let book = Book::new(3001, "A Tale of Two Cities", "Charles Dickens", 30);
/// assert_eq!(book.id, 3001);
/// assert_eq!(book.quantity, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Primary identifier, unique within the catalog.
    pub id: i64,
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Stock count.
    pub quantity: u32,
}

impl Book {
    /// Creates a book record with the given fields.
    pub fn new(id: i64, title: &str, author: &str, quantity: u32) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            quantity,
        }
    }
}

/// A partial set of book fields for an update.
///
/// Each field is optional: `None` means "leave unchanged", while
/// `Some(value)` — including `Some("")` — means "write this value". The
/// distinction matters for the update contract: only fields explicitly
/// supplied are touched.
///
/// # Examples
///
/// ```
/// use bookstore_core::BookPatch;
///
/// let patch = BookPatch::default().with_quantity(31);
/// assert!(patch.title.is_none());
/// assert!(!patch.is_empty());
///
/// assert!(BookPatch::default().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookPatch {
    /// New title, if provided.
    pub title: Option<String>,
    /// New author, if provided.
    pub author: Option<String>,
    /// New stock count, if provided.
    pub quantity: Option<u32>,
}

impl BookPatch {
    /// Sets the title field.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets the author field.
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    /// Sets the quantity field.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Returns `true` when no field is provided.
    ///
    /// An empty patch must not reach storage; callers report "nothing to
    /// update" instead.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.quantity.is_none()
    }
}
