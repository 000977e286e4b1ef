//! Core record types for the bookstore catalog.
//!
//! This crate defines the data model shared across the workspace:
//!
//! - [`Book`] — a catalog record (id, title, author, quantity).
//! - [`BookPatch`] — a partial set of fields for an update, distinguishing
//!   "not provided" from "provided but empty".
//!
//! # Example
//!
//! ```
//! use bookstore_core::{Book, BookPatch};
//!
//! let book = Book::new(3001, "A Tale of Two Cities", "Charles Dickens", 30);
//!
//! let patch = BookPatch::default().with_quantity(31);
//! assert!(!patch.is_empty());
//! assert_eq!(patch.quantity, Some(31));
//! assert!(patch.title.is_none());
//! # let _ = book;
//! ```

mod types;

pub use types::{Book, BookPatch};
