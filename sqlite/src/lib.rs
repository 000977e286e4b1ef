//! SQLite catalog store for the bookstore inventory manager.
//!
//! This crate owns the persistence layer: a single `books` table in a local
//! database file, with insert, partial-field update, delete, and substring
//! search over title and author.
//!
//! # Architecture
//!
//! - **`schema`** — SQL text for the `books` table (the on-disk contract)
//! - **`store`** — [`Catalog`], the connection-owning store with all CRUD
//!   and search operations
//! - **`error`** — [`CatalogError`] classification (fatal initialization,
//!   constraint violation, general database failure)
//!
//! # Quick start
//!
//! ```no_run
//! use bookstore_core::BookPatch;
//! use bookstore_sqlite::Catalog;
//!
//! let mut catalog = Catalog::open("ebookstore.db").unwrap();
//! catalog.initialize().unwrap();
//!
//! catalog.insert("Dune", "Frank Herbert", 5).unwrap();
//! catalog.update(3001, &BookPatch::default().with_quantity(31)).unwrap();
//!
//! let hits = catalog.search("Lewis").unwrap();
//! println!("{} matches", hits.len());
//! ```
//!
//! # Atomicity
//!
//! Every mutating operation is all-or-nothing. Table creation and first-time
//! seeding share one transaction; a failed seed leaves no partial rows. Soft
//! conditions — updating or deleting an id that does not exist, or an update
//! with no fields — are reported through return values rather than errors.

mod error;
mod schema;
mod store;

pub use error::{CatalogError, Result};
pub use schema::{DROP_SQL, SCHEMA_SQL};
pub use store::{Catalog, CatalogStatus, UpdateOutcome};
