//! The catalog store: durable CRUD and search over the `books` table.
//!
//! [`Catalog`] owns the SQLite connection for the lifetime of the process.
//! Every mutating operation is atomic: multi-statement mutations run inside
//! an explicit transaction, single statements rely on SQLite's per-statement
//! atomicity. On any failure the table is left exactly as it was.
//!
//! # Example
//!
//! ```no_run
//! use bookstore_core::BookPatch;
//! use bookstore_sqlite::{Catalog, UpdateOutcome};
//!
//! let mut catalog = Catalog::open("ebookstore.db").unwrap();
//! catalog.initialize().unwrap();
//!
//! let book = catalog.insert("Dune", "Frank Herbert", 5).unwrap();
//! let outcome = catalog
//!     .update(book.id, &BookPatch::default().with_quantity(4))
//!     .unwrap();
//! assert_eq!(outcome, UpdateOutcome::Updated);
//!
//! for hit in catalog.search("Herbert").unwrap() {
//!     println!("{}: {} by {}", hit.id, hit.title, hit.author);
//! }
//! ```

use std::path::Path;

use bookstore_core::{Book, BookPatch};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::schema;

/// Initial catalog contents, inserted once when the table is first created.
const SEED_BOOKS: [(i64, &str, &str, u32); 5] = [
    (3001, "A Tale of Two Cities", "Charles Dickens", 30),
    (3002, "Harry Potter and the Philosopher's Stone", "J.K. Rowling", 40),
    (3003, "The Lion, the Witch and the Wardrobe", "C.S. Lewis", 25),
    (3004, "The Lord of the Rings", "J.R.R. Tolkien", 37),
    (3005, "Alice in Wonderland", "Lewis Carroll", 12),
];

/// Result of an [`update`](Catalog::update) call.
///
/// Distinguishes the soft outcomes from each other: a patch with no fields
/// never reaches storage, and a missing id is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Exactly the supplied fields were written.
    Updated,
    /// No record with the given id exists; nothing was written.
    NotFound,
    /// The patch contained no fields; no statement was issued.
    NothingToUpdate,
}

/// Snapshot of the catalog state, for startup reporting and tests.
#[derive(Debug, Clone)]
pub struct CatalogStatus {
    /// Whether the `books` table exists in the database.
    pub table_exists: bool,
    /// Number of book records stored.
    pub book_count: usize,
}

/// Durable store for book records, owning the SQLite connection.
///
/// Constructed once at startup and used for the whole session. All
/// operations run synchronously on the single connection; there is no
/// pooling and no concurrent access.
pub struct Catalog {
    conn: Connection,
}

impl Catalog {
    /// Opens (or creates) the database file at `path`.
    ///
    /// No schema work happens here; call [`initialize`](Self::initialize)
    /// before using the store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Opens an in-memory database, for tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Ensures the `books` table exists, seeding it on first creation.
    ///
    /// Idempotent: safe to call on every startup. Creation and seeding run
    /// in one transaction, so the table is either fully created and seeded
    /// or absent.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Initialization`] on any failure. Callers
    /// should treat this as fatal: without the table every later operation
    /// would fail.
    pub fn initialize(&mut self) -> Result<()> {
        let tx = self.conn.transaction().map_err(|e| {
            CatalogError::Initialization(format!("failed to begin initialization: {e}"))
        })?;

        let existed = table_exists(&tx)?;
        tx.execute_batch(schema::SCHEMA_SQL).map_err(|e| {
            CatalogError::Initialization(format!("failed to create books table: {e}"))
        })?;

        if !existed {
            insert_seed_rows(&tx).map_err(|e| {
                CatalogError::Initialization(format!("failed to seed books table: {e}"))
            })?;
            info!(rows = SEED_BOOKS.len(), "created and seeded books table");
        }

        tx.commit().map_err(|e| {
            CatalogError::Initialization(format!("failed to commit initialization: {e}"))
        })?;
        Ok(())
    }

    /// Inserts the fixed seed records (ids 3001–3005) in one transaction.
    ///
    /// Only meaningful on an empty table; normally invoked through
    /// [`initialize`](Self::initialize) right after table creation.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Constraint`] if any seed id already exists.
    /// The whole batch is discarded; no partial seeding.
    pub fn seed(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        insert_seed_rows(&tx)?;
        tx.commit()?;
        info!(rows = SEED_BOOKS.len(), "seeded books table");
        Ok(())
    }

    /// Inserts a new book, letting the store assign the next id.
    ///
    /// Returns the stored record including its assigned id. On failure no
    /// record is added.
    pub fn insert(&mut self, title: &str, author: &str, quantity: u32) -> Result<Book> {
        self.conn.execute(
            "INSERT INTO books (title, author, quantity) VALUES (?1, ?2, ?3)",
            params![title, author, quantity],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, title, "inserted book");
        Ok(Book::new(id, title, author, quantity))
    }

    /// Applies a partial update to the book with the given id.
    ///
    /// Only the fields present in `patch` are written; absent fields keep
    /// their prior values. The statement is generated from a structured
    /// column list, never by splicing user text into SQL.
    ///
    /// Soft outcomes are reported through [`UpdateOutcome`]: an empty patch
    /// never touches storage, and an unmatched id affects zero rows without
    /// raising an error.
    pub fn update(&mut self, id: i64, patch: &BookPatch) -> Result<UpdateOutcome> {
        if patch.is_empty() {
            return Ok(UpdateOutcome::NothingToUpdate);
        }

        let mut columns: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();
        if let Some(title) = &patch.title {
            columns.push("title");
            values.push(Value::from(title.clone()));
        }
        if let Some(author) = &patch.author {
            columns.push("author");
            values.push(Value::from(author.clone()));
        }
        if let Some(quantity) = patch.quantity {
            columns.push("quantity");
            values.push(Value::from(i64::from(quantity)));
        }

        let assignments: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ?{}", i + 1))
            .collect();
        values.push(Value::from(id));
        let sql = format!(
            "UPDATE books SET {} WHERE id = ?{}",
            assignments.join(", "),
            values.len()
        );

        let rows = self.conn.execute(&sql, rusqlite::params_from_iter(&values))?;
        debug!(id, rows, fields = columns.len(), "updated book");

        if rows == 0 {
            Ok(UpdateOutcome::NotFound)
        } else {
            Ok(UpdateOutcome::Updated)
        }
    }

    /// Deletes the book with the given id, if any.
    ///
    /// Returns `true` when a record was removed, `false` when the id did
    /// not match anything. A missing id is not an error.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1", params![id])?;
        debug!(id, rows, "deleted book");
        Ok(rows > 0)
    }

    /// Returns all books whose title or author contains `term` as a
    /// substring, ordered by id.
    ///
    /// The term is matched literally: `%` and `_` in it have no wildcard
    /// meaning. No matches yields an empty vector, not an error.
    pub fn search(&self, term: &str) -> Result<Vec<Book>> {
        let pattern = format!("%{}%", escape_like(term));
        let mut stmt = self.conn.prepare(
            "SELECT id, title, author, quantity FROM books \
             WHERE title LIKE ?1 ESCAPE '\\' OR author LIKE ?1 ESCAPE '\\' \
             ORDER BY id",
        )?;

        let books = stmt
            .query_map(params![pattern], book_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(term, hits = books.len(), "searched books");
        Ok(books)
    }

    /// Loads a single book by id. Returns `None` when the id is unknown.
    pub fn get(&self, id: i64) -> Result<Option<Book>> {
        let book = self
            .conn
            .query_row(
                "SELECT id, title, author, quantity FROM books WHERE id = ?1",
                params![id],
                book_from_row,
            )
            .optional()?;
        Ok(book)
    }

    /// Counts the records in the `books` table.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Reports whether the table exists and how many books it holds.
    pub fn status(&self) -> Result<CatalogStatus> {
        if !table_exists(&self.conn)? {
            return Ok(CatalogStatus {
                table_exists: false,
                book_count: 0,
            });
        }
        Ok(CatalogStatus {
            table_exists: true,
            book_count: self.count()?,
        })
    }

    /// Drops the `books` table. Safe to call when the table is absent.
    pub fn reset(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(schema::DROP_SQL)?;
        tx.commit()?;
        info!("dropped books table");
        Ok(())
    }

    /// Returns a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Maps a `books` row to a [`Book`].
fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        quantity: row.get(3)?,
    })
}

/// Checks whether the `books` table exists.
fn table_exists(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='books'",
        [],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Inserts the seed records with their explicit ids.
fn insert_seed_rows(conn: &Connection) -> Result<()> {
    let mut stmt =
        conn.prepare("INSERT INTO books (id, title, author, quantity) VALUES (?1, ?2, ?3, ?4)")?;
    for (id, title, author, quantity) in SEED_BOOKS {
        stmt.execute(params![id, title, author, quantity])?;
    }
    Ok(())
}

/// Escapes LIKE wildcards so a search term matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
