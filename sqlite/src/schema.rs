//! SQL schema for the catalog's `books` table.
//!
//! The table layout is the on-disk contract of the system: a single table
//! named `books` with four columns, stored in one local database file.
//! `CREATE TABLE IF NOT EXISTS` keeps creation idempotent across restarts.

/// Creates the `books` table if it does not exist.
pub const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY,
    title TEXT,
    author TEXT,
    quantity INTEGER
)";

/// Drops the `books` table. Used by [`Catalog::reset`](crate::Catalog::reset)
/// and tests; safe to run when the table is absent.
pub const DROP_SQL: &str = "DROP TABLE IF EXISTS books";
