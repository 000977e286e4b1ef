//! Error types for catalog store operations.
//!
//! Classifies failures so callers can tell fatal storage errors from
//! constraint violations. Soft conditions (updating or deleting a missing
//! id, an empty update patch) are not errors at all; they are expressed in
//! the return types of the store operations.

use thiserror::Error;

/// Errors that can occur during catalog store operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// SQLite operation failure.
    #[error("database error: {0}")]
    Database(rusqlite::Error),

    /// A uniqueness or other constraint was violated, e.g. seeding ids that
    /// already exist. The attempted write has been rolled back in full.
    #[error("constraint violation: {0}")]
    Constraint(rusqlite::Error),

    /// Schema creation failed during startup. Fatal: without the table,
    /// every later operation would fail.
    #[error("initialization error: {0}")]
    Initialization(String),
}

impl From<rusqlite::Error> for CatalogError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                CatalogError::Constraint(err)
            }
            _ => CatalogError::Database(err),
        }
    }
}

/// Convenience alias for results with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_failure_classified() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY)")
            .unwrap();
        conn.execute("INSERT INTO t (id) VALUES (1)", []).unwrap();

        let err: CatalogError = conn
            .execute("INSERT INTO t (id) VALUES (1)", [])
            .unwrap_err()
            .into();
        assert!(matches!(err, CatalogError::Constraint(_)));
    }

    #[test]
    fn test_other_failure_classified_as_database() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err: CatalogError = conn
            .execute("SELECT * FROM missing_table", [])
            .unwrap_err()
            .into();
        assert!(matches!(err, CatalogError::Database(_)));
    }
}
