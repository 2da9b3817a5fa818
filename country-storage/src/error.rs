//! Storage error types.
//!
//! A lookup miss is never an error: repositories return `Ok(None)` or an empty list for it.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database file cannot be opened or the `countries` table is missing.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Database error: {0}")]
    Database(String),
}

impl StorageError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::Unavailable(_))
    }
}

/// SQLite result code for "unable to open database file".
const SQLITE_CANTOPEN: &str = "14";

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StorageError::Unavailable(err.to_string()),
            sqlx::Error::Database(db) => {
                let cannot_open = db.code().as_deref() == Some(SQLITE_CANTOPEN)
                    || db.message().contains("unable to open database file");
                if cannot_open || db.message().contains("no such table") {
                    StorageError::Unavailable(err.to_string())
                } else {
                    StorageError::Database(err.to_string())
                }
            }
            _ => StorageError::Database(err.to_string()),
        }
    }
}
