//! SQLite connection pool wrapper for the storage crate.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Manages a single read-only SQLite pool. Connections are opened on first use, never creating the file.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Creates a lazy pool for the given database URL (`sqlite:` URL, `file:` path or plain path).
    pub fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        info!(database_url = %database_url, "Initializing SQLite pool");

        let options = connect_options(database_url)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_lazy_with(options);

        Ok(Self { pool })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    let options = if database_url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(database_url)?
    } else {
        let path = database_url.strip_prefix("file:").unwrap_or(database_url);
        SqliteConnectOptions::new().filename(path)
    };

    Ok(options.create_if_missing(false).read_only(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_options_strips_file_prefix() {
        let options = connect_options("file:./data/countries.db").unwrap();
        assert_eq!(
            options.get_filename(),
            std::path::Path::new("./data/countries.db")
        );
    }

    #[test]
    fn test_connect_options_accepts_sqlite_url() {
        let options = connect_options("sqlite://countries.db").unwrap();
        assert!(options.get_filename().ends_with("countries.db"));
    }
}
