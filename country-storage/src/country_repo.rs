//! Country repository: read-only queries over the `countries` table.
//!
//! Uses SqlitePoolManager and the models (Country, CountrySummary).
//! External: SQLite via sqlx; the table is created and filled by an external loader.

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::error::StorageError;
use crate::models::{Country, CountrySummary, COUNTRY_COLUMNS};
use crate::repository::CountrySource;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct CountryRepository {
    pool_manager: SqlitePoolManager,
}

impl CountryRepository {
    /// Creates a repository for `database_url`. Does not touch the file; use [`CountrySource::exists`] as a guard.
    pub fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).map_err(|e| {
            error!(error = %e, database_url = %database_url, "Invalid database url");
            StorageError::from(e)
        })?;
        Ok(Self { pool_manager })
    }
}

#[async_trait]
impl CountrySource for CountryRepository {
    async fn exists(&self) -> Result<bool, StorageError> {
        let pool = self.pool_manager.pool();

        let table: Option<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'countries'",
        )
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to check countries table");
            StorageError::from(e)
        })?;

        if table.is_none() {
            info!("Table 'countries' does not exist; run the database loader");
        }
        Ok(table.is_some())
    }

    async fn get_by_key(&self, key: &str) -> Result<Option<Country>, StorageError> {
        let pool = self.pool_manager.pool();
        let sql = format!(
            "SELECT {} FROM countries WHERE english_name = ?",
            COUNTRY_COLUMNS
        );

        let country = sqlx::query_as::<_, Country>(&sql)
            .bind(key)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                error!(error = %e, key = %key, "Failed to get country");
                StorageError::from(e)
            })?;

        debug!(key = %key, found = country.is_some(), "Country lookup");
        Ok(country)
    }

    async fn list_all(&self) -> Result<Vec<CountrySummary>, StorageError> {
        let pool = self.pool_manager.pool();

        let rows: Vec<(String, String, String)> = sqlx::query_as(
            "SELECT english_name, name, region FROM countries ORDER BY region, name",
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list countries");
            StorageError::from(e)
        })?;

        info!("Retrieved {} countries", rows.len());
        Ok(rows.into_iter().map(CountrySummary::from).collect())
    }

    async fn list_by_region(&self, region: &str) -> Result<Vec<CountrySummary>, StorageError> {
        let pool = self.pool_manager.pool();

        let rows: Vec<(String, String, String)> = sqlx::query_as(
            "SELECT english_name, name, region FROM countries WHERE region = ? ORDER BY name",
        )
        .bind(region)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            error!(error = %e, region = %region, "Failed to list countries of region");
            StorageError::from(e)
        })?;

        info!("Retrieved {} countries for region '{}'", rows.len(), region);
        Ok(rows.into_iter().map(CountrySummary::from).collect())
    }
}
