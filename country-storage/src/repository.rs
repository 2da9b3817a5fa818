use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{Country, CountrySummary};

/// Read-only access to country records.
///
/// `Ok(None)` / an empty list means the lookup missed; `Err` means the store could not answer.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// True iff the `countries` table is present.
    async fn exists(&self) -> Result<bool, StorageError>;
    /// Exact, case-sensitive match on the english key.
    async fn get_by_key(&self, key: &str) -> Result<Option<Country>, StorageError>;
    /// Every country ordered by region, then name.
    async fn list_all(&self) -> Result<Vec<CountrySummary>, StorageError>;
    /// Countries whose region equals `region`, ordered by name.
    async fn list_by_region(&self, region: &str) -> Result<Vec<CountrySummary>, StorageError>;
}
