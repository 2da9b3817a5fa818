//! Storage crate: read-only access to the `countries` reference table.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Country, CountrySummary, Region
//! - [`repository`] – CountrySource trait
//! - [`country_repo`] – CountryRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod country_repo;
mod error;
mod models;
mod repository;
mod sqlite_pool;

pub use country_repo::CountryRepository;
pub use error::StorageError;
pub use models::{Country, CountrySummary, Region};
pub use repository::CountrySource;
pub use sqlite_pool::SqlitePoolManager;
