//! Country record and list summary.
//!
//! Rows are decoded by column position, so queries must select columns in table order.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// Column list in the order [`Country`] decodes it.
///
/// Numeric columns are cast because the loader may declare them INTEGER or NUMERIC; sqlx refuses to
/// decode an INTEGER value as `f64`. CAST keeps NULL as NULL.
pub(crate) const COUNTRY_COLUMNS: &str = "id, name, english_name, region, capital, \
     CAST(population AS INTEGER), CAST(area AS REAL), CAST(density AS REAL), \
     CAST(percentage AS REAL), borders";

/// One row of the `countries` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub id: i64,
    /// Localized (Russian) display name.
    pub name: String,
    /// Unique lookup key, also the chat command token (`/France`).
    pub english_name: String,
    /// Region display name; one of [`crate::Region`].
    pub region: String,
    pub capital: Option<String>,
    pub population: Option<i64>,
    /// Square kilometres.
    pub area: Option<f64>,
    /// People per square kilometre.
    pub density: Option<f64>,
    /// Share of Europe's population, in percent.
    pub percentage: Option<f64>,
    /// Free-text list of neighbours.
    pub borders: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for Country {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            english_name: row.try_get(2)?,
            region: row.try_get(3)?,
            capital: row.try_get(4)?,
            population: row.try_get(5)?,
            area: row.try_get(6)?,
            density: row.try_get(7)?,
            percentage: row.try_get(8)?,
            borders: row.try_get(9)?,
        })
    }
}

/// Key, display name and region of a country, as returned by list queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    pub english_name: String,
    pub name: String,
    pub region: String,
}

impl From<(String, String, String)> for CountrySummary {
    fn from((english_name, name, region): (String, String, String)) -> Self {
        Self {
            english_name,
            name,
            region,
        }
    }
}
