//! Models mapped from the `countries` table.

mod country;
mod region;

pub(crate) use country::COUNTRY_COLUMNS;
pub use country::{Country, CountrySummary};
pub use region::Region;
