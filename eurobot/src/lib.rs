//! # eurobot
//!
//! Telegram bot over a read-only table of European countries: list countries, browse by region,
//! and query capital, population, area, density, share of Europe and borders of a selected country.
//!
//! - [`router`] resolves commands and button presses; [`format`] renders fields; [`selection`] keeps
//!   the per-chat selected country.
//! - [`handlers`] plug the router into the handler chain; [`telegram`] adapts teloxide.

pub mod cli;
pub mod config;
pub mod format;
pub mod handlers;
pub mod router;
pub mod runner;
pub mod selection;
pub mod telegram;

pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use handlers::{CountryHandler, LoggingHandler};
pub use router::{CountryRouter, Delivery, Event, Reply};
pub use runner::{build_handler_chain, check_storage, run_bot, StorageReport};
pub use selection::SelectionStore;
