//! Application wiring: storage guard, component assembly and the run/check entry points.

use anyhow::{Context, Result};
use country_storage::{CountryRepository, CountrySource};
use eurobot_core::{init_tracing, Bot};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::handlers::{CountryHandler, LoggingHandler};
use crate::router::CountryRouter;
use crate::telegram::{run_dispatcher, TelegramBotAdapter};

/// Builds the chain: logging first, then the country handler.
pub fn build_handler_chain(router: Arc<CountryRouter>, bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CountryHandler::new(router, bot)))
}

/// Outcome of the storage guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageReport {
    pub database_url: String,
    pub country_count: usize,
}

/// Fails unless the `countries` table exists; reports how many countries it holds.
#[instrument(skip(source))]
pub async fn check_storage(
    source: &dyn CountrySource,
    database_url: &str,
) -> Result<StorageReport> {
    let exists = source
        .exists()
        .await
        .with_context(|| format!("Cannot open country database {}", database_url))?;
    if !exists {
        anyhow::bail!(
            "Table 'countries' does not exist in {}; run the database loader first",
            database_url
        );
    }

    let countries = source
        .list_all()
        .await
        .with_context(|| format!("Cannot read countries from {}", database_url))?;

    Ok(StorageReport {
        database_url: database_url.to_string(),
        country_count: countries.len(),
    })
}

fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token());
    Ok(match config.api_url()? {
        Some(url) => bot.set_api_url(url),
        None => bot,
    })
}

/// Main entry: validate config, init logging, check storage, build the chain, then dispatch updates.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(database_url = %config.database_url(), "Initializing bot");

    let repo = CountryRepository::new(config.database_url())?;
    let report = check_storage(&repo, config.database_url())
        .await
        .map_err(|e| {
            error!(error = %e, "Country database is not ready");
            e
        })?;
    info!(countries = report.country_count, "Country database ready");

    let teloxide_bot = build_teloxide_bot(&config)?;
    let router = Arc::new(CountryRouter::new(Arc::new(repo)));
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(router, bot);

    info!("Bot started successfully");

    run_dispatcher(teloxide_bot, handler_chain).await
}
