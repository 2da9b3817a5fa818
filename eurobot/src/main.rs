//! eurobot binary: run the bot or check the country database. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use country_storage::CountryRepository;
use eurobot::config::database_url_from_env;
use eurobot::{check_storage, run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Check { database_url } => handle_check(database_url).await,
    }
}

/// Handle the check command: prints the table status, fails when storage is unavailable.
async fn handle_check(database_url: Option<String>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_target(false)
        .init();

    let database_url = database_url.unwrap_or_else(database_url_from_env);
    let repo = CountryRepository::new(&database_url)?;
    let report = check_storage(&repo, &database_url).await?;

    println!(
        "Table 'countries' is ready in {}: {} countries.",
        report.database_url, report.country_count
    );
    Ok(())
}
