//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "eurobot")]
#[command(about = "Telegram bot about European countries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Check that the country database is ready (DATABASE_URL, or --database-url).
    Check {
        #[arg(short, long)]
        database_url: Option<String>,
    },
}
