//! BotConfig: Telegram connection, log file and country database. Use load() for env-based loading.

use anyhow::Result;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "countries.db";
pub const DEFAULT_LOG_FILE: &str = "logs/eurobot.log";

/// Reads DATABASE_URL, falling back to [`DEFAULT_DATABASE_URL`].
pub fn database_url_from_env() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// DATABASE_URL: SQLite file path or `sqlite:` URL of the pre-filled countries table
    pub database_url: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            database_url: database_url_from_env(),
        })
    }

    /// Validate config (token must be non-empty, telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Parsed custom Bot API URL, if configured.
    pub fn api_url(&self) -> Result<Option<reqwest::Url>> {
        self.telegram_api_url
            .as_deref()
            .map(reqwest::Url::parse)
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL: {}", e))
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram_api_url.as_deref()
    }
}
