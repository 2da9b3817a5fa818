//! Bot configuration loaded from the environment.

mod bot_config;


pub use bot_config::{database_url_from_env, BotConfig, DEFAULT_DATABASE_URL, DEFAULT_LOG_FILE};
