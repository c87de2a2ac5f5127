//! Base config: Telegram Bot connection, logging, user allowlist. Loaded from env.

use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;
use std::env;

/// Base config: Telegram-related, logging and access control.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_BOT_TOKEN / BOT_TOKEN, TELEGRAM_API_URL / TELOXIDE_API_URL
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
    /// ALLOWED_USER_IDS (comma-separated); empty means everyone may use the bot
    pub allowed_user_ids: Vec<i64>,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides the bot token from env if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/wallet-bot.log".to_string());
        let allowed_user_ids = match env::var("ALLOWED_USER_IDS") {
            Ok(raw) => parse_user_ids(&raw)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            telegram,
            log_file,
            allowed_user_ids,
        })
    }

    /// Validate config (e.g. telegram_api_url must be valid URL if set).
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }
}

fn parse_user_ids(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("ALLOWED_USER_IDS contains a non-numeric id: {}", s))
        })
        .collect()
}
