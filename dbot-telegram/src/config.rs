//! Minimal Telegram config: bot token and optional Bot API URL.
//! Loaded from TELEGRAM_BOT_TOKEN (or BOT_TOKEN) and TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::{Context, Result};
use std::env;

/// Telegram connectivity config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN when given.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .or_else(|_| env::var("BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN (or BOT_TOKEN) not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Uses the given token; no API URL override.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Checks that the API URL override, if set, parses.
    pub fn validate(&self) -> Result<()> {
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

    /// Builds the teloxide Bot, pointing it at the API URL override when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
