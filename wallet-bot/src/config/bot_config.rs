//! BotConfig: BaseConfig + HeliusConfig. Use load() for env-based loading.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use helius_transfers::HeliusConfig;

use super::BaseConfig;

/// Bot config, loaded once at startup and handed to the components that need each part.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub helius: HeliusConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides the bot token.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let helius = HeliusConfig::from_env()?;
        Ok(Self { base, helius })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.helius.validate()
    }

    pub fn telegram(&self) -> &TelegramConfig {
        &self.base.telegram
    }
    pub fn helius(&self) -> &HeliusConfig {
        &self.helius
    }
    pub fn bot_token(&self) -> &str {
        &self.base.telegram.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn allowed_user_ids(&self) -> &[i64] {
        &self.base.allowed_user_ids
    }
}
