//! Bot configuration: BaseConfig (Telegram + log + allowlist) + HeliusConfig.

mod base;
mod bot_config;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::BotConfig;
