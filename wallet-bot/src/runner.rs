use anyhow::{Context, Result};
use dbot_core::init_tracing;
use dbot_telegram::run_repl;
use helius_transfers::{HeliusConfig, HeliusTransfers};
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;

/// Main entry: validate config, init logging, build components and handler chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        log_file = %config.log_file(),
        telegram_api_url = ?config.telegram().telegram_api_url,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram().build_bot()?;
    let components = build_bot_components(&config, &teloxide_bot)?;
    let handler_chain = build_handler_chain(&components, config.allowed_user_ids());

    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain).await
}

/// One filter pass outside Telegram: loads HeliusConfig from env and returns the qualifying wallets.
pub async fn run_check(wallets: Vec<String>, mints: Vec<String>) -> Result<Vec<String>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .with_target(false)
        .init();

    let config = HeliusConfig::from_env().context("Load Helius config (HELIUS_API_KEY)")?;
    config.validate()?;
    let fetcher = HeliusTransfers::new(config)?;

    Ok(wallet_filter::filter_qualifying(&fetcher, &wallets, &mints).await)
}
