//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::Result;
use dbot_core::Bot;
use dbot_telegram::TelegramBotAdapter;
use handler_chain::HandlerChain;
use helius_transfers::HeliusTransfers;
use middleware::{AuthHandler, LoggingHandler};
use tracing::{info, instrument};
use transfer_fetcher::TransferFetcher;

use crate::config::BotConfig;
use crate::conversation::{replies, SessionStore};
use crate::handlers::ConversationHandler;

/// Dependencies of the handler chain; tests build this directly with mock bot and fetcher.
#[derive(Clone)]
pub struct BotComponents {
    pub bot: Arc<dyn Bot>,
    pub fetcher: Arc<dyn TransferFetcher>,
    pub sessions: Arc<SessionStore>,
}

impl BotComponents {
    /// Components with an empty session store.
    pub fn new(bot: Arc<dyn Bot>, fetcher: Arc<dyn TransferFetcher>) -> Self {
        Self {
            bot,
            fetcher,
            sessions: Arc::new(SessionStore::new()),
        }
    }
}

/// Builds the Telegram adapter and the Helius fetcher from config.
#[instrument(skip(config, teloxide_bot))]
pub fn build_bot_components(
    config: &BotConfig,
    teloxide_bot: &teloxide::Bot,
) -> Result<BotComponents> {
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let fetcher: Arc<dyn TransferFetcher> =
        Arc::new(HeliusTransfers::new(config.helius().clone())?);
    info!(
        helius_base_url = %config.helius().base_url,
        timeout_secs = config.helius().timeout_secs,
        "Using Helius transfer fetcher"
    );
    Ok(BotComponents::new(bot, fetcher))
}

/// Builds the handler chain (logging → optional allowlist → conversation).
pub fn build_handler_chain(components: &BotComponents, allowed_user_ids: &[i64]) -> HandlerChain {
    let mut chain = HandlerChain::new().add_handler(Arc::new(LoggingHandler));
    if !allowed_user_ids.is_empty() {
        info!(allowed = allowed_user_ids.len(), "User allowlist enabled");
        chain = chain.add_handler(Arc::new(AuthHandler::new(
            components.bot.clone(),
            allowed_user_ids.iter().copied(),
            replies::NOT_ALLOWED,
        )));
    }
    chain.add_handler(Arc::new(ConversationHandler::new(
        components.bot.clone(),
        components.fetcher.clone(),
        components.sessions.clone(),
    )))
}
