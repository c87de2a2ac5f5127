//! Conversation handler: drives the wallet → token → result sequence for each user in a chat.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};
use transfer_fetcher::TransferFetcher;

use crate::conversation::{
    parse_lines, replies, Command, ConversationState, SessionKey, SessionStore,
};

/// Handles `/start`, `/cancel`, `/help` and the two list inputs. Replies are sent through `bot`;
/// the final reply of each turn is also returned as `HandlerResponse::Reply`.
pub struct ConversationHandler {
    bot: Arc<dyn Bot>,
    fetcher: Arc<dyn TransferFetcher>,
    sessions: Arc<SessionStore>,
}

impl ConversationHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        fetcher: Arc<dyn TransferFetcher>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            bot,
            fetcher,
            sessions,
        }
    }

    async fn reply(&self, message: &Message, text: String) -> Result<HandlerResponse> {
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }

    async fn on_command(&self, message: &Message, command: Command) -> Result<HandlerResponse> {
        let key = SessionKey::of(message);
        match command {
            Command::Start => {
                let replaced = self.sessions.begin(key).await;
                info!(
                    chat_id = key.chat_id,
                    user_id = key.user_id,
                    replaced = replaced,
                    "step: conversation started"
                );
                self.reply(message, replies::START_PROMPT.to_string()).await
            }
            Command::Cancel => match self.sessions.finish(key).await {
                Some(session) => {
                    info!(
                        chat_id = key.chat_id,
                        user_id = key.user_id,
                        age_secs = session.age_secs(),
                        "step: conversation cancelled"
                    );
                    self.reply(message, replies::CANCELLED.to_string()).await
                }
                None => {
                    debug!(session = %key, "Cancel without active session ignored");
                    Ok(HandlerResponse::Ignore)
                }
            },
            Command::Help => self.reply(message, replies::HELP.to_string()).await,
            Command::Unknown(name) => {
                debug!(session = %key, command = %name, "Unknown command ignored");
                Ok(HandlerResponse::Ignore)
            }
        }
    }

    async fn on_wallets(&self, message: &Message) -> Result<HandlerResponse> {
        let wallets = parse_lines(&message.content);
        let wallet_count = wallets.len();
        let key = SessionKey::of(message);
        self.sessions.advance(key, wallets).await?;
        info!(
            chat_id = key.chat_id,
            user_id = key.user_id,
            wallet_count = wallet_count,
            "step: wallets received"
        );
        self.reply(message, replies::tokens_prompt(wallet_count)).await
    }

    async fn on_tokens(&self, message: &Message, wallets: Vec<String>) -> Result<HandlerResponse> {
        let key = SessionKey::of(message);
        self.sessions.finish(key).await;
        let tokens = parse_lines(&message.content);
        info!(
            chat_id = key.chat_id,
            user_id = key.user_id,
            wallet_count = wallets.len(),
            token_count = tokens.len(),
            "step: tokens received, checking wallets"
        );

        self.bot.reply_to(message, replies::WAIT_NOTICE).await?;

        let report = wallet_filter::check_wallets(self.fetcher.as_ref(), &wallets, &tokens).await;
        let qualifying = report.qualifying();
        info!(
            chat_id = key.chat_id,
            user_id = key.user_id,
            qualifying = qualifying.len(),
            failed_fetches = report.failed_count(),
            "step: conversation finished"
        );

        self.reply(message, replies::render_result(&qualifying)).await
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() {
            return Ok(HandlerResponse::Ignore);
        }

        if let Some(command) = Command::parse(&message.content) {
            return self.on_command(message, command).await;
        }

        match self.sessions.state(SessionKey::of(message)).await {
            Some(ConversationState::AwaitingWallets) => self.on_wallets(message).await,
            Some(ConversationState::AwaitingTokens { wallets }) => {
                self.on_tokens(message, wallets).await
            }
            None => {
                debug!(
                    chat_id = message.chat.id,
                    user_id = message.user.id,
                    "Text outside a conversation ignored"
                );
                Ok(HandlerResponse::Ignore)
            }
        }
    }
}
