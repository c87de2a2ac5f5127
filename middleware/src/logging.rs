//! Turn logging: what kind of input arrived and how the turn ended.

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info};

/// Shape of an incoming message as the conversation sees it. Content is never logged, only counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// `/name` or `/name@bot`; carries the bare name.
    Command(String),
    /// Newline list (wallets or mints); carries the number of non-blank lines.
    Entries(usize),
    NonText,
}

impl InputKind {
    pub fn of(message: &Message) -> Self {
        if !message.is_text() {
            return InputKind::NonText;
        }
        let text = message.content.trim();
        if let Some(rest) = text.strip_prefix('/') {
            let word = rest.split_whitespace().next().unwrap_or("");
            let name = word.split('@').next().unwrap_or("");
            return InputKind::Command(name.to_lowercase());
        }
        InputKind::Entries(text.lines().filter(|l| !l.trim().is_empty()).count())
    }
}

/// Logs each turn: input kind and entry count in before(), outcome and turn latency in after().
/// Never alters the chain.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        match InputKind::of(message) {
            InputKind::Command(name) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                command = %name,
                "turn: command"
            ),
            InputKind::Entries(count) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                entries = count,
                "turn: list input"
            ),
            InputKind::NonText => debug!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                message_type = %message.message_type,
                "turn: non-text input"
            ),
        }
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let turn_ms = (Utc::now() - message.created_at).num_milliseconds();
        match response {
            HandlerResponse::Reply(text) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                reply_lines = text.lines().count(),
                turn_ms = turn_ms,
                "turn: replied"
            ),
            other => debug!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                outcome = ?other,
                turn_ms = turn_ms,
                "turn: no reply"
            ),
        }
        Ok(())
    }
}
