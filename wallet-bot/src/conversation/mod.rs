//! Two-step conversation: collect wallets, then tokens, then reply with the qualifying wallets.
//!
//! [`SessionStore`] holds per-user state; [`Command`] recognises the bot commands; [`replies`]
//! holds the user-facing texts.

mod command;
pub mod replies;
mod session;

pub use command::Command;
pub use session::{ConversationState, Session, SessionKey, SessionStore};

/// Splits a message into one entry per line. Lines are trimmed and blank lines dropped,
/// so empty input gives an empty list. Duplicates are kept.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
