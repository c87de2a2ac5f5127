//! User-facing reply texts.

pub const START_PROMPT: &str =
    "Send me the wallet addresses to check, one per line.\nSend /cancel to stop.";

pub const WAIT_NOTICE: &str = "Checking wallets, please wait...";

pub const RESULT_HEADER: &str = "Wallets that interacted with all tokens:";

pub const NO_MATCH: &str = "No wallets interacted with all of the given tokens.";

pub const CANCELLED: &str = "Cancelled. Send /start to begin again.";

pub const NOT_ALLOWED: &str = "Sorry, this bot is private.";

pub const HELP: &str = "/start - check which wallets interacted with a set of tokens\n\
/cancel - abort the current check\n\
/help - show this message";

/// Prompt for the token list, echoing how many wallets were received.
pub fn tokens_prompt(wallet_count: usize) -> String {
    format!(
        "Got {} wallet(s). Now send the token mint addresses, one per line.",
        wallet_count
    )
}

/// Final reply: header plus one qualifying wallet per line, or [`NO_MATCH`].
pub fn render_result(qualifying: &[String]) -> String {
    if qualifying.is_empty() {
        NO_MATCH.to_string()
    } else {
        format!("{}\n{}", RESULT_HEADER, qualifying.join("\n"))
    }
}
