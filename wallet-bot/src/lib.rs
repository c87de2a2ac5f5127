//! # Wallet bot application
//!
//! Asks a Telegram user for wallet addresses and token mints, checks each wallet's transfer
//! history through the Helius API, and replies with the wallets that touched every token.
//!
//! Wires dbot-core, handler-chain, middleware and dbot-telegram with the conversation in
//! [`conversation`] / [`handlers`], and the wallet-filter and helius-transfers crates.

pub mod cli;
pub mod components;
pub mod config;
pub mod conversation;
pub mod handlers;
pub mod runner;

pub use cli::{Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::{BaseConfig, BotConfig};
pub use conversation::{Command, ConversationState, SessionKey, SessionStore};
pub use handlers::ConversationHandler;
pub use runner::{run_bot, run_check};

pub use dbot_core::{
    Bot, Chat, DbotError, Handler, HandlerError, HandlerResponse, Message, Result, User,
};
