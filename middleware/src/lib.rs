//! # Middleware handlers
//!
//! Cross-cutting handlers that run around the conversation: turn logging and an optional
//! user allowlist.

mod auth;
mod logging;

#[cfg(test)]
mod test;

pub use auth::AuthHandler;
pub use logging::{InputKind, LoggingHandler};
