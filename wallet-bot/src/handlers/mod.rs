//! Handlers owned by the app crate.

mod conversation_handler;

pub use conversation_handler::ConversationHandler;
