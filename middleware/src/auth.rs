//! Optional user allowlist.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, Message, Result};
use tracing::{debug, warn};

/// Lets only allowlisted users reach the conversation. Anyone else gets `rejection` as a reply
/// and the chain stops there.
pub struct AuthHandler {
    bot: Arc<dyn Bot>,
    allowed_users: HashSet<i64>,
    rejection: String,
}

impl AuthHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        allowed_users: impl IntoIterator<Item = i64>,
        rejection: impl Into<String>,
    ) -> Self {
        Self {
            bot,
            allowed_users: allowed_users.into_iter().collect(),
            rejection: rejection.into(),
        }
    }

    pub fn is_allowed(&self, user_id: i64) -> bool {
        self.allowed_users.contains(&user_id)
    }
}

#[async_trait]
impl Handler for AuthHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        let user_id = message.user.id;
        if self.is_allowed(user_id) {
            debug!(user_id = user_id, "User on allowlist");
            return Ok(true);
        }
        warn!(
            user_id = user_id,
            chat_id = message.chat.id,
            "User not on allowlist, turn rejected"
        );
        self.bot.reply_to(message, &self.rejection).await?;
        Ok(false)
    }
}
