//! REPL runner: converts teloxide messages to core messages and passes them to the HandlerChain.

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts the long-polling REPL with the given teloxide Bot and HandlerChain.
///
/// teloxide delivers updates of one chat sequentially, and the chain is awaited inside the update
/// closure, so a chat's turns never interleave.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.user.username.as_deref().unwrap_or("unknown"),
            "Bot identity resolved, starting repl"
        ),
        Err(e) => error!(error = %e, "get_me failed; check TELEGRAM_BOT_TOKEN"),
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = %core_msg.message_type,
                "Received message"
            );

            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, chat_id = core_msg.chat.id, "Handler chain failed");
            }

            respond(())
        }
    })
    .await;

    Ok(())
}
