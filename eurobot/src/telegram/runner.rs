//! Dispatcher runner: converts teloxide messages and callback queries to core messages and passes them to HandlerChain.

use anyhow::Result;
use eurobot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Dispatches message and callback-query updates until Ctrl-C.
/// Updates of one chat are handled in order; different chats run concurrently.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            info!(username = ?me.user.username, "Connected to Telegram");
        }
        Err(e) => warn!(error = %e, "get_me failed"),
    }

    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    if msg.text().is_none() {
        return Ok(());
    }

    let core_msg = TelegramMessageWrapper(&msg).to_core();
    if let Err(e) = chain.handle(&core_msg).await {
        error!(error = %e, chat_id = core_msg.chat.id, "Handler chain failed");
    }
    Ok(())
}

async fn on_callback(query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramCallbackWrapper(&query).to_core();
    if let Err(e) = chain.handle(&core_msg).await {
        error!(error = %e, chat_id = core_msg.chat.id, "Handler chain failed");
    }
    Ok(())
}
