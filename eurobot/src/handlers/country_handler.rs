//! Country handler: parses commands and button presses, routes them and delivers the reply through [`Bot`].

use std::sync::Arc;

use async_trait::async_trait;
use eurobot_core::{Bot, Handler, HandlerResponse, Message, MessageKind, Result};
use tracing::{debug, instrument, warn};

use crate::router::{CountryRouter, Delivery, Event, Reply};

/// Terminal handler of the chain. Text that is not a slash command is ignored.
pub struct CountryHandler {
    router: Arc<CountryRouter>,
    bot: Arc<dyn Bot>,
}

impl CountryHandler {
    pub fn new(router: Arc<CountryRouter>, bot: Arc<dyn Bot>) -> Self {
        Self { router, bot }
    }

    async fn deliver(&self, message: &Message, reply: &Reply) -> Result<()> {
        let query_id = message.callback_query_id();

        let delivered = match (reply.delivery, query_id) {
            (Delivery::Notice, Some(query_id)) => {
                return self.bot.answer_callback(query_id, Some(&reply.text)).await;
            }
            (Delivery::Edit, Some(_)) if !message.id.is_empty() => {
                // Telegram rejects edits that leave the text unchanged; edit failures are logged only.
                if let Err(e) = self
                    .bot
                    .edit_message(&message.chat, &message.id, &reply.text)
                    .await
                {
                    warn!(error = %e, chat_id = message.chat.id, "Failed to edit message");
                }
                Ok(())
            }
            _ => match &reply.keyboard {
                Some(keyboard) => {
                    self.bot
                        .send_keyboard(&message.chat, &reply.text, keyboard)
                        .await
                }
                None => self.bot.send_message(&message.chat, &reply.text).await,
            },
        };

        // The button press is answered even when delivery failed.
        if let Some(query_id) = query_id {
            self.bot.answer_callback(query_id, None).await?;
        }
        delivered
    }
}

#[async_trait]
impl Handler for CountryHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let event = match &message.kind {
            MessageKind::Text => match Event::from_text(&message.content) {
                Some(event) => event,
                None => {
                    debug!(chat_id = message.chat.id, "Not a command, ignoring");
                    return Ok(HandlerResponse::Ignore);
                }
            },
            MessageKind::Callback { .. } => Event::from_callback(&message.content),
        };

        let reply = self.router.route(message.chat.id, event).await;
        self.deliver(message, &reply).await?;

        Ok(HandlerResponse::Reply(reply.text))
    }
}
