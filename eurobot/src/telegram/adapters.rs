//! Adapters from Telegram (teloxide) types to eurobot_core types.

use eurobot_core::{Chat, Message, MessageKind, ToCoreMessage, ToCoreUser, User};
use teloxide::types::CallbackQuery;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message (typed text) for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.0.text().unwrap_or("").to_string(),
            kind: MessageKind::Text,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Wraps a teloxide CallbackQuery (button press) for conversion to core [`Message`].
///
/// The core message id is the id of the message carrying the keyboard; it is empty when Telegram
/// no longer exposes that message, and the chat then falls back to the user's private chat.
pub struct TelegramCallbackWrapper<'a>(pub &'a CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let (id, chat) = match self.0.message.as_ref() {
            Some(source) => (
                source.id().to_string(),
                Chat {
                    id: source.chat().id.0,
                    chat_type: format!("{:?}", source.chat().kind),
                },
            ),
            None => (
                String::new(),
                Chat {
                    id: user.id,
                    chat_type: "private".to_string(),
                },
            ),
        };

        Message {
            id,
            user,
            chat,
            content: self.0.data.clone().unwrap_or_default(),
            kind: MessageKind::Callback {
                query_id: self.0.id.0.clone(),
            },
            created_at: chrono::Utc::now(),
        }
    }
}
