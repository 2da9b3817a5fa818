//! Core types: user, chat, message, keyboard, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// What produced the message: typed text or a pressed inline button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    /// Button press; `query_id` must be answered through [`crate::Bot::answer_callback`].
    Callback { query_id: String },
}

/// A single inbound event with user, chat and content.
///
/// For [`MessageKind::Callback`] the `content` is the button's callback data and `id` is the id of the
/// message carrying the keyboard (empty when Telegram no longer exposes it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub kind: MessageKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Returns the callback query id when this message is a button press.
    pub fn callback_query_id(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Callback { query_id } => Some(query_id.as_str()),
            MessageKind::Text => None,
        }
    }
}

/// Inline button: visible label and the callback data sent back when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub action: String,
}

impl Button {
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }
}

/// Inline keyboard as rows of buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// Lays out buttons left to right, `per_row` buttons per row (at least one).
    pub fn from_buttons(buttons: Vec<Button>, per_row: usize) -> Self {
        let per_row = per_row.max(1);
        let mut rows = Vec::new();
        let mut row = Vec::with_capacity(per_row);
        for button in buttons {
            row.push(button);
            if row.len() == per_row {
                rows.push(std::mem::replace(&mut row, Vec::with_capacity(per_row)));
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
        Self { rows }
    }

    /// Iterates over every button, row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// Handler result for the chain. `Reply(text)` carries the delivered text so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the reply text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buttons(n: usize) -> Vec<Button> {
        (0..n)
            .map(|i| Button::new(format!("b{}", i), format!("a{}", i)))
            .collect()
    }

    #[test]
    fn test_keyboard_from_buttons_fills_rows() {
        let keyboard = Keyboard::from_buttons(buttons(5), 2);
        let sizes: Vec<usize> = keyboard.rows.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(keyboard.buttons().count(), 5);
        assert_eq!(keyboard.rows[2][0].action, "a4");
    }

    #[test]
    fn test_keyboard_zero_per_row_means_one() {
        let keyboard = Keyboard::from_buttons(buttons(3), 0);
        assert_eq!(keyboard.rows.len(), 3);
    }

    #[test]
    fn test_callback_query_id() {
        let mut message = Message {
            id: "1".to_string(),
            user: User {
                id: 1,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 1,
                chat_type: "private".to_string(),
            },
            content: "capital".to_string(),
            kind: MessageKind::Text,
            created_at: Utc::now(),
        };
        assert_eq!(message.callback_query_id(), None);

        message.kind = MessageKind::Callback {
            query_id: "q-1".to_string(),
        };
        assert_eq!(message.callback_query_id(), Some("q-1"));
    }
}
