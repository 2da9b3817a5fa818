//! Bot abstraction for sending and editing messages.
//!
//! [`Bot`] is transport-agnostic; the eurobot application implements it over teloxide, tests record calls.

use crate::error::{EurobotError, Result};
use crate::types::{Chat, Keyboard};
use async_trait::async_trait;

/// Abstraction for delivering replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message with an inline keyboard attached.
    async fn send_keyboard(&self, chat: &Chat, text: &str, keyboard: &Keyboard) -> Result<()>;
    /// Replaces the text of an already-sent message. `message_id` is transport-specific (e.g. Telegram numeric string).
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
    /// Acknowledges a button press, optionally showing `notice` to the user.
    async fn answer_callback(&self, query_id: &str, notice: Option<&str>) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edit_message.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| EurobotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
