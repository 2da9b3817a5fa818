//! Wraps teloxide::Bot and implements [`eurobot_core::Bot`]. Production code sends messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use eurobot_core::{parse_message_id, Bot as CoreBot, Chat, EurobotError, Keyboard, Result};
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId,
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Converts a core keyboard into Telegram inline markup; button actions become callback data.
pub fn inline_markup(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.action.clone()))
            .collect::<Vec<_>>()
    }))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| EurobotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_keyboard(&self, chat: &Chat, text: &str, keyboard: &Keyboard) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(inline_markup(keyboard))
            .await
            .map_err(|e| EurobotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text.to_string())
            .await
            .map_err(|e| EurobotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str, notice: Option<&str>) -> Result<()> {
        let mut request = self
            .bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()));
        if let Some(text) = notice {
            request = request.text(text.to_string());
        }
        request
            .await
            .map_err(|e| EurobotError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eurobot_core::Button;

    #[test]
    fn test_inline_markup_keeps_rows_and_callback_data() {
        let keyboard = Keyboard::from_buttons(
            vec![
                Button::new("Столица", "capital"),
                Button::new("Население", "population"),
                Button::new("Площадь", "area"),
            ],
            2,
        );

        let markup = inline_markup(&keyboard);

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[1][0].text, "Площадь");
    }
}
