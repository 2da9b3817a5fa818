//! Shared test support: a seeded SQLite countries table and a Bot that records every call.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use eurobot_core::{Bot, Chat, EurobotError, Keyboard, Message, MessageKind, User};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Temp database; the directory lives as long as the fixture.
pub struct Fixture {
    _dir: TempDir,
    pub database_url: String,
}

/// Creates a database with a small `countries` table (France, Poland, Malta).
pub async fn seeded_database() -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("countries.db");
    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options)
        .await
        .expect("Failed to open fixture database");

    sqlx::query(
        "CREATE TABLE countries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            english_name TEXT NOT NULL UNIQUE,
            region TEXT NOT NULL,
            capital TEXT,
            population INTEGER,
            area REAL,
            density REAL,
            percentage REAL,
            borders TEXT
        )",
    )
    .execute(&pool)
    .await
    .expect("Failed to create table");

    sqlx::query(
        "INSERT INTO countries
            (name, english_name, region, capital, population, area, density, percentage, borders)
         VALUES
            ('Франция', 'France', 'Западная Европа', 'Париж',
             68000000, 551695.0, 123.3, 9.14, 'Бельгия, Германия, Испания'),
            ('Польша', 'Poland', 'Восточная Европа', 'Варшава',
             37600000, 312696.0, 120.2, 5.05, 'Германия, Чехия'),
            ('Мальта', 'Malta', 'Южная Европа', 'Валлетта',
             535000, 316.0, 1693.0, 0.07, NULL)",
    )
    .execute(&pool)
    .await
    .expect("Failed to insert countries");

    pool.close().await;

    Fixture {
        database_url: path.display().to_string(),
        _dir: dir,
    }
}

/// Path inside a fresh temp dir where no database file exists.
pub fn missing_database() -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let database_url = dir.path().join("absent.db").display().to_string();
    Fixture {
        database_url,
        _dir: dir,
    }
}

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Send { chat_id: i64, text: String },
    Keyboard {
        chat_id: i64,
        text: String,
        actions: Vec<String>,
    },
    Edit {
        chat_id: i64,
        message_id: String,
        text: String,
    },
    Answer {
        query_id: String,
        notice: Option<String>,
    },
}

/// Bot that records calls instead of talking to Telegram.
///
/// Edits fail when `fail_edits` is set; sends (with or without keyboard) fail when `fail_sends` is
/// set. Failed calls are not recorded.
#[derive(Default)]
pub struct RecordingBot {
    pub calls: Mutex<Vec<Call>>,
    pub fail_edits: bool,
    pub fail_sends: bool,
}

impl RecordingBot {
    pub fn failing_edits() -> Self {
        Self {
            fail_edits: true,
            ..Self::default()
        }
    }

    pub fn failing_sends() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> eurobot_core::Result<()> {
        if self.fail_sends {
            return Err(EurobotError::Bot("chat not found".to_string()));
        }
        self.record(Call::Send {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &Keyboard,
    ) -> eurobot_core::Result<()> {
        if self.fail_sends {
            return Err(EurobotError::Bot("chat not found".to_string()));
        }
        self.record(Call::Keyboard {
            chat_id: chat.id,
            text: text.to_string(),
            actions: keyboard.buttons().map(|b| b.action.clone()).collect(),
        });
        Ok(())
    }

    async fn edit_message(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
    ) -> eurobot_core::Result<()> {
        if self.fail_edits {
            return Err(EurobotError::Bot("message is not modified".to_string()));
        }
        self.record(Call::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn answer_callback(
        &self,
        query_id: &str,
        notice: Option<&str>,
    ) -> eurobot_core::Result<()> {
        self.record(Call::Answer {
            query_id: query_id.to_string(),
            notice: notice.map(str::to_string),
        });
        Ok(())
    }
}

fn message(chat_id: i64, id: &str, content: &str, kind: MessageKind) -> Message {
    Message {
        id: id.to_string(),
        user: User {
            id: chat_id,
            username: Some("traveller".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        kind,
        created_at: Utc::now(),
    }
}

/// Typed text message.
pub fn text_message(chat_id: i64, content: &str) -> Message {
    message(chat_id, "1", content, MessageKind::Text)
}

/// Button press on message `message_id` carrying `data`.
pub fn callback_message(chat_id: i64, message_id: &str, data: &str) -> Message {
    message(
        chat_id,
        message_id,
        data,
        MessageKind::Callback {
            query_id: format!("q-{}", data),
        },
    )
}
