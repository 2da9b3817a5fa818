//! Per-chat country selection, used to resolve button presses against the last chosen country.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Chat id → english key of the selected country. Lives as long as the process; nothing is persisted.
#[derive(Clone, Default)]
pub struct SelectionStore {
    selections: Arc<RwLock<HashMap<i64, String>>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` for `chat_id`, replacing any earlier selection.
    pub async fn select(&self, chat_id: i64, key: impl Into<String>) {
        self.selections.write().await.insert(chat_id, key.into());
    }

    pub async fn get(&self, chat_id: i64) -> Option<String> {
        self.selections.read().await.get(&chat_id).cloned()
    }
}
