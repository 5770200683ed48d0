use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

const MAX_MESSAGES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// In-memory conversation continuity store: conversation id to a bounded
/// message deque, oldest evicted first. Process-local only.
#[derive(Debug, Default)]
pub struct ConversationMemory {
    inner: Mutex<HashMap<String, VecDeque<Message>>>,
}

impl ConversationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given conversation id, or mint a fresh one.
    pub fn ensure(&self, conversation_id: Option<String>) -> String {
        conversation_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }

    pub fn append(&self, conversation_id: &str, role: &str, content: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let messages = inner.entry(conversation_id.to_string()).or_default();
        if messages.len() == MAX_MESSAGES {
            messages.pop_front();
        }
        messages.push_back(Message {
            role: role.to_string(),
            content: content.to_string(),
        });
    }

    /// Snapshot of the conversation, oldest first. Unknown ids are empty.
    pub fn history(&self, conversation_id: &str) -> Vec<Message> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner
            .get(conversation_id)
            .map(|messages| messages.iter().cloned().collect())
            .unwrap_or_default()
    }
}
