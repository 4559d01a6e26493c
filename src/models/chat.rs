use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::MessageSender;
use crate::chat::{format_title, GREETING_MESSAGE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: MessageSender,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

/// One consultation thread. Owned and persisted by the surrounding application;
/// the engine only reads `symptoms` of active chats as context history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub messages: Vec<ChatMessage>,
    pub diagnosis: String,
    pub symptoms: Vec<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Chat {
    /// Start a new active chat seeded with the system greeting.
    pub fn new(user_id: Uuid, now: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: default_title(now),
            messages: vec![ChatMessage {
                sender: MessageSender::System,
                content: GREETING_MESSAGE.to_string(),
                timestamp: now,
            }],
            diagnosis: String::new(),
            symptoms: Vec::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a user symptom message and the system's diagnosis reply.
    ///
    /// The first user message also becomes the chat title.
    pub fn record_exchange(&mut self, content: &str, diagnosis: &str, now: NaiveDateTime) {
        self.messages.push(ChatMessage {
            sender: MessageSender::User,
            content: content.to_string(),
            timestamp: now,
        });
        self.symptoms.push(content.to_string());

        if self.user_message_count() == 1 {
            self.title = format_title(content);
        }

        self.messages.push(ChatMessage {
            sender: MessageSender::System,
            content: diagnosis.to_string(),
            timestamp: now,
        });
        self.diagnosis = diagnosis.to_string();
        self.updated_at = now;
    }

    /// Closed chats no longer contribute to context history.
    pub fn close(&mut self, now: NaiveDateTime) {
        self.is_active = false;
        self.updated_at = now;
    }

    pub fn user_message_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender == MessageSender::User)
            .count()
    }
}

/// Placeholder title until the first symptom arrives.
pub fn default_title(now: NaiveDateTime) -> String {
    format!("Консультация от {}", now.format("%d.%m.%Y"))
}
