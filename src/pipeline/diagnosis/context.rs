use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use uuid::Uuid;

use super::StoreError;
use crate::models::Chat;

/// Read access to a user's chat history.
pub trait ChatStore {
    /// Symptom lists of the user's most recently updated active chats,
    /// newest first, at most `limit` chats.
    fn recent_active_symptoms(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<Vec<String>>, StoreError>;
}

/// Flattened symptom history for a user. Store failures degrade to an
/// empty history.
pub fn recent_symptoms<S: ChatStore + ?Sized>(store: &S, user_id: Uuid, limit: usize) -> Vec<String> {
    match store.recent_active_symptoms(user_id, limit) {
        Ok(chats) => {
            let symptoms: Vec<String> = chats.into_iter().flatten().collect();
            tracing::debug!(%user_id, count = symptoms.len(), "Loaded symptom history");
            symptoms
        }
        Err(e) => {
            tracing::warn!(%user_id, error = %e, "Symptom history unavailable, continuing without it");
            Vec::new()
        }
    }
}

/// Process-local chat store.
#[derive(Default)]
pub struct InMemoryChatStore {
    chats: RwLock<Vec<Chat>>,
    unavailable: AtomicBool,
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a chat, replacing any stored chat with the same id.
    pub fn save(&self, chat: Chat) {
        let mut chats = self.chats.write().unwrap_or_else(|e| e.into_inner());
        match chats.iter_mut().find(|c| c.id == chat.id) {
            Some(existing) => *existing = chat,
            None => chats.push(chat),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<Chat> {
        self.chats
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Simulate an outage: every read fails until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

impl ChatStore for InMemoryChatStore {
    fn recent_active_symptoms(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<Vec<String>>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store marked unavailable".into()));
        }

        let chats = self.chats.read().unwrap_or_else(|e| e.into_inner());
        let mut active: Vec<&Chat> = chats
            .iter()
            .filter(|c| c.user_id == user_id && c.is_active)
            .collect();
        active.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(active
            .into_iter()
            .take(limit)
            .map(|c| c.symptoms.clone())
            .collect())
    }
}
