// File: src/flash.rs
// Purpose: Flash-scope carry-over between two requests

use crate::message::ScopedMessages;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Flash messages handed from one request to the next
///
/// Serializable so the web layer can keep it in a session or a cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlashMessages(ScopedMessages);

impl FlashMessages {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn messages(&self) -> &ScopedMessages {
        &self.0
    }

    pub fn into_inner(self) -> ScopedMessages {
        self.0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<ScopedMessages> for FlashMessages {
    fn from(messages: ScopedMessages) -> Self {
        Self(messages)
    }
}

/// Where flash messages wait for the next request of a session
pub trait FlashStore: Send + Sync {
    /// Store flash messages for `session_id`, appending to any not yet taken
    fn put(&self, session_id: &str, messages: FlashMessages);

    /// Remove and return the flash messages of `session_id`
    fn take(&self, session_id: &str) -> Option<FlashMessages>;
}

/// In-process [`FlashStore`]
///
/// Entries live until `take`, `discard` or `clear`; nothing expires on its
/// own. Call `discard` when a session ends without another request.
#[derive(Debug, Default)]
pub struct MemoryFlashStore {
    entries: Mutex<HashMap<String, ScopedMessages>>,
}

impl MemoryFlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with pending flash messages
    pub fn pending(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Drop the pending flash messages of one session
    pub fn discard(&self, session_id: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .is_some()
    }

    /// Drop every pending flash message
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl FlashStore for MemoryFlashStore {
    fn put(&self, session_id: &str, messages: FlashMessages) {
        if messages.is_empty() {
            return;
        }

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .entry(session_id.to_string())
            .or_default()
            .extend(messages.into_inner());
    }

    fn take(&self, session_id: &str) -> Option<FlashMessages> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .map(FlashMessages::from)
    }
}
