//! Conversation session persistence.
//!
//! The chat UI keeps exactly one piece of session state: which stored
//! turn the next prompt should thread from. `SessionStore` abstracts
//! where that reference lives; the desktop build persists it to a JSON
//! file so reopening the app resumes the conversation, and tests use
//! the in-memory store.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::ConversationId;

/// Where the current conversation reference lives.
///
/// Implementations swallow their own I/O failures: losing the
/// reference degrades to starting a fresh conversation, which is
/// always a valid state.
pub trait SessionStore {
    fn get(&self) -> Option<ConversationId>;
    fn set(&mut self, id: ConversationId);
    fn clear(&mut self);
}

// ═══════════════════════════════════════════════════════════
// In-memory store
// ═══════════════════════════════════════════════════════════

/// Session store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    current: Option<ConversationId>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<ConversationId> {
        self.current
    }

    fn set(&mut self, id: ConversationId) {
        self.current = Some(id);
    }

    fn clear(&mut self) {
        self.current = None;
    }
}

// ═══════════════════════════════════════════════════════════
// File-backed store
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    conversation_id: Option<i64>,
}

/// Session store backed by a JSON file.
///
/// A missing or unreadable file reads as an empty session. Writes that
/// fail are logged and dropped rather than surfaced to the UI.
pub struct FileSessionStore {
    path: PathBuf,
    current: Option<ConversationId>,
}

impl FileSessionStore {
    /// Open the store, restoring whatever the file holds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = Self::load(&path);
        Self { path, current }
    }

    fn load(path: &Path) -> Option<ConversationId> {
        let data = std::fs::read_to_string(path).ok()?;
        let stored: StoredSession = serde_json::from_str(&data).ok()?;
        stored.conversation_id.map(ConversationId::new)
    }

    fn persist(&self) {
        let stored = StoredSession {
            conversation_id: self.current.map(|id| id.as_i64()),
        };
        match serde_json::to_string(&stored) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    tracing::warn!(path = %self.path.display(), "Failed to persist session: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session: {e}"),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<ConversationId> {
        self.current
    }

    fn set(&mut self, id: ConversationId) {
        self.current = Some(id);
        self.persist();
    }

    fn clear(&mut self) {
        self.current = None;
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), "Failed to remove session file: {e}");
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ── MemorySessionStore ────────────────────────────────

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemorySessionStore::new();
        assert_eq!(store.get(), None);

        store.set(ConversationId::new(7));
        assert_eq!(store.get(), Some(ConversationId::new(7)));

        store.clear();
        assert_eq!(store.get(), None);
    }

    // ── FileSessionStore ──────────────────────────────────

    #[test]
    fn file_store_restores_after_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("session.json");

        let mut store = FileSessionStore::open(&path);
        assert_eq!(store.get(), None);
        store.set(ConversationId::new(42));

        let reopened = FileSessionStore::open(&path);
        assert_eq!(reopened.get(), Some(ConversationId::new(42)));
    }

    #[test]
    fn file_store_clear_removes_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("session.json");

        let mut store = FileSessionStore::open(&path);
        store.set(ConversationId::new(3));
        assert!(path.exists());

        store.clear();
        assert!(!path.exists());

        let reopened = FileSessionStore::open(&path);
        assert_eq!(reopened.get(), None);
    }

    #[test]
    fn missing_file_reads_as_empty_session() {
        let store = FileSessionStore::open("/nonexistent/asklou-session.json");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn corrupt_file_reads_as_empty_session() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("session.json");
        std::fs::write(&path, "not json{{").unwrap();

        let store = FileSessionStore::open(&path);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn clear_without_a_file_is_quiet() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileSessionStore::open(tmp.path().join("never-written.json"));

        store.clear();
        assert_eq!(store.get(), None);
    }
}
