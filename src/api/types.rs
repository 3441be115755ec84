//! Shared types for the API layer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rusqlite::Connection;

use crate::db::{self, DatabaseError};
use crate::provider::CompletionProvider;

// ═══════════════════════════════════════════════════════════
// API context — shared state for the procedure router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes.
///
/// Connections are opened per request; SQLite handles are not Sync and
/// the prototype's traffic does not justify a pool.
#[derive(Clone)]
pub struct ApiContext {
    db_path: Arc<PathBuf>,
    pub provider: Arc<dyn CompletionProvider>,
    model: Arc<str>,
}

impl ApiContext {
    pub fn new(
        db_path: impl Into<PathBuf>,
        provider: Arc<dyn CompletionProvider>,
        model: &str,
    ) -> Self {
        Self {
            db_path: Arc::new(db_path.into()),
            provider,
            model: Arc::from(model),
        }
    }

    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::open_database(&self.db_path)
    }

    /// Database path, for operations that scope their own connections
    /// around await points.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Metadata written onto chat turns when the client sends none.
    pub fn default_metadata(&self) -> String {
        serde_json::json!({ "model": self.model.as_ref() }).to_string()
    }
}
