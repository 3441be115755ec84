//! Conversation service.
//!
//! Server-side operations over stored conversation turns:
//! - `list_all` / `get_by_id` — plain reads, absent rows are not errors
//! - `create` — persist a caller-assembled turn
//! - `rate` — set the rating on an existing turn, nothing else
//! - `chat` — the composite path: build a context window, call the
//!   completion provider, persist the exchange as a new row
//!
//! Validation lives here so every transport reaching these functions
//! gets the same rules. Ordering of `list_all` output is left to
//! callers; the service makes no promise.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

use crate::db::{self, DatabaseError};
use crate::models::{ConversationId, ConversationTurn, NewConversationTurn, Rating, UserId};
use crate::prompt;
use crate::provider::{CompletionProvider, ProviderError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Conversation turn not found: id {0}")]
    NotFound(ConversationId),

    #[error("{0}")]
    Provider(#[from] ProviderError),

    #[error("Database error: {0}")]
    Database(DatabaseError),
}

impl From<DatabaseError> for ServiceError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Database(other),
        }
    }
}

/// Input to `chat`. `conversation_id` references the prior turn whose
/// prompt/response should precede the new prompt in the context window.
#[derive(Debug, Clone)]
pub struct ChatInput {
    pub user_id: UserId,
    pub prompt: String,
    pub conversation_id: Option<ConversationId>,
    pub metadata: Option<String>,
}

/// Every stored turn, unordered.
pub fn list_all(conn: &Connection) -> Result<Vec<ConversationTurn>, ServiceError> {
    Ok(db::list_turns(conn)?)
}

/// Lookup by id. Absent is a valid outcome, not an error.
pub fn get_by_id(
    conn: &Connection,
    id: ConversationId,
) -> Result<Option<ConversationTurn>, ServiceError> {
    Ok(db::get_turn(conn, id)?)
}

/// Persist a caller-assembled turn. Prompt and response are required.
pub fn create(
    conn: &Connection,
    input: NewConversationTurn,
) -> Result<ConversationTurn, ServiceError> {
    if input.prompt.trim().is_empty() {
        return Err(ServiceError::Validation("Prompt cannot be empty".into()));
    }
    if input.response.trim().is_empty() {
        return Err(ServiceError::Validation("Response cannot be empty".into()));
    }

    let turn = db::insert_turn(conn, &input)?;
    tracing::debug!(turn_id = %turn.id, user_id = %turn.user_id, "Stored conversation turn");
    Ok(turn)
}

/// Set the rating on an existing turn.
///
/// Takes the raw wire value and validates it here, so nothing outside
/// [0,5] can reach storage. Repeated identical calls simply re-set the
/// same value: toggle-off behavior, where a client offers it, is that
/// client's decision to send 0.
pub fn rate(
    conn: &Connection,
    id: ConversationId,
    rating: i64,
) -> Result<ConversationTurn, ServiceError> {
    let rating = Rating::try_from(rating).map_err(|e| ServiceError::Validation(e.to_string()))?;

    let turn = db::update_turn_rating(conn, id, rating)?;
    tracing::debug!(turn_id = %id, rating = rating.as_u8(), "Updated turn rating");
    Ok(turn)
}

/// Run one chat exchange: context window -> completion provider -> new
/// stored turn.
///
/// Takes the database path rather than an open connection. The prior
/// turn is read on a short-lived connection that closes before the
/// provider await, and the reply is persisted on a fresh one; a
/// connection borrowed across the await would make this future
/// non-Send (rusqlite handles are not Sync), which no async transport
/// could drive. A supplied conversation id pulls that turn's
/// prompt/response into the context ahead of the new prompt; an id
/// with no matching row just means no history. Provider failure
/// surfaces as an error and writes nothing.
pub async fn chat(
    db_path: &Path,
    provider: &dyn CompletionProvider,
    input: ChatInput,
) -> Result<ConversationTurn, ServiceError> {
    if input.prompt.trim().is_empty() {
        return Err(ServiceError::Validation("Prompt cannot be empty".into()));
    }

    let messages = {
        let conn = db::open_database(db_path)?;
        let prior = match input.conversation_id {
            Some(id) => db::get_turn(&conn, id)?,
            None => None,
        };
        prompt::build_context_window(prior.as_ref(), &input.prompt)
    };

    tracing::debug!(
        user_id = %input.user_id,
        context_messages = messages.len(),
        "Calling completion provider"
    );

    let response = provider.complete(&messages).await?;

    let conn = db::open_database(db_path)?;
    let turn = db::insert_turn(
        &conn,
        &NewConversationTurn {
            user_id: input.user_id,
            prompt: input.prompt,
            response,
            feedback: None,
            rating: None,
            metadata: input.metadata,
        },
    )?;

    tracing::info!(turn_id = %turn.id, user_id = %turn.user_id, "Chat turn persisted");
    Ok(turn)
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
