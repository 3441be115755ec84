//! Chat endpoint.
//!
//! `POST /chat` runs the full pipeline: prior-turn context window,
//! completion provider call, persist, return the stored turn. Unlike
//! the store endpoints this handler opens no connection; the service
//! scopes its own on either side of the provider await, keeping the
//! handler future Send.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{ConversationId, ConversationTurn, UserId};
use crate::service::{self, ChatInput};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: String,
    pub prompt: String,
    #[serde(default)]
    pub conversation_id: Option<i64>,
    #[serde(default)]
    pub metadata: Option<String>,
}

/// `POST /chat` — run one exchange with Lou.
///
/// `conversationId`, when present, names the prior turn whose exchange
/// is replayed into the provider context. The response is the freshly
/// stored turn; its id is the thread reference for the next call.
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ConversationTurn>, ApiError> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::BadRequest("Prompt cannot be empty".into()));
    }

    let metadata = req.metadata.or_else(|| Some(ctx.default_metadata()));

    let turn = service::chat(
        ctx.db_path(),
        ctx.provider.as_ref(),
        ChatInput {
            user_id: UserId::new(req.user_id),
            prompt: req.prompt,
            conversation_id: req.conversation_id.map(ConversationId::new),
            metadata,
        },
    )
    .await?;

    Ok(Json(turn))
}
