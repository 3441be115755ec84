//! Conversation turn endpoints.
//!
//! - `GET /conversations` — every stored turn
//! - `GET /conversations/:id` — one turn, JSON `null` when absent
//! - `POST /conversations` — store a caller-assembled turn
//! - `PUT /conversations/:id/rating` — set the rating on a turn

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{ConversationId, ConversationTurn, NewConversationTurn, Rating, UserId};
use crate::service;

/// `GET /conversations` — all turns, unordered.
pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<ConversationTurn>>, ApiError> {
    let conn = ctx.open_db()?;
    Ok(Json(service::list_all(&conn)?))
}

/// `GET /conversations/:id` — absent rows answer `null`, not 404.
pub async fn get_by_id(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Option<ConversationTurn>>, ApiError> {
    let conn = ctx.open_db()?;
    Ok(Json(service::get_by_id(&conn, ConversationId::new(id))?))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTurnRequest {
    pub user_id: String,
    pub prompt: String,
    pub response: String,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub metadata: Option<String>,
}

/// `POST /conversations` — persist a turn assembled by the caller.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(req): Json<CreateTurnRequest>,
) -> Result<Json<ConversationTurn>, ApiError> {
    let rating = req
        .rating
        .map(Rating::try_from)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let conn = ctx.open_db()?;
    let turn = service::create(
        &conn,
        NewConversationTurn {
            user_id: UserId::new(req.user_id),
            prompt: req.prompt,
            response: req.response,
            feedback: req.feedback,
            rating,
            metadata: req.metadata,
        },
    )?;
    Ok(Json(turn))
}

#[derive(Deserialize)]
pub struct UpdateRatingRequest {
    pub rating: i64,
}

/// `PUT /conversations/:id/rating` — range-check happens in the
/// service; 0 means cleared.
pub async fn update_rating(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRatingRequest>,
) -> Result<Json<ConversationTurn>, ApiError> {
    let conn = ctx.open_db()?;
    let turn = service::rate(&conn, ConversationId::new(id), req.rating)?;
    Ok(Json(turn))
}
