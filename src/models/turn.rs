use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::{ConversationId, Rating, UserId};

/// One stored prompt/response exchange, the unit of persistence.
///
/// `timestamp` is assigned by the database at insert and immutable;
/// the rating-update path touches `rating` and nothing else. `metadata`
/// is an opaque serialized payload (model name, source tag and the
/// like) that the service never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTurn {
    pub id: ConversationId,
    pub user_id: UserId,
    pub prompt: String,
    pub response: String,
    pub feedback: Option<String>,
    pub rating: Option<Rating>,
    pub timestamp: NaiveDateTime,
    pub metadata: Option<String>,
}

/// Fields of a turn before the database has assigned id and timestamp.
#[derive(Debug, Clone)]
pub struct NewConversationTurn {
    pub user_id: UserId,
    pub prompt: String,
    pub response: String,
    pub feedback: Option<String>,
    pub rating: Option<Rating>,
    pub metadata: Option<String>,
}
