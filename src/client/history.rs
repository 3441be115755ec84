//! Conversation list presentation.
//!
//! The recent-conversations panel shows the newest few stored turns.
//! The server hands back turns unordered; ordering and truncation are
//! presentation concerns and live here.

use crate::client::thread::DisplayMessage;
use crate::models::{ConversationTurn, MessageRole};

/// How many turns the recent-conversations panel shows.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// The newest `limit` turns, newest first.
///
/// Stored timestamps have one-second resolution, so ties break on id
/// to keep turns created in the same second in insertion order.
pub fn recent_turns(turns: &[ConversationTurn], limit: usize) -> Vec<&ConversationTurn> {
    let mut ordered: Vec<&ConversationTurn> = turns.iter().collect();
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
    ordered.truncate(limit);
    ordered
}

/// Project one stored turn into its transcript pair: the user's prompt
/// followed by the assistant's response.
pub fn turn_messages(turn: &ConversationTurn) -> [DisplayMessage; 2] {
    [
        DisplayMessage {
            role: MessageRole::User,
            content: turn.prompt.clone(),
            conversation_id: Some(turn.id),
            rating: None,
        },
        DisplayMessage {
            role: MessageRole::Assistant,
            content: turn.response.clone(),
            conversation_id: Some(turn.id),
            rating: turn.rating,
        },
    ]
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
