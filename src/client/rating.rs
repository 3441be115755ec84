//! Star rating control state.
//!
//! One control per rated assistant message. Clicks apply to local
//! state immediately so the stars repaint without waiting on the
//! server; `reconcile` folds the server's stored value back in when
//! the update call answers.

use crate::models::{ConversationId, Rating, MAX_RATING};

/// What a second click on the already-selected star does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TogglePolicy {
    /// Clicking the current star clears the rating (sends 0).
    #[default]
    ToggleOff,
    /// Clicking the current star re-sends the same value.
    AlwaysSet,
}

/// The update the transport should send for a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingUpdate {
    pub conversation_id: ConversationId,
    pub rating: Rating,
}

/// Five-star control attached to one stored turn.
pub struct RatingControl {
    conversation_id: ConversationId,
    policy: TogglePolicy,
    current: Option<Rating>,
}

impl RatingControl {
    pub fn new(
        conversation_id: ConversationId,
        current: Option<Rating>,
        policy: TogglePolicy,
    ) -> Self {
        Self {
            conversation_id,
            policy,
            current,
        }
    }

    /// Handle a click on `star` (1 through 5).
    ///
    /// Returns the update to send, or `None` for a click outside the
    /// star row. Local state moves optimistically; the server's answer
    /// arrives later through `reconcile`.
    pub fn click(&mut self, star: u8) -> Option<RatingUpdate> {
        if !(1..=MAX_RATING).contains(&star) {
            return None;
        }
        let clicked = Rating::new(star)?;

        let next = match self.policy {
            TogglePolicy::ToggleOff if self.current == Some(clicked) => Rating::cleared(),
            _ => clicked,
        };

        self.current = Some(next);
        Some(RatingUpdate {
            conversation_id: self.conversation_id,
            rating: next,
        })
    }

    /// Fold in the rating the server actually stored.
    pub fn reconcile(&mut self, stored: Option<Rating>) {
        self.current = stored;
    }

    pub fn current(&self) -> Option<Rating> {
        self.current
    }

    pub fn conversation_id(&self) -> ConversationId {
        self.conversation_id
    }

    /// Whether the star at `star` (1 through 5) renders filled.
    pub fn filled(&self, star: u8) -> bool {
        match self.current {
            Some(rating) => star >= 1 && star <= rating.as_u8(),
            None => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
