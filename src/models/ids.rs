use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Row id of a stored conversation turn.
///
/// Doubles as the thread reference the chat client sends back to pull
/// prior context into the next exchange, so it must never be confused
/// with other integer values at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(i64);

impl ConversationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque user handle. The prototype has no account system; the value
/// is whatever the client supplies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating on an assistant response.
///
/// Valid values are 0 through 5; 0 encodes "cleared" on the wire (the
/// rating UI sends it when the user toggles their stars off). The only
/// construction paths are `new` and the `TryFrom` impls, so a value
/// outside the range can never reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

pub const MAX_RATING: u8 = 5;

impl Rating {
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_RATING).then_some(Self(value))
    }

    /// The zero rating the toggle-off path sends.
    pub fn cleared() -> Self {
        Self(0)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// False for the cleared/zero state.
    pub fn is_set(&self) -> bool {
        self.0 > 0
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or(RatingOutOfRange(value as i64))
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Rating::new)
            .ok_or(RatingOutOfRange(value))
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Rating must be between 0 and 5, got {0}")]
pub struct RatingOutOfRange(pub i64);

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
