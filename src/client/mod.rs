//! Client-side chat state.
//!
//! Everything a UI needs to drive the chat screen without owning any
//! logic itself: the thread transcript (`thread`), per-message star
//! ratings (`rating`), the recent-conversations panel (`history`), and
//! conversation session persistence (`session`). All of it is plain
//! synchronous state; the embedding UI owns the transport.

pub mod history;
pub mod rating;
pub mod session;
pub mod thread;

pub use history::{recent_turns, turn_messages, DEFAULT_RECENT_LIMIT};
pub use rating::{RatingControl, RatingUpdate, TogglePolicy};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use thread::{ChatRequest, ChatThread, DisplayMessage, EchoPolicy};
