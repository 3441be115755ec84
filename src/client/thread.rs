//! Chat thread state machine.
//!
//! Drives the transcript a chat screen renders: which messages are
//! visible, whether a request is in flight, and which stored turn the
//! next prompt threads from. Transport stays outside; `submit` hands
//! back the request to send, `on_response`/`on_error` feed the outcome
//! back in.

use serde::Serialize;

use crate::client::session::SessionStore;
use crate::markdown;
use crate::models::{ConversationId, ConversationTurn, MessageRole, Rating};

/// When the user's own message appears in the transcript.
///
/// `Immediate` echoes at submit time, so the message shows even if the
/// request later fails. `OnResponse` holds it until the server confirms
/// the stored turn, so the transcript only ever shows persisted
/// exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoPolicy {
    #[default]
    Immediate,
    OnResponse,
}

/// One rendered transcript entry.
///
/// `conversation_id` is present only on messages that came from a
/// stored turn; the rating control attaches to assistant messages that
/// carry one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMessage {
    pub role: MessageRole,
    pub content: String,
    pub conversation_id: Option<ConversationId>,
    pub rating: Option<Rating>,
}

/// What the transport should send for a submitted prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub prompt: String,
    pub conversation_id: Option<ConversationId>,
}

/// Transcript plus in-flight state for one chat screen.
pub struct ChatThread<S: SessionStore> {
    session: S,
    echo: EchoPolicy,
    messages: Vec<DisplayMessage>,
    pending: bool,
}

impl<S: SessionStore> ChatThread<S> {
    pub fn new(session: S, echo: EchoPolicy) -> Self {
        Self {
            session,
            echo,
            messages: Vec::new(),
            pending: false,
        }
    }

    /// Submit a prompt.
    ///
    /// Returns the request to send, or `None` when the prompt is blank
    /// or another request is still in flight. The request carries the
    /// current conversation reference so the server can thread context.
    pub fn submit(&mut self, prompt: &str) -> Option<ChatRequest> {
        let prompt = prompt.trim();
        if prompt.is_empty() || self.pending {
            return None;
        }

        self.pending = true;
        if self.echo == EchoPolicy::Immediate {
            self.messages.push(DisplayMessage {
                role: MessageRole::User,
                content: prompt.to_string(),
                conversation_id: None,
                rating: None,
            });
        }

        Some(ChatRequest {
            prompt: prompt.to_string(),
            conversation_id: self.session.get(),
        })
    }

    /// Feed in the stored turn the server answered with.
    ///
    /// Appends the assistant reply (list markers reflowed for display),
    /// records the turn as the new thread reference, and clears the
    /// in-flight flag.
    pub fn on_response(&mut self, turn: &ConversationTurn) {
        if self.echo == EchoPolicy::OnResponse {
            self.messages.push(DisplayMessage {
                role: MessageRole::User,
                content: turn.prompt.clone(),
                conversation_id: Some(turn.id),
                rating: None,
            });
        }

        self.messages.push(DisplayMessage {
            role: MessageRole::Assistant,
            content: markdown::reformat_lists(&turn.response),
            conversation_id: Some(turn.id),
            rating: turn.rating,
        });

        self.session.set(turn.id);
        self.pending = false;
    }

    /// Feed in a failed request.
    ///
    /// The error renders as an assistant-styled message with no stored
    /// turn behind it, so it cannot be rated. The thread reference is
    /// untouched; the next submit threads from the same prior turn.
    pub fn on_error(&mut self, message: &str) {
        self.messages.push(DisplayMessage {
            role: MessageRole::Assistant,
            content: format!("Error: {message}"),
            conversation_id: None,
            rating: None,
        });
        self.pending = false;
    }

    /// Start over: empty transcript, no thread reference.
    ///
    /// An in-flight request stays pending; if its response lands later
    /// it is appended to the fresh transcript and becomes the new
    /// reference.
    pub fn new_conversation(&mut self) {
        self.messages.clear();
        self.session.clear();
    }

    pub fn messages(&self) -> &[DisplayMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The stored turn the next submit will thread from.
    pub fn conversation_id(&self) -> Option<ConversationId> {
        self.session.get()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
