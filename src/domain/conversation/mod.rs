//! Conversation aggregate: chat threads and their messages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConversationId, MessageId, Timestamp, UserId};

/// A chat thread owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: ConversationId,
    pub user_id: UserId,
    pub created_at: Timestamp,
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    /// Storage representation, identical to the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }

    /// Parses the storage representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(MessageRole::User),
            "assistant" => Some(MessageRole::Assistant),
            _ => None,
        }
    }
}

/// A single message within a conversation.
///
/// Messages are ordered by `created_at` within their conversation; in the
/// current flow every user message is immediately followed by exactly one
/// assistant message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub role: MessageRole,
    pub content: String,
    pub created_at: Timestamp,
}

/// Message content bounds enforced by the chat request validator.
pub const MESSAGE_MIN_CHARS: usize = 1;
pub const MESSAGE_MAX_CHARS: usize = 5000;
