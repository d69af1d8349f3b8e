//! HTTP DTOs for the chat endpoint.

use serde::{Deserialize, Serialize};

use crate::adapters::http::validation::{check_text_bounds, parse_uuid_field};
use crate::application::handlers::chat::{ChatExchange, SendChatMessageCommand};
use crate::domain::conversation::{Message, MessageRole, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS};
use crate::domain::foundation::{
    ConversationId, DomainError, FieldErrors, MessageId, Timestamp, UserId,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Chat submission payload.
///
/// UUID-typed fields arrive as raw strings so a malformed id becomes a field
/// error in the 400 details map instead of a body-level deserialization
/// failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    /// Applies the chat schema, producing a typed command or the complete
    /// field-error map.
    pub fn validate(self) -> Result<SendChatMessageCommand, DomainError> {
        let mut errors = FieldErrors::new();

        let user_id = parse_uuid_field(&mut errors, "userId", &self.user_id);

        check_text_bounds(
            &mut errors,
            "message",
            &self.message,
            MESSAGE_MIN_CHARS,
            MESSAGE_MAX_CHARS,
        );

        let conversation_id = match &self.conversation_id {
            Some(raw) => parse_uuid_field(&mut errors, "conversationId", raw)
                .map(ConversationId::from_uuid),
            None => None,
        };

        match user_id {
            Some(user_id) => {
                errors.into_result()?;
                Ok(SendChatMessageCommand {
                    user_id: UserId::from_uuid(user_id),
                    content: self.message,
                    conversation_id,
                })
            }
            // errors is non-empty here: the malformed userId was recorded.
            None => Err(DomainError::validation(errors)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Message projection returned by the chat endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: MessageId,
    pub role: MessageRole,
    pub content: String,
    pub created_at: Timestamp,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            role: message.role,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

/// Full 200 body for a chat exchange.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub conversation_id: ConversationId,
    pub user_message: MessageResponse,
    pub assistant_message: MessageResponse,
}

impl From<ChatExchange> for ChatResponse {
    fn from(exchange: ChatExchange) -> Self {
        Self {
            conversation_id: exchange.conversation_id,
            user_message: exchange.user_message.into(),
            assistant_message: exchange.assistant_message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn request_from(value: serde_json::Value) -> ChatRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn minimal_valid_payload_passes() {
        let user_id = Uuid::new_v4();
        let request = request_from(json!({
            "userId": user_id.to_string(),
            "message": "hello",
        }));

        let command = request.validate().unwrap();
        assert_eq!(command.user_id, UserId::from_uuid(user_id));
        assert_eq!(command.content, "hello");
        assert!(command.conversation_id.is_none());
    }

    #[test]
    fn supplied_conversation_id_is_parsed() {
        let conversation_id = Uuid::new_v4();
        let request = request_from(json!({
            "userId": Uuid::new_v4().to_string(),
            "message": "hello",
            "conversationId": conversation_id.to_string(),
        }));

        let command = request.validate().unwrap();
        assert_eq!(
            command.conversation_id,
            Some(ConversationId::from_uuid(conversation_id))
        );
    }

    #[test]
    fn malformed_user_id_is_a_field_error() {
        let request = request_from(json!({
            "userId": "not-a-uuid",
            "message": "hello",
        }));

        let err = request.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.details.get("userId").is_some());
    }

    #[test]
    fn empty_message_is_a_field_error() {
        let request = request_from(json!({
            "userId": Uuid::new_v4().to_string(),
            "message": "",
        }));

        let err = request.validate().unwrap_err();
        assert!(err.details.get("message").is_some());
    }

    #[test]
    fn oversized_message_is_a_field_error() {
        let request = request_from(json!({
            "userId": Uuid::new_v4().to_string(),
            "message": "x".repeat(5001),
        }));

        let err = request.validate().unwrap_err();
        assert!(err.details.get("message").is_some());
    }

    #[test]
    fn message_of_exactly_5000_chars_passes() {
        let request = request_from(json!({
            "userId": Uuid::new_v4().to_string(),
            "message": "x".repeat(5000),
        }));

        assert!(request.validate().is_ok());
    }

    #[test]
    fn bad_user_id_and_bad_conversation_id_both_reported() {
        let request = request_from(json!({
            "userId": "nope",
            "message": "hello",
            "conversationId": "also-nope",
        }));

        let err = request.validate().unwrap_err();
        assert!(err.details.get("userId").is_some());
        assert!(err.details.get("conversationId").is_some());
    }

    #[test]
    fn response_serializes_camel_case_with_lowercase_roles() {
        let response = MessageResponse {
            id: MessageId::new(),
            role: MessageRole::Assistant,
            content: "hi".to_string(),
            created_at: Timestamp::now(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["role"], "assistant");
        assert!(value["createdAt"].is_string());
    }
}
