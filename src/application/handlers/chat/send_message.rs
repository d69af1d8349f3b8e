//! SendChatMessage - Command handler for the chat submission.

use std::sync::Arc;

use crate::domain::conversation::{Conversation, Message, MessageRole};
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode, UserId};
use crate::ports::{ConversationRepository, UserRepository};

// TODO: replace the canned reply once the AI service integration lands.
const ASSISTANT_PLACEHOLDER: &str = "I received your message. AI integration is pending.";

/// Command to append a user message to a conversation.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub user_id: UserId,
    pub content: String,
    pub conversation_id: Option<ConversationId>,
}

/// Result of a successful chat exchange: the stored user message and the
/// assistant reply that immediately follows it.
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub conversation_id: ConversationId,
    pub user_message: Message,
    pub assistant_message: Message,
}

/// Handler for chat submissions.
///
/// The two appends are separate writes, not one transaction; a crash between
/// them leaves a user message without its assistant pair. Retrying the
/// command duplicates messages - chat is not idempotent.
pub struct SendChatMessageHandler {
    users: Arc<dyn UserRepository>,
    conversations: Arc<dyn ConversationRepository>,
}

impl SendChatMessageHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        conversations: Arc<dyn ConversationRepository>,
    ) -> Self {
        Self {
            users,
            conversations,
        }
    }

    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<ChatExchange, DomainError> {
        // 1. The target user must exist
        if self.users.find_by_id(cmd.user_id).await?.is_none() {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }

        // 2. Resolve the conversation: reuse an owned one, or start fresh
        let conversation = match cmd.conversation_id {
            Some(id) => self.resolve_owned(id, cmd.user_id).await?,
            None => self.conversations.create(cmd.user_id).await?,
        };

        // 3. Append the user message, then the assistant reply
        let user_message = self
            .conversations
            .append_message(conversation.id, MessageRole::User, &cmd.content)
            .await?;

        let assistant_message = self
            .conversations
            .append_message(conversation.id, MessageRole::Assistant, ASSISTANT_PLACEHOLDER)
            .await?;

        Ok(ChatExchange {
            conversation_id: conversation.id,
            user_message,
            assistant_message,
        })
    }

    async fn resolve_owned(
        &self,
        id: ConversationId,
        user_id: UserId,
    ) -> Result<Conversation, DomainError> {
        self.conversations
            .find_owned(id, user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::ConversationNotFound, "Conversation not found")
            })
    }
}
