//! Conversation repository port.

use async_trait::async_trait;

use crate::domain::conversation::{Conversation, Message, MessageRole};
use crate::domain::foundation::{ConversationId, DomainError, UserId};

/// Entity-level operations on conversations and their messages.
///
/// The conversation-create plus two message-create sequence issued by the
/// chat orchestration is not wrapped in a transaction; see DESIGN.md for the
/// known consistency gap.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Looks up a conversation by id, scoped to its owner.
    ///
    /// Returns `None` both when the id does not exist and when it belongs to
    /// a different user, so callers cannot distinguish the two cases.
    async fn find_owned(
        &self,
        id: ConversationId,
        owner: UserId,
    ) -> Result<Option<Conversation>, DomainError>;

    /// Creates a new conversation owned by the given user.
    async fn create(&self, owner: UserId) -> Result<Conversation, DomainError>;

    /// Appends a message to a conversation.
    async fn append_message(
        &self,
        conversation_id: ConversationId,
        role: MessageRole,
        content: &str,
    ) -> Result<Message, DomainError>;
}
