//! PostgreSQL implementation of ConversationRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::conversation::{Conversation, Message, MessageRole};
use crate::domain::foundation::{ConversationId, DomainError, MessageId, Timestamp, UserId};
use crate::ports::ConversationRepository;

/// PostgreSQL implementation of ConversationRepository.
#[derive(Clone)]
pub struct PostgresConversationRepository {
    pool: PgPool,
}

impl PostgresConversationRepository {
    /// Creates a new PostgresConversationRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationRepository for PostgresConversationRepository {
    async fn find_owned(
        &self,
        id: ConversationId,
        owner: UserId,
    ) -> Result<Option<Conversation>, DomainError> {
        // Ownership is part of the predicate: a conversation belonging to
        // another user is indistinguishable from one that does not exist.
        let row = sqlx::query(
            r#"
            SELECT id, user_id, created_at
            FROM conversations
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch conversation: {}", e)))?;

        Ok(row.map(|row| Conversation {
            id: ConversationId::from_uuid(row.get("id")),
            user_id: UserId::from_uuid(row.get("user_id")),
            created_at: Timestamp::from_datetime(row.get("created_at")),
        }))
    }

    async fn create(&self, owner: UserId) -> Result<Conversation, DomainError> {
        let conversation = Conversation {
            id: ConversationId::new(),
            user_id: owner,
            created_at: Timestamp::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO conversations (id, user_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(conversation.id.as_uuid())
        .bind(conversation.user_id.as_uuid())
        .bind(conversation.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert conversation: {}", e)))?;

        Ok(conversation)
    }

    async fn append_message(
        &self,
        conversation_id: ConversationId,
        role: MessageRole,
        content: &str,
    ) -> Result<Message, DomainError> {
        let message = Message {
            id: MessageId::new(),
            conversation_id,
            role,
            content: content.to_string(),
            created_at: Timestamp::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO messages (id, conversation_id, role, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(message.conversation_id.as_uuid())
        .bind(message.role.as_str())
        .bind(&message.content)
        .bind(message.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert message: {}", e)))?;

        Ok(message)
    }
}
