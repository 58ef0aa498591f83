//! Message repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::message::{self, ActiveModel, Entity as MessageEntity};
use crate::domain::{Message, NewMessage};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Message repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: NewMessage) -> AppResult<Message>;

    /// Every message the user sent or received, newest first
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Message>>;

    /// One thread in send order
    async fn list_conversation(&self, conversation_id: &str) -> AppResult<Vec<Message>>;

    /// Flag every message of the thread addressed to `receiver_id` as read.
    /// Returns the number of rows changed.
    async fn mark_read(&self, conversation_id: &str, receiver_id: Uuid) -> AppResult<u64>;
}

/// Concrete implementation of MessageRepository
pub struct MessageStore {
    db: DatabaseConnection,
}

impl MessageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageStore {
    async fn create(&self, message: NewMessage) -> AppResult<Message> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            sender_id: Set(message.sender_id),
            receiver_id: Set(message.receiver_id),
            subject: Set(message.subject),
            content: Set(message.content),
            is_read: Set(false),
            sent_at: Set(Utc::now()),
            conversation_id: Set(message.conversation_id),
        };

        Ok(Message::from(active_model.insert(&self.db).await?))
    }

    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Message>> {
        let models = MessageEntity::find()
            .filter(
                Condition::any()
                    .add(message::Column::SenderId.eq(user_id))
                    .add(message::Column::ReceiverId.eq(user_id)),
            )
            .order_by_desc(message::Column::SentAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Message::from).collect())
    }

    async fn list_conversation(&self, conversation_id: &str) -> AppResult<Vec<Message>> {
        let models = MessageEntity::find()
            .filter(message::Column::ConversationId.eq(conversation_id))
            .order_by_asc(message::Column::SentAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Message::from).collect())
    }

    async fn mark_read(&self, conversation_id: &str, receiver_id: Uuid) -> AppResult<u64> {
        let result = MessageEntity::update_many()
            .col_expr(message::Column::IsRead, Expr::value(true))
            .filter(message::Column::ConversationId.eq(conversation_id))
            .filter(message::Column::ReceiverId.eq(receiver_id))
            .filter(message::Column::IsRead.eq(false))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
