//! Message service - Inbox, threads, replies and new conversations.
//!
//! Only the two participants of a thread may read or extend it. They are
//! taken from the first message of the thread.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    latest_per_conversation, Choice, ConversationSummary, ConversationThread, Message, NewMessage,
    UserResponse,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Message service trait for dependency injection.
#[async_trait]
pub trait MessageService: Send + Sync {
    /// One entry per conversation the user takes part in, newest first
    async fn inbox(&self, user_id: Uuid) -> AppResult<Vec<ConversationSummary>>;

    /// Full thread in send order. Marks messages addressed to the user as read.
    async fn conversation(&self, user_id: Uuid, conversation_id: &str)
        -> AppResult<ConversationThread>;

    /// Answer the other participant, keeping the thread subject
    async fn reply(&self, user_id: Uuid, conversation_id: &str, content: String)
        -> AppResult<Message>;

    /// Start (or continue) the thread for this pair and subject
    async fn send(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        subject: String,
        content: String,
    ) -> AppResult<Message>;

    /// Every user but the caller, labelled `email (role)`
    async fn recipients(&self, user_id: Uuid) -> AppResult<Vec<Choice>>;
}

/// Concrete implementation of MessageService using Unit of Work.
pub struct Messenger<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Messenger<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Load a thread and check that `user_id` takes part in it.
    async fn participant_thread(
        &self,
        user_id: Uuid,
        conversation_id: &str,
    ) -> AppResult<Vec<Message>> {
        let messages = self
            .uow
            .messages()
            .list_conversation(conversation_id)
            .await?;

        let first = messages.first().ok_or(AppError::NotFound)?;
        if !first.involves(user_id) {
            tracing::warn!(user_id = %user_id, conversation_id, "Conversation access denied");
            return Err(AppError::Forbidden);
        }
        Ok(messages)
    }

    async fn user_response(&self, id: Uuid) -> AppResult<Option<UserResponse>> {
        Ok(self
            .uow
            .users()
            .find_by_id(id)
            .await?
            .map(UserResponse::from))
    }
}

#[async_trait]
impl<U: UnitOfWork> MessageService for Messenger<U> {
    async fn inbox(&self, user_id: Uuid) -> AppResult<Vec<ConversationSummary>> {
        let messages = self.uow.messages().list_for_user(user_id).await?;
        let threads = latest_per_conversation(user_id, messages);

        let mut other_ids: Vec<Uuid> = threads
            .iter()
            .map(|(m, _)| m.counterpart(user_id))
            .collect();
        other_ids.sort();
        other_ids.dedup();
        let others: HashMap<Uuid, UserResponse> = self
            .uow
            .users()
            .find_by_ids(other_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, UserResponse::from(u)))
            .collect();

        Ok(threads
            .into_iter()
            .map(|(latest_message, unread_count)| ConversationSummary {
                conversation_id: latest_message.conversation_id.clone(),
                other_user: others.get(&latest_message.counterpart(user_id)).cloned(),
                latest_message,
                unread_count,
            })
            .collect())
    }

    async fn conversation(
        &self,
        user_id: Uuid,
        conversation_id: &str,
    ) -> AppResult<ConversationThread> {
        let mut messages = self.participant_thread(user_id, conversation_id).await?;

        let marked = self
            .uow
            .messages()
            .mark_read(conversation_id, user_id)
            .await?;
        if marked > 0 {
            for message in messages.iter_mut().filter(|m| m.receiver_id == user_id) {
                message.is_read = true;
            }
        }

        let first = messages.first().ok_or(AppError::NotFound)?;
        let subject = first.subject.clone();
        let other_user = self.user_response(first.counterpart(user_id)).await?;

        Ok(ConversationThread {
            conversation_id: conversation_id.to_string(),
            subject,
            messages,
            other_user,
        })
    }

    async fn reply(
        &self,
        user_id: Uuid,
        conversation_id: &str,
        content: String,
    ) -> AppResult<Message> {
        let messages = self.participant_thread(user_id, conversation_id).await?;
        let first = messages.first().ok_or(AppError::NotFound)?;

        let reply = NewMessage {
            sender_id: user_id,
            receiver_id: first.counterpart(user_id),
            subject: first.subject.clone(),
            content,
            conversation_id: conversation_id.to_string(),
        };
        self.uow.messages().create(reply).await
    }

    async fn send(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        subject: String,
        content: String,
    ) -> AppResult<Message> {
        if receiver_id == sender_id {
            return Err(AppError::field("receiver_id", "Destinatario no válido"));
        }
        if self.uow.users().find_by_id(receiver_id).await?.is_none() {
            return Err(AppError::field("receiver_id", "Destinatario no válido"));
        }

        let message = self
            .uow
            .messages()
            .create(NewMessage::new(sender_id, receiver_id, subject, content))
            .await?;
        tracing::info!(conversation_id = %message.conversation_id, "Message sent");
        Ok(message)
    }

    async fn recipients(&self, user_id: Uuid) -> AppResult<Vec<Choice>> {
        Ok(self
            .uow
            .users()
            .list_except(user_id)
            .await?
            .into_iter()
            .map(|u| Choice::new(u.id.to_string(), u.recipient_label()))
            .collect())
    }
}
