//! Event service - Listing and publishing scouting events.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Event, NewEvent};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Event service trait for dependency injection.
#[async_trait]
pub trait EventService: Send + Sync {
    /// All events, latest date first
    async fn list_events(&self) -> AppResult<Vec<Event>>;

    async fn get_event(&self, id: Uuid) -> AppResult<Event>;

    /// Publish an event under the caller's scout profile
    async fn create_event(&self, user_id: Uuid, event: NewEvent) -> AppResult<Event>;
}

/// Concrete implementation of EventService using Unit of Work.
pub struct EventManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EventManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> EventService for EventManager<U> {
    async fn list_events(&self) -> AppResult<Vec<Event>> {
        self.uow.events().list().await
    }

    async fn get_event(&self, id: Uuid) -> AppResult<Event> {
        self.uow.events().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_event(&self, user_id: Uuid, event: NewEvent) -> AppResult<Event> {
        let scout = self
            .uow
            .scouts()
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::validation("Debes completar tu perfil de ojeador primero."))?;

        let created = self.uow.events().create(scout.id, event).await?;
        tracing::info!(event_id = %created.id, scout_id = %scout.id, "Event created");
        Ok(created)
    }
}
