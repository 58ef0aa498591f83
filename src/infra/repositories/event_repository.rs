//! Event repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::event::{self, ActiveModel, Entity as EventEntity};
use crate::domain::{Event, NewEvent};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Event repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, scout_id: Uuid, event: NewEvent) -> AppResult<Event>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>>;

    /// All events, latest date first
    async fn list(&self) -> AppResult<Vec<Event>>;

    /// Events published by one scout, latest date first
    async fn list_by_scout(&self, scout_id: Uuid) -> AppResult<Vec<Event>>;
}

/// Concrete implementation of EventRepository
pub struct EventStore {
    db: DatabaseConnection,
}

impl EventStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for EventStore {
    async fn create(&self, scout_id: Uuid, event: NewEvent) -> AppResult<Event> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            scout_id: Set(scout_id),
            titulo: Set(event.titulo),
            descripcion: Set(event.descripcion),
            fecha: Set(event.fecha),
            ubicacion: Set(event.ubicacion),
            deporte: Set(event.deporte),
            capacidad_maxima: Set(event.capacidad_maxima),
            created_at: Set(Utc::now()),
        };

        Ok(Event::from(active_model.insert(&self.db).await?))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Event>> {
        let model = EventEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Event::from))
    }

    async fn list(&self) -> AppResult<Vec<Event>> {
        let models = EventEntity::find()
            .order_by_desc(event::Column::Fecha)
            .order_by_desc(event::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Event::from).collect())
    }

    async fn list_by_scout(&self, scout_id: Uuid) -> AppResult<Vec<Event>> {
        let models = EventEntity::find()
            .filter(event::Column::ScoutId.eq(scout_id))
            .order_by_desc(event::Column::Fecha)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Event::from).collect())
    }
}
