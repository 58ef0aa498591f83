//! Video repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::video::{self, ActiveModel, Entity as VideoEntity};
use crate::domain::{NewVideo, Video, VideoSource};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Video repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn create(&self, player_id: Uuid, video: NewVideo) -> AppResult<Video>;

    /// Videos of one player, newest first
    async fn list_by_player(&self, player_id: Uuid) -> AppResult<Vec<Video>>;
}

/// Concrete implementation of VideoRepository
pub struct VideoStore {
    db: DatabaseConnection,
}

impl VideoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VideoRepository for VideoStore {
    async fn create(&self, player_id: Uuid, video: NewVideo) -> AppResult<Video> {
        let tipo = video.source.kind().to_string();
        let (url, filename) = match video.source {
            VideoSource::Local { filename } => (None, Some(filename)),
            VideoSource::Youtube { url } => (Some(url), None),
        };

        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            player_id: Set(player_id),
            titulo: Set(video.titulo),
            descripcion: Set(video.descripcion),
            tipo: Set(tipo),
            url: Set(url),
            filename: Set(filename),
            uploaded_at: Set(Utc::now()),
        };

        Video::try_from(active_model.insert(&self.db).await?)
    }

    async fn list_by_player(&self, player_id: Uuid) -> AppResult<Vec<Video>> {
        VideoEntity::find()
            .filter(video::Column::PlayerId.eq(player_id))
            .order_by_desc(video::Column::UploadedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Video::try_from)
            .collect()
    }
}
