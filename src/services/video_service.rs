//! Video service - Showcase uploads for players.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::video::{VIDEO_TYPE_LOCAL, VIDEO_TYPE_YOUTUBE};
use crate::domain::{allowed_file, secure_filename, NewVideo, Video, VideoSource};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{FileStorage, UnitOfWork};

/// A file part received with an upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Name as sent by the client, unsanitized
    pub filename: String,
    pub contents: Vec<u8>,
}

/// A submitted video form, already checked for field formats.
#[derive(Debug, Clone)]
pub struct VideoUpload {
    pub titulo: String,
    pub descripcion: Option<String>,
    /// `local` or `youtube`
    pub tipo: String,
    pub url: Option<String>,
    pub archivo: Option<UploadedFile>,
}

/// Video service trait for dependency injection.
#[async_trait]
pub trait VideoService: Send + Sync {
    /// Store the video under the caller's player profile
    async fn upload(&self, user_id: Uuid, upload: VideoUpload) -> AppResult<Video>;
}

/// Concrete implementation of VideoService.
pub struct VideoManager<U: UnitOfWork> {
    uow: Arc<U>,
    storage: Arc<dyn FileStorage>,
}

impl<U: UnitOfWork> VideoManager<U> {
    pub fn new(uow: Arc<U>, storage: Arc<dyn FileStorage>) -> Self {
        Self { uow, storage }
    }

    /// Check and write a local file, returning its stored name.
    async fn store_file(&self, archivo: Option<UploadedFile>) -> AppResult<String> {
        let file = archivo
            .filter(|f| !f.filename.is_empty())
            .ok_or_else(|| AppError::field("archivo", "No se seleccionó archivo"))?;

        if !allowed_file(&file.filename) {
            tracing::warn!(filename = %file.filename, "Rejected upload extension");
            return Err(AppError::field("archivo", "Solo videos permitidos"));
        }

        let filename = secure_filename(&file.filename);
        if !allowed_file(&filename) {
            return Err(AppError::field("archivo", "Nombre de archivo no válido"));
        }

        self.storage.save(&filename, file.contents).await?;
        Ok(filename)
    }
}

#[async_trait]
impl<U: UnitOfWork> VideoService for VideoManager<U> {
    async fn upload(&self, user_id: Uuid, upload: VideoUpload) -> AppResult<Video> {
        let player = self
            .uow
            .players()
            .find_by_user_id(user_id)
            .await?
            .ok_or_not_found()?;

        let source = match upload.tipo.as_str() {
            VIDEO_TYPE_YOUTUBE => {
                let url = upload
                    .url
                    .filter(|u| !u.trim().is_empty())
                    .ok_or_else(|| AppError::field("url", "Introduce la URL del video"))?;
                VideoSource::Youtube { url }
            }
            VIDEO_TYPE_LOCAL => VideoSource::Local {
                filename: self.store_file(upload.archivo).await?,
            },
            _ => return Err(AppError::field("tipo", "Selección no válida")),
        };

        let stored = match &source {
            VideoSource::Local { filename } => Some(filename.clone()),
            VideoSource::Youtube { .. } => None,
        };
        let created = self
            .uow
            .videos()
            .create(
                player.id,
                NewVideo {
                    titulo: upload.titulo,
                    descripcion: upload.descripcion,
                    source,
                },
            )
            .await;

        let video = match created {
            Ok(video) => video,
            Err(e) => {
                if let Some(filename) = stored {
                    if let Err(cleanup) = self.storage.remove(&filename).await {
                        tracing::error!(%filename, error = ?cleanup, "Orphaned upload not removed");
                    }
                }
                return Err(e);
            }
        };

        tracing::info!(video_id = %video.id, tipo = video.source.kind(), "Video added");
        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Player;
    use crate::infra::{MockFileStorage, MockPlayerRepository, MockVideoRepository};
    use crate::services::testing::MockUow;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn player(user_id: Uuid) -> Player {
        Player {
            id: Uuid::new_v4(),
            user_id,
            nombre: "Lucía".into(),
            apellido: "Gómez".into(),
            fecha_nacimiento: None,
            edad: None,
            pais: None,
            ciudad: None,
            deporte: "tenis".into(),
            posicion: None,
            nivel: None,
            descripcion: None,
            altura: None,
            peso: None,
            phone_code: None,
            telefono: None,
            sitio_web: None,
        }
    }

    fn players_for(user_id: Uuid) -> MockPlayerRepository {
        let mut players = MockPlayerRepository::new();
        players
            .expect_find_by_user_id()
            .with(eq(user_id))
            .returning(|id| Ok(Some(player(id))));
        players
    }

    fn echo_videos() -> MockVideoRepository {
        let mut videos = MockVideoRepository::new();
        videos.expect_create().times(1).returning(|player_id, v| {
            Ok(Video {
                id: Uuid::new_v4(),
                player_id,
                titulo: v.titulo,
                descripcion: v.descripcion,
                source: v.source,
                uploaded_at: Utc::now(),
            })
        });
        videos
    }

    fn upload(tipo: &str, url: Option<&str>, archivo: Option<&str>) -> VideoUpload {
        VideoUpload {
            titulo: "Mejores jugadas".into(),
            descripcion: None,
            tipo: tipo.into(),
            url: url.map(str::to_string),
            archivo: archivo.map(|name| UploadedFile {
                filename: name.into(),
                contents: b"data".to_vec(),
            }),
        }
    }

    #[tokio::test]
    async fn test_rejects_disallowed_extension() {
        let user_id = Uuid::new_v4();
        let mut storage = MockFileStorage::new();
        storage.expect_save().never();

        let uow = MockUow::default().with_players(players_for(user_id));
        let service = VideoManager::new(Arc::new(uow), Arc::new(storage));

        let result = service
            .upload(user_id, upload("local", None, Some("virus.exe")))
            .await;
        match result {
            Err(AppError::Form(fields)) => {
                assert_eq!(fields["archivo"], vec!["Solo videos permitidos".to_string()])
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_local_without_file_rejected() {
        let user_id = Uuid::new_v4();
        let uow = MockUow::default().with_players(players_for(user_id));
        let service = VideoManager::new(Arc::new(uow), Arc::new(MockFileStorage::new()));

        let result = service.upload(user_id, upload("local", None, None)).await;
        assert!(matches!(result, Err(AppError::Form(f)) if f.contains_key("archivo")));

        let result = service.upload(user_id, upload("local", None, Some(""))).await;
        assert!(matches!(result, Err(AppError::Form(f)) if f.contains_key("archivo")));
    }

    #[tokio::test]
    async fn test_youtube_without_file_accepted() {
        let user_id = Uuid::new_v4();
        let mut storage = MockFileStorage::new();
        storage.expect_save().never();

        let uow = MockUow::default()
            .with_players(players_for(user_id))
            .with_videos(echo_videos());
        let service = VideoManager::new(Arc::new(uow), Arc::new(storage));

        let video = service
            .upload(
                user_id,
                upload("youtube", Some("https://www.youtube.com/watch?v=abc"), None),
            )
            .await
            .unwrap();
        assert_eq!(
            video.source,
            VideoSource::Youtube {
                url: "https://www.youtube.com/watch?v=abc".into()
            }
        );
    }

    #[tokio::test]
    async fn test_local_file_saved_under_secure_name() {
        let user_id = Uuid::new_v4();
        let mut storage = MockFileStorage::new();
        storage
            .expect_save()
            .withf(|name: &str, _| name == "mis_goles.mp4")
            .times(1)
            .returning(|_, _| Ok(()));

        let uow = MockUow::default()
            .with_players(players_for(user_id))
            .with_videos(echo_videos());
        let service = VideoManager::new(Arc::new(uow), Arc::new(storage));

        let video = service
            .upload(user_id, upload("local", None, Some("../mis goles.mp4")))
            .await
            .unwrap();
        assert_eq!(
            video.source,
            VideoSource::Local {
                filename: "mis_goles.mp4".into()
            }
        );
    }

    #[tokio::test]
    async fn test_stored_file_removed_when_insert_fails() {
        let user_id = Uuid::new_v4();
        let mut storage = MockFileStorage::new();
        storage.expect_save().times(1).returning(|_, _| Ok(()));
        storage
            .expect_remove()
            .withf(|name: &str| name == "gol.mp4")
            .times(1)
            .returning(|_| Ok(()));

        let mut videos = MockVideoRepository::new();
        videos
            .expect_create()
            .returning(|_, _| Err(AppError::internal("insert failed")));

        let uow = MockUow::default()
            .with_players(players_for(user_id))
            .with_videos(videos);
        let service = VideoManager::new(Arc::new(uow), Arc::new(storage));

        let result = service
            .upload(user_id, upload("local", None, Some("gol.mp4")))
            .await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
