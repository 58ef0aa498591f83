//! Service Container - Centralized service access.
//!
//! Every service shares one `Persistence` unit of work over the same
//! connection pool.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, EventManager, EventService, MessageService, Messenger,
    PlayerDirectory, ProfileManager, ProfileService, SearchService, UserManager, UserService,
    VideoManager, VideoService,
};
use crate::config::Config;
use crate::infra::{FileStorage, LocalStorage, Persistence};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn profiles(&self) -> Arc<dyn ProfileService>;

    fn search(&self) -> Arc<dyn SearchService>;

    fn events(&self) -> Arc<dyn EventService>;

    fn messages(&self) -> Arc<dyn MessageService>;

    fn videos(&self) -> Arc<dyn VideoService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    profile_service: Arc<dyn ProfileService>,
    search_service: Arc<dyn SearchService>,
    event_service: Arc<dyn EventService>,
    message_service: Arc<dyn MessageService>,
    video_service: Arc<dyn VideoService>,
}

impl Services {
    /// Create service container from database connection and config.
    ///
    /// Uploaded videos go to `config.upload_folder`.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let storage: Arc<dyn FileStorage> =
            Arc::new(LocalStorage::new(config.upload_folder.clone()));
        Self::with_storage(db, config, storage)
    }

    /// Same as `from_connection` with a caller supplied file store.
    pub fn with_storage(
        db: sea_orm::DatabaseConnection,
        config: Config,
        storage: Arc<dyn FileStorage>,
    ) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            user_service: Arc::new(UserManager::new(uow.clone())),
            profile_service: Arc::new(ProfileManager::new(uow.clone())),
            search_service: Arc::new(PlayerDirectory::new(uow.clone())),
            event_service: Arc::new(EventManager::new(uow.clone())),
            message_service: Arc::new(Messenger::new(uow.clone())),
            video_service: Arc::new(VideoManager::new(uow, storage)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profile_service.clone()
    }

    fn search(&self) -> Arc<dyn SearchService> {
        self.search_service.clone()
    }

    fn events(&self) -> Arc<dyn EventService> {
        self.event_service.clone()
    }

    fn messages(&self) -> Arc<dyn MessageService> {
        self.message_service.clone()
    }

    fn videos(&self) -> Arc<dyn VideoService> {
        self.video_service.clone()
    }
}
