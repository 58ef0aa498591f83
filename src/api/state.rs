//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, EventService, MessageService, ProfileService, SearchService, ServiceContainer,
    Services, UserService, VideoService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub profile_service: Arc<dyn ProfileService>,
    pub search_service: Arc<dyn SearchService>,
    pub event_service: Arc<dyn EventService>,
    pub message_service: Arc<dyn MessageService>,
    pub video_service: Arc<dyn VideoService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Directory served under `/uploads`
    pub upload_folder: PathBuf,
    /// Request body limit in bytes
    pub max_content_length: usize,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let upload_folder = config.upload_folder.clone();
        let max_content_length = config.max_content_length;
        let container = Services::from_connection(database.get_connection(), config);

        Self::from_services(&container, database, upload_folder, max_content_length)
    }

    /// Create application state from any service container.
    pub fn from_services(
        container: &dyn ServiceContainer,
        database: Arc<Database>,
        upload_folder: PathBuf,
        max_content_length: usize,
    ) -> Self {
        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            profile_service: container.profiles(),
            search_service: container.search(),
            event_service: container.events(),
            message_service: container.messages(),
            video_service: container.videos(),
            database,
            upload_folder,
            max_content_length,
        }
    }
}
