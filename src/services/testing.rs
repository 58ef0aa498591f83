//! Mock-backed unit of work for service unit tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::{
    EventRepository, MessageRepository, MockEventRepository, MockMessageRepository,
    MockPlayerRepository, MockScoutRepository, MockUserRepository, MockVideoRepository,
    PlayerRepository, ScoutRepository, TransactionContext, UnitOfWork, UserRepository,
    VideoRepository,
};

/// Repositories without expectations fail the test on first use.
#[derive(Default)]
pub(crate) struct MockUow {
    users: Arc<MockUserRepository>,
    players: Arc<MockPlayerRepository>,
    scouts: Arc<MockScoutRepository>,
    videos: Arc<MockVideoRepository>,
    events: Arc<MockEventRepository>,
    messages: Arc<MockMessageRepository>,
}

impl MockUow {
    pub(crate) fn with_users(mut self, repo: MockUserRepository) -> Self {
        self.users = Arc::new(repo);
        self
    }

    pub(crate) fn with_players(mut self, repo: MockPlayerRepository) -> Self {
        self.players = Arc::new(repo);
        self
    }

    pub(crate) fn with_scouts(mut self, repo: MockScoutRepository) -> Self {
        self.scouts = Arc::new(repo);
        self
    }

    pub(crate) fn with_events(mut self, repo: MockEventRepository) -> Self {
        self.events = Arc::new(repo);
        self
    }

    pub(crate) fn with_videos(mut self, repo: MockVideoRepository) -> Self {
        self.videos = Arc::new(repo);
        self
    }

    pub(crate) fn with_messages(mut self, repo: MockMessageRepository) -> Self {
        self.messages = Arc::new(repo);
        self
    }
}

#[async_trait]
impl UnitOfWork for MockUow {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn players(&self) -> Arc<dyn PlayerRepository> {
        self.players.clone()
    }

    fn scouts(&self) -> Arc<dyn ScoutRepository> {
        self.scouts.clone()
    }

    fn videos(&self) -> Arc<dyn VideoRepository> {
        self.videos.clone()
    }

    fn events(&self) -> Arc<dyn EventRepository> {
        self.events.clone()
    }

    fn messages(&self) -> Arc<dyn MessageRepository> {
        self.messages.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        Err(AppError::internal("transactions need a database"))
    }
}
