//! Unit of Work: one place to reach every repository, plus closure-based
//! transactions for writes that span several tables.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::{
    player_repository, scout_repository, user_repository, EventRepository, EventStore,
    MessageRepository, MessageStore, PlayerRepository, PlayerStore, ScoutRepository, ScoutStore,
    UserRepository, UserStore, VideoRepository, VideoStore,
};
use crate::domain::{Player, PlayerDetails, Scout, ScoutDetails, User, UserRole};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic `transaction` method.
/// Mock the repositories behind it, or run against SQLite.
#[async_trait]
pub trait UnitOfWork: Send + Sync + 'static {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn players(&self) -> Arc<dyn PlayerRepository>;

    fn scouts(&self) -> Arc<dyn ScoutRepository>;

    fn videos(&self) -> Arc<dyn VideoRepository>;

    fn events(&self) -> Arc<dyn EventRepository>;

    fn messages(&self) -> Arc<dyn MessageRepository>;

    /// Execute a closure within a transaction.
    ///
    /// Committed when the closure returns `Ok`, rolled back otherwise.
    /// Repositories obtained from `self` inside the closure do not take
    /// part in the transaction; use the context's repositories.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Repository access bound to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }

    pub fn players(&self) -> TxPlayerRepository<'_> {
        TxPlayerRepository { txn: self.txn }
    }

    pub fn scouts(&self) -> TxScoutRepository<'_> {
        TxScoutRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    player_repo: Arc<PlayerStore>,
    scout_repo: Arc<ScoutStore>,
    video_repo: Arc<VideoStore>,
    event_repo: Arc<EventStore>,
    message_repo: Arc<MessageStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            player_repo: Arc::new(PlayerStore::new(db.clone())),
            scout_repo: Arc::new(ScoutStore::new(db.clone())),
            video_repo: Arc::new(VideoStore::new(db.clone())),
            event_repo: Arc::new(EventStore::new(db.clone())),
            message_repo: Arc::new(MessageStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn players(&self) -> Arc<dyn PlayerRepository> {
        self.player_repo.clone()
    }

    fn scouts(&self) -> Arc<dyn ScoutRepository> {
        self.scout_repo.clone()
    }

    fn videos(&self) -> Arc<dyn VideoRepository> {
        self.video_repo.clone()
    }

    fn events(&self) -> Arc<dyn EventRepository> {
        self.event_repo.clone()
    }

    fn messages(&self) -> Arc<dyn MessageRepository> {
        self.message_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                TransactionContext<'a>,
            ) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxUserRepository<'_> {
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        user_repository::find_by_email(self.txn, email).await
    }

    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        role: UserRole,
    ) -> AppResult<User> {
        user_repository::insert(self.txn, email, password_hash, role).await
    }
}

/// Transaction-aware player repository.
pub struct TxPlayerRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxPlayerRepository<'_> {
    /// Create the profile, deriving `edad` from the birth date if given
    pub async fn create(&self, user_id: Uuid, details: PlayerDetails) -> AppResult<Player> {
        player_repository::insert(self.txn, user_id, details).await
    }
}

/// Transaction-aware scout repository.
pub struct TxScoutRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxScoutRepository<'_> {
    pub async fn create(&self, user_id: Uuid, details: ScoutDetails) -> AppResult<Scout> {
        scout_repository::insert(self.txn, user_id, details).await
    }
}

/// Simpler API for executing transactional operations.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
