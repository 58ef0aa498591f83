//! Infrastructure layer - External systems integration
//!
//! Database connection and migrations, repositories, the unit of work
//! and upload storage.

pub mod db;
pub mod repositories;
pub mod storage;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    EventRepository, EventStore, MessageRepository, MessageStore, PlayerRepository, PlayerStore,
    ScoutRepository, ScoutStore, UserRepository, UserStore, VideoRepository, VideoStore,
};
pub use storage::{FileStorage, LocalStorage};
pub use unit_of_work::{
    Persistence, TransactionContext, TxPlayerRepository, TxScoutRepository, TxUserRepository,
    UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockEventRepository, MockMessageRepository, MockPlayerRepository, MockScoutRepository,
    MockUserRepository, MockVideoRepository,
};
#[cfg(any(test, feature = "test-utils"))]
pub use storage::MockFileStorage;
