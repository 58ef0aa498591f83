//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
pub(crate) mod event_repository;
pub(crate) mod message_repository;
pub(crate) mod player_repository;
pub(crate) mod scout_repository;
pub(crate) mod user_repository;
pub(crate) mod video_repository;

pub use event_repository::{EventRepository, EventStore};
pub use message_repository::{MessageRepository, MessageStore};
pub use player_repository::{PlayerRepository, PlayerStore};
pub use scout_repository::{ScoutRepository, ScoutStore};
pub use user_repository::{UserRepository, UserStore};
pub use video_repository::{VideoRepository, VideoStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use event_repository::MockEventRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use message_repository::MockMessageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use player_repository::MockPlayerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use scout_repository::MockScoutRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use video_repository::MockVideoRepository;
