//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) and reach
//! repositories through the Unit of Work.

mod auth_service;
pub mod container;
mod event_service;
mod message_service;
mod profile_service;
mod search_service;
mod user_service;
mod video_service;

#[cfg(test)]
pub(crate) mod testing;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{
    AuthService, Authenticator, Claims, LoginOutcome, NewPlayerAccount, NewScoutAccount,
    TokenResponse,
};
pub use event_service::{EventManager, EventService};
pub use message_service::{MessageService, Messenger};
pub use profile_service::{PlayerProfile, ProfileManager, ProfileService, ScoutProfile};
pub use search_service::{PlayerDirectory, SearchPage, SearchService};
pub use user_service::{UserManager, UserService};
pub use video_service::{UploadedFile, VideoManager, VideoService, VideoUpload};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
