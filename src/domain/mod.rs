//! Domain layer - Core business entities and logic
//!
//! Accounts and their role-specific profiles, videos, events, messages,
//! search filters and the fixed form catalogs. Nothing here touches the
//! database or HTTP.

pub mod catalog;
pub mod event;
pub mod message;
pub mod password;
pub mod player;
pub mod scout;
pub mod search;
pub mod user;
pub mod video;

pub use catalog::{Choice, FormOptions, Sport};
pub use event::{Event, NewEvent};
pub use message::{
    conversation_id, latest_per_conversation, normalize_subject, ConversationSummary,
    ConversationThread, Message, NewMessage,
};
pub use password::Password;
pub use player::{calculate_age, Player, PlayerDetails, PlayerSummary};
pub use scout::{Scout, ScoutDetails};
pub use search::{PlayerFilter, PlayerSearch};
pub use user::{Account, User, UserResponse, UserRole};
pub use video::{allowed_file, secure_filename, NewVideo, Video, VideoSource};
