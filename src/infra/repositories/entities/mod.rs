//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod event;
pub mod message;
pub mod player;
pub mod scout;
pub mod user;
pub mod video;
