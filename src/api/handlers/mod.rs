//! HTTP request handlers.

pub mod admin_handler;
pub mod auth_handler;
pub mod event_handler;
pub mod message_handler;
pub mod profile_handler;
pub mod search_handler;
pub mod video_handler;

pub use admin_handler::admin_routes;
pub use auth_handler::{auth_routes, session_routes};
pub use event_handler::event_routes;
pub use message_handler::message_routes;
pub use profile_handler::profile_routes;
pub use search_handler::{public_search_routes, search_routes};
pub use video_handler::video_routes;

use std::borrow::Cow;

use validator::ValidationError;

pub(crate) const REQUIRED: &str = "Este campo es obligatorio";

/// Trimmed text, or `None` when blank.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Rejects text that is empty once surrounding whitespace is removed.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::from(REQUIRED));
        return Err(err);
    }
    Ok(())
}
