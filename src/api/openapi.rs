//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for exploring the JSON surface.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    admin_handler, auth_handler, event_handler, message_handler, profile_handler,
    search_handler, video_handler,
};
use crate::domain::{
    Choice, ConversationSummary, ConversationThread, Event, FormOptions, Message, Player,
    PlayerSearch, PlayerSummary, Scout, UserResponse, UserRole, Video, VideoSource,
};
use crate::services::{PlayerProfile, ScoutProfile, SearchPage, TokenResponse};
use crate::types::MessageResponse;

/// OpenAPI documentation for ScoutMe
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ScoutMe API",
        version = "0.1.0",
        description = "Sports scouting platform connecting players and scouts",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::login,
        auth_handler::register_player,
        auth_handler::register_scout,
        profile_handler::player_profile,
        profile_handler::update_player_profile,
        profile_handler::scout_profile,
        profile_handler::update_scout_profile,
        search_handler::search_players,
        search_handler::search_players_form,
        search_handler::api_search,
        event_handler::list_events,
        event_handler::get_event,
        event_handler::create_event,
        message_handler::inbox,
        message_handler::conversation,
        message_handler::reply,
        message_handler::send_message,
        video_handler::upload_video,
        admin_handler::list_users,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            Player,
            PlayerSummary,
            PlayerSearch,
            Scout,
            Event,
            Video,
            VideoSource,
            Message,
            ConversationSummary,
            ConversationThread,
            Choice,
            FormOptions,
            // Service payloads
            TokenResponse,
            PlayerProfile,
            ScoutProfile,
            SearchPage,
            MessageResponse,
            // Requests and handler payloads
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            auth_handler::LoginPage,
            auth_handler::RegisterPlayerRequest,
            auth_handler::RegisterScoutRequest,
            profile_handler::PlayerForm,
            profile_handler::ScoutForm,
            search_handler::SearchResults,
            event_handler::CreateEventRequest,
            event_handler::EventFormOptions,
            message_handler::SendMessageRequest,
            message_handler::ReplyRequest,
            message_handler::RecipientsPage,
            video_handler::VideoFormOptions,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and registration"),
        (name = "Profiles", description = "Player and scout profiles"),
        (name = "Search", description = "Player directory"),
        (name = "Events", description = "Scouting events"),
        (name = "Messages", description = "Threaded messaging"),
        (name = "Videos", description = "Player videos"),
        (name = "Admin", description = "Administration")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /login"))
                        .build(),
                ),
            );
        }
    }
}
