//! Player search handlers.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use utoipa::ToSchema;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{FormOptions, Player, PlayerSearch};
use crate::errors::AppResult;
use crate::services::SearchPage;

/// Search page payload for signed-in users
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResults {
    pub jugadores: Vec<Player>,
    pub total: usize,
    /// Choice lists for the filter form
    pub opciones: FormOptions,
}

impl SearchResults {
    fn new(jugadores: Vec<Player>) -> Self {
        Self {
            total: jugadores.len(),
            jugadores,
            opciones: FormOptions::build(),
        }
    }
}

/// Create search routes (authenticated)
pub fn search_routes() -> Router<AppState> {
    Router::new().route("/buscar", get(search_players).post(search_players_form))
}

/// Public JSON search, open to cross-origin reads
pub fn public_search_routes() -> Router<AppState> {
    Router::new()
        .route("/api/buscar", get(api_search))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
}

/// Search players with filters from the query string
#[utoipa::path(
    get,
    path = "/buscar",
    tag = "Search",
    security(("bearer_auth" = [])),
    params(PlayerSearch),
    responses(
        (status = 200, description = "Matching players", body = SearchResults),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn search_players(
    State(state): State<AppState>,
    Query(search): Query<PlayerSearch>,
) -> AppResult<Json<SearchResults>> {
    let players = state.search_service.search(search).await?;
    Ok(Json(SearchResults::new(players)))
}

/// Search players with filters from a JSON body
#[utoipa::path(
    post,
    path = "/buscar",
    tag = "Search",
    security(("bearer_auth" = [])),
    request_body = PlayerSearch,
    responses(
        (status = 200, description = "Matching players", body = SearchResults),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn search_players_form(
    State(state): State<AppState>,
    ValidatedJson(search): ValidatedJson<PlayerSearch>,
) -> AppResult<Json<SearchResults>> {
    let players = state.search_service.search(search).await?;
    Ok(Json(SearchResults::new(players)))
}

/// Public player search
#[utoipa::path(
    get,
    path = "/api/buscar",
    tag = "Search",
    params(PlayerSearch),
    responses(
        (status = 200, description = "Every matching player", body = SearchPage)
    )
)]
pub async fn api_search(
    State(state): State<AppState>,
    Query(search): Query<PlayerSearch>,
) -> AppResult<Json<SearchPage>> {
    let page = state.search_service.search_page(search).await?;
    Ok(Json(page))
}
