//! Administration handlers.

use axum::{extract::State, response::Json, routing::get, Extension, Router};

use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;

/// Create admin routes (authenticated)
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin", get(list_users))
}

/// List every account (admin only)
#[utoipa::path(
    get,
    path = "/admin",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<UserResponse>>> {
    require_admin(&current_user)?;
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
