//! Authentication handlers: login, logout and registration.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::profile_handler::{PlayerForm, ScoutForm};
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::MaybeUser;
use crate::api::AppState;
use crate::config::AUTH_COOKIE_NAME;
use crate::domain::{FormOptions, UserResponse};
use crate::errors::AppResult;
use crate::services::{NewPlayerAccount, NewScoutAccount, TokenResponse};
use crate::types::ApiResponse;

const REGISTERED: &str = "Registro exitoso. Ahora puedes iniciar sesión.";

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Email inválido"))]
    #[schema(example = "jugador1@scoutme.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Este campo es obligatorio"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Where to go after logging in
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct NextQuery {
    /// Local path to return to
    pub next: Option<String>,
}

/// Successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub token: TokenResponse,
    pub user: UserResponse,
    /// `next` when it is a local path, otherwise the role's home page
    #[schema(example = "/perfil/jugador")]
    pub redirect_to: String,
}

/// Login form description
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginPage {
    pub fields: Vec<String>,
    pub next: Option<String>,
}

/// Player registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterPlayerRequest {
    #[validate(email(message = "Email inválido"))]
    #[schema(example = "jugador@scoutme.com")]
    pub email: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    #[schema(example = "password123", min_length = 6)]
    pub password: String,
    #[validate(must_match(other = "password", message = "Las contraseñas no coinciden"))]
    pub confirm_password: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: PlayerForm,
}

/// Scout registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterScoutRequest {
    #[validate(email(message = "Email inválido"))]
    #[schema(example = "ojeador@scoutme.com")]
    pub email: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    #[schema(example = "password123", min_length = 6)]
    pub password: String,
    #[validate(must_match(other = "password", message = "Las contraseñas no coinciden"))]
    pub confirm_password: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: ScoutForm,
}

/// Public authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route(
            "/register/jugador",
            get(register_form).post(register_player),
        )
        .route(
            "/register/ojeador",
            get(register_form).post(register_scout),
        )
}

/// Routes that need an existing session
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/logout", get(logout))
}

/// Only same-site absolute paths are followed.
fn local_path(next: Option<String>) -> Option<String> {
    next.filter(|n| n.starts_with('/') && !n.starts_with("//") && !n.contains('\\'))
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub async fn login_page(
    MaybeUser(current_user): MaybeUser,
    Query(query): Query<NextQuery>,
) -> Response {
    if current_user.is_some() {
        return Redirect::to("/").into_response();
    }
    Json(LoginPage {
        fields: vec!["email".to_string(), "password".to_string()],
        next: local_path(query.next),
    })
    .into_response()
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    params(NextQuery),
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account disabled")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<NextQuery>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    let outcome = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    let redirect_to = local_path(query.next)
        .unwrap_or_else(|| outcome.user.role.home_path().to_string());
    let jar = jar.add(session_cookie(outcome.token.access_token.clone()));

    Ok((
        jar,
        Json(LoginResponse {
            token: outcome.token,
            user: UserResponse::from(outcome.user),
            redirect_to,
        }),
    ))
}

/// Clear the session cookie
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(Cookie::build(AUTH_COOKIE_NAME).path("/"));
    (jar, Redirect::to("/"))
}

/// Choice lists for the registration forms
pub async fn register_form(MaybeUser(current_user): MaybeUser) -> Response {
    if current_user.is_some() {
        return Redirect::to("/").into_response();
    }
    Json(FormOptions::build()).into_response()
}

/// Register a player account with its profile
#[utoipa::path(
    post,
    path = "/register/jugador",
    tag = "Authentication",
    request_body = RegisterPlayerRequest,
    responses(
        (status = 201, description = "Player registered"),
        (status = 400, description = "Validation error or registration failure")
    )
)]
pub async fn register_player(
    State(state): State<AppState>,
    MaybeUser(current_user): MaybeUser,
    ValidatedJson(payload): ValidatedJson<RegisterPlayerRequest>,
) -> AppResult<Response> {
    if current_user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let account = state
        .auth_service
        .register_player(NewPlayerAccount {
            email: payload.email,
            password: payload.password,
            details: payload.profile.into_details()?,
        })
        .await?;

    let user = UserResponse::from(account.user().clone());
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(user, REGISTERED)),
    )
        .into_response())
}

/// Register a scout account with its profile
#[utoipa::path(
    post,
    path = "/register/ojeador",
    tag = "Authentication",
    request_body = RegisterScoutRequest,
    responses(
        (status = 201, description = "Scout registered"),
        (status = 400, description = "Validation error or registration failure")
    )
)]
pub async fn register_scout(
    State(state): State<AppState>,
    MaybeUser(current_user): MaybeUser,
    ValidatedJson(payload): ValidatedJson<RegisterScoutRequest>,
) -> AppResult<Response> {
    if current_user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let account = state
        .auth_service
        .register_scout(NewScoutAccount {
            email: payload.email,
            password: payload.password,
            details: payload.profile.into_details()?,
        })
        .await?;

    let user = UserResponse::from(account.user().clone());
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(user, REGISTERED)),
    )
        .into_response())
}
