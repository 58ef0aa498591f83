//! JWT authentication middleware.
//!
//! Tokens are read from `Authorization: Bearer <jwt>` first, then from the
//! session cookie set at login.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization, HeaderMapExt},
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::AUTH_COOKIE_NAME;
use crate::domain::UserRole;
use crate::errors::AppError;

/// Authenticated user extracted from JWT token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

fn request_token(headers: &HeaderMap) -> Option<String> {
    if let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }
    CookieJar::from_headers(headers)
        .get(AUTH_COOKIE_NAME)
        .map(|c| c.value().to_string())
}

fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<CurrentUser, AppError> {
    let token = request_token(headers).ok_or(AppError::Unauthorized)?;
    let claims = state.auth_service.verify_token(&token)?;
    let role = UserRole::parse(&claims.role).ok_or(AppError::Unauthorized)?;

    Ok(CurrentUser {
        id: claims.sub,
        email: claims.email,
        role,
    })
}

/// JWT authentication middleware.
///
/// Injects the CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let current_user = authenticate(&state, request.headers())?;
    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Optional authentication for public pages that behave differently for
/// signed-in users. Missing or invalid tokens yield `None`.
pub struct MaybeUser(pub Option<CurrentUser>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        Ok(MaybeUser(authenticate(state, &parts.headers).ok()))
    }
}

/// Require an exact role. Admins get no implicit access to player or
/// scout pages.
pub fn require_role(user: &CurrentUser, required: UserRole) -> Result<(), AppError> {
    if user.role == required {
        Ok(())
    } else {
        tracing::warn!(user_id = %user.id, role = %user.role, required = %required, "Role check failed");
        Err(AppError::Forbidden)
    }
}

/// Require admin role, returns Forbidden error if not admin.
pub fn require_admin(user: &CurrentUser) -> Result<(), AppError> {
    require_role(user, UserRole::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{AUTHORIZATION, COOKIE};

    fn user(role: UserRole) -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "a@scoutme.com".into(),
            role,
        }
    }

    #[test]
    fn test_require_role_is_exact() {
        assert!(require_role(&user(UserRole::Jugador), UserRole::Jugador).is_ok());
        assert!(require_role(&user(UserRole::Jugador), UserRole::Ojeador).is_err());
        assert!(require_role(&user(UserRole::Admin), UserRole::Ojeador).is_err());
        assert!(require_admin(&user(UserRole::Admin)).is_ok());
    }

    #[test]
    fn test_header_token_preferred_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "scoutme_token=from-cookie".parse().unwrap());
        assert_eq!(request_token(&headers).as_deref(), Some("from-cookie"));

        headers.insert(AUTHORIZATION, "Bearer from-header".parse().unwrap());
        assert_eq!(request_token(&headers).as_deref(), Some("from-header"));
    }
}
