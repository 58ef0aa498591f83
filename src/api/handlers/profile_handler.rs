//! Profile handlers and the profile forms shared with registration.

use std::borrow::Cow;

use axum::{extract::State, response::Json, routing::get, Extension, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidateUrl, ValidationError};

use super::{non_blank, REQUIRED};
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_role, CurrentUser};
use crate::api::AppState;
use crate::domain::catalog::{
    position_matches_sport, validate_country, validate_level, validate_phone_code,
    validate_sport,
};
use crate::domain::{Player, PlayerDetails, Scout, ScoutDetails, UserRole};
use crate::errors::{AppError, AppResult};
use crate::services::{PlayerProfile, ScoutProfile};
use crate::types::ApiResponse;

const PROFILE_UPDATED: &str = "Perfil actualizado correctamente";

/// Empty means "not given".
pub(crate) fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_url() {
        return Ok(());
    }
    let mut err = ValidationError::new("url");
    err.message = Some(Cow::from("URL no válida"));
    Err(err)
}

fn required(field: &'static str, value: String) -> AppResult<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::field(field, REQUIRED));
    }
    Ok(value)
}

/// Player profile fields
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PlayerForm {
    #[validate(length(min = 1, max = 100, message = "Debe tener entre 1 y 100 caracteres"))]
    #[schema(example = "Lucas")]
    pub nombre: String,
    #[validate(length(min = 1, max = 100, message = "Debe tener entre 1 y 100 caracteres"))]
    #[schema(example = "Martínez")]
    pub apellido: String,
    #[schema(example = "2005-03-12")]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[validate(custom(function = "validate_country"))]
    #[schema(example = "AR")]
    pub pais: Option<String>,
    #[validate(length(max = 100, message = "Máximo 100 caracteres"))]
    pub ciudad: Option<String>,
    #[validate(custom(function = "validate_sport"))]
    #[schema(example = "fútbol")]
    pub deporte: String,
    /// Must belong to `deporte`
    #[schema(example = "delantero")]
    pub posicion: Option<String>,
    #[validate(custom(function = "validate_level"))]
    pub nivel: Option<String>,
    pub descripcion: Option<String>,
    /// Centimetres
    #[validate(range(min = 0.0, message = "Debe ser un valor positivo"))]
    pub altura: Option<f64>,
    /// Kilograms
    #[validate(range(min = 0.0, message = "Debe ser un valor positivo"))]
    pub peso: Option<f64>,
    #[validate(custom(function = "validate_phone_code"))]
    pub phone_code: Option<String>,
    #[validate(length(max = 20, message = "Máximo 20 caracteres"))]
    pub telefono: Option<String>,
    #[validate(custom(function = "optional_url"))]
    pub sitio_web: Option<String>,
}

impl PlayerForm {
    pub(crate) fn into_details(self) -> AppResult<PlayerDetails> {
        let posicion = non_blank(self.posicion);
        if let Some(p) = &posicion {
            if !position_matches_sport(&self.deporte, p) {
                return Err(AppError::field(
                    "posicion",
                    "Posición no válida para el deporte seleccionado",
                ));
            }
        }

        Ok(PlayerDetails {
            nombre: required("nombre", self.nombre)?,
            apellido: required("apellido", self.apellido)?,
            fecha_nacimiento: self.fecha_nacimiento,
            pais: non_blank(self.pais),
            ciudad: non_blank(self.ciudad),
            deporte: self.deporte,
            posicion,
            nivel: non_blank(self.nivel),
            descripcion: non_blank(self.descripcion),
            altura: self.altura,
            peso: self.peso,
            phone_code: non_blank(self.phone_code),
            telefono: non_blank(self.telefono),
            sitio_web: non_blank(self.sitio_web),
        })
    }
}

/// Scout profile fields
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ScoutForm {
    #[validate(length(min = 1, max = 100, message = "Debe tener entre 1 y 100 caracteres"))]
    #[schema(example = "Carlos")]
    pub nombre: String,
    #[validate(length(min = 1, max = 100, message = "Debe tener entre 1 y 100 caracteres"))]
    #[schema(example = "Rodríguez")]
    pub apellido: String,
    #[validate(length(max = 100, message = "Máximo 100 caracteres"))]
    #[schema(example = "Club Atlético Talentos")]
    pub empresa: Option<String>,
    #[validate(custom(function = "validate_country"))]
    pub pais: Option<String>,
    #[validate(length(max = 100, message = "Máximo 100 caracteres"))]
    pub ciudad: Option<String>,
    #[validate(length(max = 100, message = "Máximo 100 caracteres"))]
    pub especialidad: Option<String>,
    pub descripcion: Option<String>,
    #[validate(custom(function = "validate_phone_code"))]
    pub phone_code: Option<String>,
    #[validate(length(max = 20, message = "Máximo 20 caracteres"))]
    pub telefono: Option<String>,
    #[validate(custom(function = "optional_url"))]
    pub sitio_web: Option<String>,
}

impl ScoutForm {
    pub(crate) fn into_details(self) -> AppResult<ScoutDetails> {
        Ok(ScoutDetails {
            nombre: required("nombre", self.nombre)?,
            apellido: required("apellido", self.apellido)?,
            empresa: non_blank(self.empresa),
            pais: non_blank(self.pais),
            ciudad: non_blank(self.ciudad),
            especialidad: non_blank(self.especialidad),
            descripcion: non_blank(self.descripcion),
            phone_code: non_blank(self.phone_code),
            telefono: non_blank(self.telefono),
            sitio_web: non_blank(self.sitio_web),
        })
    }
}

/// Create profile routes (authenticated)
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/perfil/jugador",
            get(player_profile).post(update_player_profile),
        )
        .route("/perfil/ojeador", get(scout_profile).post(update_scout_profile))
}

/// Own player profile with videos
#[utoipa::path(
    get,
    path = "/perfil/jugador",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Player profile", body = PlayerProfile),
        (status = 403, description = "Not a player")
    )
)]
pub async fn player_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<PlayerProfile>> {
    require_role(&current_user, UserRole::Jugador)?;
    let profile = state.profile_service.player_profile(current_user.id).await?;
    Ok(Json(profile))
}

/// Replace the player's profile fields
#[utoipa::path(
    post,
    path = "/perfil/jugador",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    request_body = PlayerForm,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not a player")
    )
)]
pub async fn update_player_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(form): ValidatedJson<PlayerForm>,
) -> AppResult<Json<ApiResponse<Player>>> {
    require_role(&current_user, UserRole::Jugador)?;
    let player = state
        .profile_service
        .update_player(current_user.id, form.into_details()?)
        .await?;
    Ok(Json(ApiResponse::with_message(player, PROFILE_UPDATED)))
}

/// Own scout profile with events
#[utoipa::path(
    get,
    path = "/perfil/ojeador",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Scout profile", body = ScoutProfile),
        (status = 403, description = "Not a scout")
    )
)]
pub async fn scout_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<ScoutProfile>> {
    require_role(&current_user, UserRole::Ojeador)?;
    let profile = state.profile_service.scout_profile(current_user.id).await?;
    Ok(Json(profile))
}

/// Replace the scout's profile fields
#[utoipa::path(
    post,
    path = "/perfil/ojeador",
    tag = "Profiles",
    security(("bearer_auth" = [])),
    request_body = ScoutForm,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not a scout")
    )
)]
pub async fn update_scout_profile(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(form): ValidatedJson<ScoutForm>,
) -> AppResult<Json<ApiResponse<Scout>>> {
    require_role(&current_user, UserRole::Ojeador)?;
    let scout = state
        .profile_service
        .update_scout(current_user.id, form.into_details()?)
        .await?;
    Ok(Json(ApiResponse::with_message(scout, PROFILE_UPDATED)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(deporte: &str, posicion: Option<&str>) -> PlayerForm {
        PlayerForm {
            nombre: " Lucas ".into(),
            apellido: "Martínez".into(),
            fecha_nacimiento: None,
            pais: Some(String::new()),
            ciudad: Some("Rosario".into()),
            deporte: deporte.into(),
            posicion: posicion.map(str::to_string),
            nivel: Some(String::new()),
            descripcion: None,
            altura: Some(178.0),
            peso: None,
            phone_code: None,
            telefono: None,
            sitio_web: Some(String::new()),
        }
    }

    #[test]
    fn test_player_form_normalizes_blanks() {
        let form = form("fútbol", Some("delantero"));
        assert!(form.validate().is_ok());

        let details = form.into_details().unwrap();
        assert_eq!(details.nombre, "Lucas");
        assert_eq!(details.pais, None);
        assert_eq!(details.nivel, None);
        assert_eq!(details.sitio_web, None);
        assert_eq!(details.posicion.as_deref(), Some("delantero"));
    }

    #[test]
    fn test_position_must_match_sport() {
        let result = form("tenis", Some("delantero")).into_details();
        assert!(matches!(result, Err(AppError::Form(f)) if f.contains_key("posicion")));
    }

    #[test]
    fn test_player_form_rejects_bad_values() {
        let mut bad = form("curling", None);
        bad.altura = Some(-1.0);
        bad.sitio_web = Some("no es url".into());

        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("deporte"));
        assert!(fields.contains_key("altura"));
        assert!(fields.contains_key("sitio_web"));
    }
}
