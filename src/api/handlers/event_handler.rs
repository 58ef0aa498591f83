//! Event handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{non_blank, not_blank};
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_role, CurrentUser};
use crate::api::AppState;
use crate::domain::catalog::{sport_choices, validate_optional_sport};
use crate::domain::{Choice, Event, NewEvent, UserRole};
use crate::errors::{AppError, AppResult};
use crate::types::Created;

/// New event request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 200, message = "Debe tener entre 1 y 200 caracteres")
    )]
    #[schema(example = "Prueba de talentos Sub-18")]
    pub titulo: String,
    pub descripcion: Option<String>,
    #[schema(example = "2025-09-20")]
    pub fecha: NaiveDate,
    #[validate(length(max = 200, message = "Máximo 200 caracteres"))]
    #[schema(example = "Estadio Municipal")]
    pub ubicacion: Option<String>,
    #[validate(custom(function = "validate_optional_sport"))]
    pub deporte: Option<String>,
    #[validate(range(min = 1, message = "Debe ser al menos 1"))]
    pub capacidad_maxima: Option<i32>,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(req: CreateEventRequest) -> Self {
        NewEvent {
            titulo: req.titulo.trim().to_string(),
            descripcion: non_blank(req.descripcion),
            fecha: req.fecha,
            ubicacion: non_blank(req.ubicacion),
            deporte: non_blank(req.deporte),
            capacidad_maxima: req.capacidad_maxima,
        }
    }
}

/// Choice lists for the event form
#[derive(Debug, Serialize, ToSchema)]
pub struct EventFormOptions {
    pub deportes: Vec<Choice>,
}

/// Create event routes (authenticated)
pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/eventos", get(list_events))
        .route("/evento/crear", get(event_form).post(create_event))
        .route("/evento/:id", get(get_event))
}

/// All events, latest date first
#[utoipa::path(
    get,
    path = "/eventos",
    tag = "Events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Events", body = Vec<Event>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = state.event_service.list_events().await?;
    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/evento/{id}",
    tag = "Events",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event", body = Event),
        (status = 404, description = "Event not found")
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<Event>> {
    // A malformed id cannot name an event.
    let Path(id) = id.map_err(|_| AppError::NotFound)?;
    let event = state.event_service.get_event(id).await?;
    Ok(Json(event))
}

pub async fn event_form(
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<EventFormOptions>> {
    require_role(&current_user, UserRole::Ojeador)?;
    Ok(Json(EventFormOptions {
        deportes: sport_choices(),
    }))
}

/// Publish an event under the caller's scout profile
#[utoipa::path(
    post,
    path = "/evento/crear",
    tag = "Events",
    security(("bearer_auth" = [])),
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created"),
        (status = 400, description = "Validation error or missing scout profile"),
        (status = 403, description = "Not a scout")
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateEventRequest>,
) -> AppResult<Created<Event>> {
    require_role(&current_user, UserRole::Ojeador)?;
    let event = state
        .event_service
        .create_event(current_user.id, payload.into())
        .await?;
    Ok(Created(event))
}
