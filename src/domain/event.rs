//! Scouting events published by scouts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Event {
    pub id: Uuid,
    pub scout_id: Uuid,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub fecha: NaiveDate,
    pub ubicacion: Option<String>,
    pub deporte: Option<String>,
    pub capacidad_maxima: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Data for a new event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub titulo: String,
    pub descripcion: Option<String>,
    pub fecha: NaiveDate,
    pub ubicacion: Option<String>,
    pub deporte: Option<String>,
    pub capacidad_maxima: Option<i32>,
}
