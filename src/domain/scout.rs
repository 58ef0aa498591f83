//! Scout (ojeador) profile.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Scout profile entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Scout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub empresa: Option<String>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    /// Sports the scout focuses on, free text
    pub especialidad: Option<String>,
    pub descripcion: Option<String>,
    pub phone_code: Option<String>,
    pub telefono: Option<String>,
    pub sitio_web: Option<String>,
}

/// Editable scout fields, shared by registration and profile updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoutDetails {
    pub nombre: String,
    pub apellido: String,
    pub empresa: Option<String>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub especialidad: Option<String>,
    pub descripcion: Option<String>,
    pub phone_code: Option<String>,
    pub telefono: Option<String>,
    pub sitio_web: Option<String>,
}
