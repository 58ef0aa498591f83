//! Video upload handlers.

use axum::{
    extract::{Multipart, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{non_blank, not_blank};
use super::profile_handler::optional_url;
use crate::api::extractors::validate;
use crate::api::middleware::{require_role, CurrentUser};
use crate::api::AppState;
use crate::config::ALLOWED_VIDEO_EXTENSIONS;
use crate::domain::video::{VIDEO_TYPE_LOCAL, VIDEO_TYPE_YOUTUBE};
use crate::domain::{Choice, UserRole, Video};
use crate::errors::{AppError, AppResult};
use crate::services::{UploadedFile, VideoUpload};
use crate::types::Created;

/// Text fields of the multipart upload form
#[derive(Debug, Default, Validate)]
struct VideoForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 200, message = "Debe tener entre 1 y 200 caracteres")
    )]
    titulo: String,
    descripcion: Option<String>,
    #[validate(custom(function = "not_blank"))]
    tipo: String,
    #[validate(custom(function = "optional_url"))]
    url: Option<String>,
}

/// Upload form description
#[derive(Debug, Serialize, ToSchema)]
pub struct VideoFormOptions {
    pub tipos: Vec<Choice>,
    pub extensiones: Vec<String>,
}

/// Create video routes (authenticated)
pub fn video_routes() -> Router<AppState> {
    Router::new().route("/video/subir", get(upload_form).post(upload_video))
}

pub async fn upload_form(
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<VideoFormOptions>> {
    require_role(&current_user, UserRole::Jugador)?;
    Ok(Json(VideoFormOptions {
        tipos: vec![
            Choice::new(VIDEO_TYPE_LOCAL, "Subir archivo"),
            Choice::new(VIDEO_TYPE_YOUTUBE, "Enlace de YouTube"),
        ],
        extensiones: ALLOWED_VIDEO_EXTENSIONS
            .iter()
            .map(|e| e.to_string())
            .collect(),
    }))
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::validation(err.body_text())
}

/// Read every part of the form; unknown parts are ignored.
async fn read_form(mut multipart: Multipart) -> AppResult<(VideoForm, Option<UploadedFile>)> {
    let mut form = VideoForm::default();
    let mut archivo = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "archivo" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let contents = field.bytes().await.map_err(multipart_error)?.to_vec();
                archivo = Some(UploadedFile { filename, contents });
            }
            "titulo" => form.titulo = field.text().await.map_err(multipart_error)?,
            "descripcion" => {
                form.descripcion = Some(field.text().await.map_err(multipart_error)?)
            }
            "tipo" => form.tipo = field.text().await.map_err(multipart_error)?,
            "url" => form.url = Some(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    Ok((form, archivo))
}

/// Add a video: a YouTube link or an uploaded file
#[utoipa::path(
    post,
    path = "/video/subir",
    tag = "Videos",
    security(("bearer_auth" = [])),
    request_body(content = String, content_type = "multipart/form-data", description = "titulo, descripcion, tipo (local|youtube), url, archivo"),
    responses(
        (status = 201, description = "Video added"),
        (status = 400, description = "Missing file, disallowed extension or invalid fields"),
        (status = 403, description = "Not a player")
    )
)]
pub async fn upload_video(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    multipart: Multipart,
) -> AppResult<Created<Video>> {
    require_role(&current_user, UserRole::Jugador)?;

    let (form, archivo) = read_form(multipart).await?;
    validate(&form)?;

    let video = state
        .video_service
        .upload(
            current_user.id,
            VideoUpload {
                titulo: form.titulo.trim().to_string(),
                descripcion: non_blank(form.descripcion),
                tipo: form.tipo.trim().to_string(),
                url: non_blank(form.url),
                archivo,
            },
        )
        .await?;

    Ok(Created(video))
}
