//! Messaging handlers: inbox, threads, replies and new messages.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::not_blank;
use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Choice, ConversationSummary, ConversationThread, Message, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::types::Created;

/// New message request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    pub receiver_id: Uuid,
    #[validate(
        custom(function = "not_blank"),
        length(max = 200, message = "Debe tener entre 1 y 200 caracteres")
    )]
    #[schema(example = "Prueba de nivel")]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

/// Reply request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReplyRequest {
    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RecipientQuery {
    /// User id to preselect
    pub receiver: Option<String>,
}

/// Recipient choices for a new message
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipientsPage {
    pub destinatarios: Vec<Choice>,
    pub seleccionado: Option<UserResponse>,
}

/// Create message routes (authenticated)
pub fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/mensajes", get(inbox))
        .route("/mensaje/enviar", get(recipients).post(send_message))
        .route("/conversacion/:id", get(conversation).post(reply))
}

/// One entry per conversation, newest first
#[utoipa::path(
    get,
    path = "/mensajes",
    tag = "Messages",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Conversation inbox", body = Vec<ConversationSummary>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn inbox(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<ConversationSummary>>> {
    let conversations = state.message_service.inbox(current_user.id).await?;
    Ok(Json(conversations))
}

/// Thread in send order; marks the caller's messages read
#[utoipa::path(
    get,
    path = "/conversacion/{id}",
    tag = "Messages",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Conversation ID")),
    responses(
        (status = 200, description = "Conversation thread", body = ConversationThread),
        (status = 403, description = "Not a participant"),
        (status = 404, description = "Conversation not found")
    )
)]
pub async fn conversation(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<ConversationThread>> {
    let thread = state
        .message_service
        .conversation(current_user.id, &id)
        .await?;
    Ok(Json(thread))
}

#[utoipa::path(
    post,
    path = "/conversacion/{id}",
    tag = "Messages",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Conversation ID")),
    request_body = ReplyRequest,
    responses(
        (status = 201, description = "Reply sent"),
        (status = 403, description = "Not a participant"),
        (status = 404, description = "Conversation not found")
    )
)]
pub async fn reply(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ReplyRequest>,
) -> AppResult<Created<Message>> {
    let message = state
        .message_service
        .reply(current_user.id, &id, payload.content)
        .await?;
    Ok(Created(message))
}

/// Recipient choices, optionally preselecting `receiver`
pub async fn recipients(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<RecipientQuery>,
) -> AppResult<Json<RecipientsPage>> {
    let destinatarios = state.message_service.recipients(current_user.id).await?;

    let preselect = query
        .receiver
        .and_then(|r| Uuid::parse_str(r.trim()).ok())
        .filter(|id| *id != current_user.id);
    let seleccionado = match preselect {
        Some(id) => match state.user_service.get_user(id).await {
            Ok(user) => Some(UserResponse::from(user)),
            Err(AppError::NotFound) => None,
            Err(e) => return Err(e),
        },
        None => None,
    };

    Ok(Json(RecipientsPage {
        destinatarios,
        seleccionado,
    }))
}

/// Start or continue the thread for this pair and subject
#[utoipa::path(
    post,
    path = "/mensaje/enviar",
    tag = "Messages",
    security(("bearer_auth" = [])),
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message sent"),
        (status = 400, description = "Validation error or invalid receiver")
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<SendMessageRequest>,
) -> AppResult<Created<Message>> {
    let message = state
        .message_service
        .send(
            current_user.id,
            payload.receiver_id,
            payload.subject,
            payload.content,
        )
        .await?;
    Ok(Created(message))
}
