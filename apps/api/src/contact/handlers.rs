use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::auth::{AuthUser, MaybeAuthUser};
use crate::contact::{clamp_limit, store, ContactStatus};
use crate::errors::AppError;
use crate::models::contact::ContactMessageRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewContactMessage {
    fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        if !self.email.contains('@') {
            return Err(AppError::Validation(
                "email must be a valid address".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[derive(Serialize)]
pub struct SavedMessage {
    pub message: &'static str,
    pub contact: ContactMessageRow,
}

#[derive(Serialize)]
pub struct MessageList {
    pub messages: Vec<ContactMessageRow>,
}

/// POST /api/contact/messages
pub async fn handle_submit(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    Json(msg): Json<NewContactMessage>,
) -> Result<(StatusCode, Json<SavedMessage>), AppError> {
    msg.validate()?;
    let contact = store::insert_message(&state.db, user.map(|u| u.id), &msg).await?;
    Ok((
        StatusCode::CREATED,
        Json(SavedMessage {
            message: "Message sent successfully",
            contact,
        }),
    ))
}

/// GET /api/contact/messages
pub async fn handle_list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ListQuery>,
) -> Result<Json<MessageList>, AppError> {
    let status = params
        .status
        .as_deref()
        .map(ContactStatus::parse)
        .transpose()?;
    let messages = store::list_messages(&state.db, status, clamp_limit(params.limit)).await?;
    debug!("User {} listed {} contact messages", user.id, messages.len());
    Ok(Json(MessageList { messages }))
}

/// PATCH /api/contact/messages/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<ContactMessageRow>, AppError> {
    let status = ContactStatus::parse(&req.status)?;
    debug!("User {} setting contact message {id} to {status}", user.id);
    store::update_status(&state.db, id, status)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Contact message {id} not found")))
}
