use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::mentors::booking::BookSessionRequest;
use crate::mentors::search::MentorFilter;
use crate::mentors::store;
use crate::models::mentor::{MentorRow, MentorSessionDetailRow, MentorSessionRow};
use crate::state::AppState;

#[derive(Serialize)]
pub struct MentorList {
    pub mentors: Vec<MentorRow>,
}

#[derive(Serialize)]
pub struct BookedSession {
    pub message: &'static str,
    pub session: MentorSessionRow,
}

#[derive(Serialize)]
pub struct SessionList {
    pub sessions: Vec<MentorSessionDetailRow>,
}

/// GET /api/mentors
pub async fn handle_list(
    State(state): State<AppState>,
    Query(filter): Query<MentorFilter>,
) -> Result<Json<MentorList>, AppError> {
    filter.validate()?;
    let mentors = store::search_mentors(&state.db, &filter).await?;
    Ok(Json(MentorList { mentors }))
}

/// GET /api/mentors/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MentorRow>, AppError> {
    store::find_mentor(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Mentor {id} not found")))
}

/// POST /api/mentors/:id/book-session
pub async fn handle_book(
    State(state): State<AppState>,
    user: AuthUser,
    Path(mentor_id): Path<Uuid>,
    Json(req): Json<BookSessionRequest>,
) -> Result<(StatusCode, Json<BookedSession>), AppError> {
    req.validate(Utc::now())?;

    let session = store::book_session(&state.db, user.id, mentor_id, &req)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Mentor {mentor_id} not found or unavailable"))
        })?;

    Ok((
        StatusCode::CREATED,
        Json(BookedSession {
            message: "Session booked successfully",
            session,
        }),
    ))
}

/// GET /api/mentors/sessions/my-sessions
pub async fn handle_my_sessions(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<SessionList>, AppError> {
    let sessions = store::list_user_sessions(&state.db, user.id).await?;
    Ok(Json(SessionList { sessions }))
}
