use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::mentors::booking::BookSessionRequest;
use crate::mentors::search::{search_query, MentorFilter, AVAILABLE};
use crate::models::mentor::{MentorRow, MentorSessionDetailRow, MentorSessionRow};

pub async fn search_mentors(
    pool: &PgPool,
    filter: &MentorFilter,
) -> Result<Vec<MentorRow>, sqlx::Error> {
    let mut query = search_query(filter);
    let mentors = query.build_query_as::<MentorRow>().fetch_all(pool).await?;
    Ok(mentors)
}

pub async fn find_mentor(pool: &PgPool, id: Uuid) -> Result<Option<MentorRow>, sqlx::Error> {
    sqlx::query_as::<_, MentorRow>("SELECT * FROM mentors WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Books a session and bumps the mentor's session count atomically.
///
/// Returns `None` when the mentor does not exist or is not available.
pub async fn book_session(
    pool: &PgPool,
    user_id: Uuid,
    mentor_id: Uuid,
    req: &BookSessionRequest,
) -> Result<Option<MentorSessionRow>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let availability: Option<String> =
        sqlx::query_scalar("SELECT availability_status FROM mentors WHERE id = $1 FOR UPDATE")
            .bind(mentor_id)
            .fetch_optional(&mut *tx)
            .await?;

    if availability.as_deref() != Some(AVAILABLE) {
        return Ok(None);
    }

    let session = sqlx::query_as::<_, MentorSessionRow>(
        r#"
        INSERT INTO mentor_sessions (id, user_id, mentor_id, session_date, duration, status, notes)
        VALUES ($1, $2, $3, $4, $5, 'scheduled', $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(mentor_id)
    .bind(req.session_date)
    .bind(req.duration)
    .bind(req.notes())
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE mentors SET total_sessions = total_sessions + 1 WHERE id = $1")
        .bind(mentor_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!(
        "Booked session {} with mentor {mentor_id} for user {user_id}",
        session.id
    );
    Ok(Some(session))
}

pub async fn list_user_sessions(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<MentorSessionDetailRow>, sqlx::Error> {
    sqlx::query_as::<_, MentorSessionDetailRow>(
        r#"
        SELECT s.*,
               m.name      AS mentor_name,
               m.title     AS mentor_title,
               m.company   AS mentor_company,
               m.image_url AS mentor_image
        FROM mentor_sessions s
        JOIN mentors m ON m.id = s.mentor_id
        WHERE s.user_id = $1
        ORDER BY s.session_date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
