use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::career::matcher::CareerMatch;
use crate::career::models::AssessmentResponse;
use crate::models::assessment::{AssessmentRow, CareerMatchRow};

/// Inserts a completed assessment and returns the stored row.
pub async fn insert_assessment(
    pool: &PgPool,
    user_id: Uuid,
    response: &AssessmentResponse,
) -> Result<AssessmentRow, sqlx::Error> {
    let row = sqlx::query_as::<_, AssessmentRow>(
        r#"
        INSERT INTO assessment_responses
            (id, user_id, interests, skills, core_values, work_style,
             education, experience, personality)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&response.interests)
    .bind(&response.skills)
    .bind(&response.values)
    .bind(&response.work_style)
    .bind(&response.education)
    .bind(&response.experience)
    .bind(&response.personality)
    .fetch_one(pool)
    .await?;

    info!("Saved assessment {} for user {user_id}", row.id);
    Ok(row)
}

/// Returns the owning user of an assessment, if it exists.
pub async fn find_assessment_owner(
    pool: &PgPool,
    assessment_id: Uuid,
) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar("SELECT user_id FROM assessment_responses WHERE id = $1")
        .bind(assessment_id)
        .fetch_optional(pool)
        .await
}

/// Stores a batch of matches for one assessment. All rows land or none do.
pub async fn insert_career_matches(
    pool: &PgPool,
    user_id: Uuid,
    assessment_id: Uuid,
    matches: &[CareerMatch],
) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;

    for m in matches {
        sqlx::query(
            r#"
            INSERT INTO career_matches
                (id, user_id, assessment_id, career_title, match_score, career_data)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(assessment_id)
        .bind(&m.title)
        .bind(m.match_score as i32)
        .bind(Json(m))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(
        "Saved {} career matches for assessment {assessment_id}",
        matches.len()
    );
    Ok(matches.len())
}

/// All of a user's assessments, newest first.
pub async fn list_assessments(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<AssessmentRow>, sqlx::Error> {
    sqlx::query_as::<_, AssessmentRow>(
        "SELECT * FROM assessment_responses WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// All matches a user has saved, across assessments.
pub async fn list_career_matches(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<CareerMatchRow>, sqlx::Error> {
    sqlx::query_as::<_, CareerMatchRow>(
        "SELECT * FROM career_matches WHERE user_id = $1 ORDER BY created_at ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
