use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::contact::handlers::NewContactMessage;
use crate::contact::ContactStatus;
use crate::models::contact::ContactMessageRow;

pub async fn insert_message(
    pool: &PgPool,
    user_id: Option<Uuid>,
    msg: &NewContactMessage,
) -> Result<ContactMessageRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ContactMessageRow>(
        r#"
        INSERT INTO contact_messages (id, user_id, name, email, subject, message, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(msg.name.trim())
    .bind(msg.email.trim())
    .bind(msg.subject.trim())
    .bind(msg.message.trim())
    .bind(ContactStatus::Unread.as_str())
    .fetch_one(pool)
    .await?;

    info!("Stored contact message {}", row.id);
    Ok(row)
}

/// Newest first, optionally restricted to one status.
pub async fn list_messages(
    pool: &PgPool,
    status: Option<ContactStatus>,
    limit: i64,
) -> Result<Vec<ContactMessageRow>, sqlx::Error> {
    sqlx::query_as::<_, ContactMessageRow>(
        r#"
        SELECT * FROM contact_messages
        WHERE ($1::TEXT IS NULL OR status = $1)
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(status.map(ContactStatus::as_str))
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Returns the updated row, or `None` when no message has that id.
pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: ContactStatus,
) -> Result<Option<ContactMessageRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, ContactMessageRow>(
        "UPDATE contact_messages SET status = $2 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await?;

    if row.is_some() {
        info!("Contact message {id} marked {status}");
    }
    Ok(row)
}
