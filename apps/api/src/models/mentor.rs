use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MentorRow {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub company: String,
    pub expertise: Vec<String>,
    pub bio: String,
    pub image_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub email: Option<String>,
    pub years_experience: i32,
    pub rating: f64,
    pub total_sessions: i32,
    pub hourly_rate: Option<f64>,
    pub availability_status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MentorSessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mentor_id: Uuid,
    pub session_date: DateTime<Utc>,
    pub duration: i32,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A booked session joined with the mentor's display fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MentorSessionDetailRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mentor_id: Uuid,
    pub session_date: DateTime<Utc>,
    pub duration: i32,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub mentor_name: String,
    pub mentor_title: String,
    pub mentor_company: String,
    pub mentor_image: Option<String>,
}
