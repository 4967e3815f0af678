use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub core_values: Vec<String>,
    pub work_style: Vec<String>,
    pub education: String,
    pub experience: String,
    pub personality: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerMatchRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub career_title: String,
    pub match_score: i32,
    pub career_data: Value,
    pub created_at: DateTime<Utc>,
}
