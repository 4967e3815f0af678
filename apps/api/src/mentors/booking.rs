use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;

/// Longest bookable session, in minutes.
pub const MAX_DURATION_MINUTES: i32 = 480;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSessionRequest {
    pub session_date: DateTime<Utc>,
    /// Minutes.
    pub duration: i32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BookSessionRequest {
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        if !(1..=MAX_DURATION_MINUTES).contains(&self.duration) {
            return Err(AppError::Validation(format!(
                "duration must be between 1 and {MAX_DURATION_MINUTES} minutes"
            )));
        }
        if self.session_date < now {
            return Err(AppError::Validation(
                "sessionDate must not be in the past".to_string(),
            ));
        }
        Ok(())
    }

    /// Trimmed notes; blank notes are stored as NULL.
    pub fn notes(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}
