use serde::{Deserialize, Serialize};

/// A user's answers to the questionnaire.
///
/// Multiple-choice fields keep selection order. Single-choice fields are empty
/// while unanswered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentResponse {
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub values: Vec<String>,
    pub work_style: Vec<String>,
    pub education: String,
    pub experience: String,
    pub personality: Vec<String>,
}
