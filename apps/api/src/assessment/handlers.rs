use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::history::{group_history, AssessmentHistoryEntry};
use crate::assessment::store;
use crate::auth::AuthUser;
use crate::career::matcher::CareerMatch;
use crate::career::models::AssessmentResponse;
use crate::career::questionnaire::check_complete;
use crate::errors::AppError;
use crate::models::assessment::AssessmentRow;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SavedAssessment {
    pub message: &'static str,
    pub assessment: AssessmentRow,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMatchesRequest {
    pub assessment_id: Uuid,
    pub career_matches: Vec<CareerMatch>,
}

#[derive(Serialize)]
pub struct SavedMatches {
    pub message: &'static str,
    pub saved: usize,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub assessments: Vec<AssessmentHistoryEntry>,
}

/// POST /api/assessment/responses
pub async fn handle_save_response(
    State(state): State<AppState>,
    user: AuthUser,
    Json(response): Json<AssessmentResponse>,
) -> Result<(StatusCode, Json<SavedAssessment>), AppError> {
    let response = check_complete(&response)?;
    let assessment = store::insert_assessment(&state.db, user.id, &response).await?;
    Ok((
        StatusCode::CREATED,
        Json(SavedAssessment {
            message: "Assessment saved successfully",
            assessment,
        }),
    ))
}

/// POST /api/assessment/career-matches
pub async fn handle_save_matches(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<SaveMatchesRequest>,
) -> Result<(StatusCode, Json<SavedMatches>), AppError> {
    validate_matches(&req.career_matches)?;

    // Someone else's assessment is reported exactly like a missing one.
    let owner = store::find_assessment_owner(&state.db, req.assessment_id).await?;
    if owner != Some(user.id) {
        return Err(AppError::NotFound(format!(
            "Assessment {} not found",
            req.assessment_id
        )));
    }

    let saved =
        store::insert_career_matches(&state.db, user.id, req.assessment_id, &req.career_matches)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(SavedMatches {
            message: "Career matches saved successfully",
            saved,
        }),
    ))
}

/// GET /api/assessment/history
pub async fn handle_history(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<HistoryResponse>, AppError> {
    let assessments = store::list_assessments(&state.db, user.id).await?;
    let matches = store::list_career_matches(&state.db, user.id).await?;
    Ok(Json(HistoryResponse {
        assessments: group_history(assessments, matches),
    }))
}

fn validate_matches(matches: &[CareerMatch]) -> Result<(), AppError> {
    if matches.is_empty() {
        return Err(AppError::Validation(
            "careerMatches must not be empty".to_string(),
        ));
    }
    for m in matches {
        if m.title.trim().is_empty() {
            return Err(AppError::Validation(
                "Every career match needs a title".to_string(),
            ));
        }
        if m.match_score > 100 {
            return Err(AppError::Validation(format!(
                "Match score for {} must be between 0 and 100, got {}",
                m.title, m.match_score
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scored(title: &str, score: u32) -> CareerMatch {
        CareerMatch {
            title: title.to_string(),
            match_score: score,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_matches_accepts_bounds() {
        assert!(validate_matches(&[scored("Nurse", 0), scored("Teacher", 100)]).is_ok());
    }

    #[test]
    fn test_validate_matches_rejects_bad_input() {
        assert!(matches!(
            validate_matches(&[]),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_matches(&[scored("Nurse", 101)]),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_matches(&[scored("   ", 50)]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_save_matches_request_wire_format() {
        let id = Uuid::new_v4();
        let req: SaveMatchesRequest = serde_json::from_value(json!({
            "assessmentId": id,
            "careerMatches": [
                { "title": "UX Designer", "matchScore": 72, "roadmapKey": "ux-designer" }
            ]
        }))
        .unwrap();
        assert_eq!(req.assessment_id, id);
        assert_eq!(req.career_matches[0].match_score, 72);
    }
}
