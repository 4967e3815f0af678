//! Axum route handlers for the stateless career endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::career::catalog::{find_career, CareerProfile, CATALOG};
use crate::career::matcher::CareerMatch;
use crate::career::models::AssessmentResponse;
use crate::career::questionnaire::{check_selections, QuestionStep, STEPS};
use crate::career::roadmap::{build_roadmap, generate_roadmap, RoadmapStep};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<CareerMatch>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    pub career_title: String,
    pub steps: Vec<RoadmapStep>,
}

/// GET /api/questionnaire
pub async fn handle_questionnaire() -> Json<&'static [QuestionStep]> {
    Json(&STEPS[..])
}

/// GET /api/careers
pub async fn handle_list_careers() -> Json<&'static [CareerProfile]> {
    Json(CATALOG)
}

/// GET /api/careers/:id
pub async fn handle_get_career(
    Path(id): Path<String>,
) -> Result<Json<&'static CareerProfile>, AppError> {
    find_career(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}

/// GET /api/careers/:id/roadmap
pub async fn handle_career_roadmap(
    Path(id): Path<String>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let career =
        find_career(&id).ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))?;
    let steps = build_roadmap(career.roadmap, &mut rand::thread_rng());
    Ok(Json(RoadmapResponse {
        career_title: career.title.to_string(),
        steps,
    }))
}

/// POST /api/careers/matches
///
/// Scores a (possibly partial) assessment against the whole catalog.
/// Unanswered steps contribute nothing; unknown options are rejected.
pub async fn handle_compute_matches(
    State(state): State<AppState>,
    Json(response): Json<AssessmentResponse>,
) -> Result<Json<MatchesResponse>, AppError> {
    check_selections(&response)?;

    let matches = state.matcher.rank(&response);
    if let Some(top) = matches.first() {
        debug!("Top career match: {} ({})", top.title, top.match_score);
    }

    Ok(Json(MatchesResponse { matches }))
}

/// POST /api/careers/roadmap
///
/// Accepts any career match, including client-built ones without a roadmap key.
pub async fn handle_generate_roadmap(Json(career): Json<CareerMatch>) -> Json<RoadmapResponse> {
    let steps = generate_roadmap(&career);
    Json(RoadmapResponse {
        career_title: career.title,
        steps,
    })
}
