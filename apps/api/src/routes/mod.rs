pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::career::handlers as career;
use crate::contact::handlers as contact;
use crate::mentors::handlers as mentors;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Questionnaire, catalog, matching and roadmaps (no persistence)
        .route("/api/questionnaire", get(career::handle_questionnaire))
        .route("/api/careers", get(career::handle_list_careers))
        .route("/api/careers/matches", post(career::handle_compute_matches))
        .route("/api/careers/roadmap", post(career::handle_generate_roadmap))
        .route("/api/careers/:id", get(career::handle_get_career))
        .route(
            "/api/careers/:id/roadmap",
            get(career::handle_career_roadmap),
        )
        // Assessments
        .route(
            "/api/assessment/responses",
            post(assessment::handle_save_response),
        )
        .route(
            "/api/assessment/career-matches",
            post(assessment::handle_save_matches),
        )
        .route("/api/assessment/history", get(assessment::handle_history))
        // Contact
        .route(
            "/api/contact/messages",
            get(contact::handle_list).post(contact::handle_submit),
        )
        .route(
            "/api/contact/messages/:id/status",
            patch(contact::handle_update_status),
        )
        // Mentors
        .route("/api/mentors", get(mentors::handle_list))
        .route(
            "/api/mentors/sessions/my-sessions",
            get(mentors::handle_my_sessions),
        )
        .route("/api/mentors/:id", get(mentors::handle_get))
        .route(
            "/api/mentors/:id/book-session",
            post(mentors::handle_book),
        )
        .with_state(state)
}
