//! HTTP routes for personality endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_questions, get_type_descriptor, list_types, score_answers, PersonalityAppState,
};

/// Creates the personality router with all routes.
pub fn personality_routes(state: PersonalityAppState) -> Router {
    Router::new()
        // GET /api/personality/questions
        .route("/api/personality/questions", get(get_questions))
        // POST /api/personality/type
        .route("/api/personality/type", post(score_answers))
        // GET /api/personality/types
        .route("/api/personality/types", get(list_types))
        // GET /api/personality/types/:code
        .route("/api/personality/types/:code", get(get_type_descriptor))
        .with_state(state)
}
