//! HTTP handlers for personality endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::personality::{
    GetQuestionsHandler, GetTypeDescriptorHandler, GetTypeDescriptorQuery, ListTypesHandler,
    ScoreAnswersHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::personality::{PersonalityEngine, ScoringError};

use super::dto::{
    ErrorResponse, PersonalityResultResponse, QuestionResponse, ScoreAnswersRequest,
    TypeDescriptorResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Personality API error that implements IntoResponse.
#[derive(Debug)]
pub struct PersonalityApiError(pub DomainError);

impl PersonalityApiError {
    fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::InvalidFormat
            | ErrorCode::InvalidAnswers
            | ErrorCode::InvalidTypeCode => StatusCode::BAD_REQUEST,
            ErrorCode::TypeNotFound => StatusCode::NOT_FOUND,
            ErrorCode::UnknownPersonalityType
            | ErrorCode::CatalogInvalid
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PersonalityApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = if status.is_server_error() {
            // Catalog drift is not something the caller can act on.
            ErrorResponse::internal("Failed to determine personality type")
        } else {
            ErrorResponse::from(&self.0)
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for PersonalityApiError {
    fn from(error: DomainError) -> Self {
        PersonalityApiError(error)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing personality dependencies.
#[derive(Clone)]
pub struct PersonalityAppState {
    pub engine: Arc<PersonalityEngine>,
}

impl PersonalityAppState {
    pub fn new(engine: Arc<PersonalityEngine>) -> Self {
        Self { engine }
    }

    pub fn score_answers_handler(&self) -> ScoreAnswersHandler {
        ScoreAnswersHandler::new(self.engine.clone())
    }

    pub fn get_questions_handler(&self) -> GetQuestionsHandler {
        GetQuestionsHandler::new(self.engine.clone())
    }

    pub fn get_type_descriptor_handler(&self) -> GetTypeDescriptorHandler {
        GetTypeDescriptorHandler::new(self.engine.clone())
    }

    pub fn list_types_handler(&self) -> ListTypesHandler {
        ListTypesHandler::new(self.engine.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/personality/questions
///
/// Returns the inventory in the order answers must be submitted.
pub async fn get_questions(State(state): State<PersonalityAppState>) -> impl IntoResponse {
    let questions: Vec<QuestionResponse> = state
        .get_questions_handler()
        .handle()
        .into_iter()
        .map(QuestionResponse::from)
        .collect();
    Json(questions)
}

/// POST /api/personality/type
///
/// Scores an answer vector and returns the resolved type.
///
/// Body rejections and non-integer answers use the same error body as every
/// other client error.
pub async fn score_answers(
    State(state): State<PersonalityAppState>,
    payload: Result<Json<ScoreAnswersRequest>, JsonRejection>,
) -> Result<Json<PersonalityResultResponse>, PersonalityApiError> {
    let Json(req) = payload.map_err(reject_body)?;
    let cmd = req.into_command().map_err(|err| {
        tracing::debug!("Rejected answers: {}", err);
        PersonalityApiError(ScoringError::from(err).into())
    })?;
    let result = state.score_answers_handler().handle(cmd)?;
    Ok(Json(result.into()))
}

/// A well-formed body whose `answers` has the wrong shape is an answers
/// problem; anything else is a malformed request.
fn reject_body(rejection: JsonRejection) -> PersonalityApiError {
    let error = match &rejection {
        JsonRejection::JsonDataError(_) => {
            DomainError::new(ErrorCode::InvalidAnswers, rejection.body_text())
        }
        _ => DomainError::validation("body", rejection.body_text()),
    };
    PersonalityApiError(error)
}

/// GET /api/personality/types
pub async fn list_types(State(state): State<PersonalityAppState>) -> impl IntoResponse {
    let types: Vec<TypeDescriptorResponse> = state
        .list_types_handler()
        .handle()
        .into_iter()
        .map(TypeDescriptorResponse::from)
        .collect();
    Json(types)
}

/// GET /api/personality/types/:code
pub async fn get_type_descriptor(
    State(state): State<PersonalityAppState>,
    Path(code): Path<String>,
) -> Result<Json<TypeDescriptorResponse>, PersonalityApiError> {
    let descriptor = state
        .get_type_descriptor_handler()
        .handle(GetTypeDescriptorQuery { code })?;
    Ok(Json(descriptor.into()))
}
