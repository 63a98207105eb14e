//! Errors raised by the scoring pipeline and by catalog construction.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::{Dimension, PersonalityTypeCode};

/// Errors returned by [`PersonalityEngine::score`](super::PersonalityEngine::score).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The answer vector does not fit the question catalog. Caller error.
    #[error("Invalid answers: {0}")]
    InvalidInput(#[from] InvalidAnswers),

    /// The resolved code has no descriptor. The type catalog and the
    /// resolver's output space have drifted apart.
    #[error("No descriptor for resolved personality type {0}")]
    UnknownType(PersonalityTypeCode),
}

/// Why an answer vector was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAnswers {
    #[error("expected {expected} answers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error(
        "answer {position} (question {question_id}) must be between 0 and {max}, got {value}"
    )]
    OutOfRange {
        position: usize,
        question_id: u32,
        max: usize,
        value: i64,
    },

    #[error("answer {position} must be an integer option index, got {value}")]
    NotAnInteger { position: usize, value: String },
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        match &err {
            ScoringError::InvalidInput(InvalidAnswers::WrongLength { expected, actual }) => {
                DomainError::new(ErrorCode::InvalidAnswers, err.to_string())
                    .with_detail("expected", expected.to_string())
                    .with_detail("actual", actual.to_string())
            }
            ScoringError::InvalidInput(InvalidAnswers::OutOfRange {
                position,
                question_id,
                ..
            }) => DomainError::new(ErrorCode::InvalidAnswers, err.to_string())
                .with_detail("position", position.to_string())
                .with_detail("question_id", question_id.to_string()),
            ScoringError::InvalidInput(InvalidAnswers::NotAnInteger { position, .. }) => {
                DomainError::new(ErrorCode::InvalidAnswers, err.to_string())
                    .with_detail("position", position.to_string())
            }
            ScoringError::UnknownType(code) => {
                DomainError::new(ErrorCode::UnknownPersonalityType, err.to_string())
                    .with_detail("type", code.to_string())
            }
        }
    }
}

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Unsupported catalog file extension: {0}")]
    UnsupportedFormat(String),

    #[error("Question catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate question id {0}")]
    DuplicateQuestionId(u32),

    #[error("Question {question_id} must have exactly 2 options, has {count}")]
    OptionCount { question_id: u32, count: usize },

    #[error("Option {option_index} of question {question_id} has weight 0")]
    ZeroWeight { question_id: u32, option_index: usize },

    #[error("Question {question_id} options {first} and {second} are not opposite poles of one axis")]
    MismatchedPoles {
        question_id: u32,
        first: Dimension,
        second: Dimension,
    },

    #[error("Duplicate descriptor for type {0}")]
    DuplicateType(PersonalityTypeCode),

    #[error("Type catalog is missing descriptors for: {}", format_codes(.0))]
    IncompleteTypes(Vec<PersonalityTypeCode>),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

fn format_codes(codes: &[PersonalityTypeCode]) -> String {
    codes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogInvalid, err.to_string())
    }
}
