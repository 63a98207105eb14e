//! HTTP DTOs for personality endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::personality::ScoreAnswersCommand;
use crate::domain::foundation::DomainError;
use crate::domain::personality::{
    Dimension, DimensionMap, InvalidAnswers, PersonalityResult, Question, TypeDescriptor,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to score a completed inventory.
///
/// Elements are kept as raw JSON so a non-integer answer is reported as an
/// invalid answer rather than a body deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreAnswersRequest {
    pub answers: Vec<serde_json::Value>,
}

impl ScoreAnswersRequest {
    /// Converts to a scoring command.
    ///
    /// Integers beyond `i64` saturate and are then rejected by range validation.
    ///
    /// # Errors
    /// `NotAnInteger` for the first element that is not a JSON integer.
    pub fn into_command(self) -> Result<ScoreAnswersCommand, InvalidAnswers> {
        let answers = self
            .answers
            .into_iter()
            .enumerate()
            .map(|(position, value)| {
                value
                    .as_i64()
                    .or_else(|| value.as_u64().map(|_| i64::MAX))
                    .ok_or_else(|| InvalidAnswers::NotAnInteger {
                        position,
                        value: value.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ScoreAnswersCommand { answers })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Scored personality type.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityResultResponse {
    #[serde(rename = "type")]
    pub type_code: String,
    pub name: String,
    pub description: String,
    pub traits: Vec<String>,
    pub scores: DimensionMap<u8>,
    pub confidence: DimensionMap<u8>,
    pub overall_confidence: u8,
}

impl From<PersonalityResult> for PersonalityResultResponse {
    fn from(result: PersonalityResult) -> Self {
        Self {
            type_code: result.type_code.to_string(),
            name: result.descriptor.name,
            description: result.descriptor.description,
            traits: result.descriptor.traits,
            scores: result.scores.map(|_, p| p.value()),
            confidence: result.confidence.map(|_, p| p.value()),
            overall_confidence: result.overall_confidence.value(),
        }
    }
}

/// A question as shown to the person taking the inventory.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: u32,
    pub question: String,
    pub options: Vec<OptionResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionResponse {
    pub answer: String,
    pub dimension: Dimension,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            question: question.text,
            options: question
                .options
                .into_iter()
                .map(|o| OptionResponse {
                    answer: o.text,
                    dimension: o.dimension,
                })
                .collect(),
        }
    }
}

/// Display information for a personality type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDescriptorResponse {
    #[serde(rename = "type")]
    pub type_code: String,
    pub name: String,
    pub description: String,
    pub traits: Vec<String>,
}

impl From<TypeDescriptor> for TypeDescriptorResponse {
    fn from(descriptor: TypeDescriptor) -> Self {
        Self {
            type_code: descriptor.code.to_string(),
            name: descriptor.name,
            description: descriptor.description,
            traits: descriptor.traits,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::personality::AnswerOption;

    fn request(json: &str) -> ScoreAnswersRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn integer_answers_convert_to_command() {
        let cmd = request(r#"{"answers": [0, 1, -1]}"#).into_command().unwrap();
        assert_eq!(cmd.answers, vec![0, 1, -1]);
    }

    #[test]
    fn fractional_answer_is_not_an_integer() {
        let err = request(r#"{"answers": [0, 1, 0.5]}"#).into_command().unwrap_err();
        assert_eq!(
            err,
            InvalidAnswers::NotAnInteger { position: 2, value: "0.5".to_string() }
        );
    }

    #[test]
    fn string_and_null_answers_are_not_integers() {
        let err = request(r#"{"answers": ["1", 0]}"#).into_command().unwrap_err();
        assert!(matches!(err, InvalidAnswers::NotAnInteger { position: 0, .. }));

        let err = request(r#"{"answers": [0, null]}"#).into_command().unwrap_err();
        assert!(matches!(err, InvalidAnswers::NotAnInteger { position: 1, .. }));
    }

    #[test]
    fn oversized_integer_saturates() {
        let cmd = request(r#"{"answers": [18446744073709551615]}"#).into_command().unwrap();
        assert_eq!(cmd.answers, vec![i64::MAX]);
    }

    #[test]
    fn question_response_uses_catalog_field_names() {
        let question = Question::new(3, "Parties?", vec![
            AnswerOption::new("Yes", Dimension::Extraversion),
            AnswerOption::new("No", Dimension::Introversion),
        ]);
        let json = serde_json::to_value(QuestionResponse::from(question)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["question"], "Parties?");
        assert_eq!(json["options"][1]["answer"], "No");
        assert_eq!(json["options"][1]["dimension"], "I");
    }

    #[test]
    fn type_descriptor_response_renames_code() {
        let descriptor = TypeDescriptor::new(
            "ISTP".parse().unwrap(),
            "Virtuoso",
            "Bold experimenters.",
            vec!["adventurous".to_string()],
        );
        let json = serde_json::to_value(TypeDescriptorResponse::from(descriptor)).unwrap();
        assert_eq!(json["type"], "ISTP");
        assert_eq!(json["traits"][0], "adventurous");
    }

    #[test]
    fn error_response_from_domain_error_carries_details() {
        let error = DomainError::new(ErrorCode::InvalidAnswers, "bad").with_detail("position", "2");
        let response = ErrorResponse::from(&error);
        assert_eq!(response.code, "INVALID_ANSWERS");
        assert_eq!(response.details.unwrap()["position"], "2");
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::internal("boom")).unwrap();
        assert!(json.get("details").is_none());
    }
}
