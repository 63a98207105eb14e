//! ScoreAnswersHandler - Command handler for scoring an answer vector.
//!
//! Runs the personality engine and translates its errors into domain errors.
//! Invalid answers are a caller problem; an unknown resolved type means the
//! type catalog has drifted from the resolver and is logged as an error.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::foundation::DomainError;
use crate::domain::personality::{Normalizer, PersonalityEngine, PersonalityResult, ScoringError};

/// Command to score one set of answers.
#[derive(Debug, Clone)]
pub struct ScoreAnswersCommand {
    /// One option index per question, in catalog order.
    pub answers: Vec<i64>,
}

/// Result of a successful scoring command.
pub type ScoreAnswersResult = PersonalityResult;

/// Handler for scoring answers.
pub struct ScoreAnswersHandler {
    engine: Arc<PersonalityEngine>,
}

impl ScoreAnswersHandler {
    pub fn new(engine: Arc<PersonalityEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self, cmd: ScoreAnswersCommand) -> Result<ScoreAnswersResult, DomainError> {
        match self.engine.score(&cmd.answers) {
            Ok(result) => {
                for (dimension, tally) in result.tallies.iter() {
                    let raw = Normalizer::raw_score(tally);
                    if raw > 100 {
                        warn!(dimension = %dimension, raw, "Score clamped to 100");
                    }
                }
                debug!(
                    type_code = %result.type_code,
                    overall_confidence = result.overall_confidence.value(),
                    "Scored personality answers"
                );
                Ok(result)
            }
            Err(err @ ScoringError::InvalidInput(_)) => {
                debug!("Rejected answers: {}", err);
                Err(err.into())
            }
            Err(err @ ScoringError::UnknownType(_)) => {
                error!("Type catalog out of sync with resolver: {}", err);
                Err(err.into())
            }
        }
    }
}
