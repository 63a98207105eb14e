//! Answer Validator - shape and bounds checks for an answer vector.

use super::{InvalidAnswers, QuestionCatalog};

/// An answer vector proven to fit a question catalog.
///
/// Holds the same values that were submitted; only the type changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAnswers(Vec<usize>);

impl ValidatedAnswers {
    /// Option indices in question order.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// Validates answer vectors against a catalog.
pub struct AnswerValidator;

impl AnswerValidator {
    /// Checks that there is one answer per question and each is a valid option index.
    ///
    /// # Errors
    /// - `WrongLength` if `answers.len() != catalog.len()`
    /// - `OutOfRange` for the first element outside `[0, option_count - 1]`
    pub fn validate(
        answers: &[i64],
        catalog: &QuestionCatalog,
    ) -> Result<ValidatedAnswers, InvalidAnswers> {
        if answers.len() != catalog.len() {
            return Err(InvalidAnswers::WrongLength {
                expected: catalog.len(),
                actual: answers.len(),
            });
        }

        answers
            .iter()
            .zip(catalog.iter())
            .enumerate()
            .map(|(position, (&value, question))| {
                let max = question.options.len() - 1;
                usize::try_from(value)
                    .ok()
                    .filter(|index| *index <= max)
                    .ok_or(InvalidAnswers::OutOfRange {
                        position,
                        question_id: question.id,
                        max,
                        value,
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ValidatedAnswers)
    }
}
