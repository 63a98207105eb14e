//! Questions, their options, and the immutable question catalog.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

use super::{Axis, CatalogError, Dimension};

/// Number of options every forced-choice question carries.
pub const OPTIONS_PER_QUESTION: usize = 2;

/// Default contribution of a selected option.
pub const DEFAULT_WEIGHT: u32 = 1;

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: String,
    pub dimension: Dimension,
    pub weight: u32,
}

impl AnswerOption {
    /// Creates an option with the default weight of 1.
    pub fn new(text: impl Into<String>, dimension: Dimension) -> Self {
        Self::weighted(text, dimension, DEFAULT_WEIGHT)
    }

    /// Creates an option with an explicit weight.
    pub fn weighted(text: impl Into<String>, dimension: Dimension, weight: u32) -> Self {
        Self {
            text: text.into(),
            dimension,
            weight,
        }
    }
}

/// A forced-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id,
            text: text.into(),
            options,
        }
    }

    /// Returns the axis this question measures.
    ///
    /// Only meaningful on questions inside a [`QuestionCatalog`], which
    /// guarantees both options sit on the same axis.
    pub fn axis(&self) -> Axis {
        self.options[0].dimension.axis()
    }

    /// Returns the option at `index`, if any.
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field(format!("questions[{}].text", self.id)).into());
        }
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(CatalogError::OptionCount {
                question_id: self.id,
                count: self.options.len(),
            });
        }
        for (option_index, option) in self.options.iter().enumerate() {
            if option.weight == 0 {
                return Err(CatalogError::ZeroWeight {
                    question_id: self.id,
                    option_index,
                });
            }
        }

        let (first, second) = (self.options[0].dimension, self.options[1].dimension);
        if first.opposite() != second {
            return Err(CatalogError::MismatchedPoles {
                question_id: self.id,
                first,
                second,
            });
        }
        Ok(())
    }
}

/// The ordered, read-only question bank an answer vector is scored against.
///
/// Built once and shared; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a catalog, enforcing the forced-choice rules.
    ///
    /// # Errors
    /// - `EmptyCatalog` when no questions are given
    /// - `DuplicateQuestionId` when two questions share an id
    /// - `OptionCount`, `ZeroWeight`, `MismatchedPoles` for malformed questions
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestionId(question.id));
            }
            question.check()?;
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Number of questions measuring `axis`.
    pub fn count_for_axis(&self, axis: Axis) -> usize {
        self.questions.iter().filter(|q| q.axis() == axis).count()
    }
}
