//! Personality Module - forced-choice inventory scoring.
//!
//! # Pipeline
//!
//! - `AnswerValidator` - shape and bounds of the answer vector
//! - `DimensionTallier` - weight sums and occurrence counts per letter
//! - `Normalizer` - `round(weight_sum / max(occurrences, 1) * 100)`, clamped to 100
//! - `TypeResolver` - first letter of each axis when its score is `>= 50`
//! - `ConfidenceCalculator` - own score if `>= 50`, else `100 - opposite`
//!
//! `PersonalityEngine` runs the stages in order and looks the resolved code up
//! in the `TypeCatalog`. Both catalogs are immutable and injected at
//! construction; all other state lives for one call only.

mod confidence;
mod dimension;
mod engine;
mod errors;
mod normalizer;
mod question;
mod resolver;
mod tally;
mod type_catalog;
mod type_code;
mod validator;

pub use confidence::{ConfidenceCalculator, ConfidenceSet};
pub use dimension::{Axis, Dimension, DimensionMap};
pub use engine::{PersonalityEngine, PersonalityResult};
pub use errors::{CatalogError, InvalidAnswers, ScoringError};
pub use normalizer::{NormalizedScoreSet, Normalizer};
pub use question::{AnswerOption, Question, QuestionCatalog, DEFAULT_WEIGHT, OPTIONS_PER_QUESTION};
pub use resolver::{TypeResolver, FIRST_LETTER_THRESHOLD};
pub use tally::{DimensionTallier, DimensionTally, DimensionTallySet};
pub use type_catalog::{TypeCatalog, TypeDescriptor};
pub use type_code::PersonalityTypeCode;
pub use validator::{AnswerValidator, ValidatedAnswers};
