//! Personality Engine - runs the full scoring pipeline.
//!
//! Validator → Tally → Normalizer → Resolver → Confidence, then a descriptor
//! lookup for the resolved code.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::Percentage;

use super::{
    AnswerValidator, ConfidenceCalculator, ConfidenceSet, DimensionTallier, DimensionTallySet,
    NormalizedScoreSet, Normalizer, PersonalityTypeCode, QuestionCatalog, ScoringError,
    TypeCatalog, TypeDescriptor, TypeResolver,
};

/// Everything derived from one answer vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityResult {
    pub type_code: PersonalityTypeCode,
    pub descriptor: TypeDescriptor,
    pub tallies: DimensionTallySet,
    pub scores: NormalizedScoreSet,
    pub confidence: ConfidenceSet,
    pub overall_confidence: Percentage,
}

/// Stateless scorer over injected, read-only catalogs.
///
/// Cheap to clone and safe to share across threads; every call works on
/// local state only.
#[derive(Debug, Clone)]
pub struct PersonalityEngine {
    questions: Arc<QuestionCatalog>,
    types: Arc<TypeCatalog>,
}

impl PersonalityEngine {
    pub fn new(questions: Arc<QuestionCatalog>, types: Arc<TypeCatalog>) -> Self {
        Self { questions, types }
    }

    pub fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    pub fn types(&self) -> &TypeCatalog {
        &self.types
    }

    /// Scores an answer vector.
    ///
    /// # Errors
    /// - `InvalidInput` when the vector does not fit the question catalog
    /// - `UnknownType` when the resolved code has no descriptor
    pub fn score(&self, answers: &[i64]) -> Result<PersonalityResult, ScoringError> {
        let validated = AnswerValidator::validate(answers, &self.questions)?;
        let tallies = DimensionTallier::tally(&validated, &self.questions);
        let scores = Normalizer::normalize(&tallies);
        let type_code = TypeResolver::resolve(&scores);
        let confidence = ConfidenceCalculator::calculate(&scores);
        let overall_confidence = ConfidenceCalculator::overall(&confidence, type_code);
        let descriptor = self.types.lookup(type_code)?.clone();

        Ok(PersonalityResult {
            type_code,
            descriptor,
            tallies,
            scores,
            confidence,
            overall_confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::personality::{
        AnswerOption, Axis, Dimension, DimensionTally, InvalidAnswers, Question,
    };
    use proptest::prelude::*;

    /// 16 questions, 4 per axis, E/I then S/N then T/F then J/P, all weight 1.
    fn balanced_questions() -> QuestionCatalog {
        let questions = Axis::ALL
            .iter()
            .flat_map(|axis| std::iter::repeat(*axis).take(4))
            .enumerate()
            .map(|(i, axis)| {
                let (first, second) = axis.poles();
                Question::new(i as u32 + 1, format!("Question {}", i + 1), vec![
                    AnswerOption::new("first", first),
                    AnswerOption::new("second", second),
                ])
            })
            .collect();
        QuestionCatalog::new(questions).unwrap()
    }

    fn full_types() -> TypeCatalog {
        TypeCatalog::new(
            PersonalityTypeCode::all()
                .into_iter()
                .map(|code| TypeDescriptor::new(code, format!("{} name", code), "desc", vec![]))
                .collect(),
        )
        .unwrap()
    }

    fn engine() -> PersonalityEngine {
        PersonalityEngine::new(Arc::new(balanced_questions()), Arc::new(full_types()))
    }

    fn pct(value: u8) -> Percentage {
        Percentage::new(value)
    }

    #[test]
    fn esfj_scenario_matches_expected_tallies_scores_and_confidence() {
        use Dimension::*;
        let answers = [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0];

        let result = engine().score(&answers).unwrap();

        let expected_sums = [
            (Extraversion, 4), (Introversion, 0), (Sensing, 4), (Intuition, 0),
            (Thinking, 0), (Feeling, 4), (Judging, 4), (Perceiving, 0),
        ];
        for (dimension, sum) in expected_sums {
            assert_eq!(
                result.tallies[dimension],
                DimensionTally { weight_sum: u64::from(sum), occurrences: sum },
                "tally for {}",
                dimension
            );
        }

        let expected_scores = [
            (Extraversion, 100), (Introversion, 0), (Sensing, 100), (Intuition, 0),
            (Thinking, 0), (Feeling, 100), (Judging, 100), (Perceiving, 0),
        ];
        for (dimension, score) in expected_scores {
            assert_eq!(result.scores[dimension], pct(score), "score for {}", dimension);
        }

        assert_eq!(result.type_code.to_string(), "ESFJ");
        assert_eq!(result.descriptor.code, result.type_code);

        for dimension in [Extraversion, Sensing, Feeling, Judging] {
            assert_eq!(result.confidence[dimension], Percentage::HUNDRED);
        }
        assert_eq!(result.overall_confidence, Percentage::HUNDRED);
    }

    #[test]
    fn all_first_options_resolve_to_estj() {
        let result = engine().score(&[0; 16]).unwrap();
        assert_eq!(result.type_code.to_string(), "ESTJ");
    }

    #[test]
    fn all_second_options_resolve_to_infp() {
        let result = engine().score(&[1; 16]).unwrap();
        assert_eq!(result.type_code.to_string(), "INFP");
    }

    #[test]
    fn wrong_length_is_invalid_input() {
        let err = engine().score(&[0; 15]).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidInput(InvalidAnswers::WrongLength { expected: 16, actual: 15 })
        );
    }

    #[test]
    fn index_two_is_invalid_input() {
        let mut answers = [0i64; 16];
        answers[7] = 2;
        let err = engine().score(&answers).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::InvalidInput(InvalidAnswers::OutOfRange { position: 7, value: 2, .. })
        ));
    }

    #[test]
    fn missing_descriptor_is_unknown_type() {
        let types = TypeCatalog::new(vec![TypeDescriptor::new(
            "INTJ".parse().unwrap(),
            "Architect",
            "desc",
            vec![],
        )])
        .unwrap();
        let engine = PersonalityEngine::new(Arc::new(balanced_questions()), Arc::new(types));

        let err = engine.score(&[0; 16]).unwrap_err();
        assert_eq!(err, ScoringError::UnknownType("ESTJ".parse().unwrap()));
    }

    #[test]
    fn weighted_options_clamp_scores_to_hundred() {
        let questions = QuestionCatalog::new(vec![
            Question::new(1, "Q1", vec![
                AnswerOption::weighted("a", Dimension::Extraversion, 3),
                AnswerOption::new("b", Dimension::Introversion),
            ]),
            Question::new(2, "Q2", vec![
                AnswerOption::new("a", Dimension::Sensing),
                AnswerOption::new("b", Dimension::Intuition),
            ]),
            Question::new(3, "Q3", vec![
                AnswerOption::new("a", Dimension::Thinking),
                AnswerOption::new("b", Dimension::Feeling),
            ]),
            Question::new(4, "Q4", vec![
                AnswerOption::new("a", Dimension::Judging),
                AnswerOption::new("b", Dimension::Perceiving),
            ]),
        ])
        .unwrap();
        let engine = PersonalityEngine::new(Arc::new(questions), Arc::new(full_types()));

        let result = engine.score(&[0, 1, 1, 1]).unwrap();
        assert_eq!(result.tallies[Dimension::Extraversion].weight_sum, 3);
        assert_eq!(result.scores[Dimension::Extraversion], Percentage::HUNDRED);
        assert_eq!(result.type_code.to_string(), "ENFP");
    }

    #[test]
    fn maximal_weights_on_one_letter_still_score() {
        let questions = QuestionCatalog::new(vec![
            Question::new(1, "Q1", vec![
                AnswerOption::weighted("a", Dimension::Extraversion, u32::MAX),
                AnswerOption::new("b", Dimension::Introversion),
            ]),
            Question::new(2, "Q2", vec![
                AnswerOption::weighted("a", Dimension::Extraversion, 2),
                AnswerOption::new("b", Dimension::Introversion),
            ]),
        ])
        .unwrap();
        let engine = PersonalityEngine::new(Arc::new(questions), Arc::new(full_types()));

        let result = engine.score(&[0, 0]).unwrap();
        assert_eq!(
            result.tallies[Dimension::Extraversion].weight_sum,
            u64::from(u32::MAX) + 2
        );
        assert_eq!(result.scores[Dimension::Extraversion], Percentage::HUNDRED);
        assert!(Normalizer::raw_score(&result.tallies[Dimension::Extraversion]) > 100);
        assert_eq!(result.type_code.to_string(), "ENFP");
    }

    #[test]
    fn every_code_is_reachable_and_resolvable() {
        let engine = engine();
        let mut seen = std::collections::HashSet::new();
        for bits in 0..16u32 {
            let answers: Vec<i64> = (0..16)
                .map(|i| i64::from(bits >> (3 - i / 4) & 1))
                .collect();
            let result = engine.score(&answers).unwrap();
            seen.insert(result.type_code);
        }
        assert_eq!(seen.len(), 16);
    }

    proptest! {
        #[test]
        fn scoring_is_deterministic(answers in prop::collection::vec(0i64..=1, 16)) {
            let engine = engine();
            let first = engine.score(&answers).unwrap();
            let second = engine.score(&answers).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn results_have_valid_shape(answers in prop::collection::vec(0i64..=1, 16)) {
            let result = engine().score(&answers).unwrap();

            for axis in Axis::ALL {
                prop_assert!(axis.contains(result.type_code.letter_for(axis)));
            }
            prop_assert_eq!(result.type_code.to_string().len(), 4);
            for dimension in Dimension::ALL {
                prop_assert!(result.scores[dimension].value() <= 100);
                prop_assert!(result.confidence[dimension].value() <= 100);
            }
        }

        #[test]
        fn occurrences_partition_each_axis(answers in prop::collection::vec(0i64..=1, 16)) {
            let result = engine().score(&answers).unwrap();
            for axis in Axis::ALL {
                let (first, second) = axis.poles();
                let total = result.tallies[first].occurrences + result.tallies[second].occurrences;
                prop_assert_eq!(total, 4);
            }
        }

        #[test]
        fn out_of_range_answers_are_rejected(
            position in 0usize..16,
            value in prop_oneof![2i64..100, -100i64..0],
        ) {
            let mut answers = vec![0i64; 16];
            answers[position] = value;
            let is_invalid = matches!(engine().score(&answers), Err(ScoringError::InvalidInput(_)));
            prop_assert!(is_invalid);
        }
    }
}
