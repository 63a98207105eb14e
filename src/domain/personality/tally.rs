//! Dimension Tally - weighted votes and occurrence counts per letter.

use serde::Serialize;

use super::{DimensionMap, QuestionCatalog, ValidatedAnswers};

/// Accumulated votes for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DimensionTally {
    /// Sum of the weights of every selected option tagged with this letter.
    /// Saturates instead of wrapping.
    pub weight_sum: u64,
    /// How many questions selected this letter.
    pub occurrences: u32,
}

/// Tally for all eight dimensions. Letters never selected stay at 0/0.
pub type DimensionTallySet = DimensionMap<DimensionTally>;

/// Accumulates chosen options into a [`DimensionTallySet`].
pub struct DimensionTallier;

impl DimensionTallier {
    /// Resolves each chosen option and adds it to its dimension.
    ///
    /// Infallible: `answers` was validated against `catalog`.
    pub fn tally(answers: &ValidatedAnswers, catalog: &QuestionCatalog) -> DimensionTallySet {
        let mut tallies = DimensionTallySet::default();

        for (question, &index) in catalog.iter().zip(answers.indices()) {
            let Some(option) = question.option(index) else {
                continue;
            };
            let entry = &mut tallies[option.dimension];
            entry.weight_sum = entry.weight_sum.saturating_add(u64::from(option.weight));
            entry.occurrences = entry.occurrences.saturating_add(1);
        }

        tallies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::personality::{
        AnswerOption, AnswerValidator, Axis, Dimension, Question,
    };
    use Dimension::*;

    fn question(id: u32, first: AnswerOption, second: AnswerOption) -> Question {
        Question::new(id, format!("Q{}", id), vec![first, second])
    }

    fn tally_for(catalog: &QuestionCatalog, answers: &[i64]) -> DimensionTallySet {
        let validated = AnswerValidator::validate(answers, catalog).unwrap();
        DimensionTallier::tally(&validated, catalog)
    }

    #[test]
    fn counts_weights_and_occurrences() {
        let catalog = QuestionCatalog::new(vec![
            question(1, AnswerOption::new("a", Extraversion), AnswerOption::new("b", Introversion)),
            question(2, AnswerOption::new("a", Extraversion), AnswerOption::new("b", Introversion)),
            question(3, AnswerOption::new("a", Thinking), AnswerOption::new("b", Feeling)),
        ])
        .unwrap();

        let tallies = tally_for(&catalog, &[0, 1, 1]);

        assert_eq!(tallies[Extraversion], DimensionTally { weight_sum: 1, occurrences: 1 });
        assert_eq!(tallies[Introversion], DimensionTally { weight_sum: 1, occurrences: 1 });
        assert_eq!(tallies[Feeling], DimensionTally { weight_sum: 1, occurrences: 1 });
        assert_eq!(tallies[Thinking], DimensionTally::default());
    }

    #[test]
    fn unselected_letters_stay_zero() {
        let catalog = QuestionCatalog::new(vec![question(
            1,
            AnswerOption::new("a", Judging),
            AnswerOption::new("b", Perceiving),
        )])
        .unwrap();

        let tallies = tally_for(&catalog, &[0]);
        for dimension in Dimension::ALL {
            if dimension != Judging {
                assert_eq!(tallies[dimension], DimensionTally::default());
            }
        }
    }

    #[test]
    fn heavier_options_add_their_weight() {
        let catalog = QuestionCatalog::new(vec![
            question(1, AnswerOption::weighted("a", Sensing, 3), AnswerOption::new("b", Intuition)),
            question(2, AnswerOption::weighted("a", Sensing, 2), AnswerOption::new("b", Intuition)),
        ])
        .unwrap();

        let tallies = tally_for(&catalog, &[0, 0]);
        assert_eq!(tallies[Sensing], DimensionTally { weight_sum: 5, occurrences: 2 });
    }

    #[test]
    fn maximal_weights_accumulate_without_overflow() {
        let catalog = QuestionCatalog::new(vec![
            question(1, AnswerOption::weighted("a", Extraversion, u32::MAX), AnswerOption::new("b", Introversion)),
            question(2, AnswerOption::weighted("a", Extraversion, 2), AnswerOption::new("b", Introversion)),
        ])
        .unwrap();

        let tallies = tally_for(&catalog, &[0, 0]);
        assert_eq!(
            tallies[Extraversion],
            DimensionTally { weight_sum: u64::from(u32::MAX) + 2, occurrences: 2 }
        );
    }

    #[test]
    fn axis_occurrences_sum_to_axis_question_count() {
        let catalog = QuestionCatalog::new(vec![
            question(1, AnswerOption::new("a", Extraversion), AnswerOption::new("b", Introversion)),
            question(2, AnswerOption::new("a", Introversion), AnswerOption::new("b", Extraversion)),
            question(3, AnswerOption::new("a", Sensing), AnswerOption::new("b", Intuition)),
            question(4, AnswerOption::new("a", Judging), AnswerOption::new("b", Perceiving)),
        ])
        .unwrap();

        let tallies = tally_for(&catalog, &[1, 1, 0, 1]);
        for axis in Axis::ALL {
            let (first, second) = axis.poles();
            let total = tallies[first].occurrences + tallies[second].occurrences;
            assert_eq!(total as usize, catalog.count_for_axis(axis), "axis {}", axis);
        }
    }
}
