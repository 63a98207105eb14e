//! Confidence Calculator - how decisively each letter won or lost its axis.

use crate::domain::foundation::Percentage;

use super::{Axis, DimensionMap, NormalizedScoreSet, PersonalityTypeCode};

/// Confidence for all eight dimensions.
pub type ConfidenceSet = DimensionMap<Percentage>;

/// Derives per-letter confidence from normalized scores.
pub struct ConfidenceCalculator;

impl ConfidenceCalculator {
    /// For each letter: its own score when that is `>= 50`, otherwise
    /// `100 - score of its opposite`.
    pub fn calculate(scores: &NormalizedScoreSet) -> ConfidenceSet {
        scores.map(|dimension, &own| {
            if own >= Percentage::HALF {
                own
            } else {
                scores[dimension.opposite()].complement()
            }
        })
    }

    /// Weakest confidence among the letters in `code`.
    ///
    /// A type is only as certain as its least decisive axis.
    pub fn overall(confidence: &ConfidenceSet, code: PersonalityTypeCode) -> Percentage {
        Axis::ALL
            .iter()
            .map(|axis| confidence[code.letter_for(*axis)])
            .min()
            .unwrap_or(Percentage::ZERO)
    }
}
