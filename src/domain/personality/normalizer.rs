//! Normalizer - converts tallies into per-letter percentages.

use crate::domain::foundation::Percentage;

use super::{DimensionMap, DimensionTally, DimensionTallySet};

/// Percentage score for all eight dimensions.
pub type NormalizedScoreSet = DimensionMap<Percentage>;

/// Turns weight sums into percentages of their own occurrence count.
pub struct Normalizer;

impl Normalizer {
    /// Computes `round(weight_sum / max(occurrences, 1) * 100)` per letter.
    ///
    /// # Edge Cases
    /// - Never-selected letter: the divisor is floored at 1, so the score is 0%
    ///   rather than an error.
    /// - Average weight above 1: clamped to 100%.
    pub fn normalize(tallies: &DimensionTallySet) -> NormalizedScoreSet {
        tallies.map(|_, tally| Self::score(tally))
    }

    fn score(tally: &DimensionTally) -> Percentage {
        let clamped = Self::raw_score(tally).min(100);
        Percentage::new(u8::try_from(clamped).unwrap_or(100))
    }

    /// Unclamped score for a tally, for callers that need to detect clamping.
    ///
    /// Saturates at `u64::MAX` for sums too large to scale.
    pub fn raw_score(tally: &DimensionTally) -> u64 {
        let divisor = u128::from(tally.occurrences.max(1));
        let scaled = u128::from(tally.weight_sum) * 100;
        // round half up in integer arithmetic
        let rounded = (scaled * 2 + divisor) / (divisor * 2);
        u64::try_from(rounded).unwrap_or(u64::MAX)
    }
}
