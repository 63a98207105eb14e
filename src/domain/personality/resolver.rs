//! Type Resolver - picks the dominant letter on each axis.

use crate::domain::foundation::Percentage;

use super::{NormalizedScoreSet, PersonalityTypeCode};

/// Score at or above which the first letter of an axis (E, S, T, J) wins.
pub const FIRST_LETTER_THRESHOLD: Percentage = Percentage::HALF;

/// Resolves normalized scores into a type code.
pub struct TypeResolver;

impl TypeResolver {
    /// Selects, per axis in E/I, S/N, T/F, J/P order, the first letter when its
    /// score is `>= 50`, otherwise the second letter.
    ///
    /// Only the first letter's score is consulted: the two poles are
    /// normalized against different occurrence counts and need not sum to 100.
    pub fn resolve(scores: &NormalizedScoreSet) -> PersonalityTypeCode {
        PersonalityTypeCode::from_choices(|axis| {
            let (first, _) = axis.poles();
            scores[first] >= FIRST_LETTER_THRESHOLD
        })
    }
}
