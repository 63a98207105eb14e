//! Four-letter personality type codes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::{Axis, Dimension};

/// One letter per axis, in E/I, S/N, T/F, J/P order.
///
/// Construction guarantees each position holds a pole of its own axis, so a
/// code is always one of the 16 combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonalityTypeCode([Dimension; 4]);

impl PersonalityTypeCode {
    /// Builds a code from one letter per axis.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidFormat` if a letter sits on the wrong axis.
    pub fn new(letters: [Dimension; 4]) -> Result<Self, ValidationError> {
        for (axis, letter) in Axis::ALL.iter().zip(letters.iter()) {
            if !axis.contains(*letter) {
                return Err(ValidationError::invalid_format(
                    "type_code",
                    format!("position for {} cannot hold '{}'", axis, letter),
                ));
            }
        }
        Ok(Self(letters))
    }

    /// Builds a code by choosing, per axis, its first pole (E, S, T, J) when
    /// `prefer_first` returns true and its second pole otherwise.
    pub fn from_choices(mut prefer_first: impl FnMut(Axis) -> bool) -> Self {
        Self(Axis::ALL.map(|axis| {
            let (first, second) = axis.poles();
            if prefer_first(axis) {
                first
            } else {
                second
            }
        }))
    }

    /// Every valid code, in binary order from ESTJ to INFP.
    pub fn all() -> Vec<Self> {
        (0..16u8)
            .map(|bits| Self::from_choices(|axis| bits >> (3 - axis as u8) & 1 == 0))
            .collect()
    }

    /// Returns the letter chosen on `axis`.
    pub fn letter_for(&self, axis: Axis) -> Dimension {
        self.0[axis as usize]
    }

    /// Returns the four letters in axis order.
    pub fn letters(&self) -> [Dimension; 4] {
        self.0
    }

    /// Returns true if `dimension` is part of this code.
    pub fn contains(&self, dimension: Dimension) -> bool {
        self.letter_for(dimension.axis()) == dimension
    }
}

impl fmt::Display for PersonalityTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for PersonalityTypeCode {
    type Err = ValidationError;

    /// Parses a code such as `"INTJ"`. Lowercase input is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        if chars.len() != 4 {
            return Err(ValidationError::invalid_format(
                "type_code",
                format!("expected 4 letters, got '{}'", s),
            ));
        }

        let mut letters = [Dimension::Extraversion; 4];
        for (slot, c) in letters.iter_mut().zip(chars) {
            *slot = Dimension::from_letter(c).ok_or_else(|| {
                ValidationError::invalid_format("type_code", format!("unknown letter '{}'", c))
            })?;
        }
        Self::new(letters)
    }
}

impl Serialize for PersonalityTypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PersonalityTypeCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
