//! Dimensions (letters) and the four bipolar axes they belong to.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One pole of a personality axis.
///
/// Variant order is the canonical reporting order: E, I, S, N, T, F, J, P.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "I")]
    Introversion,
    #[serde(rename = "S")]
    Sensing,
    #[serde(rename = "N")]
    Intuition,
    #[serde(rename = "T")]
    Thinking,
    #[serde(rename = "F")]
    Feeling,
    #[serde(rename = "J")]
    Judging,
    #[serde(rename = "P")]
    Perceiving,
}

impl Dimension {
    /// All eight dimensions in canonical order.
    pub const ALL: [Dimension; 8] = [
        Dimension::Extraversion,
        Dimension::Introversion,
        Dimension::Sensing,
        Dimension::Intuition,
        Dimension::Thinking,
        Dimension::Feeling,
        Dimension::Judging,
        Dimension::Perceiving,
    ];

    /// Returns the single-letter code for this dimension.
    pub fn letter(&self) -> char {
        match self {
            Dimension::Extraversion => 'E',
            Dimension::Introversion => 'I',
            Dimension::Sensing => 'S',
            Dimension::Intuition => 'N',
            Dimension::Thinking => 'T',
            Dimension::Feeling => 'F',
            Dimension::Judging => 'J',
            Dimension::Perceiving => 'P',
        }
    }

    /// Parses a single letter (case-sensitive).
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.letter() == letter)
    }

    /// Returns the axis this dimension belongs to.
    pub fn axis(&self) -> Axis {
        match self {
            Dimension::Extraversion | Dimension::Introversion => Axis::EnergyFocus,
            Dimension::Sensing | Dimension::Intuition => Axis::Perception,
            Dimension::Thinking | Dimension::Feeling => Axis::Judgment,
            Dimension::Judging | Dimension::Perceiving => Axis::Lifestyle,
        }
    }

    /// Returns the opposite pole on the same axis.
    pub fn opposite(&self) -> Self {
        let (first, second) = self.axis().poles();
        if *self == first {
            second
        } else {
            first
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_letter(c).ok_or_else(|| {
                ValidationError::invalid_format("dimension", format!("unknown letter '{}'", c))
            }),
            _ => Err(ValidationError::invalid_format(
                "dimension",
                format!("expected a single letter, got '{}'", s),
            )),
        }
    }
}

/// A bipolar pair of dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// E/I
    EnergyFocus,
    /// S/N
    Perception,
    /// T/F
    Judgment,
    /// J/P
    Lifestyle,
}

impl Axis {
    /// Axes in type-code order.
    pub const ALL: [Axis; 4] = [
        Axis::EnergyFocus,
        Axis::Perception,
        Axis::Judgment,
        Axis::Lifestyle,
    ];

    /// Returns `(first, second)` where `first` wins ties (E, S, T, J).
    pub fn poles(&self) -> (Dimension, Dimension) {
        match self {
            Axis::EnergyFocus => (Dimension::Extraversion, Dimension::Introversion),
            Axis::Perception => (Dimension::Sensing, Dimension::Intuition),
            Axis::Judgment => (Dimension::Thinking, Dimension::Feeling),
            Axis::Lifestyle => (Dimension::Judging, Dimension::Perceiving),
        }
    }

    /// Returns true if the dimension is one of this axis's poles.
    pub fn contains(&self, dimension: Dimension) -> bool {
        dimension.axis() == *self
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.poles();
        write!(f, "{}/{}", first, second)
    }
}

/// A value for each of the eight dimensions, iterated in canonical order.
///
/// Serializes as a JSON object keyed by letter: `{"E": .., "I": .., ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimensionMap<T>([T; 8]);

impl<T> DimensionMap<T> {
    /// Builds a map by evaluating `f` for every dimension.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self(Dimension::ALL.map(&mut f))
    }

    /// Iterates `(dimension, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL.into_iter().zip(self.0.iter())
    }

    /// Transforms every value, keeping the dimension keys.
    pub fn map<U>(&self, mut f: impl FnMut(Dimension, &T) -> U) -> DimensionMap<U> {
        DimensionMap::from_fn(|d| f(d, &self[d]))
    }
}

impl<T> Index<Dimension> for DimensionMap<T> {
    type Output = T;

    fn index(&self, dimension: Dimension) -> &T {
        &self.0[dimension.index()]
    }
}

impl<T> IndexMut<Dimension> for DimensionMap<T> {
    fn index_mut(&mut self, dimension: Dimension) -> &mut T {
        &mut self.0[dimension.index()]
    }
}

impl<T: Serialize> Serialize for DimensionMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(8))?;
        for (dimension, value) in self.iter() {
            map.serialize_entry(&dimension, value)?;
        }
        map.end()
    }
}
