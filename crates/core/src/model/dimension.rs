use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("unknown dimension letter: {0:?}")]
    UnknownLetter(String),
}

//
// ─── DIMENSION ────────────────────────────────────────────────────────────────
//

/// One pole of a personality dichotomy, carried by every answer option.
///
/// Serialized as its single letter (`"E"`, `"I"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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
    /// All eight dimensions, grouped by pair in type-code order.
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

    #[must_use]
    pub fn letter(self) -> char {
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

    /// Parses an uppercase dimension letter.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::UnknownLetter` for anything outside `EISNTFJP`.
    pub fn from_letter(letter: char) -> Result<Self, DimensionError> {
        match letter {
            'E' => Ok(Dimension::Extraversion),
            'I' => Ok(Dimension::Introversion),
            'S' => Ok(Dimension::Sensing),
            'N' => Ok(Dimension::Intuition),
            'T' => Ok(Dimension::Thinking),
            'F' => Ok(Dimension::Feeling),
            'J' => Ok(Dimension::Judging),
            'P' => Ok(Dimension::Perceiving),
            other => Err(DimensionError::UnknownLetter(other.to_string())),
        }
    }

    /// The dichotomy this dimension belongs to.
    #[must_use]
    pub fn pair(self) -> DimensionPair {
        match self {
            Dimension::Extraversion | Dimension::Introversion => DimensionPair::EnergySource,
            Dimension::Sensing | Dimension::Intuition => DimensionPair::Perception,
            Dimension::Thinking | Dimension::Feeling => DimensionPair::Judgement,
            Dimension::Judging | Dimension::Perceiving => DimensionPair::Lifestyle,
        }
    }

    /// Dense index into an eight-slot counter array, matching `Dimension::ALL`.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Dimension::Extraversion => 0,
            Dimension::Introversion => 1,
            Dimension::Sensing => 2,
            Dimension::Intuition => 3,
            Dimension::Thinking => 4,
            Dimension::Feeling => 5,
            Dimension::Judging => 6,
            Dimension::Perceiving => 7,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Dimension {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => Err(DimensionError::UnknownLetter(s.to_string())),
        }
    }
}

//
// ─── DIMENSION PAIR ───────────────────────────────────────────────────────────
//

/// One of the four opposed pairs. The first pole wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionPair {
    /// E / I
    EnergySource,
    /// S / N
    Perception,
    /// T / F
    Judgement,
    /// J / P
    Lifestyle,
}

impl DimensionPair {
    /// Pairs in the order their winners appear in a type code.
    pub const ALL: [DimensionPair; 4] = [
        DimensionPair::EnergySource,
        DimensionPair::Perception,
        DimensionPair::Judgement,
        DimensionPair::Lifestyle,
    ];

    #[must_use]
    pub fn first(self) -> Dimension {
        match self {
            DimensionPair::EnergySource => Dimension::Extraversion,
            DimensionPair::Perception => Dimension::Sensing,
            DimensionPair::Judgement => Dimension::Thinking,
            DimensionPair::Lifestyle => Dimension::Judging,
        }
    }

    #[must_use]
    pub fn second(self) -> Dimension {
        match self {
            DimensionPair::EnergySource => Dimension::Introversion,
            DimensionPair::Perception => Dimension::Intuition,
            DimensionPair::Judgement => Dimension::Feeling,
            DimensionPair::Lifestyle => Dimension::Perceiving,
        }
    }

    #[must_use]
    pub fn contains(self, dimension: Dimension) -> bool {
        dimension.pair() == self
    }
}

impl fmt::Display for DimensionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first(), self.second())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip_through_parse() {
        for dimension in Dimension::ALL {
            let parsed: Dimension = dimension.letter().to_string().parse().unwrap();
            assert_eq!(parsed, dimension);
        }
    }

    #[test]
    fn rejects_unknown_letters() {
        assert!("X".parse::<Dimension>().is_err());
        assert!("EI".parse::<Dimension>().is_err());
        assert!("".parse::<Dimension>().is_err());
    }

    #[test]
    fn pairs_partition_all_dimensions() {
        for pair in DimensionPair::ALL {
            assert!(pair.contains(pair.first()));
            assert!(pair.contains(pair.second()));
            assert_ne!(pair.first(), pair.second());
        }
        for dimension in Dimension::ALL {
            assert_eq!(Dimension::ALL[dimension.index()], dimension);
        }
    }

    #[test]
    fn serializes_as_single_letter() {
        let json = serde_json::to_string(&Dimension::Intuition).unwrap();
        assert_eq!(json, "\"N\"");
        let back: Dimension = serde_json::from_str("\"P\"").unwrap();
        assert_eq!(back, Dimension::Perceiving);
    }
}
