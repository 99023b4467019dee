use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::dimension::{Dimension, DimensionPair};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeCodeError {
    #[error("type code must have 4 letters, got {0:?}")]
    Length(String),

    #[error("letter {letter} is not valid at position {position} of a type code")]
    WrongPosition { letter: char, position: usize },

    #[error("unknown letter {0:?} in type code")]
    UnknownLetter(char),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LearningStyleError {
    #[error("result title cannot be empty")]
    EmptyTitle,

    #[error("result description cannot be empty")]
    EmptyDescription,
}

//
// ─── TYPE CODE ────────────────────────────────────────────────────────────────
//

/// Four-letter code with one pole per pair, in `E/I, S/N, T/F, J/P` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCode([Dimension; 4]);

impl TypeCode {
    /// Build a code from one pole per pair.
    ///
    /// # Errors
    ///
    /// Returns `TypeCodeError::WrongPosition` if a letter does not belong to
    /// the pair at its position.
    pub fn new(letters: [Dimension; 4]) -> Result<Self, TypeCodeError> {
        for (position, (letter, pair)) in letters.iter().zip(DimensionPair::ALL).enumerate() {
            if !pair.contains(*letter) {
                return Err(TypeCodeError::WrongPosition {
                    letter: letter.letter(),
                    position,
                });
            }
        }
        Ok(Self(letters))
    }

    /// Build a code from tally winners, which are in pair order by construction.
    #[must_use]
    pub(crate) fn from_winners(letters: [Dimension; 4]) -> Self {
        debug_assert!(
            letters
                .iter()
                .zip(DimensionPair::ALL)
                .all(|(letter, pair)| pair.contains(*letter))
        );
        Self(letters)
    }

    #[must_use]
    pub fn letters(&self) -> [Dimension; 4] {
        self.0
    }

    /// The winning pole for `pair`.
    #[must_use]
    pub fn pole(&self, pair: DimensionPair) -> Dimension {
        let position = DimensionPair::ALL
            .iter()
            .position(|candidate| *candidate == pair)
            .unwrap_or_default();
        self.0[position]
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = TypeCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_uppercase();
        let chars: Vec<char> = trimmed.chars().collect();
        let chars: [char; 4] = chars
            .try_into()
            .map_err(|_| TypeCodeError::Length(s.to_string()))?;

        let mut letters = [Dimension::Extraversion; 4];
        for (slot, letter) in letters.iter_mut().zip(chars) {
            *slot = Dimension::from_letter(letter).map_err(|_| TypeCodeError::UnknownLetter(letter))?;
        }
        Self::new(letters)
    }
}

//
// ─── RESULT ───────────────────────────────────────────────────────────────────
//

/// Narrative report generated for a type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningStyleResult {
    type_code: TypeCode,
    title: String,
    description: String,
    tips: Vec<String>,
}

impl LearningStyleResult {
    /// Create a validated result. Blank tips are dropped.
    ///
    /// # Errors
    ///
    /// Returns `LearningStyleError` if the title or description is blank.
    pub fn new(
        type_code: TypeCode,
        title: impl Into<String>,
        description: impl Into<String>,
        tips: Vec<String>,
    ) -> Result<Self, LearningStyleError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(LearningStyleError::EmptyTitle);
        }
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(LearningStyleError::EmptyDescription);
        }
        let tips = tips
            .into_iter()
            .map(|tip| tip.trim().to_string())
            .filter(|tip| !tip.is_empty())
            .collect();

        Ok(Self {
            type_code,
            title,
            description,
            tips,
        })
    }

    #[must_use]
    pub fn type_code(&self) -> TypeCode {
        self.type_code
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }
}
