//! Reduction of recorded answers into a four-letter type code.
//!
//! Each pair is decided by the strictly greater count; ties go to the first
//! pole of the pair (`E`, `S`, `T`, `J`).

use crate::model::{Answer, Dimension, DimensionPair, TypeCode};

/// Per-dimension vote counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionTally {
    counts: [u32; 8],
}

impl DimensionTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally the dimension of every answer.
    #[must_use]
    pub fn from_answers(answers: &[Answer]) -> Self {
        Self::from_dimensions(answers.iter().map(|answer| answer.dimension))
    }

    #[must_use]
    pub fn from_dimensions(dimensions: impl IntoIterator<Item = Dimension>) -> Self {
        let mut tally = Self::new();
        for dimension in dimensions {
            tally.record(dimension);
        }
        tally
    }

    pub fn record(&mut self, dimension: Dimension) {
        let slot = &mut self.counts[dimension.index()];
        *slot = slot.saturating_add(1);
    }

    #[must_use]
    pub fn count(&self, dimension: Dimension) -> u32 {
        self.counts[dimension.index()]
    }

    /// Number of votes cast on either side of `pair`.
    #[must_use]
    pub fn pair_total(&self, pair: DimensionPair) -> u32 {
        self.count(pair.first()).saturating_add(self.count(pair.second()))
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0_u32, |acc, n| acc.saturating_add(*n))
    }

    /// The winning pole of `pair`; the first pole wins a tie.
    #[must_use]
    pub fn winner(&self, pair: DimensionPair) -> Dimension {
        if self.count(pair.second()) > self.count(pair.first()) {
            pair.second()
        } else {
            pair.first()
        }
    }

    #[must_use]
    pub fn type_code(&self) -> TypeCode {
        TypeCode::from_winners(DimensionPair::ALL.map(|pair| self.winner(pair)))
    }
}

/// Reduce a complete answer sequence to its type code.
#[must_use]
pub fn type_code_for(answers: &[Answer]) -> TypeCode {
    DimensionTally::from_answers(answers).type_code()
}
