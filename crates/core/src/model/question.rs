use std::collections::HashSet;

use thiserror::Error;

use crate::model::dimension::Dimension;
use crate::model::ids::QuestionId;
use crate::tally::DimensionTally;

/// Errors raised while validating generated questions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question set is empty")]
    EmptySet,

    #[error("question {id} has empty text")]
    EmptyText { id: QuestionId },

    #[error("question {id} has {found} options, expected 2")]
    OptionCount { id: QuestionId, found: usize },

    #[error("question {id} has an option with empty text")]
    EmptyOptionText { id: QuestionId },

    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),
}

/// One of the two answers offered for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    text: String,
    dimension: Dimension,
}

impl QuestionOption {
    #[must_use]
    pub fn new(text: impl Into<String>, dimension: Dimension) -> Self {
        Self {
            text: text.into(),
            dimension,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }
}

/// Which of a question's two options the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionChoice {
    First,
    Second,
}

impl OptionChoice {
    pub const ALL: [OptionChoice; 2] = [OptionChoice::First, OptionChoice::Second];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            OptionChoice::First => 0,
            OptionChoice::Second => 1,
        }
    }
}

/// A two-option quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: [QuestionOption; 2],
}

impl Question {
    /// Create a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the prompt is blank,
    /// `QuestionError::OptionCount` unless exactly two options are given,
    /// and `QuestionError::EmptyOptionText` if an option label is blank.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<QuestionOption>,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyText { id });
        }
        if options.iter().any(|option| option.text.trim().is_empty()) {
            return Err(QuestionError::EmptyOptionText { id });
        }
        let found = options.len();
        let options: [QuestionOption; 2] = options
            .try_into()
            .map_err(|_| QuestionError::OptionCount { id, found })?;

        Ok(Self { id, text, options })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[QuestionOption; 2] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, choice: OptionChoice) -> &QuestionOption {
        &self.options[choice.index()]
    }
}

/// Ordered, non-empty list of questions with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Wrap fetched questions, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptySet` for an empty list and
    /// `QuestionError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptySet);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuestionError::DuplicateId(question.id()));
            }
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Question> {
        self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Counts how often each dimension appears across all options.
    #[must_use]
    pub fn option_tally(&self) -> DimensionTally {
        DimensionTally::from_dimensions(
            self.questions
                .iter()
                .flat_map(|q| q.options().iter().map(QuestionOption::dimension)),
        )
    }

    /// True when every dimension appears on exactly `per_dimension` options.
    #[must_use]
    pub fn is_balanced(&self, per_dimension: u32) -> bool {
        let tally = self.option_tally();
        Dimension::ALL
            .iter()
            .all(|dimension| tally.count(*dimension) == per_dimension)
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(text: &str, dimension: Dimension) -> QuestionOption {
        QuestionOption::new(text, dimension)
    }

    fn question(id: u32, a: Dimension, b: Dimension) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Q{id}"),
            vec![option("a", a), option("b", b)],
        )
        .unwrap()
    }

    #[test]
    fn rejects_wrong_option_count() {
        let err = Question::new(
            QuestionId::new(1),
            "Pick one",
            vec![option("only", Dimension::Extraversion)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            QuestionError::OptionCount {
                id: QuestionId::new(1),
                found: 1
            }
        );
    }

    #[test]
    fn rejects_blank_prompt_and_option() {
        let blank = Question::new(
            QuestionId::new(2),
            "   ",
            vec![
                option("a", Dimension::Sensing),
                option("b", Dimension::Intuition),
            ],
        );
        assert!(matches!(blank, Err(QuestionError::EmptyText { .. })));

        let blank_option = Question::new(
            QuestionId::new(3),
            "Prompt",
            vec![option("a", Dimension::Sensing), option(" ", Dimension::Intuition)],
        );
        assert!(matches!(blank_option, Err(QuestionError::EmptyOptionText { .. })));
    }

    #[test]
    fn set_rejects_empty_and_duplicates() {
        assert_eq!(QuestionSet::new(Vec::new()), Err(QuestionError::EmptySet));

        let dup = QuestionSet::new(vec![
            question(1, Dimension::Extraversion, Dimension::Introversion),
            question(1, Dimension::Sensing, Dimension::Intuition),
        ]);
        assert_eq!(dup, Err(QuestionError::DuplicateId(QuestionId::new(1))));
    }

    #[test]
    fn balance_counts_option_dimensions() {
        let set = QuestionSet::new(vec![
            question(1, Dimension::Extraversion, Dimension::Introversion),
            question(2, Dimension::Sensing, Dimension::Intuition),
            question(3, Dimension::Thinking, Dimension::Feeling),
            question(4, Dimension::Judging, Dimension::Perceiving),
        ])
        .unwrap();
        assert!(set.is_balanced(1));
        assert!(!set.is_balanced(3));
        assert_eq!(set.last_index(), 3);
    }
}
