use crate::model::dimension::Dimension;
use crate::model::ids::QuestionId;
use crate::model::question::{OptionChoice, Question};

/// The dimension picked for one question.
///
/// Recorded once per question, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Answer {
    pub question_id: QuestionId,
    pub dimension: Dimension,
}

impl Answer {
    #[must_use]
    pub fn new(question_id: QuestionId, dimension: Dimension) -> Self {
        Self {
            question_id,
            dimension,
        }
    }

    /// Build the answer for picking `choice` on `question`.
    #[must_use]
    pub fn for_choice(question: &Question, choice: OptionChoice) -> Self {
        Self::new(question.id(), question.option(choice).dimension())
    }
}
