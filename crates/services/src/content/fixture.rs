use async_trait::async_trait;

use quiz_core::model::{
    Dimension, DimensionPair, LearningStyleResult, Question, QuestionId, QuestionOption, TypeCode,
};

use super::ContentProvider;
use crate::error::ContentError;

/// (prompt, first-pole option, second-pole option), three per pair in type-code order.
const QUESTIONS: [(&str, &str, &str); 12] = [
    (
        "A new guild hall opens in town. How do you spend your first evening there?",
        "Join the loudest table and swap quest stories",
        "Find a quiet corner and read the quest board",
    ),
    (
        "Your party must prepare for the exam dungeon. Where do you study?",
        "In the tavern with the whole party quizzing each other",
        "Alone in the tower library with a candle",
    ),
    (
        "You just cleared a tough level. How do you recharge?",
        "Celebrate with the party at the inn",
        "Head home and replay the level in your head",
    ),
    (
        "The wizard hands you a new spell book. What do you read first?",
        "The step-by-step incantations with examples",
        "The chapter on why magic works at all",
    ),
    (
        "A treasure map shows the way to the next chapter. You...",
        "Follow the marked trail, one landmark at a time",
        "Look for a hidden shortcut the map hints at",
    ),
    (
        "The sage assigns a history scroll. What sticks with you?",
        "Dates, names and concrete facts",
        "The big patterns connecting the eras",
    ),
    (
        "Two party members argue over the battle plan. You...",
        "Weigh each plan's stats and pick the stronger one",
        "Make sure both feel heard before choosing",
    ),
    (
        "Your study group gets a poor score on a quest. What do you say?",
        "Here is exactly where our strategy broke down",
        "We tried hard, let's encourage each other first",
    ),
    (
        "Choosing which side quest to take on next, you mostly consider...",
        "Which one gives the best reward for the effort",
        "Which one helps the villagers you care about",
    ),
    (
        "The final boss exam is in two weeks. Your plan?",
        "Draw up a daily training schedule right away",
        "Keep things open and cram when inspiration strikes",
    ),
    (
        "Your inventory before a long journey looks like...",
        "Sorted, labelled and packed the night before",
        "Whatever seemed handy, grabbed on the way out",
    ),
    (
        "Halfway through a level, a secret area appears. You...",
        "Finish the main route first as planned",
        "Dive in right away and see what happens",
    ),
];

/// Deterministic provider used for offline play and tests.
///
/// Returns twelve questions with every dimension on exactly three options and
/// builds result narratives from the letters of the requested code.
#[derive(Clone, Debug, Default)]
pub struct FixtureContentProvider;

impl FixtureContentProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The fixed question set, in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::InvalidQuestions` if a fixture entry fails validation.
    pub fn questions() -> Result<Vec<Question>, ContentError> {
        QUESTIONS
            .iter()
            .zip(1_u32..)
            .map(|((text, first, second), id)| {
                let pair = DimensionPair::ALL[(id as usize - 1) / 3];
                let question = Question::new(
                    QuestionId::new(id),
                    *text,
                    vec![
                        QuestionOption::new(*first, pair.first()),
                        QuestionOption::new(*second, pair.second()),
                    ],
                )?;
                Ok(question)
            })
            .collect()
    }

    /// Narrative for `type_code`, assembled from per-letter traits.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::InvalidResult` if the assembled text is rejected.
    pub fn result_for(type_code: TypeCode) -> Result<LearningStyleResult, ContentError> {
        let letters = type_code.letters();
        let title = format!(
            "The {} {}",
            adjective(letters[1]),
            class_name(letters[0], letters[2])
        );
        let description = letters
            .iter()
            .map(|letter| trait_sentence(*letter))
            .collect::<Vec<_>>()
            .join(" ");
        let tips = letters.iter().map(|letter| power_up(*letter).to_string()).collect();

        Ok(LearningStyleResult::new(type_code, title, description, tips)?)
    }
}

#[async_trait]
impl ContentProvider for FixtureContentProvider {
    async fn fetch_questions(&self) -> Result<Vec<Question>, ContentError> {
        tracing::debug!("serving fixture questions");
        Self::questions()
    }

    async fn fetch_result(
        &self,
        type_code: TypeCode,
    ) -> Result<LearningStyleResult, ContentError> {
        tracing::debug!(%type_code, "serving fixture result");
        Self::result_for(type_code)
    }
}

fn adjective(perception: Dimension) -> &'static str {
    match perception {
        Dimension::Intuition => "Visionary",
        _ => "Steadfast",
    }
}

fn class_name(energy: Dimension, judgement: Dimension) -> &'static str {
    match (energy, judgement) {
        (Dimension::Extraversion, Dimension::Thinking) => "Commander",
        (Dimension::Extraversion, _) => "Bard",
        (_, Dimension::Thinking) => "Wizard",
        _ => "Healer",
    }
}

fn trait_sentence(letter: Dimension) -> &'static str {
    match letter {
        Dimension::Extraversion => "You level up fastest when learning out loud with your party.",
        Dimension::Introversion => "You do your best grinding in quiet, focused solo sessions.",
        Dimension::Sensing => "Concrete examples and step-by-step practice make ideas stick.",
        Dimension::Intuition => "You remember the big picture and the links between topics.",
        Dimension::Thinking => "Clear logic and cause-and-effect keep you motivated.",
        Dimension::Feeling => "You learn best when a topic connects to people and values.",
        Dimension::Judging => "A planned route through the material keeps you on track.",
        Dimension::Perceiving => "Freedom to explore side paths keeps your curiosity high.",
    }
}

fn power_up(letter: Dimension) -> &'static str {
    match letter {
        Dimension::Extraversion => "Party Up: explain each chapter to a study buddy.",
        Dimension::Introversion => "Save Point: block out distraction-free solo study time.",
        Dimension::Sensing => "Practice Arena: work through worked examples before theory.",
        Dimension::Intuition => "World Map: sketch a mind map before diving into details.",
        Dimension::Thinking => "Skill Tree: break topics into rules and test each one.",
        Dimension::Feeling => "Quest Lore: tie every topic to a real story or person.",
        Dimension::Judging => "Quest Log: keep a checklist and tick off each session.",
        Dimension::Perceiving => "Free Roam: rotate topics in short bursts to stay fresh.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::OPTIONS_PER_DIMENSION;
    use quiz_core::model::QuestionSet;

    #[tokio::test]
    async fn fixture_questions_meet_the_provider_contract() {
        let questions = FixtureContentProvider::new().fetch_questions().await.unwrap();
        assert_eq!(questions.len(), 12);

        let set = QuestionSet::new(questions).unwrap();
        assert!(set.is_balanced(OPTIONS_PER_DIMENSION));
        for (question, expected_id) in set.iter().zip(1_u32..) {
            assert_eq!(question.id().value(), expected_id);
            let [first, second] = question.options();
            assert_eq!(first.dimension().pair(), second.dimension().pair());
        }
    }

    #[tokio::test]
    async fn fixture_result_matches_requested_code() {
        let code: TypeCode = "ENTP".parse().unwrap();
        let result = FixtureContentProvider::new().fetch_result(code).await.unwrap();
        assert_eq!(result.type_code(), code);
        assert_eq!(result.title(), "The Visionary Commander");
        assert_eq!(result.tips().len(), 4);
    }
}
