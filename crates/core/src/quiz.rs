//! Screen state machine for one quiz pass.
//!
//! `Session::apply` is a pure reducer: it never performs I/O. When a
//! transition needs the content provider it returns an [`Effect`] that the
//! caller executes and feeds back as a follow-up event.

use std::fmt;

use thiserror::Error;

use crate::model::{
    Answer, LearningStyleResult, OptionChoice, Question, QuestionSet, TypeCode,
};
use crate::tally::type_code_for;

pub const LOADING_STATUS: &str = "Loading your quest...";
pub const ANALYZING_STATUS: &str = "Analyzing your style...";
pub const FETCH_FAILURE_MESSAGE: &str =
    "Failed to load the quest. Check your connection and try again.";
pub const ANALYSIS_FAILURE_MESSAGE: &str =
    "Failed to analyze your answers. The final boss might be jamming the signal!";

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("event {event} is not valid on the {screen} screen")]
    UnexpectedEvent {
        screen: ScreenKind,
        event: &'static str,
    },
}

//
// ─── SCREENS ──────────────────────────────────────────────────────────────────
//

/// Discriminant of [`Screen`], for logging and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Start,
    Loading,
    Testing,
    Analyzing,
    Result,
    Error,
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenKind::Start => "start",
            ScreenKind::Loading => "loading",
            ScreenKind::Testing => "testing",
            ScreenKind::Analyzing => "analyzing",
            ScreenKind::Result => "result",
            ScreenKind::Error => "error",
        };
        f.write_str(name)
    }
}

/// Which provider call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    FetchQuestions,
    Analysis,
}

impl Failure {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Failure::FetchQuestions => FETCH_FAILURE_MESSAGE,
            Failure::Analysis => ANALYSIS_FAILURE_MESSAGE,
        }
    }
}

/// Questions being answered. `answers.len() == index` holds throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestingState {
    questions: QuestionSet,
    index: usize,
    answers: Vec<Answer>,
}

impl TestingState {
    fn new(questions: QuestionSet) -> Self {
        let answers = Vec::with_capacity(questions.len());
        Self {
            questions,
            index: 0,
            answers,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        // index never passes last_index while testing
        &self.questions.as_slice()[self.index]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.index == self.questions.last_index()
    }

    /// One-based position and total, for "Question 3/12".
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.questions.len())
    }
}

/// All answers are in; waiting on the narrative report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzingState {
    answers: Vec<Answer>,
    type_code: TypeCode,
}

impl AnalyzingState {
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn type_code(&self) -> TypeCode {
        self.type_code
    }
}

/// Current screen, carrying only the data that screen needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Start,
    Loading,
    Testing(TestingState),
    Analyzing(AnalyzingState),
    Result(LearningStyleResult),
    Error(Failure),
}

impl Screen {
    #[must_use]
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Start => ScreenKind::Start,
            Screen::Loading => ScreenKind::Loading,
            Screen::Testing(_) => ScreenKind::Testing,
            Screen::Analyzing(_) => ScreenKind::Analyzing,
            Screen::Result(_) => ScreenKind::Result,
            Screen::Error(_) => ScreenKind::Error,
        }
    }
}

//
// ─── EVENTS & EFFECTS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    StartRequested,
    /// Provider returned; an empty list is treated as a fetch failure.
    QuestionsReceived(Vec<Question>),
    QuestionsFailed,
    AnswerSelected(OptionChoice),
    ResultReceived(LearningStyleResult),
    AnalysisFailed,
    Restart,
}

impl QuizEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            QuizEvent::StartRequested => "start_requested",
            QuizEvent::QuestionsReceived(_) => "questions_received",
            QuizEvent::QuestionsFailed => "questions_failed",
            QuizEvent::AnswerSelected(_) => "answer_selected",
            QuizEvent::ResultReceived(_) => "result_received",
            QuizEvent::AnalysisFailed => "analysis_failed",
            QuizEvent::Restart => "restart",
        }
    }
}

/// Provider work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchQuestions,
    RequestResult {
        answers: Vec<Answer>,
        type_code: TypeCode,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(screen: Screen) -> Self {
        Self {
            session: Session { screen },
            effect: None,
        }
    }

    fn with_effect(screen: Screen, effect: Effect) -> Self {
        Self {
            session: Session { screen },
            effect: Some(effect),
        }
    }
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// State of one quiz pass. A fresh session is on the start screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Message for the loading indicator, if one is showing.
    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        match self.screen {
            Screen::Loading => Some(LOADING_STATUS),
            Screen::Analyzing(_) => Some(ANALYZING_STATUS),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&LearningStyleResult> {
        match &self.screen {
            Screen::Result(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        match self.screen {
            Screen::Error(failure) => Some(failure.message()),
            _ => None,
        }
    }

    /// Compute the next session for `event`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnexpectedEvent` when `event` has no transition
    /// from the current screen; `self` is left as it was.
    pub fn apply(&self, event: QuizEvent) -> Result<Transition, QuizError> {
        let transition = match (&self.screen, event) {
            (Screen::Start, QuizEvent::StartRequested) => {
                Transition::with_effect(Screen::Loading, Effect::FetchQuestions)
            }
            (Screen::Loading, QuizEvent::QuestionsReceived(questions)) => {
                match QuestionSet::new(questions) {
                    Ok(set) => Transition::to(Screen::Testing(TestingState::new(set))),
                    Err(_) => Transition::to(Screen::Error(Failure::FetchQuestions)),
                }
            }
            (Screen::Loading, QuizEvent::QuestionsFailed) => {
                Transition::to(Screen::Error(Failure::FetchQuestions))
            }
            (Screen::Testing(state), QuizEvent::AnswerSelected(choice)) => {
                answer_current(state, choice)
            }
            (Screen::Analyzing(_), QuizEvent::ResultReceived(result)) => {
                Transition::to(Screen::Result(result))
            }
            (Screen::Analyzing(_), QuizEvent::AnalysisFailed) => {
                Transition::to(Screen::Error(Failure::Analysis))
            }
            (Screen::Result(_) | Screen::Error(_), QuizEvent::Restart) => {
                Transition::to(Screen::Start)
            }
            (screen, event) => {
                return Err(QuizError::UnexpectedEvent {
                    screen: screen.kind(),
                    event: event.name(),
                });
            }
        };
        Ok(transition)
    }
}

fn answer_current(state: &TestingState, choice: OptionChoice) -> Transition {
    let answer = Answer::for_choice(state.current_question(), choice);
    let mut answers = state.answers.clone();
    answers.push(answer);

    if state.is_last_question() {
        let type_code = type_code_for(&answers);
        let effect = Effect::RequestResult {
            answers: answers.clone(),
            type_code,
        };
        return Transition::with_effect(
            Screen::Analyzing(AnalyzingState { answers, type_code }),
            effect,
        );
    }

    Transition::to(Screen::Testing(TestingState {
        questions: state.questions.clone(),
        index: state.index + 1,
        answers,
    }))
}
