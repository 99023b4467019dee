use std::sync::Arc;

use quiz_core::{Effect, OptionChoice, QuizEvent, Session, Transition};

use crate::content::ContentProvider;
use crate::error::QuizFlowError;

/// Apply one event to `session` without running its effect.
///
/// # Errors
///
/// Returns `QuizFlowError::Quiz` when the event does not fit the current screen.
pub fn advance(session: &Session, event: QuizEvent) -> Result<Transition, QuizFlowError> {
    let from = session.kind();
    let event_name = event.name();
    let transition = session.apply(event)?;
    tracing::debug!(%from, to = %transition.session.kind(), event = event_name, "quiz transition");
    Ok(transition)
}

/// Execute a provider effect and turn its outcome into the follow-up event.
///
/// Provider errors are logged here and collapse into the matching failure
/// event; the detailed error never reaches the user.
pub async fn settle_effect(provider: &dyn ContentProvider, effect: Effect) -> QuizEvent {
    match effect {
        Effect::FetchQuestions => match provider.fetch_questions().await {
            Ok(questions) => QuizEvent::QuestionsReceived(questions),
            Err(err) => {
                tracing::warn!(error = %err, "fetching quiz questions failed");
                QuizEvent::QuestionsFailed
            }
        },
        Effect::RequestResult { answers, type_code } => {
            tracing::info!(answers = answers.len(), %type_code, "requesting analysis");
            match provider.fetch_result(type_code).await {
                Ok(result) => QuizEvent::ResultReceived(result),
                Err(err) => {
                    tracing::warn!(error = %err, %type_code, "analysis request failed");
                    QuizEvent::AnalysisFailed
                }
            }
        }
    }
}

/// Owns one quiz session and drives it against a content provider.
///
/// Every user action runs to completion: the provider call an action
/// triggers is awaited and its outcome applied before the method returns.
#[derive(Clone)]
pub struct QuizController {
    provider: Arc<dyn ContentProvider>,
    session: Session,
}

impl QuizController {
    #[must_use]
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            session: Session::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one event without running its effect.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Quiz` when the event does not fit the current screen.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<Option<Effect>, QuizFlowError> {
        let transition = advance(&self.session, event)?;
        self.session = transition.session;
        Ok(transition.effect)
    }

    /// Start a pass and wait for the question set.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Quiz` unless the session is on the start screen.
    pub async fn start(&mut self) -> Result<&Session, QuizFlowError> {
        self.drive(QuizEvent::StartRequested).await
    }

    /// Record a choice for the current question; on the last one, wait for the result.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Quiz` unless a question is showing.
    pub async fn select(&mut self, choice: OptionChoice) -> Result<&Session, QuizFlowError> {
        self.drive(QuizEvent::AnswerSelected(choice)).await
    }

    /// Reset to a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Quiz` unless a result or error is showing.
    pub fn restart(&mut self) -> Result<&Session, QuizFlowError> {
        self.dispatch(QuizEvent::Restart)?;
        Ok(&self.session)
    }

    async fn drive(&mut self, event: QuizEvent) -> Result<&Session, QuizFlowError> {
        let mut effect = self.dispatch(event)?;
        while let Some(pending) = effect.take() {
            let settled = settle_effect(self.provider.as_ref(), pending).await;
            effect = self.dispatch(settled)?;
        }
        Ok(&self.session)
    }
}
