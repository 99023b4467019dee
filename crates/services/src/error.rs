//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuizError;
use quiz_core::model::{DimensionError, LearningStyleError, QuestionError, TypeCodeError};

/// Errors emitted by content providers.
///
/// Every variant is terminal for the current quiz pass; the controller maps
/// them onto the fetch-failure or analysis-failure screen.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("content provider is not configured")]
    Disabled,
    #[error("content provider returned an empty response")]
    EmptyResponse,
    #[error("content provider request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("content provider returned malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidQuestions(#[from] QuestionError),
    #[error(transparent)]
    InvalidDimension(#[from] DimensionError),
    #[error(transparent)]
    InvalidTypeCode(#[from] TypeCodeError),
    #[error(transparent)]
    InvalidResult(#[from] LearningStyleError),
}

/// Errors emitted while advancing a quiz session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
