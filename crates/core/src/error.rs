use thiserror::Error;

use crate::model::{QuestionError, TypeCodeError};
use crate::quiz::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    TypeCode(#[from] TypeCodeError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
