#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod quiz;
pub mod tally;

pub use error::Error;
pub use model::OptionChoice;
pub use quiz::{
    AnalyzingState, Effect, Failure, QuizError, QuizEvent, Screen, ScreenKind, Session,
    TestingState, Transition,
};
pub use tally::{DimensionTally, type_code_for};
