#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod quiz_flow;

pub use content::{
    ContentConfig, ContentProvider, FixtureContentProvider, GenerativeContentProvider,
};
pub use error::{ContentError, QuizFlowError};
pub use quiz_flow::{QuizController, advance, settle_effect};
