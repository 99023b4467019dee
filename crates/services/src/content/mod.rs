//! Content provider boundary: questions in, narrative results out.

mod fixture;
mod generative;
mod prompts;
mod wire;

use async_trait::async_trait;

use quiz_core::model::{LearningStyleResult, Question, TypeCode};

use crate::error::ContentError;

pub use fixture::FixtureContentProvider;
pub use generative::{ContentConfig, GenerativeContentProvider};

/// Questions every generated set should carry per dimension.
pub const OPTIONS_PER_DIMENSION: u32 = 3;

/// External source of quiz questions and result narratives.
///
/// Implementations must not retry internally; each call is made at most once
/// per quiz pass and any failure ends that pass.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch an ordered, non-empty question set.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the request fails, the response cannot be
    /// parsed, or no questions come back.
    async fn fetch_questions(&self) -> Result<Vec<Question>, ContentError>;

    /// Fetch the narrative report for `type_code`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the request fails or the response cannot be parsed.
    async fn fetch_result(&self, type_code: TypeCode)
    -> Result<LearningStyleResult, ContentError>;
}
