mod answer;
mod dimension;
mod ids;
mod learning_style;
mod question;

pub use answer::Answer;
pub use dimension::{Dimension, DimensionError, DimensionPair};
pub use ids::QuestionId;
pub use learning_style::{LearningStyleError, LearningStyleResult, TypeCode, TypeCodeError};
pub use question::{OptionChoice, Question, QuestionError, QuestionOption, QuestionSet};
