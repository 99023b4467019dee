mod quiz;
mod screens;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizView;
pub use screens::{ErrorScreen, Footer, LoadingScreen, QuestionScreen, ResultScreen, StartScreen};
