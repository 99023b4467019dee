use quiz_core::model::{LearningStyleResult, QuestionSet};
use quiz_core::quiz::{ANALYSIS_FAILURE_MESSAGE, LOADING_STATUS};
use quiz_core::{OptionChoice, QuizEvent, Screen, ScreenKind, Session};
use services::FixtureContentProvider;

use super::test_harness::{ScreenCase, render_screen, setup_quiz_harness};
use crate::vm::{QuestionVm, ResultVm};

fn testing_session(answered: usize) -> Session {
    let questions = FixtureContentProvider::questions().unwrap();
    let mut session = Session::new()
        .apply(QuizEvent::StartRequested)
        .unwrap()
        .session
        .apply(QuizEvent::QuestionsReceived(questions))
        .unwrap()
        .session;
    for _ in 0..answered {
        session = session
            .apply(QuizEvent::AnswerSelected(OptionChoice::First))
            .unwrap()
            .session;
    }
    session
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_opens_on_start_screen() {
    let mut harness = setup_quiz_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Learning Style Quest"), "missing title in {html}");
    assert!(html.contains("Start Adventure!"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_runs_a_full_pass_and_restarts() {
    let mut harness = setup_quiz_harness();
    harness.rebuild();

    harness.dispatch(QuizEvent::StartRequested);
    harness.settle_on(ScreenKind::Testing).await;
    let html = harness.render();
    assert!(html.contains("Question 1/12"), "missing first question in {html}");

    for _ in 0..11 {
        harness.dispatch(QuizEvent::AnswerSelected(OptionChoice::Second));
        assert_eq!(harness.screen_kind(), ScreenKind::Testing);
    }
    harness.dispatch(QuizEvent::AnswerSelected(OptionChoice::Second));
    assert_eq!(harness.screen_kind(), ScreenKind::Analyzing);

    // A second click on the last question is ignored while analysis runs.
    harness.dispatch(QuizEvent::AnswerSelected(OptionChoice::Second));
    assert_eq!(harness.screen_kind(), ScreenKind::Analyzing);

    harness.settle_on(ScreenKind::Result).await;
    let html = harness.render();
    assert!(html.contains("INFP"), "missing type code in {html}");
    assert!(html.contains("Explore Again"), "missing restart button in {html}");

    harness.dispatch(QuizEvent::Restart);
    assert_eq!(harness.screen_kind(), ScreenKind::Start);
    let html = harness.render();
    assert!(html.contains("Start Adventure!"), "missing start button in {html}");
}

#[test]
fn start_screen_renders_tagline() {
    let html = render_screen(ScreenCase::Start);
    assert!(html.contains("Discover your hidden learning powers!"));
}

#[test]
fn loading_screen_shows_status() {
    let html = render_screen(ScreenCase::Loading(LOADING_STATUS.to_string()));
    assert!(html.contains(LOADING_STATUS), "missing status in {html}");
}

#[test]
fn question_screen_shows_progress_and_both_options() {
    let session = testing_session(2);
    let Screen::Testing(state) = session.screen() else {
        panic!("expected testing screen");
    };
    let question = QuestionVm::from(state);
    let html = render_screen(ScreenCase::Question(question.clone()));

    assert!(html.contains("Question 3/12"), "missing progress label in {html}");
    assert!(html.contains("25.0%"), "missing progress width in {html}");
    for option in &question.options {
        assert!(html.contains(&option.text), "missing {} in {html}", option.text);
    }
}

#[test]
fn result_screen_lists_code_title_and_tips() {
    let code = "INTJ".parse().unwrap();
    let result = FixtureContentProvider::result_for(code).unwrap();
    let html = render_screen(ScreenCase::Result(ResultVm::from(&result)));

    assert!(html.contains("INTJ"));
    assert!(html.contains(result.title()), "missing title in {html}");
    assert!(html.contains("Your Power-Up Items!"));
    assert_eq!(html.matches('✨').count(), result.tips().len());
    assert!(html.contains("Explore Again"));
}

#[test]
fn result_screen_hides_tip_heading_without_tips() {
    let result = LearningStyleResult::new(
        "ESFP".parse().unwrap(),
        "The Festival Bard",
        "You learn by doing.",
        Vec::new(),
    )
    .unwrap();
    let html = render_screen(ScreenCase::Result(ResultVm::from(&result)));
    assert!(!html.contains("Your Power-Up Items!"));
    assert!(html.contains("The Festival Bard"));
}

#[test]
fn error_screen_shows_message_and_restart() {
    let html = render_screen(ScreenCase::Error(ANALYSIS_FAILURE_MESSAGE.to_string()));
    assert!(html.contains("Oops!"));
    assert!(html.contains("Start Over"));
    assert!(html.contains("final boss"), "missing message in {html}");
}

#[test]
fn fixture_questions_fit_one_pass() {
    let set = QuestionSet::new(FixtureContentProvider::questions().unwrap()).unwrap();
    let session = testing_session(set.last_index());
    let Screen::Testing(state) = session.screen() else {
        panic!("expected testing screen");
    };
    assert_eq!(QuestionVm::from(state).progress_label, "Question 12/12");
    assert_eq!(QuestionVm::from(state).progress_width, "100.0%");
}
