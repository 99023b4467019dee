use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::{QuizEvent, ScreenKind};
use services::{ContentProvider, FixtureContentProvider};

use crate::context::{UiApp, build_app_context};
use crate::views::{ErrorScreen, LoadingScreen, QuestionScreen, QuizView, ResultScreen, StartScreen};
use crate::vm::{QuestionVm, ResultVm};

use super::quiz::QuizTestHandles;

#[derive(Clone)]
struct TestApp {
    provider: Arc<dyn ContentProvider>,
}

impl UiApp for TestApp {
    fn content_provider(&self) -> Arc<dyn ContentProvider> {
        Arc::clone(&self.provider)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScreenCase {
    Start,
    Loading(String),
    Question(QuestionVm),
    Result(ResultVm),
    Error(String),
}

#[derive(Props, Clone, PartialEq)]
struct ScreenHarnessProps {
    case: ScreenCase,
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    match props.case {
        ScreenCase::Start => rsx! { StartScreen { on_start: move |()| {} } },
        ScreenCase::Loading(message) => rsx! { LoadingScreen { message } },
        ScreenCase::Question(question) => rsx! {
            QuestionScreen { question, on_choose: move |_| {} }
        },
        ScreenCase::Result(result) => rsx! {
            ResultScreen { result, on_restart: move |()| {} }
        },
        ScreenCase::Error(message) => rsx! {
            ErrorScreen { message, on_restart: move |()| {} }
        },
    }
}

pub fn render_screen(case: ScreenCase) -> String {
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { case });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn dispatch(&mut self, event: QuizEvent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(event));
        drive_dom(&mut self.dom);
    }

    pub fn screen_kind(&self) -> ScreenKind {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.peek().kind())
    }

    /// Drive spawned provider calls until the session reaches `kind`.
    pub async fn settle_on(&mut self, kind: ScreenKind) {
        for _ in 0..20 {
            if self.screen_kind() == kind {
                return;
            }
            self.drive_async().await;
        }
        assert_eq!(self.screen_kind(), kind, "session never reached {kind}");
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness() -> ViewHarness {
    let app = Arc::new(TestApp {
        provider: Arc::new(FixtureContentProvider::new()),
    });
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
