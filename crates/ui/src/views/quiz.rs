#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use quiz_core::{QuizEvent, Screen, Session};
use services::{ContentProvider, advance, settle_effect};

use crate::context::AppContext;
use crate::vm::{QuestionVm, ResultVm};

use super::screens::{ErrorScreen, LoadingScreen, QuestionScreen, ResultScreen, StartScreen};

/// Apply `event` to the session signal and run whatever provider call it asks for.
///
/// The provider outcome is fed back through the same path, so a whole
/// start-to-questions or answer-to-result hop settles without user input.
fn dispatch_event(
    mut session: Signal<Session>,
    provider: Arc<dyn ContentProvider>,
    event: QuizEvent,
) {
    let transition = match advance(&session.peek(), event) {
        Ok(transition) => transition,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring quiz event");
            return;
        }
    };
    session.set(transition.session);

    if let Some(effect) = transition.effect {
        spawn(async move {
            let next = settle_effect(provider.as_ref(), effect).await;
            dispatch_event(session, provider, next);
        });
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(Session::new);
    let provider = ctx.content_provider();
    let dispatch = use_callback(move |event: QuizEvent| {
        dispatch_event(session, Arc::clone(&provider), event);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let current = session.read();
    let status = current.status_message().unwrap_or_default().to_string();
    let error = current.error_message().unwrap_or_default().to_string();

    match current.screen() {
        Screen::Start => rsx! {
            StartScreen { on_start: move |()| dispatch.call(QuizEvent::StartRequested) }
        },
        Screen::Loading | Screen::Analyzing(_) => rsx! {
            LoadingScreen { message: status }
        },
        Screen::Testing(state) => {
            let question = QuestionVm::from(state);
            rsx! {
                QuestionScreen {
                    question,
                    on_choose: move |choice| dispatch.call(QuizEvent::AnswerSelected(choice)),
                }
            }
        }
        Screen::Result(result) => {
            let result = ResultVm::from(result);
            rsx! {
                ResultScreen {
                    result,
                    on_restart: move |()| dispatch.call(QuizEvent::Restart),
                }
            }
        }
        Screen::Error(_) => rsx! {
            ErrorScreen {
                message: error,
                on_restart: move |()| dispatch.call(QuizEvent::Restart),
            }
        },
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizEvent>>>>,
    session: Rc<RefCell<Option<Signal<Session>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizEvent>, session: Signal<Session>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizEvent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<Session> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
