use dioxus::prelude::*;

use quiz_core::OptionChoice;

use crate::vm::{QuestionVm, ResultVm};

#[component]
pub fn StartScreen(on_start: EventHandler<()>) -> Element {
    rsx! {
        section { class: "panel start",
            h1 { class: "title", "Learning Style Quest" }
            p { "Discover your hidden learning powers!" }
            button {
                class: "retro-button",
                r#type: "button",
                onclick: move |_| on_start.call(()),
                "Start Adventure!"
            }
        }
    }
}

#[component]
pub fn LoadingScreen(message: String) -> Element {
    rsx! {
        section { class: "panel loading", role: "status",
            div { class: "spinner" }
            p { "{message}" }
        }
    }
}

#[component]
pub fn QuestionScreen(question: QuestionVm, on_choose: EventHandler<OptionChoice>) -> Element {
    let width = question.progress_width.clone();
    let options: Vec<(String, OptionChoice, String)> = question
        .options
        .iter()
        .map(|option| (option.key.clone(), option.choice, option.text.clone()))
        .collect();

    rsx! {
        section { class: "panel question",
            p { class: "progress-label", "{question.progress_label}" }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {width}" }
            }
            h2 { "{question.prompt}" }
            div { class: "options",
                for (key, choice, text) in options {
                    button {
                        key: "{key}",
                        class: "retro-button",
                        r#type: "button",
                        onclick: move |_| on_choose.call(choice),
                        "{text}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ResultScreen(result: ResultVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        section { class: "panel result",
            p { class: "type-code", "{result.type_code}" }
            h1 { class: "result-title", "{result.title}" }
            p { "{result.description}" }
            if !result.tips.is_empty() {
                h2 { "Your Power-Up Items!" }
                ul { class: "tips",
                    for tip in result.tips.iter() {
                        li { "✨ {tip}" }
                    }
                }
            }
            button {
                class: "retro-button",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Explore Again"
            }
        }
    }
}

#[component]
pub fn ErrorScreen(message: String, on_restart: EventHandler<()>) -> Element {
    rsx! {
        section { class: "panel error", role: "alert",
            h1 { class: "title", "Oops!" }
            p { "{message}" }
            button {
                class: "retro-button",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Start Over"
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { "Learning Style Quest. Press start to play again anytime." }
        }
    }
}
