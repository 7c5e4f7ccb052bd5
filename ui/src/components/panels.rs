use dioxus::prelude::*;

use crate::core::session::{Failure, Panel};
use crate::t;

/// A result region: rendered markdown, an error line, or nothing.
#[component]
pub fn ResultPanel(id: String, panel: Panel, transport_message: String) -> Element {
    match panel {
        Panel::Empty => rsx! {
            div { id: "{id}", class: "result result--empty" }
        },
        Panel::Markdown(html) => rsx! {
            div { id: "{id}", class: "result markdown", dangerous_inner_html: "{html}" }
        },
        Panel::Failed(Failure::Reported(message)) => rsx! {
            div { id: "{id}", class: "result",
                p { class: "result__error", {t!("error-reported", message = message)} }
            }
        },
        Panel::Failed(Failure::Transport) => rsx! {
            div { id: "{id}", class: "result",
                p { class: "result__error", "{transport_message}" }
            }
        },
    }
}

#[component]
pub fn Loader(visible: bool, label: String) -> Element {
    rsx! {
        if visible {
            div { class: "loader", role: "status",
                span { class: "loader__spinner", aria_hidden: "true" }
                span { class: "loader__label", "{label}" }
            }
        }
    }
}
