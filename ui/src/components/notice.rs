use dioxus::prelude::*;

use crate::core::session::Notice;
use crate::t;

pub fn notice_text(notice: Notice) -> String {
    match notice {
        Notice::NoFiles => t!("notice-no-files"),
        Notice::NoChartContext => t!("notice-no-chart-context"),
    }
}

/// Blocking notice for a rejected request: `alert()` in the browser, a log
/// line elsewhere. The inline banner is rendered regardless.
pub fn announce(notice: Notice) {
    let text = notice_text(notice);

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&text);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!(%text, "request rejected");
    }
}

#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let text = notice_text(notice);

    rsx! {
        div { class: "notice", role: "alert",
            span { class: "notice__text", "⚠️ {text}" }
            button {
                r#type: "button",
                class: "button button--ghost notice__dismiss",
                onclick: move |_| on_dismiss.call(()),
                {t!("notice-dismiss")}
            }
        }
    }
}
