use dioxus::prelude::*;
use tracing::debug;

use crate::t;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();
    debug!(lang = %lang_marker, "home render");

    rsx! {
        section { class: "page page-home",
            div { style: "display:none", "{lang_marker}" }
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }

            ul { class: "page-home__features",
                li { {t!("home-mode-swot")} }
                li { {t!("home-mode-financial")} }
                li { {t!("home-mode-future")} }
            }
            p { class: "page-home__cta", {t!("home-cta")} }
        }
    }
}
