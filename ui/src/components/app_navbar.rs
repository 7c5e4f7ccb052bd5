use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::debug;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Link constructors supplied by the platform crate, so `ui` never needs to
/// know its `Route` enum. Each closure receives the localized label and
/// returns a `Link` that already contains it.
///
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
///
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     swot: |label| rsx!( Link { class: "navbar__link", to: Route::analysis("swot"), "{label}" } ),
///     financial: |label| rsx!( Link { class: "navbar__link", to: Route::analysis("financial"), "{label}" } ),
///     future: |label| rsx!( Link { class: "navbar__link", to: Route::analysis("future"), "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub swot: fn(label: &str) -> Element,
    pub financial: fn(label: &str) -> Element,
    pub future: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Brand, analysis links and the locale switcher. Falls back to `children`
/// when no builder is registered.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| i18n::FALLBACK_LANGUAGE.to_string());
    let langs = use_signal(i18n::available_languages);
    let lang_options = langs();
    let show_switcher = lang_options.len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Subscribes this component to the global language signal.
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    debug!(lang = %lang_marker, "navbar render");

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let swot = (b.swot)(&t!("nav-swot"));
        let financial = (b.financial)(&t!("nav-financial"));
        let future = (b.future)(&t!("nav-future"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {swot}
                {financial}
                {future}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Planwise" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label { class: "visually-hidden", r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in lang_options.iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
