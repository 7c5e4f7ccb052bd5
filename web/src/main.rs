use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::core::config::ClientConfig;
use ui::views::{Analysis, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/analysis/:analysis_type")]
    Analysis { analysis_type: String },
}

impl Route {
    fn analysis(analysis_type: &str) -> Self {
        Route::Analysis {
            analysis_type: analysis_type.to_string(),
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_swot(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::analysis("swot"),
        "{label}"
    })
}
fn nav_financial(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::analysis("financial"),
        "{label}"
    })
}
fn nav_future(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::analysis("future"),
        "{label}"
    })
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            swot: nav_swot,
            financial: nav_financial,
            future: nav_future,
        });
    }

    // Global language code; views read it so a locale switch re-renders them.
    use_context_provider(|| Signal::new(ui::i18n::FALLBACK_LANGUAGE.to_string()));
    let config = use_context_provider(ClientConfig::detect);
    use_hook(|| info!(api_base = %config.api_base, "planwise web started"));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: CHART_JS }

        Router::<Route> {}
    }
}

/// Web layout: shared navbar around the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
