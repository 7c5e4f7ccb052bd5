use api::HttpBackend;
use dioxus::prelude::*;
use tracing::debug;

use crate::charts::{ChartRenderer, PlatformSurface, CHARTS_CONTAINER_ID};
use crate::components::{announce, FileList, FilePicker, Loader, NoticeBanner, ResultPanel};
use crate::core::config::{AnalysisType, ClientConfig};
use crate::core::files::FileSelectionStore;
use crate::core::session::{AnalysisSession, Notice, Panel};
use crate::core::workflow;
use crate::t;

/// Route target for `/analysis/:analysis_type`.
#[component]
pub fn Analysis(analysis_type: String) -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let kind = AnalysisType::from_route(&analysis_type);
    let title = kind.title();
    let page_class = format!("page page-analysis page-analysis--{}", kind.id());

    rsx! {
        section { class: "{page_class}",
            div { style: "display:none", "{lang_marker}" }
            h1 { "{title}" }
            p { class: "page-analysis__intro", {t!("analysis-intro")} }

            // Keyed so switching analysis type starts from a fresh page state.
            AnalysisWorkspace { key: "{kind}", analysis_type: kind.clone() }
        }
    }
}

/// What the workspace needs from the session for one render.
struct SessionView {
    busy: bool,
    result: Panel,
    notice: Option<Notice>,
    offered: bool,
    trigger_visible: bool,
    explaining: bool,
    explanation: Panel,
}

impl SessionView {
    fn capture(session: &AnalysisSession) -> Self {
        Self {
            busy: session.is_analysis_busy(),
            result: session.result().clone(),
            notice: session.notice(),
            offered: session.explanation_offered(),
            trigger_visible: session.explain_trigger_visible(),
            explaining: session.is_explanation_busy(),
            explanation: session.explanation().clone(),
        }
    }
}

/// Upload form, result panel, chart area and explanation section for one
/// analysis type.
#[component]
pub fn AnalysisWorkspace(analysis_type: AnalysisType) -> Element {
    let config = try_use_context::<ClientConfig>().unwrap_or_else(ClientConfig::detect);
    let backend = use_hook(|| HttpBackend::new(config.api_base.clone()));

    let files = use_signal(FileSelectionStore::new);
    let mut session = use_signal(AnalysisSession::new);
    let charts =
        use_signal(|| ChartRenderer::new(PlatformSurface::for_container(CHARTS_CONTAINER_ID)));
    let mut context = use_signal(String::new);

    let on_analyze = {
        let backend = backend.clone();
        move |_| {
            let backend = backend.clone();
            let analysis_type = analysis_type.clone();
            spawn(async move {
                let context_text = context();
                debug!(analysis_type = %analysis_type, "analysis requested");
                let outcome = workflow::run_analysis(
                    &backend,
                    &files,
                    &session,
                    &charts,
                    analysis_type.id(),
                    &context_text,
                )
                .await;
                if let Err(notice) = outcome {
                    announce(notice);
                }
            });
        }
    };

    let on_explain = move |_| {
        let backend = backend.clone();
        spawn(async move {
            if let Err(notice) = workflow::run_explanation(&backend, &files, &session).await {
                announce(notice);
            }
        });
    };

    let view = session.with(SessionView::capture);
    let context_placeholder = t!("context-placeholder");

    rsx! {
        div { class: "workspace",
            if let Some(notice) = view.notice {
                NoticeBanner {
                    notice,
                    on_dismiss: move |_| session.with_mut(|s| s.dismiss_notice()),
                }
            }

            div { class: "workspace__inputs",
                div { class: "workspace__files",
                    h2 { {t!("files-heading")} }
                    FilePicker { files }
                    FileList { files }
                }

                div { class: "workspace__context",
                    label { r#for: "context-input", {t!("context-label")} }
                    textarea {
                        id: "context-input",
                        class: "workspace__context-input",
                        rows: "4",
                        placeholder: "{context_placeholder}",
                        value: "{context}",
                        oninput: move |evt: FormEvent| context.set(evt.value()),
                    }
                }

                button {
                    r#type: "button",
                    id: "analyze-button",
                    class: "button button--primary",
                    disabled: view.busy,
                    onclick: on_analyze,
                    {t!("analyze-button")}
                }
            }

            Loader { visible: view.busy, label: t!("analysis-loading") }
            ResultPanel {
                id: "result",
                panel: view.result,
                transport_message: t!("analysis-error-transport"),
            }

            // Chart cards are mounted here by the chart surface, not by rsx.
            div { id: CHARTS_CONTAINER_ID, class: "charts" }

            if view.offered {
                section { id: "explanation-section", class: "explanation",
                    h2 { {t!("explanation-heading")} }
                    p { {t!("explanation-prompt")} }
                    if view.trigger_visible {
                        button {
                            r#type: "button",
                            id: "explain-button",
                            class: "button button--accent",
                            onclick: on_explain,
                            {t!("explain-button")}
                        }
                    }
                    Loader { visible: view.explaining, label: t!("explanation-loading") }
                    ResultPanel {
                        id: "explanation-result",
                        panel: view.explanation,
                        transport_message: t!("explanation-error-transport"),
                    }
                }
            }
        }
    }
}
