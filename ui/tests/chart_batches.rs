//! End-to-end runs of the analysis workflow against an in-memory backend and
//! the headless chart surface.

use std::cell::RefCell;
use std::rc::Rc;

use api::{
    AnalysisBackend, ApiError, ChartKind, ChartSpec, ExplainRequest, ExplainResponse,
    GenerateRequest, GenerateResponse, SelectedFile,
};
use futures::executor::block_on;
use serde_json::json;
use ui::charts::{ChartRenderer, HeadlessSurface};
use ui::core::files::FileSelectionStore;
use ui::core::session::{AnalysisSession, Panel};
use ui::core::workflow::run_analysis;

/// Always answers `/api/generate` with the same charts.
struct FixedBackend {
    charts: Vec<ChartSpec>,
}

impl AnalysisBackend for FixedBackend {
    async fn generate(&self, _request: &GenerateRequest) -> Result<GenerateResponse, ApiError> {
        Ok(GenerateResponse {
            analysis_result: "**Done**".into(),
            charts_data: Some(self.charts.clone()),
        })
    }

    async fn explain(&self, _request: &ExplainRequest) -> Result<ExplainResponse, ApiError> {
        Err(ApiError::Status(404))
    }
}

fn spec(title: &str, kind: ChartKind) -> ChartSpec {
    ChartSpec::new(title, kind, json!({ "labels": [], "datasets": [] }))
}

fn store_with(name: &str) -> Rc<RefCell<FileSelectionStore>> {
    let mut store = FileSelectionStore::new();
    store.add([SelectedFile::new(name, b"revenue,100".to_vec())]);
    Rc::new(RefCell::new(store))
}

#[test]
fn unsupported_kind_is_skipped_but_the_batch_renders() {
    let backend = FixedBackend {
        charts: vec![
            spec("Revenue", ChartKind::Line),
            spec("Funnel", ChartKind::Other("funnel".into())),
            spec("Mix", ChartKind::Doughnut),
        ],
    };
    let files = store_with("sales.csv");
    let session = Rc::new(RefCell::new(AnalysisSession::new()));
    let surface = HeadlessSurface::new();
    let charts = Rc::new(RefCell::new(ChartRenderer::new(surface.clone())));

    block_on(run_analysis(&backend, &files, &session, &charts, "financial", "")).unwrap();

    assert_eq!(charts.borrow().active_titles(), ["Revenue", "Mix"]);
    assert_eq!(
        session.borrow().result(),
        &Panel::Markdown("<p><strong>Done</strong></p>\n".into())
    );
    // All three specs are still retained for an explanation.
    assert_eq!(session.borrow().charts().len(), 3);
}

#[test]
fn many_runs_never_accumulate_charts() {
    let backend = FixedBackend {
        charts: vec![spec("A", ChartKind::Bar), spec("B", ChartKind::Radar)],
    };
    let files = store_with("plan.txt");
    let session = Rc::new(RefCell::new(AnalysisSession::new()));
    let surface = HeadlessSurface::new();
    let charts = Rc::new(RefCell::new(ChartRenderer::new(surface.clone())));

    for _ in 0..5 {
        block_on(run_analysis(&backend, &files, &session, &charts, "future", "")).unwrap();
    }

    let ledger = surface.ledger();
    let ledger = ledger.borrow();
    assert_eq!(ledger.mounted, 10);
    assert_eq!(ledger.disposed, 8);
    assert_eq!(ledger.live_titles(), ["A", "B"]);
    assert_eq!(charts.borrow().active_count(), 2);
}

#[test]
fn dropping_the_renderer_disposes_live_charts() {
    let surface = HeadlessSurface::new();
    let mut renderer = ChartRenderer::new(surface.clone());
    renderer.render(&[spec("A", ChartKind::Pie)]);

    drop(renderer);

    let ledger = surface.ledger();
    assert_eq!(ledger.borrow().disposed, 1);
    assert!(ledger.borrow().live_titles().is_empty());
}
