//! The two user-triggered round trips.
//!
//! Both drivers are generic over where state lives ([`StateCell`]), the
//! backend, and the chart surface, so components and tests run the same
//! code. Only local validation errors are returned; every backend or
//! transport failure ends up in the session's panels.

use api::AnalysisBackend;

use super::files::FileSelectionStore;
use super::session::{AnalysisOutcome, AnalysisSession, Notice};
use super::state::StateCell;
use crate::charts::{ChartRenderer, ChartSurface};

/// Validate, clear stale output, call `/api/generate`, render the result and
/// its charts, then leave the busy state.
pub async fn run_analysis<B, F, S, R, C>(
    backend: &B,
    files: &F,
    session: &S,
    charts: &R,
    analysis_type: &str,
    context: &str,
) -> Result<(), Notice>
where
    B: AnalysisBackend,
    F: StateCell<FileSelectionStore>,
    S: StateCell<AnalysisSession>,
    R: StateCell<ChartRenderer<C>>,
    C: ChartSurface,
{
    let pending = files.read_with(|store| {
        session.write_with(|session| session.begin_analysis(store, analysis_type, context))
    })?;

    charts.write_with(|renderer| renderer.clear());

    let response = backend.generate(&pending.request).await;

    let outcome = session.write_with(|session| session.complete_analysis(pending.ticket, response));
    if let AnalysisOutcome::Rendered(specs) = outcome {
        if !specs.is_empty() {
            charts.write_with(|renderer| renderer.render(&specs));
        }
    }

    session.write_with(|session| session.finish_analysis(pending.ticket));
    Ok(())
}

/// Validate, call `/api/explain_charts` with the retained chart specs, render
/// the explanation, then restore the trigger.
pub async fn run_explanation<B, F, S>(backend: &B, files: &F, session: &S) -> Result<(), Notice>
where
    B: AnalysisBackend,
    F: StateCell<FileSelectionStore>,
    S: StateCell<AnalysisSession>,
{
    let pending = files.read_with(|store| {
        session.write_with(|session| session.begin_explanation(store))
    })?;

    let response = backend.explain(&pending.request).await;

    session.write_with(|session| {
        session.complete_explanation(pending.ticket, response);
        session.finish_explanation(pending.ticket);
    });
    Ok(())
}
