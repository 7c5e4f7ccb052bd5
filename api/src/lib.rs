//! Client side of the Planwise analysis backend.
//!
//! The backend exposes two multipart endpoints: `POST /api/generate` runs an
//! analysis over uploaded documents and `POST /api/explain_charts` explains
//! charts produced by an earlier run. [`AnalysisBackend`] is the seam the UI
//! talks to; [`HttpBackend`] is the production implementation.

mod error;
mod http;
mod upload;
mod wire;

pub use error::ApiError;
pub use http::{HttpBackend, EXPLAIN_PATH, GENERATE_PATH};
pub use upload::{guess_mime, SelectedFile, FILES_FIELD};
pub use wire::{
    ChartKind, ChartSpec, ErrorBody, ExplainRequest, ExplainResponse, GenerateRequest,
    GenerateResponse, DEFAULT_CHART_TITLE,
};

/// The two round trips the UI needs from the backend.
///
/// Futures are not required to be `Send`: everything runs on the browser's
/// single event loop.
#[allow(async_fn_in_trait)]
pub trait AnalysisBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ApiError>;

    async fn explain(&self, request: &ExplainRequest) -> Result<ExplainResponse, ApiError>;
}
