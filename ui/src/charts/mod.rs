//! Lifecycle of rendered charts.
//!
//! [`ChartRenderer`] owns every live chart. A new batch always starts by
//! disposing the previous one, so repeated analyses never stack charts or
//! leak chart-library listeners. The drawing itself sits behind
//! [`ChartSurface`]: Chart.js in the browser, [`HeadlessSurface`] elsewhere.

use api::ChartSpec;
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(target_arch = "wasm32")]
mod chartjs;
mod headless;
mod theme;

#[cfg(target_arch = "wasm32")]
pub use chartjs::{ChartJsHandle, ChartJsSurface};
pub use headless::{HeadlessChart, HeadlessSurface, SurfaceLedger};
pub use theme::ChartTheme;

/// DOM id of the region charts are mounted into.
pub const CHARTS_CONTAINER_ID: &str = "charts-container";

#[cfg(target_arch = "wasm32")]
pub type PlatformSurface = ChartJsSurface;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformSurface = HeadlessSurface;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("unsupported chart type `{0}`")]
    Unsupported(String),

    #[error("{0} unavailable")]
    Unavailable(&'static str),

    #[error("chart library error: {0}")]
    Js(String),
}

/// A live chart owned by the renderer.
pub trait ChartHandle {
    /// Release the chart and everything it registered.
    fn dispose(self);
}

/// Where charts are drawn.
pub trait ChartSurface {
    type Handle: ChartHandle;

    /// Empty the chart region.
    fn reset(&mut self);

    /// Create the rendering target for `spec` at position `index` and draw it.
    fn mount(
        &mut self,
        index: usize,
        spec: &ChartSpec,
        theme: &ChartTheme,
    ) -> Result<Self::Handle, ChartError>;
}

/// Owning wrapper around one chart handle. Disposed exactly once, either
/// explicitly or on drop.
pub struct RenderedChart<H: ChartHandle> {
    title: String,
    handle: Option<H>,
}

impl<H: ChartHandle> RenderedChart<H> {
    fn new(title: String, handle: H) -> Self {
        Self {
            title,
            handle: Some(handle),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.dispose();
        }
    }
}

impl<H: ChartHandle> Drop for RenderedChart<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Result of drawing one batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub mounted: usize,
    pub failed: Vec<(usize, ChartError)>,
}

pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    theme: ChartTheme,
    active: Vec<RenderedChart<S::Handle>>,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self::with_theme(surface, ChartTheme::DARK)
    }

    pub fn with_theme(surface: S, theme: ChartTheme) -> Self {
        Self {
            surface,
            theme,
            active: Vec::new(),
        }
    }

    /// Dispose every active chart and empty the region.
    pub fn clear(&mut self) {
        let disposed = self.active.len();
        for chart in self.active.drain(..) {
            chart.dispose();
        }
        self.surface.reset();
        if disposed > 0 {
            debug!(disposed, "charts cleared");
        }
    }

    /// Replace the current charts with one chart per spec, in order. A spec
    /// that fails to mount is skipped; the rest of the batch still renders.
    pub fn render(&mut self, specs: &[ChartSpec]) -> RenderReport {
        self.clear();

        let mut report = RenderReport::default();
        for (index, spec) in specs.iter().enumerate() {
            let mounted = if spec.kind.is_builtin() {
                self.surface.mount(index, spec, &self.theme)
            } else {
                Err(ChartError::Unsupported(spec.kind.to_string()))
            };

            match mounted {
                Ok(handle) => {
                    self.active.push(RenderedChart::new(spec.title.clone(), handle));
                    report.mounted += 1;
                }
                Err(err) => {
                    warn!(index, title = %spec.title, %err, "chart skipped");
                    report.failed.push((index, err));
                }
            }
        }

        debug!(mounted = report.mounted, failed = report.failed.len(), "charts rendered");
        report
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn active_titles(&self) -> Vec<&str> {
        self.active.iter().map(RenderedChart::title).collect()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
