//! Request state for one analysis page.
//!
//! Each round trip is split at its await point: `begin_*` validates and
//! enters the busy state, `complete_*` applies the response, `finish_*`
//! clears the busy state. Every request carries a [`Ticket`]; responses for
//! superseded tickets are dropped.

use api::{
    ApiError, ChartSpec, ExplainRequest, ExplainResponse, GenerateRequest, GenerateResponse,
};
use tracing::{debug, error};

use super::files::FileSelectionStore;
use super::markdown::render_markdown;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Local validation failures. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoFiles,
    NoChartContext,
}

/// Why a request did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The backend answered with an error message meant for the user.
    Reported(String),
    /// Network failure, malformed response, or an error without a message.
    Transport,
}

impl From<&ApiError> for Failure {
    fn from(err: &ApiError) -> Self {
        match err.reported_message() {
            Some(message) => Self::Reported(message.to_string()),
            None => Self::Transport,
        }
    }
}

/// Content of a result region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Empty,
    Markdown(String),
    Failed(Failure),
}

impl Panel {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Debug, Clone)]
pub struct PendingAnalysis {
    pub ticket: Ticket,
    pub request: GenerateRequest,
}

#[derive(Debug, Clone)]
pub struct PendingExplanation {
    pub ticket: Ticket,
    pub request: ExplainRequest,
}

/// What the driver should do once an analysis response has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// A newer analysis was started; the response was discarded.
    Superseded,
    /// The result was rendered. Charts to draw (possibly none).
    Rendered(Vec<ChartSpec>),
    Failed,
}

#[derive(Debug, Default)]
pub struct AnalysisSession {
    analysis_seq: u64,
    analysis_busy: bool,
    result: Panel,
    charts: Vec<ChartSpec>,
    chart_batch: u64,

    explanation_seq: u64,
    explanation_busy: bool,
    explanation: Panel,
    explanation_offered: bool,

    notice: Option<Notice>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_analysis(
        &mut self,
        files: &FileSelectionStore,
        analysis_type: &str,
        context: &str,
    ) -> Result<PendingAnalysis, Notice> {
        if files.is_empty() {
            return Err(self.reject(Notice::NoFiles));
        }
        self.notice = None;

        self.analysis_seq += 1;
        self.analysis_busy = true;
        self.result = Panel::Empty;
        self.charts.clear();

        // Any explanation in flight belongs to the previous charts.
        self.explanation_seq += 1;
        self.explanation_busy = false;
        self.explanation = Panel::Empty;
        self.explanation_offered = false;

        debug!(
            ticket = self.analysis_seq,
            files = files.len(),
            analysis_type,
            "analysis started"
        );

        Ok(PendingAnalysis {
            ticket: Ticket(self.analysis_seq),
            request: GenerateRequest {
                files: files.list().to_vec(),
                analysis_type: analysis_type.to_string(),
                context: context.to_string(),
            },
        })
    }

    pub fn complete_analysis(
        &mut self,
        ticket: Ticket,
        outcome: Result<GenerateResponse, ApiError>,
    ) -> AnalysisOutcome {
        if ticket.0 != self.analysis_seq {
            debug!(
                ticket = ticket.0,
                current = self.analysis_seq,
                "stale analysis response dropped"
            );
            return AnalysisOutcome::Superseded;
        }

        match outcome {
            Ok(response) => {
                let (text, charts) = response.into_parts();
                self.result = Panel::Markdown(render_markdown(&text));
                if !charts.is_empty() {
                    self.chart_batch += 1;
                    self.explanation_offered = true;
                }
                self.charts = charts.clone();
                AnalysisOutcome::Rendered(charts)
            }
            Err(err) => {
                if err.reported_message().is_none() {
                    error!(%err, "analysis request failed");
                }
                self.result = Panel::Failed(Failure::from(&err));
                AnalysisOutcome::Failed
            }
        }
    }

    pub fn finish_analysis(&mut self, ticket: Ticket) {
        if ticket.0 == self.analysis_seq {
            self.analysis_busy = false;
        }
    }

    pub fn begin_explanation(
        &mut self,
        files: &FileSelectionStore,
    ) -> Result<PendingExplanation, Notice> {
        if files.is_empty() || self.charts.is_empty() {
            return Err(self.reject(Notice::NoChartContext));
        }
        self.notice = None;

        self.explanation_seq += 1;
        self.explanation_busy = true;
        self.explanation = Panel::Empty;

        debug!(
            ticket = self.explanation_seq,
            charts = self.charts.len(),
            "explanation started"
        );

        Ok(PendingExplanation {
            ticket: Ticket(self.explanation_seq),
            request: ExplainRequest {
                files: files.list().to_vec(),
                charts: self.charts.clone(),
            },
        })
    }

    /// Returns `false` if the response was stale and ignored.
    pub fn complete_explanation(
        &mut self,
        ticket: Ticket,
        outcome: Result<ExplainResponse, ApiError>,
    ) -> bool {
        if ticket.0 != self.explanation_seq {
            debug!(ticket = ticket.0, "stale explanation response dropped");
            return false;
        }

        self.explanation = match outcome {
            Ok(response) => Panel::Markdown(render_markdown(&response.explanation)),
            Err(err) => {
                if err.reported_message().is_none() {
                    error!(%err, "explanation request failed");
                }
                Panel::Failed(Failure::from(&err))
            }
        };
        true
    }

    pub fn finish_explanation(&mut self, ticket: Ticket) {
        if ticket.0 == self.explanation_seq {
            self.explanation_busy = false;
        }
    }

    fn reject(&mut self, notice: Notice) -> Notice {
        debug!(?notice, "request rejected locally");
        self.notice = Some(notice);
        notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn is_analysis_busy(&self) -> bool {
        self.analysis_busy
    }

    pub fn result(&self) -> &Panel {
        &self.result
    }

    /// Chart specs retained from the last successful analysis.
    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    /// Advances each time a non-empty chart batch is received.
    pub fn chart_batch(&self) -> u64 {
        self.chart_batch
    }

    /// Whether the explanation section is shown at all.
    pub fn explanation_offered(&self) -> bool {
        self.explanation_offered
    }

    pub fn explain_trigger_visible(&self) -> bool {
        self.explanation_offered && !self.explanation_busy
    }

    pub fn is_explanation_busy(&self) -> bool {
        self.explanation_busy
    }

    pub fn explanation(&self) -> &Panel {
        &self.explanation
    }
}
