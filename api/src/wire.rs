use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::upload::SelectedFile;

/// Title the backend assigns when a chart plan omits one.
pub const DEFAULT_CHART_TITLE: &str = "Chart";

/// Backend description of one chart: a Chart.js config plus a title.
///
/// Keys other than `title`, `type` and `data` (for example `options`) are kept
/// in `extra` so the chart can be sent back unchanged for an explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    #[serde(default)]
    pub data: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_title() -> String {
    DEFAULT_CHART_TITLE.to_string()
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, kind: ChartKind, data: Value) -> Self {
        Self {
            title: title.into(),
            kind,
            data,
            extra: Map::new(),
        }
    }
}

/// Chart.js chart type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
    PolarArea,
    Radar,
    Scatter,
    Bubble,
    Other(String),
}

impl ChartKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::PolarArea => "polarArea",
            Self::Radar => "radar",
            Self::Scatter => "scatter",
            Self::Bubble => "bubble",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Whether Chart.js ships a controller for this type.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Charts drawn on a single radial `r` scale.
    pub fn is_radial(&self) -> bool {
        matches!(self, Self::Radar | Self::PolarArea)
    }

    /// Charts without axes.
    pub fn is_circular(&self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut)
    }
}

impl From<String> for ChartKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "bar" => Self::Bar,
            "line" => Self::Line,
            "pie" => Self::Pie,
            "doughnut" => Self::Doughnut,
            "polarArea" => Self::PolarArea,
            "radar" => Self::Radar,
            "scatter" => Self::Scatter,
            "bubble" => Self::Bubble,
            _ => Self::Other(raw),
        }
    }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub analysis_result: String,
    #[serde(default)]
    pub charts_data: Option<Vec<ChartSpec>>,
}

impl GenerateResponse {
    pub fn into_parts(self) -> (String, Vec<ChartSpec>) {
        (self.analysis_result, self.charts_data.unwrap_or_default())
    }
}

/// Successful body of `POST /api/explain_charts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Failure body shared by both endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Everything sent to `POST /api/generate`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub files: Vec<SelectedFile>,
    pub analysis_type: String,
    pub context: String,
}

/// Everything sent to `POST /api/explain_charts`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplainRequest {
    pub files: Vec<SelectedFile>,
    pub charts: Vec<ChartSpec>,
}

impl ExplainRequest {
    /// The `charts_data` form field: the retained specs as a JSON array.
    pub fn charts_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.charts)
    }
}
