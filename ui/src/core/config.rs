//! Client configuration and the page-level analysis type.

use std::fmt;

/// Compile-time override for the backend origin.
const API_BASE_OVERRIDE: Option<&str> = option_env!("PLANWISE_API_BASE");

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_API_BASE: &str = "http://127.0.0.1:5000";

/// Where the backend lives. Provided as context by the platform crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Override if set at build time, otherwise the serving origin.
    pub fn detect() -> Self {
        match API_BASE_OVERRIDE.filter(|base| !base.trim().is_empty()) {
            Some(base) => Self::new(base),
            None => Self::new(default_api_base()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(target_arch = "wasm32")]
fn default_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_api_base() -> String {
    NATIVE_API_BASE.to_string()
}

/// Analysis mode selected by the page route. Not user-editable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnalysisType {
    Swot,
    Financial,
    Future,
    /// Unrecognised id, forwarded as-is; the backend decides whether it is valid.
    Custom(String),
}

impl AnalysisType {
    pub fn from_route(id: &str) -> Self {
        match id.trim() {
            "swot" => Self::Swot,
            "financial" => Self::Financial,
            "future" => Self::Future,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Identifier sent as the `analysis_type` form field.
    pub fn id(&self) -> &str {
        match self {
            Self::Swot => "swot",
            Self::Financial => "financial",
            Self::Future => "future",
            Self::Custom(raw) => raw.as_str(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Swot => "SWOT Analysis",
            Self::Financial => "Financial Planning",
            Self::Future => "Future Planning",
            Self::Custom(_) => "Business Analysis",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
