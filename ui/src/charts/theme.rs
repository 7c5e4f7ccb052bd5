use api::{ChartKind, ChartSpec};
use serde_json::{json, Value};

/// Fixed look applied to every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTheme {
    pub text_color: &'static str,
    pub grid_color: &'static str,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
}

impl ChartTheme {
    pub const DARK: Self = Self {
        text_color: "#e0e0e0",
        grid_color: "#222222",
        responsive: true,
        maintain_aspect_ratio: true,
    };

    /// Chart.js `options` for a chart of `kind`.
    pub fn options_for(&self, kind: &ChartKind) -> Value {
        let mut options = json!({
            "responsive": self.responsive,
            "maintainAspectRatio": self.maintain_aspect_ratio,
            "plugins": { "legend": { "labels": { "color": self.text_color } } },
        });

        let scales = if kind.is_circular() {
            None
        } else if kind.is_radial() {
            Some(json!({
                "r": {
                    "beginAtZero": true,
                    "ticks": { "color": self.text_color, "backdropColor": "transparent" },
                    "pointLabels": { "color": self.text_color },
                    "grid": { "color": self.grid_color },
                    "angleLines": { "color": self.grid_color },
                }
            }))
        } else {
            Some(json!({
                "y": {
                    "beginAtZero": true,
                    "ticks": { "color": self.text_color },
                    "grid": { "color": self.grid_color },
                },
                "x": {
                    "ticks": { "color": self.text_color },
                    "grid": { "color": self.grid_color },
                },
            }))
        };

        if let (Some(scales), Some(map)) = (scales, options.as_object_mut()) {
            map.insert("scales".into(), scales);
        }
        options
    }

    /// Full Chart.js constructor config: backend data, themed options.
    pub fn config_for(&self, spec: &ChartSpec) -> Value {
        json!({
            "type": spec.kind.as_str(),
            "data": spec.data,
            "options": self.options_for(&spec.kind),
        })
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::DARK
    }
}
