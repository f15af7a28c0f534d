use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, BarSettings, RangeOptions, ScaleKind, Viewport};
use crate::error::{ChartError, ChartResult};

use super::BarRenderStyle;

/// Serializable description of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default)]
    pub kind: ScaleKind,
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub lower_bound: Option<f64>,
    #[serde(default)]
    pub upper_bound: Option<f64>,
}

impl AxisConfig {
    #[must_use]
    pub fn new(kind: ScaleKind, min: f64, max: f64) -> Self {
        Self {
            kind,
            min,
            max,
            lower_bound: None,
            upper_bound: None,
        }
    }

    #[must_use]
    pub fn linear(min: f64, max: f64) -> Self {
        Self::new(ScaleKind::Linear, min, max)
    }

    #[must_use]
    pub fn log10(min: f64, max: f64) -> Self {
        Self::new(ScaleKind::Log, min, max)
    }

    #[must_use]
    pub fn log2(min: f64, max: f64) -> Self {
        Self::new(ScaleKind::Log2, min, max)
    }

    #[must_use]
    pub fn with_bounds(mut self, lower_bound: f64, upper_bound: f64) -> Self {
        self.lower_bound = Some(lower_bound);
        self.upper_bound = Some(upper_bound);
        self
    }

    pub(super) fn build(self, pixel_start: f64, pixel_end: f64) -> ChartResult<AxisScale> {
        AxisScale::new(self.kind, self.min, self.max)?
            .with_pixel_span(pixel_start, pixel_end)?
            .with_bounds(
                self.lower_bound.unwrap_or(f64::MIN),
                self.upper_bound.unwrap_or(f64::MAX),
            )
    }
}

/// Public bar chart bootstrap configuration.
///
/// Serializable so hosts can persist chart setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    /// Secondary Y axis; mirrors `y_axis` when absent.
    #[serde(default)]
    pub y2_axis: Option<AxisConfig>,
    #[serde(default)]
    pub bar_settings: BarSettings,
    #[serde(default)]
    pub range_options: RangeOptions,
    #[serde(default)]
    pub render_style: BarRenderStyle,
}

impl BarChartConfig {
    /// Creates a config with default bar settings and style.
    #[must_use]
    pub fn new(viewport: Viewport, x_axis: AxisConfig, y_axis: AxisConfig) -> Self {
        Self {
            viewport,
            x_axis,
            y_axis,
            y2_axis: None,
            bar_settings: BarSettings::default(),
            range_options: RangeOptions::default(),
            render_style: BarRenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_y2_axis(mut self, y2_axis: AxisConfig) -> Self {
        self.y2_axis = Some(y2_axis);
        self
    }

    #[must_use]
    pub fn with_bar_settings(mut self, bar_settings: BarSettings) -> Self {
        self.bar_settings = bar_settings;
        self
    }

    #[must_use]
    pub fn with_range_options(mut self, range_options: RangeOptions) -> Self {
        self.range_options = range_options;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, render_style: BarRenderStyle) -> Self {
        self.render_style = render_style;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}
