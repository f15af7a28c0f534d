use serde::{Deserialize, Serialize};

use crate::core::{AxisId, BarGeometry, BarLayoutEngine, BarSettings, ScaleKind, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::BarChart;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub kind: ScaleKind,
    pub domain: (f64, f64),
    pub pixel_span: (f64, f64),
    /// Merged data range of visible series; `None` when no point qualified.
    pub data_range: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub label: String,
    pub visible: bool,
    pub highlighted: Vec<usize>,
    pub bars: Vec<BarGeometry>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartSnapshot {
    pub viewport: Viewport,
    pub bar_settings: BarSettings,
    pub cluster_scale_width: f64,
    pub bar_width_px: f64,
    pub x_axis: AxisSnapshot,
    pub y_axis: AxisSnapshot,
    pub y2_axis: AxisSnapshot,
    pub series: Vec<SeriesSnapshot>,
}

impl<R: Renderer> BarChart<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> BarChartSnapshot {
        let ranges = self.axis_ranges();
        let axis = |id: AxisId| {
            let scale = self.pane.axis(id);
            AxisSnapshot {
                kind: scale.kind(),
                domain: scale.domain(),
                pixel_span: scale.pixel_span(),
                data_range: ranges.axis(id),
            }
        };
        let engine = BarLayoutEngine::new(&self.pane);

        BarChartSnapshot {
            viewport: self.viewport,
            bar_settings: *self.pane.settings(),
            cluster_scale_width: self.pane.cluster_scale_width(),
            bar_width_px: self.pane.bar_width_px(),
            x_axis: axis(AxisId::X),
            y_axis: axis(AxisId::Y),
            y2_axis: axis(AxisId::Y2),
            series: self
                .pane
                .series_list()
                .iter()
                .enumerate()
                .map(|(position, series)| SeriesSnapshot {
                    label: series.label().to_owned(),
                    visible: series.is_visible(),
                    highlighted: series.highlighted_indexes().collect(),
                    bars: engine.layout_series(position),
                })
                .collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
