use serde::{Deserialize, Serialize};

use crate::core::{AxisScale, BarBase, BarSeries, BarSettings, BarType, YAxisId};
use crate::error::{ChartError, ChartResult};

/// Physical axis of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisId {
    X,
    Y,
    Y2,
}

/// Chart surface owning the three axes, the shared bar settings and the
/// ordered series list.
///
/// Series position in the list is the cluster slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPane {
    x_axis: AxisScale,
    y_axis: AxisScale,
    y2_axis: AxisScale,
    settings: BarSettings,
    series: Vec<BarSeries>,
}

impl BarPane {
    /// Creates an empty pane; the secondary Y axis starts as a copy of `y_axis`.
    pub fn new(x_axis: AxisScale, y_axis: AxisScale, settings: BarSettings) -> ChartResult<Self> {
        Ok(Self {
            x_axis,
            y_axis,
            y2_axis: y_axis,
            settings: settings.validate()?,
            series: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_y2_axis(mut self, y2_axis: AxisScale) -> Self {
        self.y2_axis = y2_axis;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &BarSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: BarSettings) -> ChartResult<()> {
        self.settings = settings.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn axis(&self, axis: AxisId) -> &AxisScale {
        match axis {
            AxisId::X => &self.x_axis,
            AxisId::Y => &self.y_axis,
            AxisId::Y2 => &self.y2_axis,
        }
    }

    pub fn set_axis(&mut self, axis: AxisId, scale: AxisScale) {
        match axis {
            AxisId::X => self.x_axis = scale,
            AxisId::Y => self.y_axis = scale,
            AxisId::Y2 => self.y2_axis = scale,
        }
    }

    #[must_use]
    pub fn x_axis(&self) -> &AxisScale {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &AxisScale {
        &self.y_axis
    }

    #[must_use]
    pub fn y2_axis(&self) -> &AxisScale {
        &self.y2_axis
    }

    #[must_use]
    pub fn series_list(&self) -> &[BarSeries] {
        &self.series
    }

    pub fn series(&self, position: usize) -> ChartResult<&BarSeries> {
        self.series
            .get(position)
            .ok_or(ChartError::UnknownSeries { index: position })
    }

    pub fn series_mut(&mut self, position: usize) -> ChartResult<&mut BarSeries> {
        self.series
            .get_mut(position)
            .ok_or(ChartError::UnknownSeries { index: position })
    }

    /// Appends a series and returns its position.
    pub fn add_series(&mut self, series: BarSeries) -> usize {
        self.series.push(series);
        self.series.len() - 1
    }

    pub fn remove_series(&mut self, position: usize) -> ChartResult<BarSeries> {
        if position >= self.series.len() {
            return Err(ChartError::UnknownSeries { index: position });
        }
        Ok(self.series.remove(position))
    }

    #[must_use]
    pub fn is_x_independent(&self) -> bool {
        self.settings.base == BarBase::X
    }

    /// Whether Z values take part in range computation.
    #[must_use]
    pub fn is_z_included(&self) -> bool {
        self.settings.bar_type == BarType::ClusterHiLow
    }

    #[must_use]
    pub fn base_axis_id(&self) -> AxisId {
        match self.settings.base {
            BarBase::X => AxisId::X,
            BarBase::Y => AxisId::Y,
            BarBase::Y2 => AxisId::Y2,
        }
    }

    /// Vertical axis holding the Y values of `series`.
    ///
    /// Horizontal bars put every series on the axis named by the bar base.
    #[must_use]
    pub fn y_axis_id_for(&self, series: &BarSeries) -> AxisId {
        match self.settings.base {
            BarBase::X => match series.y_axis() {
                YAxisId::Primary => AxisId::Y,
                YAxisId::Secondary => AxisId::Y2,
            },
            BarBase::Y => AxisId::Y,
            BarBase::Y2 => AxisId::Y2,
        }
    }

    #[must_use]
    pub fn value_axis_id_for(&self, series: &BarSeries) -> AxisId {
        if self.is_x_independent() {
            self.y_axis_id_for(series)
        } else {
            AxisId::X
        }
    }

    #[must_use]
    pub fn base_axis(&self) -> &AxisScale {
        self.axis(self.base_axis_id())
    }

    #[must_use]
    pub fn value_axis_for(&self, series: &BarSeries) -> &AxisScale {
        self.axis(self.value_axis_id_for(series))
    }

    /// Slot of `position` inside a cluster: the number of visible series
    /// before it for clustered types, `0` otherwise.
    #[must_use]
    pub fn bar_position(&self, position: usize) -> usize {
        if !self.settings.bar_type.is_clustered() {
            return 0;
        }
        self.series
            .iter()
            .take(position)
            .filter(|series| series.is_visible())
            .count()
    }

    /// Number of side-by-side bars in one cluster.
    #[must_use]
    pub fn clusterable_bar_count(&self) -> usize {
        if !self.settings.bar_type.is_clustered() {
            return 1;
        }
        self.series
            .iter()
            .filter(|series| series.is_visible())
            .count()
            .max(1)
    }

    /// Cluster width in base-axis units.
    ///
    /// In auto mode this is the smallest positive spacing between distinct
    /// base values of visible series, measured in the axis' linearized
    /// space; the configured width is used when no spacing exists.
    #[must_use]
    pub fn cluster_scale_width(&self) -> f64 {
        if !self.settings.auto_cluster_scale_width {
            return self.settings.cluster_scale_width;
        }

        let base_axis = self.base_axis();
        let x_independent = self.is_x_independent();
        let mut values: Vec<f64> = self
            .series
            .iter()
            .filter(|series| series.is_visible())
            .flat_map(|series| series.points())
            .filter(|point| !point.is_invalid())
            .filter_map(|point| {
                let base = if x_independent { point.x } else { point.y };
                base_axis.linearize(base).ok()
            })
            .collect();
        values.sort_by(|lhs, rhs| lhs.total_cmp(rhs));
        values.dedup();

        values
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .filter(|step| step.is_finite() && *step > 0.0)
            .min_by(|lhs, rhs| lhs.total_cmp(rhs))
            .unwrap_or(self.settings.cluster_scale_width)
    }

    /// Total pixel width allotted to one base value across all series.
    #[must_use]
    pub fn cluster_width_px(&self) -> f64 {
        (self.base_axis().pixels_per_unit() * self.cluster_scale_width()).abs()
    }

    /// Pixel width of one bar.
    #[must_use]
    pub fn bar_width_px(&self) -> f64 {
        self.settings
            .bar_width_px(self.cluster_width_px(), self.clusterable_bar_count())
    }
}
