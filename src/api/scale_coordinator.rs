use tracing::debug;

use crate::core::{
    AxisId, AxisRanges, AxisScale, DataRange, RangeCalculator, ScaleKind, ValueAggregator,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::BarChart;

impl<R: Renderer> BarChart<R> {
    /// Data range of one series under the chart's range options.
    pub fn series_range(&self, position: usize) -> ChartResult<DataRange> {
        let series = self.pane.series(position)?;
        Ok(RangeCalculator::new(&self.pane).compute_series(series, self.range_options))
    }

    /// Data ranges per axis, merged over visible series.
    ///
    /// Stacked layouts also cover the cumulative stack extents on the value
    /// axis, since stacked bars reach past any single series' values.
    #[must_use]
    pub fn axis_ranges(&self) -> AxisRanges {
        let ranges = RangeCalculator::new(&self.pane).compute_axis_ranges(self.range_options);
        if !self.pane.settings().bar_type.is_stacked() {
            return ranges;
        }
        ranges.merge(self.stacked_value_ranges())
    }

    fn stacked_value_ranges(&self) -> AxisRanges {
        let aggregator = ValueAggregator::new(&self.pane);
        let mut ranges = AxisRanges::EMPTY;
        for (position, series) in self.pane.series_list().iter().enumerate() {
            let value_axis = self.pane.value_axis_id_for(series);
            let log = self.pane.axis(value_axis).is_log();
            for index in 0..series.len() {
                let Some(values) = aggregator.resolve(position, index) else {
                    continue;
                };
                let (low, high) = (values.low.min(values.high), values.low.max(values.high));
                // Stacks rooted at zero keep the log floor out of the range.
                let low = if log && low <= 0.0 { high } else { low };
                if log && low <= 0.0 {
                    continue;
                }
                let mut single = AxisRanges::EMPTY;
                match value_axis {
                    AxisId::X => single.x = (low, high),
                    AxisId::Y => single.y = (low, high),
                    AxisId::Y2 => single.y2 = (low, high),
                }
                ranges = ranges.merge(single);
            }
        }
        ranges
    }

    /// Fits every axis that received data to that data and returns the ranges used.
    ///
    /// Linear value axes always include zero so bars keep their root in
    /// view; the base axis gains half a cluster width on both ends so edge
    /// clusters are not clipped. Axes without data keep their domain.
    pub fn auto_scale(&mut self) -> ChartResult<AxisRanges> {
        let ranges = self.axis_ranges();
        let base_axis = self.pane.base_axis_id();
        let half_cluster = self.pane.cluster_scale_width() / 2.0;

        for axis in [AxisId::X, AxisId::Y, AxisId::Y2] {
            let Some((min, max)) = ranges.axis(axis) else {
                continue;
            };
            let scale = *self.pane.axis(axis);
            let (min, max) = if axis == base_axis {
                pad_base_range(&scale, min, max, half_cluster)
            } else {
                include_value_root(&scale, min, max)
            };
            let (min, max) = widen_degenerate_range(scale.kind(), min, max);
            debug!(?axis, min, max, "auto-scale axis");
            self.pane.set_axis(axis, scale.with_domain(min, max)?);
        }
        Ok(ranges)
    }
}

fn pad_base_range(scale: &AxisScale, min: f64, max: f64, half_cluster: f64) -> (f64, f64) {
    match scale.kind().log_base() {
        Some(base) => {
            let factor = base.powf(half_cluster);
            (min / factor, max * factor)
        }
        None => (min - half_cluster, max + half_cluster),
    }
}

fn include_value_root(scale: &AxisScale, min: f64, max: f64) -> (f64, f64) {
    if scale.is_log() {
        (min, max)
    } else {
        (min.min(0.0), max.max(0.0))
    }
}

fn widen_degenerate_range(kind: ScaleKind, min: f64, max: f64) -> (f64, f64) {
    if min != max {
        return (min, max);
    }
    match kind.log_base() {
        Some(base) => (min / base, max * base),
        None => (min - 0.5, max + 0.5),
    }
}
