use ordered_float::OrderedFloat;

use crate::core::{BarGeometry, BarLayoutEngine, BarValues, ClosestBar, ErrorBarGeometry, ValueAggregator};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::BarChart;

impl<R: Renderer> BarChart<R> {
    /// Effective base/low/high values of one bar.
    pub fn bar_values(&self, position: usize, index: usize) -> ChartResult<Option<BarValues>> {
        self.pane.series(position)?;
        Ok(ValueAggregator::new(&self.pane).resolve(position, index))
    }

    /// Pixel geometry of one bar; `Ok(None)` when the bar is not drawable.
    pub fn layout_bar(&self, position: usize, index: usize) -> ChartResult<Option<BarGeometry>> {
        self.pane.series(position)?;
        Ok(BarLayoutEngine::new(&self.pane).layout(position, index))
    }

    pub fn layout_series(&self, position: usize) -> ChartResult<Vec<BarGeometry>> {
        self.pane.series(position)?;
        Ok(BarLayoutEngine::new(&self.pane).layout_series(position))
    }

    pub fn error_bar(&self, position: usize, index: usize) -> ChartResult<Option<ErrorBarGeometry>> {
        self.pane.series(position)?;
        Ok(BarLayoutEngine::new(&self.pane).error_bar(position, index))
    }

    /// Closest bar of one series to pixel `(x, y)` within `max_distance`.
    pub fn find_closest_bar(
        &self,
        position: usize,
        x: f64,
        y: f64,
        max_distance: f64,
    ) -> ChartResult<Option<ClosestBar>> {
        self.pane.series(position)?;
        Ok(BarLayoutEngine::new(&self.pane).find_closest(position, x, y, max_distance))
    }

    /// Closest bar over all visible series, as `(series position, bar)`.
    ///
    /// Ties go to the lowest series position, then the lowest index.
    #[must_use]
    pub fn find_closest_bar_any(
        &self,
        x: f64,
        y: f64,
        max_distance: f64,
    ) -> Option<(usize, ClosestBar)> {
        let engine = BarLayoutEngine::new(&self.pane);
        (0..self.pane.series_list().len())
            .filter_map(|position| {
                engine
                    .find_closest(position, x, y, max_distance)
                    .map(|bar| (position, bar))
            })
            .min_by_key(|(_, bar)| OrderedFloat(bar.distance))
    }
}
