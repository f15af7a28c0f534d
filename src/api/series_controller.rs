use tracing::{debug, trace};

use crate::core::{BarSeries, Point};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::BarChart;

impl<R: Renderer> BarChart<R> {
    /// Appends a series to the end of the series list and returns its position.
    pub fn add_series(&mut self, series: BarSeries) -> usize {
        let points = series.len();
        let label = series.label().to_owned();
        let position = self.pane.add_series(series);
        debug!(position, label = %label, points, "add bar series");
        position
    }

    pub fn remove_series(&mut self, position: usize) -> ChartResult<BarSeries> {
        let removed = self.pane.remove_series(position)?;
        debug!(position, label = removed.label(), "remove bar series");
        Ok(removed)
    }

    pub fn series(&self, position: usize) -> ChartResult<&BarSeries> {
        self.pane.series(position)
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.pane.series_list().len()
    }

    pub fn set_series_visible(&mut self, position: usize, visible: bool) -> ChartResult<()> {
        self.pane.series_mut(position)?.set_visible(visible);
        Ok(())
    }

    pub fn set_series_error_values(
        &mut self,
        position: usize,
        error_values: Vec<f64>,
    ) -> ChartResult<()> {
        self.pane.series_mut(position)?.set_error_values(error_values)
    }

    pub fn push_point(&mut self, position: usize, point: Point) -> ChartResult<()> {
        let series = self.pane.series_mut(position)?;
        series.push_point(point);
        trace!(position, count = series.len(), "append bar point");
        Ok(())
    }

    /// Turns highlighting of one bar on or off. Returns `true` when it changed.
    pub fn set_bar_highlighted(
        &mut self,
        position: usize,
        index: usize,
        highlighted: bool,
    ) -> ChartResult<bool> {
        Ok(self
            .pane
            .series_mut(position)?
            .set_bar_highlighted(index, highlighted))
    }

    pub fn clear_highlights(&mut self, position: usize) -> ChartResult<()> {
        self.pane.series_mut(position)?.clear_highlights();
        Ok(())
    }
}
