use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Which vertical axis a series' Y values belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum YAxisId {
    #[default]
    Primary,
    Secondary,
}

/// A bar series: ordered points, optional per-point error magnitudes and
/// the set of highlighted bar indexes.
///
/// Point index is identity for cluster and stack positioning, so points are
/// only ever appended or replaced in place.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    label: String,
    points: Vec<Point>,
    error_values: Option<Vec<f64>>,
    show_error_bars: bool,
    visible: bool,
    y_axis: YAxisId,
    highlighted: IndexSet<usize>,
}

impl BarSeries {
    #[must_use]
    pub fn new(label: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            label: label.into(),
            points,
            error_values: None,
            show_error_bars: false,
            visible: true,
            y_axis: YAxisId::Primary,
            highlighted: IndexSet::new(),
        }
    }

    /// Builds a series from parallel X/Y slices.
    pub fn from_xy(label: impl Into<String>, x: &[f64], y: &[f64]) -> ChartResult<Self> {
        if x.len() != y.len() {
            return Err(ChartError::ShapeMismatch {
                expected: x.len(),
                actual: y.len(),
            });
        }
        let points = x
            .iter()
            .zip(y)
            .map(|(x, y)| Point::new(*x, *y))
            .collect();
        Ok(Self::new(label, points))
    }

    /// Builds a series with one error magnitude per point; error bars start enabled.
    pub fn with_error_values(
        label: impl Into<String>,
        points: Vec<Point>,
        error_values: Vec<f64>,
    ) -> ChartResult<Self> {
        let mut series = Self::new(label, points);
        series.set_error_values(error_values)?;
        Ok(series)
    }

    /// Replaces error magnitudes and enables error bars.
    ///
    /// The slice must hold one finite, non-negative value per point.
    pub fn set_error_values(&mut self, error_values: Vec<f64>) -> ChartResult<()> {
        if error_values.len() != self.points.len() {
            warn!(
                series = %self.label,
                expected = self.points.len(),
                actual = error_values.len(),
                "rejecting error values with mismatched length"
            );
            return Err(ChartError::ShapeMismatch {
                expected: self.points.len(),
                actual: error_values.len(),
            });
        }
        if error_values
            .iter()
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(ChartError::InvalidData(
                "error values must be finite and >= 0".to_owned(),
            ));
        }
        self.error_values = Some(error_values);
        self.show_error_bars = true;
        Ok(())
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a point; a zero error magnitude is appended alongside when
    /// error values are present.
    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
        if let Some(errors) = &mut self.error_values {
            errors.push(0.0);
        }
    }

    /// Replaces the point at `index`, returning the previous one.
    pub fn replace_point(&mut self, index: usize, point: Point) -> ChartResult<Point> {
        let slot = self.points.get_mut(index).ok_or_else(|| {
            ChartError::InvalidData(format!("point index {index} is out of range"))
        })?;
        Ok(std::mem::replace(slot, point))
    }

    #[must_use]
    pub fn error_values(&self) -> Option<&[f64]> {
        self.error_values.as_deref()
    }

    /// Error magnitude at `index` when error bars are shown.
    #[must_use]
    pub fn error_value(&self, index: usize) -> Option<f64> {
        if !self.show_error_bars {
            return None;
        }
        self.error_values.as_ref()?.get(index).copied()
    }

    #[must_use]
    pub fn shows_error_bars(&self) -> bool {
        self.show_error_bars && self.error_values.is_some()
    }

    pub fn set_show_error_bars(&mut self, show: bool) {
        self.show_error_bars = show;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn y_axis(&self) -> YAxisId {
        self.y_axis
    }

    #[must_use]
    pub fn on_y_axis(mut self, y_axis: YAxisId) -> Self {
        self.y_axis = y_axis;
        self
    }

    pub fn set_y_axis(&mut self, y_axis: YAxisId) {
        self.y_axis = y_axis;
    }

    /// Turns highlighting of one bar on or off. Returns `true` when the set changed.
    pub fn set_bar_highlighted(&mut self, index: usize, highlighted: bool) -> bool {
        if highlighted {
            self.highlighted.insert(index)
        } else {
            self.highlighted.shift_remove(&index)
        }
    }

    #[must_use]
    pub fn is_bar_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    pub fn highlighted_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.highlighted.iter().copied()
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_set_is_idempotent() {
        let mut series = BarSeries::new("a", vec![Point::new(0.0, 1.0)]);
        assert!(series.set_bar_highlighted(3, true));
        assert!(!series.set_bar_highlighted(3, true));
        assert!(series.is_bar_highlighted(3));
        assert!(series.set_bar_highlighted(3, false));
        assert!(!series.set_bar_highlighted(3, false));
        assert_eq!(series.highlighted_indexes().count(), 0);
    }

    #[test]
    fn push_point_keeps_error_values_aligned() {
        let mut series =
            BarSeries::with_error_values("a", vec![Point::new(0.0, 1.0)], vec![0.5]).expect("series");
        series.push_point(Point::new(1.0, 2.0));
        assert_eq!(series.error_values(), Some(&[0.5, 0.0][..]));
    }
}
