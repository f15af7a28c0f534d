use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::error_radius::resolve_error_radii;
use crate::core::{BarPane, BarValues, ValueAggregator};

/// Axis-aligned pixel rectangle with `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BarRect {
    /// Builds a rectangle from two corners in any order.
    #[must_use]
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Euclidean distance from a pixel to the rectangle; zero inside.
    #[must_use]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = (self.left - x).max(x - self.right).max(0.0);
        let dy = (self.top - y).max(y - self.bottom).max(0.0);
        dx.hypot(dy)
    }
}

/// Pixel geometry of one bar.
///
/// `low_px`/`high_px` are value-axis pixels of the bar ends in data order;
/// they are not sorted because pixel axes may run either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub values: BarValues,
    pub base_px: f64,
    pub low_px: f64,
    pub high_px: f64,
    pub bar_width_px: f64,
    pub offset_px: f64,
    pub vertical: bool,
}

impl BarGeometry {
    /// Pixel of the bar side closest to the axis origin along the base axis.
    #[must_use]
    pub fn side_px(&self) -> f64 {
        self.base_px + self.offset_px
    }

    /// Center of the bar along the base axis.
    #[must_use]
    pub fn center_px(&self) -> f64 {
        self.side_px() + self.bar_width_px / 2.0
    }

    #[must_use]
    pub fn rect(&self) -> BarRect {
        let side = self.side_px();
        if self.vertical {
            BarRect::from_corners(side, self.low_px, side + self.bar_width_px, self.high_px)
        } else {
            BarRect::from_corners(self.low_px, side, self.high_px, side + self.bar_width_px)
        }
    }
}

/// Error-bar whisker at the value end of a bar, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorBarGeometry {
    pub index: usize,
    pub center_px: f64,
    pub low_px: f64,
    pub high_px: f64,
    pub cap_width_px: f64,
    pub vertical: bool,
}

/// Closest bar found by a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosestBar {
    pub index: usize,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy)]
struct ClusterMetrics {
    cluster_width: f64,
    bar_width: f64,
    cluster_gap: f64,
    bar_gap: f64,
}

/// Computes bar rectangles for clustered, overlaid and stacked layouts.
#[derive(Debug, Clone, Copy)]
pub struct BarLayoutEngine<'a> {
    pane: &'a BarPane,
    aggregator: ValueAggregator<'a>,
}

impl<'a> BarLayoutEngine<'a> {
    #[must_use]
    pub fn new(pane: &'a BarPane) -> Self {
        Self {
            pane,
            aggregator: ValueAggregator::new(pane),
        }
    }

    fn metrics(&self) -> ClusterMetrics {
        let settings = self.pane.settings();
        let cluster_width = self.pane.cluster_width_px();
        let bar_width = self.pane.bar_width_px();
        ClusterMetrics {
            cluster_width,
            bar_width,
            cluster_gap: settings.min_cluster_gap * bar_width,
            bar_gap: settings.min_bar_gap * bar_width,
        }
    }

    /// Geometry of point `index` in series `position`, or `None` when the
    /// point is invalid, its values cannot be resolved, or its base or end
    /// has no finite pixel (including values outside a log domain).
    #[must_use]
    pub fn layout(&self, position: usize, index: usize) -> Option<BarGeometry> {
        self.layout_with(&self.metrics(), position, self.pane.bar_position(position), index)
    }

    /// Geometry of every drawable point of series `position`, in index order.
    #[must_use]
    pub fn layout_series(&self, position: usize) -> Vec<BarGeometry> {
        let Some(series) = self.pane.series_list().get(position) else {
            return Vec::new();
        };
        let metrics = self.metrics();
        let slot = self.pane.bar_position(position);
        (0..series.len())
            .filter_map(|index| self.layout_with(&metrics, position, slot, index))
            .collect()
    }

    fn layout_with(
        &self,
        metrics: &ClusterMetrics,
        position: usize,
        slot: usize,
        index: usize,
    ) -> Option<BarGeometry> {
        let series = self.pane.series_list().get(position)?;
        if series.point(index)?.is_invalid_3d() {
            return None;
        }
        let values = self.aggregator.resolve(position, index)?;

        let value_axis = self.pane.value_axis_for(series);
        let base_axis = self.pane.base_axis();
        let offset_px = slot as f64 * (metrics.bar_width + metrics.bar_gap)
            - metrics.cluster_width / 2.0
            + metrics.cluster_gap / 2.0;

        // Only the root may fall back to the axis floor; a base or bar end
        // outside the log domain is not drawable.
        let base_px = base_axis.transform(values.base).ok()?;
        let low_px = value_axis.to_pixel(values.low);
        let high_px = value_axis.transform(values.high).ok()?;
        if !(base_px.is_finite() && low_px.is_finite() && high_px.is_finite()) {
            return None;
        }

        Some(BarGeometry {
            index,
            values,
            base_px,
            low_px,
            high_px,
            bar_width_px: metrics.bar_width,
            offset_px,
            vertical: self.pane.settings().base.is_vertical(),
        })
    }

    /// Error-bar whisker for point `index`, centred on the bar's high end.
    ///
    /// `None` when the series shows no error bars, the bar has no geometry or
    /// a whisker end falls off the pixel plane.
    #[must_use]
    pub fn error_bar(&self, position: usize, index: usize) -> Option<ErrorBarGeometry> {
        let series = self.pane.series_list().get(position)?;
        let radius = series.error_value(index)?;
        let bar = self.layout(position, index)?;
        let value_axis = self.pane.value_axis_for(series);
        let center = bar.values.high;
        let radii = resolve_error_radii(value_axis, center, radius);

        let low_px = value_axis.to_pixel(center - radii.low);
        let high_px = value_axis.to_pixel(center + radii.high);
        if !(low_px.is_finite() && high_px.is_finite()) {
            return None;
        }

        Some(ErrorBarGeometry {
            index,
            center_px: bar.center_px(),
            low_px,
            high_px,
            cap_width_px: bar.bar_width_px / 2.0,
            vertical: bar.vertical,
        })
    }

    /// Closest bar of series `position` to pixel `(x, y)` within `max_distance`.
    ///
    /// Distance is zero inside a bar; ties go to the lowest index.
    #[must_use]
    pub fn find_closest(
        &self,
        position: usize,
        x: f64,
        y: f64,
        max_distance: f64,
    ) -> Option<ClosestBar> {
        if !x.is_finite() || !y.is_finite() || max_distance.is_nan() || max_distance < 0.0 {
            return None;
        }
        self.layout_series(position)
            .iter()
            .map(|bar| ClosestBar {
                index: bar.index,
                distance: bar.rect().distance_to(x, y),
            })
            .filter(|candidate| candidate.distance <= max_distance)
            .min_by_key(|candidate| OrderedFloat(candidate.distance))
    }
}

#[cfg(test)]
mod tests {
    use super::BarRect;

    #[test]
    fn rect_distance_is_zero_inside_and_euclidean_outside() {
        let rect = BarRect::from_corners(10.0, 20.0, 0.0, 0.0);
        assert_eq!(rect.distance_to(5.0, 5.0), 0.0);
        assert!((rect.distance_to(13.0, 24.0) - 5.0).abs() <= 1e-12);
        assert!((rect.distance_to(-2.0, 10.0) - 2.0).abs() <= 1e-12);
    }
}
