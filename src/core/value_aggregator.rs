use serde::{Deserialize, Serialize};

use crate::core::types::is_value_invalid;
use crate::core::{BarPane, BarSeries, BarType, Point};

/// Effective values of one bar: position on the base axis and the two ends
/// on the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarValues {
    pub base: f64,
    pub low: f64,
    pub high: f64,
}

/// Resolves effective bar values, accumulating stacks across the series list.
///
/// Read-only view over a pane; holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct ValueAggregator<'a> {
    pane: &'a BarPane,
}

impl<'a> ValueAggregator<'a> {
    #[must_use]
    pub fn new(pane: &'a BarPane) -> Self {
        Self { pane }
    }

    /// Returns the base/low/high values of point `index` in series `position`.
    ///
    /// `None` when the series is hidden or unknown, the index is out of
    /// range, or the point's base or own value is missing/invalid. A missing
    /// value only affects its own index.
    #[must_use]
    pub fn resolve(&self, position: usize, index: usize) -> Option<BarValues> {
        let series = self.pane.series_list().get(position)?;
        if !series.is_visible() {
            return None;
        }
        let point = series.point(index)?;
        let base = self.base_value(point);
        if is_value_invalid(base) {
            return None;
        }

        match self.pane.settings().bar_type {
            BarType::Stack | BarType::PercentStack => self.resolve_stacked(position, index, base),
            BarType::Cluster | BarType::ClusterHiLow | BarType::Overlay => {
                let high = self.dependent_value(point);
                if is_value_invalid(high) {
                    return None;
                }
                let low = point.valid_z().unwrap_or(0.0);
                Some(BarValues { base, low, high })
            }
        }
    }

    /// A missing value in another series contributes nothing to the stack at
    /// that index; the bars above it still resolve.
    fn resolve_stacked(&self, position: usize, index: usize, base: f64) -> Option<BarValues> {
        let mut positive_stack = 0.0;
        let mut negative_stack = 0.0;
        let mut target: Option<(f64, f64)> = None;

        for (current, series) in self.pane.series_list().iter().enumerate() {
            if !series.is_visible() {
                continue;
            }
            let Some(value) = self.stack_value(series, index) else {
                if current == position {
                    return None;
                }
                continue;
            };

            if current == position {
                target = Some(if value >= 0.0 {
                    (positive_stack, positive_stack + value)
                } else {
                    (negative_stack + value, negative_stack)
                });
            }

            if value >= 0.0 {
                positive_stack += value;
            } else {
                negative_stack += value;
            }
        }

        let (low, high) = target?;
        if self.pane.settings().bar_type != BarType::PercentStack {
            return Some(BarValues { base, low, high });
        }

        let total = positive_stack + f64::abs(negative_stack);
        let (low, high) = if total == 0.0 {
            (0.0, 0.0)
        } else {
            (low / total * 100.0, high / total * 100.0)
        };
        Some(BarValues { base, low, high })
    }

    fn stack_value(&self, series: &BarSeries, index: usize) -> Option<f64> {
        let point = series.point(index)?;
        let value = self.dependent_value(point);
        (!is_value_invalid(value)).then_some(value)
    }

    fn base_value(&self, point: &Point) -> f64 {
        if self.pane.is_x_independent() {
            point.x
        } else {
            point.y
        }
    }

    fn dependent_value(&self, point: &Point) -> f64 {
        if self.pane.is_x_independent() {
            point.y
        } else {
            point.x
        }
    }
}
