use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[cfg(feature = "parallel-range")]
use rayon::prelude::*;

use crate::core::error_radius::{ErrorRadii, resolve_error_radii};
use crate::core::{AxisId, BarPane, BarSeries, MISSING};

/// Bounding range of a series' data.
///
/// Starts inverted (`min = f64::MAX`, `max = f64::MIN`) and stays that way
/// on an axis where no point qualified; check `is_x_empty`/`is_y_empty`
/// before using it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for DataRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl DataRange {
    pub const EMPTY: Self = Self {
        x_min: f64::MAX,
        x_max: f64::MIN,
        y_min: f64::MAX,
        y_max: f64::MIN,
    };

    #[must_use]
    pub fn is_x_empty(&self) -> bool {
        self.x_min > self.x_max
    }

    #[must_use]
    pub fn is_y_empty(&self) -> bool {
        self.y_min > self.y_max
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_x_empty() && self.is_y_empty()
    }

    pub fn include_x(&mut self, low: f64, high: f64) {
        self.x_min = self.x_min.min(low);
        self.x_max = self.x_max.max(high);
    }

    pub fn include_y(&mut self, low: f64, high: f64) {
        self.y_min = self.y_min.min(low);
        self.y_max = self.y_max.max(high);
    }

    /// Union of two ranges; associative and commutative with `EMPTY` as identity.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// `true` when every non-empty axis of `other` lies inside `self`.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        let x_ok =
            other.is_x_empty() || (self.x_min <= other.x_min && other.x_max <= self.x_max);
        let y_ok =
            other.is_y_empty() || (self.y_min <= other.y_min && other.y_max <= self.y_max);
        x_ok && y_ok
    }

    #[must_use]
    pub fn x_span(&self) -> Option<(f64, f64)> {
        (!self.is_x_empty()).then_some((self.x_min, self.x_max))
    }

    #[must_use]
    pub fn y_span(&self) -> Option<(f64, f64)> {
        (!self.is_y_empty()).then_some((self.y_min, self.y_max))
    }
}

/// Switches controlling which points take part in a range pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeOptions {
    /// Skip leading points whose Y is zero.
    #[serde(default)]
    pub ignore_initial: bool,
    /// Filter points against the axes' hard bounds.
    #[serde(default)]
    pub bounded_ranges: bool,
}

/// Data ranges per physical axis, merged across visible series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRanges {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub y2: (f64, f64),
}

impl Default for AxisRanges {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl AxisRanges {
    pub const EMPTY: Self = Self {
        x: (f64::MAX, f64::MIN),
        y: (f64::MAX, f64::MIN),
        y2: (f64::MAX, f64::MIN),
    };

    #[must_use]
    pub fn axis(&self, axis: AxisId) -> Option<(f64, f64)> {
        let (min, max) = match axis {
            AxisId::X => self.x,
            AxisId::Y => self.y,
            AxisId::Y2 => self.y2,
        };
        (min <= max).then_some((min, max))
    }

    fn include(&mut self, axis: AxisId, min: f64, max: f64) {
        let slot = match axis {
            AxisId::X => &mut self.x,
            AxisId::Y => &mut self.y,
            AxisId::Y2 => &mut self.y2,
        };
        slot.0 = slot.0.min(min);
        slot.1 = slot.1.max(max);
    }

    fn with_series(mut self, y_axis: AxisId, range: DataRange) -> Self {
        if let Some((min, max)) = range.x_span() {
            self.include(AxisId::X, min, max);
        }
        if let Some((min, max)) = range.y_span() {
            self.include(y_axis, min, max);
        }
        self
    }

    /// Union of two aggregates; associative and commutative.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let pick = |lhs: (f64, f64), rhs: (f64, f64)| (lhs.0.min(rhs.0), lhs.1.max(rhs.1));
        Self {
            x: pick(self.x, other.x),
            y: pick(self.y, other.y),
            y2: pick(self.y2, other.y2),
        }
    }
}

/// Scans series data into bounding ranges.
#[derive(Debug, Clone, Copy)]
pub struct RangeCalculator<'a> {
    pane: &'a BarPane,
}

impl<'a> RangeCalculator<'a> {
    #[must_use]
    pub fn new(pane: &'a BarPane) -> Self {
        Self { pane }
    }

    /// Bounding range of series `position`, or `DataRange::EMPTY` for an
    /// unknown position.
    #[must_use]
    pub fn compute(&self, position: usize, options: RangeOptions) -> DataRange {
        match self.pane.series_list().get(position) {
            Some(series) => self.compute_series(series, options),
            None => DataRange::EMPTY,
        }
    }

    /// Bounding range of `series` against this pane's axes and settings.
    #[must_use]
    pub fn compute_series(&self, series: &BarSeries, options: RangeOptions) -> DataRange {
        let pane = self.pane;
        let x_axis = pane.x_axis();
        let y_axis = pane.axis(pane.y_axis_id_for(series));
        let value_axis = pane.value_axis_for(series);

        let (x_lower, x_upper, y_lower, y_upper) = if options.bounded_ranges {
            let (x_lower, x_upper) = x_axis.bounds();
            let (y_lower, y_upper) = y_axis.bounds();
            (x_lower, x_upper, y_lower, y_upper)
        } else {
            (f64::MIN, f64::MAX, f64::MIN, f64::MAX)
        };

        let z_included = pane.is_z_included();
        let x_independent = pane.is_x_independent();
        let x_log = x_axis.is_log();
        let y_log = y_axis.is_log();

        let mut ignore_initial = options.ignore_initial;
        let mut range = DataRange::EMPTY;

        for (index, point) in series.points().iter().enumerate() {
            let (x, y) = (point.x, point.y);

            // Deactivates on the first non-zero Y, whatever X holds.
            if ignore_initial && y != 0.0 && y != MISSING {
                ignore_initial = false;
            }
            if ignore_initial || point.is_invalid() {
                continue;
            }

            let (x_radii, y_radii) = match series.error_value(index) {
                Some(radius) if x_independent => {
                    (ErrorRadii::ZERO, resolve_error_radii(value_axis, y, radius))
                }
                Some(radius) => (resolve_error_radii(value_axis, x, radius), ErrorRadii::ZERO),
                None => (ErrorRadii::ZERO, ErrorRadii::ZERO),
            };
            let x_low = x - x_radii.low;
            let x_high = x + x_radii.high;
            let y_low = y - y_radii.low;
            let y_high = y + y_radii.high;
            let z = if z_included { point.valid_z() } else { None };

            let mut out_of_bounds = x_low < x_lower
                || x_high > x_upper
                || y_low < y_lower
                || y_high > y_upper
                || (x_log && x_low <= 0.0)
                || (y_log && y_low <= 0.0);
            if let Some(z) = z {
                out_of_bounds |= if x_independent {
                    z < y_lower || z > y_upper || (y_log && z <= 0.0)
                } else {
                    z < x_lower || z > x_upper || (x_log && z <= 0.0)
                };
            }
            if out_of_bounds {
                continue;
            }

            range.include_x(x_low, x_high);
            range.include_y(y_low, y_high);
            match z {
                Some(z) if x_independent => range.include_y(z, z),
                Some(z) => range.include_x(z, z),
                None => {}
            }
        }

        trace!(
            series = series.label(),
            points = series.len(),
            empty = range.is_empty(),
            "computed series range"
        );
        range
    }

    /// Merges the ranges of all visible series per physical axis.
    ///
    /// With the `parallel-range` feature the per-series scans run on rayon;
    /// the reduction is order independent so the result matches the
    /// sequential scan exactly.
    #[must_use]
    pub fn compute_axis_ranges(&self, options: RangeOptions) -> AxisRanges {
        let pane = self.pane;
        let per_series = |series: &BarSeries| {
            AxisRanges::EMPTY.with_series(
                pane.y_axis_id_for(series),
                self.compute_series(series, options),
            )
        };

        #[cfg(feature = "parallel-range")]
        let ranges = pane
            .series_list()
            .par_iter()
            .filter(|series| series.is_visible())
            .map(per_series)
            .reduce(|| AxisRanges::EMPTY, AxisRanges::merge);

        #[cfg(not(feature = "parallel-range"))]
        let ranges = pane
            .series_list()
            .iter()
            .filter(|series| series.is_visible())
            .map(per_series)
            .fold(AxisRanges::EMPTY, AxisRanges::merge);

        debug!(
            series = pane.series_list().len(),
            x = ?ranges.axis(AxisId::X),
            y = ?ranges.axis(AxisId::Y),
            y2 = ?ranges.axis(AxisId::Y2),
            "computed axis ranges"
        );
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_with_empty_is_identity() {
        let mut range = DataRange::EMPTY;
        range.include_x(1.0, 2.0);
        range.include_y(-3.0, 4.0);
        assert_eq!(range.merge(DataRange::EMPTY), range);
        assert_eq!(DataRange::EMPTY.merge(range), range);
    }

    #[test]
    fn empty_range_is_inverted() {
        let range = DataRange::default();
        assert!(range.is_x_empty());
        assert!(range.is_y_empty());
        assert!(range.x_span().is_none());
        assert!(AxisRanges::EMPTY.axis(AxisId::Y2).is_none());
    }
}
