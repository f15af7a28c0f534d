use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Sentinel marking an absent sample on any coordinate.
pub const MISSING: f64 = f64::MAX;

/// Returns `true` when `value` is [`MISSING`], infinite or NaN.
#[must_use]
pub fn is_value_invalid(value: f64) -> bool {
    value == MISSING || !value.is_finite()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One bar sample.
///
/// `x`/`y` carry the base and dependent coordinates (which is which depends
/// on the bar base axis). `z` is the optional low value used by hi-low
/// clusters; an absent `z` is never treated as invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub tag: Option<String>,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            tag: None,
        }
    }

    #[must_use]
    pub fn with_low(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            tag: None,
        }
    }

    #[must_use]
    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Builds a point from a timestamp base (unix seconds, millisecond
    /// precision) and a decimal value.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        let y = value.to_f64().ok_or_else(|| {
            ChartError::InvalidData(format!("bar value {value} cannot be represented as f64"))
        })?;
        Ok(Self::new(time.timestamp_millis() as f64 / 1000.0, y))
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.x == MISSING || self.y == MISSING
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        is_value_invalid(self.x) || is_value_invalid(self.y)
    }

    #[must_use]
    pub fn is_invalid_3d(&self) -> bool {
        self.is_invalid() || self.z.is_some_and(is_value_invalid)
    }

    /// Returns `z` when it holds a plottable value.
    #[must_use]
    pub fn valid_z(&self) -> Option<f64> {
        self.z.filter(|z| !is_value_invalid(*z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_on_either_axis_marks_point_invalid() {
        assert!(Point::new(MISSING, 1.0).is_invalid());
        assert!(Point::new(1.0, MISSING).is_missing());
        assert!(Point::new(f64::NAN, 1.0).is_invalid());
        assert!(!Point::new(1.0, 2.0).is_invalid());
    }

    #[test]
    fn absent_z_is_valid_in_3d_check() {
        assert!(!Point::new(1.0, 2.0).is_invalid_3d());
        assert!(Point::with_low(1.0, 2.0, f64::INFINITY).is_invalid_3d());
        assert!(Point::with_low(1.0, 2.0, MISSING).valid_z().is_none());
    }

    #[test]
    fn decimal_time_point_keeps_millisecond_base() {
        use chrono::TimeZone;

        let time = Utc
            .timestamp_millis_opt(1_700_000_000_250)
            .single()
            .expect("valid timestamp");
        let point = Point::from_decimal_time(time, Decimal::new(12_345, 2)).expect("point");
        assert!((point.x - 1_700_000_000.25).abs() <= 1e-9);
        assert!((point.y - 123.45).abs() <= 1e-12);
        assert_eq!(point.z, None);
    }
}
