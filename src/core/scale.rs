use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult, DomainError};

/// Finite sentinel returned by [`safe_log`] for values outside the log domain.
pub const SAFE_LOG_FLOOR: f64 = f64::MIN;

/// Mapping domain of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleKind {
    /// Uniform spacing in raw units.
    #[default]
    Linear,
    /// Uniform spacing in base-10 log units (values must be > 0).
    Log,
    /// Uniform spacing in base-2 log units (values must be > 0).
    Log2,
}

impl ScaleKind {
    #[must_use]
    pub fn is_log(self) -> bool {
        !matches!(self, Self::Linear)
    }

    #[must_use]
    pub fn log_base(self) -> Option<f64> {
        match self {
            Self::Linear => None,
            Self::Log => Some(10.0),
            Self::Log2 => Some(2.0),
        }
    }
}

/// Logarithm of `value` in `base`, rejecting values outside the log domain.
pub fn checked_log(value: f64, base: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFinite);
    }
    if value <= 0.0 {
        return Err(DomainError::NonPositive);
    }
    // Dedicated paths keep exact results for integral powers.
    let log = if base == 10.0 {
        value.log10()
    } else if base == 2.0 {
        value.log2()
    } else {
        value.ln() / base.ln()
    };
    if log.is_finite() {
        Ok(log)
    } else {
        Err(DomainError::NonFinite)
    }
}

/// Logarithm that never fails: domain errors collapse to [`SAFE_LOG_FLOOR`].
#[must_use]
pub fn safe_log(value: f64, base: f64) -> f64 {
    checked_log(value, base).unwrap_or(SAFE_LOG_FLOOR)
}

/// One chart axis: domain kind, soft auto-scale range, hard inclusion
/// bounds and the pixel span the range maps onto.
///
/// Hard bounds only filter data during range computation; the pixel mapping
/// always uses `min..max`. The pixel span may run in either direction
/// (value axes usually map `min` to the bottom edge).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    kind: ScaleKind,
    min: f64,
    max: f64,
    lower_bound: f64,
    upper_bound: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl AxisScale {
    /// Creates a scale over `min..max` mapped onto a unit pixel span.
    pub fn new(kind: ScaleKind, min: f64, max: f64) -> ChartResult<Self> {
        validate_domain(kind, min, max)?;
        Ok(Self {
            kind,
            min,
            max,
            lower_bound: f64::MIN,
            upper_bound: f64::MAX,
            pixel_start: 0.0,
            pixel_end: 1.0,
        })
    }

    pub fn linear(min: f64, max: f64) -> ChartResult<Self> {
        Self::new(ScaleKind::Linear, min, max)
    }

    pub fn log10(min: f64, max: f64) -> ChartResult<Self> {
        Self::new(ScaleKind::Log, min, max)
    }

    pub fn log2(min: f64, max: f64) -> ChartResult<Self> {
        Self::new(ScaleKind::Log2, min, max)
    }

    /// Returns a copy mapped onto `pixel_start..pixel_end`.
    pub fn with_pixel_span(mut self, pixel_start: f64, pixel_end: f64) -> ChartResult<Self> {
        if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
            return Err(ChartError::InvalidData(
                "scale pixel span must be finite and non-zero".to_owned(),
            ));
        }
        self.pixel_start = pixel_start;
        self.pixel_end = pixel_end;
        Ok(self)
    }

    /// Returns a copy with hard inclusion bounds used by bounded ranges.
    pub fn with_bounds(mut self, lower_bound: f64, upper_bound: f64) -> ChartResult<Self> {
        if lower_bound.is_nan() || upper_bound.is_nan() || lower_bound > upper_bound {
            return Err(ChartError::InvalidData(
                "scale bounds must be ordered and not NaN".to_owned(),
            ));
        }
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        Ok(self)
    }

    /// Returns a copy with a new soft domain, keeping kind, bounds and span.
    pub fn with_domain(mut self, min: f64, max: f64) -> ChartResult<Self> {
        validate_domain(self.kind, min, max)?;
        self.min = min;
        self.max = max;
        Ok(self)
    }

    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub fn is_log(&self) -> bool {
        self.kind.is_log()
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }

    #[must_use]
    pub fn pixel_span(&self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    /// `safe_log` in this scale's base; identity on linear scales.
    #[must_use]
    pub fn safe_log(&self, value: f64) -> f64 {
        match self.kind.log_base() {
            Some(base) => safe_log(value, base),
            None => value,
        }
    }

    /// Maps a data value into the scale's internal linear space.
    pub fn linearize(&self, value: f64) -> Result<f64, DomainError> {
        match self.kind.log_base() {
            Some(base) => checked_log(value, base),
            None if value.is_finite() => Ok(value),
            None => Err(DomainError::NonFinite),
        }
    }

    fn delinearize(&self, linear: f64) -> f64 {
        match self.kind.log_base() {
            Some(base) => base.powf(linear),
            None => linear,
        }
    }

    /// Pixels per unit of linearized domain (signed by span direction).
    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        let (lo, hi) = self.linear_domain();
        (self.pixel_end - self.pixel_start) / (hi - lo)
    }

    fn linear_domain(&self) -> (f64, f64) {
        match self.kind.log_base() {
            Some(base) => (safe_log(self.min, base), safe_log(self.max, base)),
            None => (self.min, self.max),
        }
    }

    /// Maps a data value to a pixel coordinate, reporting domain errors.
    pub fn transform(&self, value: f64) -> Result<f64, DomainError> {
        let linear = self.linearize(value)?;
        let (lo, _) = self.linear_domain();
        Ok(self.pixel_start + (linear - lo) * self.pixels_per_unit())
    }

    /// Maps a data value to a pixel coordinate.
    ///
    /// Values outside the scale domain (non-positive on log scales,
    /// non-finite anywhere) map to the pixel of the axis floor `min`.
    #[must_use]
    pub fn to_pixel(&self, value: f64) -> f64 {
        self.transform(value)
            .unwrap_or_else(|_| self.floor_pixel())
    }

    #[must_use]
    pub fn floor_pixel(&self) -> f64 {
        self.pixel_start
    }

    /// Inverse of [`AxisScale::to_pixel`] on the valid domain.
    #[must_use]
    pub fn to_value(&self, pixel: f64) -> f64 {
        let (lo, _) = self.linear_domain();
        self.delinearize(lo + (pixel - self.pixel_start) / self.pixels_per_unit())
    }
}

fn validate_domain(kind: ScaleKind, min: f64, max: f64) -> ChartResult<()> {
    if !min.is_finite() || !max.is_finite() || min == max {
        return Err(ChartError::InvalidData(
            "scale domain must be finite and non-zero".to_owned(),
        ));
    }
    if kind.is_log() && (min <= 0.0 || max <= 0.0) {
        return Err(ChartError::InvalidData(
            "log scale domain requires values > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_log_reports_domain_errors() {
        assert_eq!(checked_log(0.0, 10.0), Err(DomainError::NonPositive));
        assert_eq!(checked_log(-3.0, 2.0), Err(DomainError::NonPositive));
        assert_eq!(checked_log(f64::NAN, 10.0), Err(DomainError::NonFinite));
        assert_eq!(checked_log(1000.0, 10.0), Ok(3.0));
        assert_eq!(checked_log(8.0, 2.0), Ok(3.0));
    }

    #[test]
    fn safe_log_collapses_to_finite_floor() {
        assert_eq!(safe_log(0.0, 10.0), SAFE_LOG_FLOOR);
        assert!(SAFE_LOG_FLOOR.is_finite());
    }
}
