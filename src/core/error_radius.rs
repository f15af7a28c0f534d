use serde::{Deserialize, Serialize};

use crate::core::AxisScale;
use crate::core::scale::checked_log;

/// Error-bar extents on either side of a value, in data units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorRadii {
    pub high: f64,
    pub low: f64,
}

impl ErrorRadii {
    #[must_use]
    pub fn symmetric(radius: f64) -> Self {
        Self {
            high: radius,
            low: radius,
        }
    }

    pub const ZERO: Self = Self {
        high: 0.0,
        low: 0.0,
    };
}

/// Computes error radii around `center` that look symmetric once drawn on
/// `scale`, given a linearly symmetric magnitude `radius`.
///
/// Linear scales return `radius` on both sides. On log scales the log-space
/// distances to `center + radius` and `center - radius` are compared and the
/// smaller one is mirrored onto both sides; a lower end at or below zero
/// counts as an unbounded distance, so the lower endpoint always stays
/// positive. A `center` outside the log domain keeps `radius` as is.
#[must_use]
pub fn resolve_error_radii(scale: &AxisScale, center: f64, radius: f64) -> ErrorRadii {
    let Some(base) = scale.kind().log_base() else {
        return ErrorRadii::symmetric(radius);
    };
    let Ok(center_log) = checked_log(center, base) else {
        return ErrorRadii::symmetric(radius);
    };

    let high_distance = checked_log(center + radius, base)
        .map(|high_log| (high_log - center_log).abs())
        .unwrap_or(f64::INFINITY);
    let low_distance = checked_log(center - radius, base)
        .map(|low_log| (center_log - low_log).abs())
        .unwrap_or(f64::INFINITY);

    let distance = if high_distance < low_distance {
        high_distance
    } else {
        low_distance
    };
    if !distance.is_finite() {
        return ErrorRadii::symmetric(radius);
    }

    let low_linear = base.powf(center_log - distance);
    let high_linear = base.powf(center_log + distance);
    ErrorRadii {
        high: (high_linear - center).abs(),
        low: (center - low_linear).abs(),
    }
}
