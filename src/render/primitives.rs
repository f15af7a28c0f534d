use serde::{Deserialize, Serialize};

use crate::core::BarRect;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        match ["red", "green", "blue", "alpha"]
            .into_iter()
            .zip(channels)
            .find(|(_, value)| !(0.0..=1.0).contains(value))
        {
            Some((channel, _)) => Err(ChartError::InvalidData(format!(
                "color channel `{channel}` must be in [0, 1]"
            ))),
            None => Ok(()),
        }
    }
}

/// One filled bar in pixel space, tagged with the series and point it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPrimitive {
    pub series: usize,
    pub index: usize,
    pub rect: BarRect,
    pub fill: Color,
    pub border: Option<Color>,
    pub highlighted: bool,
}

impl BarPrimitive {
    #[must_use]
    pub const fn new(series: usize, index: usize, rect: BarRect, fill: Color) -> Self {
        Self {
            series,
            index,
            rect,
            fill,
            border: None,
            highlighted: false,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border: Color) -> Self {
        self.border = Some(border);
        self
    }

    #[must_use]
    pub const fn highlighted(mut self, fill: Color) -> Self {
        self.fill = fill;
        self.highlighted = true;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        let BarRect {
            left,
            top,
            right,
            bottom,
        } = self.rect;
        if ![left, top, right, bottom].iter().all(|value| value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "bar {}/{} has non-finite geometry",
                self.series, self.index
            )));
        }
        // Zero-size bars are legal (empty stack segments).
        if left > right || top > bottom {
            return Err(ChartError::InvalidData(format!(
                "bar {}/{} rectangle is not normalized",
                self.series, self.index
            )));
        }
        self.fill.validate()?;
        self.border.map_or(Ok(()), Color::validate)
    }
}

/// Segment of an error-bar whisker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhiskerPart {
    /// Line along the value axis between both error ends.
    Stem,
    LowCap,
    HighCap,
}

/// One error-bar line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhiskerPrimitive {
    pub series: usize,
    pub index: usize,
    pub part: WhiskerPart,
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub stroke_width: f64,
    pub color: Color,
}

impl WhiskerPrimitive {
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.to.0 - self.from.0).hypot(self.to.1 - self.from.1)
    }

    pub fn validate(self) -> ChartResult<()> {
        let (x1, y1) = self.from;
        let (x2, y2) = self.to;
        if ![x1, y1, x2, y2].iter().all(|value| value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "error bar {}/{} {:?} has non-finite geometry",
                self.series, self.index, self.part
            )));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "error bar stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
