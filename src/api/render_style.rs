use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors and stroke settings used when building bar frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRenderStyle {
    /// Fill colors cycled by series position.
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default = "default_highlight_color")]
    pub highlight_color: Color,
    #[serde(default)]
    pub border_color: Option<Color>,
    #[serde(default = "default_error_bar_color")]
    pub error_bar_color: Color,
    #[serde(default = "default_error_bar_stroke_width")]
    pub error_bar_stroke_width: f64,
}

impl Default for BarRenderStyle {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            highlight_color: default_highlight_color(),
            border_color: None,
            error_bar_color: default_error_bar_color(),
            error_bar_stroke_width: default_error_bar_stroke_width(),
        }
    }
}

impl BarRenderStyle {
    #[must_use]
    pub fn series_color(&self, position: usize) -> Color {
        if self.palette.is_empty() {
            return default_palette()[0];
        }
        self.palette[position % self.palette.len()]
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in &self.palette {
            color.validate()?;
        }
        self.highlight_color.validate()?;
        self.error_bar_color.validate()?;
        if let Some(border) = self.border_color {
            border.validate()?;
        }
        if !self.error_bar_stroke_width.is_finite() || self.error_bar_stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "error bar stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb(0.16, 0.44, 0.75),
        Color::rgb(0.89, 0.47, 0.15),
        Color::rgb(0.24, 0.63, 0.30),
        Color::rgb(0.80, 0.20, 0.22),
        Color::rgb(0.55, 0.40, 0.72),
        Color::rgb(0.50, 0.50, 0.50),
    ]
}

fn default_highlight_color() -> Color {
    Color::rgb(1.0, 0.84, 0.0)
}

fn default_error_bar_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_error_bar_stroke_width() -> f64 {
    1.0
}
