use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{BarPrimitive, WhiskerPrimitive};

/// Backend-agnostic scene for one bar chart draw pass.
///
/// Bars are listed in paint order (series order, then point index);
/// whiskers are painted after every bar.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub bars: Vec<BarPrimitive>,
    pub whiskers: Vec<WhiskerPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bars: Vec::new(),
            whiskers: Vec::new(),
        }
    }

    /// Bars emitted for series `position`.
    pub fn bars_of_series(&self, position: usize) -> impl Iterator<Item = &BarPrimitive> + '_ {
        self.bars.iter().filter(move |bar| bar.series == position)
    }

    #[must_use]
    pub fn highlighted_count(&self) -> usize {
        self.bars.iter().filter(|bar| bar.highlighted).count()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.bars.iter().try_for_each(|bar| bar.validate())?;
        self.whiskers
            .iter()
            .try_for_each(|whisker| whisker.validate())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.whiskers.is_empty()
    }
}
