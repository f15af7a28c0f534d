mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{BarPrimitive, Color, WhiskerPart, WhiskerPrimitive};

use crate::error::ChartResult;

/// Drawing backend for bar frames.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
