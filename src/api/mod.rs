mod bar_projection;
mod bar_render_frame_builder;
mod engine;
mod engine_config;
mod engine_snapshot;
mod render_style;
mod scale_coordinator;
mod series_controller;

pub use engine::BarChart;
pub use engine_config::{AxisConfig, BarChartConfig};
pub use engine_snapshot::{AxisSnapshot, BarChartSnapshot, SeriesSnapshot};
pub use render_style::BarRenderStyle;
