//! chart-bars: bar-series geometry core.
//!
//! Maps bar data through linear/log axis scales into pixel rectangles,
//! resolves clustered and stacked layouts, computes visually symmetric
//! error-bar radii and aggregates data ranges for auto-scaling. Drawing is
//! delegated to a [`render::Renderer`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, BarChartConfig};
pub use error::{ChartError, ChartResult, DomainError};
