pub mod bar_layout;
pub mod bar_settings;
pub mod error_radius;
pub mod pane;
pub mod range;
pub mod scale;
pub mod series;
pub mod types;
pub mod value_aggregator;

pub use bar_layout::{BarGeometry, BarLayoutEngine, BarRect, ClosestBar, ErrorBarGeometry};
pub use bar_settings::{BarBase, BarSettings, BarType};
pub use error_radius::{ErrorRadii, resolve_error_radii};
pub use pane::{AxisId, BarPane};
pub use range::{AxisRanges, DataRange, RangeCalculator, RangeOptions};
pub use scale::{AxisScale, SAFE_LOG_FLOOR, ScaleKind, checked_log, safe_log};
pub use series::{BarSeries, YAxisId};
pub use types::{MISSING, Point, Viewport, is_value_invalid};
pub use value_aggregator::{BarValues, ValueAggregator};
