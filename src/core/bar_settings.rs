use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Physical axis carrying the independent (category) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BarBase {
    /// Vertical bars rooted on the X axis.
    #[default]
    X,
    /// Horizontal bars rooted on the primary Y axis.
    Y,
    /// Horizontal bars rooted on the secondary Y axis.
    Y2,
}

impl BarBase {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::X)
    }
}

/// How bars from different series share one base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BarType {
    /// Side by side, ordered by series position.
    #[default]
    Cluster,
    /// Side by side, each bar spanning `z..y` and `z` included in ranges.
    ClusterHiLow,
    /// Drawn on top of each other in series order.
    Overlay,
    /// End to end, cumulative.
    Stack,
    /// End to end, normalized to percentages of the stack total.
    PercentStack,
}

impl BarType {
    #[must_use]
    pub fn is_clustered(self) -> bool {
        matches!(self, Self::Cluster | Self::ClusterHiLow)
    }

    #[must_use]
    pub fn is_stacked(self) -> bool {
        matches!(self, Self::Stack | Self::PercentStack)
    }
}

/// Shared bar layout settings of one pane.
///
/// Gaps are fractions of the computed bar width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSettings {
    #[serde(default)]
    pub base: BarBase,
    #[serde(default)]
    pub bar_type: BarType,
    #[serde(default = "default_min_cluster_gap")]
    pub min_cluster_gap: f64,
    #[serde(default = "default_min_bar_gap")]
    pub min_bar_gap: f64,
    /// Width of one cluster in base-axis units (log units on log axes).
    #[serde(default = "default_cluster_scale_width")]
    pub cluster_scale_width: f64,
    /// Derive the cluster width from the smallest base-value spacing.
    #[serde(default = "default_auto_cluster_scale_width")]
    pub auto_cluster_scale_width: bool,
}

impl Default for BarSettings {
    fn default() -> Self {
        Self {
            base: BarBase::default(),
            bar_type: BarType::default(),
            min_cluster_gap: default_min_cluster_gap(),
            min_bar_gap: default_min_bar_gap(),
            cluster_scale_width: default_cluster_scale_width(),
            auto_cluster_scale_width: default_auto_cluster_scale_width(),
        }
    }
}

impl BarSettings {
    #[must_use]
    pub fn with_base(mut self, base: BarBase) -> Self {
        self.base = base;
        self
    }

    #[must_use]
    pub fn with_bar_type(mut self, bar_type: BarType) -> Self {
        self.bar_type = bar_type;
        self
    }

    #[must_use]
    pub fn with_gaps(mut self, min_cluster_gap: f64, min_bar_gap: f64) -> Self {
        self.min_cluster_gap = min_cluster_gap;
        self.min_bar_gap = min_bar_gap;
        self
    }

    #[must_use]
    pub fn with_fixed_cluster_scale_width(mut self, cluster_scale_width: f64) -> Self {
        self.cluster_scale_width = cluster_scale_width;
        self.auto_cluster_scale_width = false;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.min_cluster_gap.is_finite()
            || !self.min_bar_gap.is_finite()
            || self.min_cluster_gap < 0.0
            || self.min_bar_gap < 0.0
        {
            return Err(ChartError::InvalidData(
                "bar gaps must be finite and >= 0".to_owned(),
            ));
        }
        if !self.cluster_scale_width.is_finite() || self.cluster_scale_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "cluster scale width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Bar width in pixels for a cluster `cluster_width_px` wide holding
    /// `clusterable_bars` side-by-side bars. Falls back to one pixel.
    #[must_use]
    pub fn bar_width_px(&self, cluster_width_px: f64, clusterable_bars: usize) -> f64 {
        let denominator = if self.bar_type.is_clustered() {
            let bars = clusterable_bars as f64;
            let denominator =
                bars * (1.0 + self.min_bar_gap) - self.min_bar_gap + self.min_cluster_gap;
            if denominator <= 0.0 { 1.0 } else { denominator }
        } else {
            1.0 + self.min_cluster_gap
        };
        let width = cluster_width_px / denominator;
        if width.is_finite() && width > 0.0 {
            width
        } else {
            1.0
        }
    }
}

fn default_min_cluster_gap() -> f64 {
    1.0
}

fn default_min_bar_gap() -> f64 {
    0.2
}

fn default_cluster_scale_width() -> f64 {
    1.0
}

fn default_auto_cluster_scale_width() -> bool {
    true
}
