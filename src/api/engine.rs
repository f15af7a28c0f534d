use tracing::debug;

use crate::core::{AxisId, AxisScale, BarPane, BarSettings, RangeOptions, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::bar_render_frame_builder::build_bar_render_frame;
use super::{BarChartConfig, BarRenderStyle};

/// Main facade consumed by host applications.
///
/// `BarChart` owns the pane (axes, bar settings, series list), keeps the
/// axis pixel spans in sync with the viewport and hands built frames to the
/// renderer.
pub struct BarChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) pane: BarPane,
    pub(super) range_options: RangeOptions,
    pub(super) style: BarRenderStyle,
}

impl<R: Renderer> BarChart<R> {
    /// Creates a chart with empty series list from `config`.
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        let viewport = config.viewport;
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        config.render_style.validate()?;

        let (width, height) = (f64::from(viewport.width), f64::from(viewport.height));
        let x_axis = config.x_axis.build(0.0, width)?;
        let y_axis = config.y_axis.build(height, 0.0)?;
        let y2_axis = config.y2_axis.unwrap_or(config.y_axis).build(height, 0.0)?;
        let pane = BarPane::new(x_axis, y_axis, config.bar_settings)?.with_y2_axis(y2_axis);

        debug!(
            width = viewport.width,
            height = viewport.height,
            base = ?config.bar_settings.base,
            bar_type = ?config.bar_settings.bar_type,
            "bar chart created"
        );
        Ok(Self {
            renderer,
            viewport,
            pane,
            range_options: config.range_options,
            style: config.render_style,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resizes the chart and remaps every axis onto the new pixel extent.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let (width, height) = (f64::from(viewport.width), f64::from(viewport.height));
        let x_axis = self.pane.x_axis().with_pixel_span(0.0, width)?;
        let y_axis = self.pane.y_axis().with_pixel_span(height, 0.0)?;
        let y2_axis = self.pane.y2_axis().with_pixel_span(height, 0.0)?;
        self.pane.set_axis(AxisId::X, x_axis);
        self.pane.set_axis(AxisId::Y, y_axis);
        self.pane.set_axis(AxisId::Y2, y2_axis);
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn pane(&self) -> &BarPane {
        &self.pane
    }

    #[must_use]
    pub fn axis(&self, axis: AxisId) -> &AxisScale {
        self.pane.axis(axis)
    }

    /// Sets the soft domain of one axis.
    pub fn set_axis_domain(&mut self, axis: AxisId, min: f64, max: f64) -> ChartResult<()> {
        let scale = self.pane.axis(axis).with_domain(min, max)?;
        self.pane.set_axis(axis, scale);
        Ok(())
    }

    /// Sets the hard inclusion bounds of one axis.
    pub fn set_axis_bounds(&mut self, axis: AxisId, lower: f64, upper: f64) -> ChartResult<()> {
        let scale = self.pane.axis(axis).with_bounds(lower, upper)?;
        self.pane.set_axis(axis, scale);
        Ok(())
    }

    #[must_use]
    pub fn bar_settings(&self) -> BarSettings {
        *self.pane.settings()
    }

    pub fn set_bar_settings(&mut self, settings: BarSettings) -> ChartResult<()> {
        self.pane.set_settings(settings)
    }

    #[must_use]
    pub fn range_options(&self) -> RangeOptions {
        self.range_options
    }

    pub fn set_range_options(&mut self, options: RangeOptions) {
        self.range_options = options;
    }

    #[must_use]
    pub fn render_style(&self) -> &BarRenderStyle {
        &self.style
    }

    pub fn set_render_style(&mut self, style: BarRenderStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Builds the frame for the current pane state without rendering it.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        build_bar_render_frame(&self.pane, self.viewport, &self.style)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
