use tracing::debug;

use crate::core::{BarLayoutEngine, BarPane, ErrorBarGeometry, Viewport};
use crate::error::ChartResult;
use crate::render::{BarPrimitive, RenderFrame, WhiskerPart, WhiskerPrimitive};

use super::BarRenderStyle;

/// Materializes bars and error-bar whiskers of every visible series.
///
/// Series are emitted in list order so overlaid bars paint later series on
/// top.
pub(super) fn build_bar_render_frame(
    pane: &BarPane,
    viewport: Viewport,
    style: &BarRenderStyle,
) -> ChartResult<RenderFrame> {
    let engine = BarLayoutEngine::new(pane);
    let mut frame = RenderFrame::new(viewport);

    for (position, series) in pane.series_list().iter().enumerate() {
        if !series.is_visible() {
            continue;
        }
        let fill = style.series_color(position);
        for bar in engine.layout_series(position) {
            let mut primitive = BarPrimitive::new(position, bar.index, bar.rect(), fill);
            if series.is_bar_highlighted(bar.index) {
                primitive = primitive.highlighted(style.highlight_color);
            }
            if let Some(border) = style.border_color {
                primitive = primitive.with_border(border);
            }
            frame.bars.push(primitive);

            if let Some(error_bar) = engine.error_bar(position, bar.index) {
                push_whisker(&mut frame, position, &error_bar, style);
            }
        }
    }

    debug!(
        bars = frame.bars.len(),
        whiskers = frame.whiskers.len(),
        highlighted = frame.highlighted_count(),
        "built bar render frame"
    );
    frame.validate()?;
    Ok(frame)
}

fn push_whisker(
    frame: &mut RenderFrame,
    position: usize,
    error_bar: &ErrorBarGeometry,
    style: &BarRenderStyle,
) {
    let half_cap = error_bar.cap_width_px / 2.0;
    let center = error_bar.center_px;
    // (along base axis, along value axis) pairs, flipped for horizontal bars.
    let point = |base: f64, value: f64| {
        if error_bar.vertical {
            (base, value)
        } else {
            (value, base)
        }
    };

    let segments = [
        (
            WhiskerPart::Stem,
            point(center, error_bar.low_px),
            point(center, error_bar.high_px),
        ),
        (
            WhiskerPart::LowCap,
            point(center - half_cap, error_bar.low_px),
            point(center + half_cap, error_bar.low_px),
        ),
        (
            WhiskerPart::HighCap,
            point(center - half_cap, error_bar.high_px),
            point(center + half_cap, error_bar.high_px),
        ),
    ];
    frame
        .whiskers
        .extend(segments.into_iter().map(|(part, from, to)| WhiskerPrimitive {
            series: position,
            index: error_bar.index,
            part,
            from,
            to,
            stroke_width: style.error_bar_stroke_width,
            color: style.error_bar_color,
        }));
}
