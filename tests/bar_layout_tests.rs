use approx::assert_abs_diff_eq;
use chart_bars::core::{
    AxisScale, BarBase, BarLayoutEngine, BarPane, BarSeries, BarSettings, BarType, MISSING, Point,
};

fn pane(settings: BarSettings) -> BarPane {
    let x = AxisScale::linear(0.0, 10.0)
        .and_then(|axis| axis.with_pixel_span(0.0, 1000.0))
        .expect("x axis");
    let y = AxisScale::linear(0.0, 100.0)
        .and_then(|axis| axis.with_pixel_span(500.0, 0.0))
        .expect("y axis");
    BarPane::new(x, y, settings).expect("pane")
}

fn fixed_width(width: f64) -> BarSettings {
    BarSettings::default().with_fixed_cluster_scale_width(width)
}

#[test]
fn clustered_bars_fill_cluster_between_gaps() {
    let mut pane = pane(fixed_width(1.0));
    for label in ["a", "b", "c"] {
        pane.add_series(BarSeries::new(label, vec![Point::new(5.0, 50.0)]));
    }
    let engine = BarLayoutEngine::new(&pane);

    let bar_width = 100.0 / 4.4;
    let cluster_gap = bar_width;
    let first = engine.layout(0, 0).expect("first bar");
    let last = engine.layout(2, 0).expect("last bar");

    assert_abs_diff_eq!(first.bar_width_px, bar_width, epsilon = 1e-9);
    assert_abs_diff_eq!(first.side_px(), 500.0 - 50.0 + cluster_gap / 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        last.side_px() + last.bar_width_px,
        500.0 + 50.0 - cluster_gap / 2.0,
        epsilon = 1e-9
    );

    let second = engine.layout(1, 0).expect("second bar");
    assert_abs_diff_eq!(
        second.side_px() - first.side_px(),
        bar_width * 1.2,
        epsilon = 1e-9
    );
}

#[test]
fn vertical_bar_rect_spans_root_to_value() {
    let mut pane = pane(fixed_width(1.0));
    pane.add_series(BarSeries::new("a", vec![Point::new(5.0, 50.0)]));
    let bar = BarLayoutEngine::new(&pane).layout(0, 0).expect("bar");

    assert!(bar.vertical);
    assert_eq!(bar.base_px, 500.0);
    assert_eq!(bar.high_px, 250.0);
    assert_eq!(bar.low_px, 500.0);

    let rect = bar.rect();
    assert_abs_diff_eq!(rect.left, 475.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.width(), 50.0, epsilon = 1e-9);
    assert_eq!((rect.top, rect.bottom), (250.0, 500.0));
}

#[test]
fn horizontal_bars_extend_along_x() {
    let settings = fixed_width(10.0).with_base(BarBase::Y);
    let mut pane = pane(settings);
    pane.add_series(BarSeries::new("h", vec![Point::new(4.0, 50.0)]));
    let bar = BarLayoutEngine::new(&pane).layout(0, 0).expect("bar");

    assert!(!bar.vertical);
    assert_abs_diff_eq!(bar.bar_width_px, 25.0, epsilon = 1e-9);
    let rect = bar.rect();
    assert_abs_diff_eq!(rect.left, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.right, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.top, 237.5, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.bottom, 262.5, epsilon = 1e-9);
}

#[test]
fn overlay_and_stack_share_one_slot() {
    for bar_type in [BarType::Overlay, BarType::Stack, BarType::PercentStack] {
        let mut pane = pane(fixed_width(1.0).with_bar_type(bar_type));
        pane.add_series(BarSeries::new("a", vec![Point::new(5.0, 20.0)]));
        pane.add_series(BarSeries::new("b", vec![Point::new(5.0, 30.0)]));
        let engine = BarLayoutEngine::new(&pane);

        let first = engine.layout(0, 0).expect("first");
        let second = engine.layout(1, 0).expect("second");
        assert_abs_diff_eq!(first.bar_width_px, 50.0, epsilon = 1e-9);
        assert_eq!(first.offset_px, second.offset_px);
    }
}

#[test]
fn stacked_bars_sit_end_to_end() {
    let mut pane = pane(fixed_width(1.0).with_bar_type(BarType::Stack));
    pane.add_series(BarSeries::new("a", vec![Point::new(5.0, 20.0)]));
    pane.add_series(BarSeries::new("b", vec![Point::new(5.0, 30.0)]));
    let engine = BarLayoutEngine::new(&pane);

    let lower = engine.layout(0, 0).expect("lower");
    let upper = engine.layout(1, 0).expect("upper");
    assert_eq!(lower.high_px, upper.low_px);
    assert_abs_diff_eq!(upper.high_px, 250.0, epsilon = 1e-9);
}

#[test]
fn invalid_points_have_no_geometry() {
    let mut pane = pane(fixed_width(1.0).with_bar_type(BarType::ClusterHiLow));
    pane.add_series(BarSeries::new(
        "a",
        vec![
            Point::with_low(1.0, 5.0, f64::NAN),
            Point::new(2.0, MISSING),
            Point::new(3.0, 5.0),
        ],
    ));
    let engine = BarLayoutEngine::new(&pane);

    assert!(engine.layout(0, 0).is_none());
    assert!(engine.layout(0, 1).is_none());
    let drawn: Vec<usize> = engine.layout_series(0).iter().map(|bar| bar.index).collect();
    assert_eq!(drawn, vec![2]);
}

#[test]
fn hidden_series_free_their_cluster_slot() {
    let mut pane = pane(fixed_width(1.0));
    pane.add_series(BarSeries::new("a", vec![Point::new(5.0, 50.0)]));
    let hidden = pane.add_series(BarSeries::new("b", vec![Point::new(5.0, 50.0)]));
    pane.series_mut(hidden).expect("series").set_visible(false);
    let engine = BarLayoutEngine::new(&pane);

    assert!(engine.layout(hidden, 0).is_none());
    let only = engine.layout(0, 0).expect("visible bar");
    assert_abs_diff_eq!(only.bar_width_px, 50.0, epsilon = 1e-9);
}

#[test]
fn auto_cluster_width_on_log_base_axis_uses_log_spacing() {
    let x = AxisScale::log10(1.0, 1000.0)
        .and_then(|axis| axis.with_pixel_span(0.0, 300.0))
        .expect("x axis");
    let y = AxisScale::linear(0.0, 100.0)
        .and_then(|axis| axis.with_pixel_span(500.0, 0.0))
        .expect("y axis");
    let mut pane = BarPane::new(x, y, BarSettings::default()).expect("pane");
    pane.add_series(BarSeries::new(
        "a",
        vec![Point::new(10.0, 5.0), Point::new(100.0, 5.0)],
    ));

    assert_abs_diff_eq!(pane.cluster_scale_width(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(pane.cluster_width_px(), 100.0, epsilon = 1e-9);
}

#[test]
fn log_axes_skip_bars_outside_domain_but_keep_zero_roots() {
    let x = AxisScale::log10(1.0, 1000.0)
        .and_then(|axis| axis.with_pixel_span(0.0, 300.0))
        .expect("x axis");
    let y = AxisScale::log10(1.0, 1000.0)
        .and_then(|axis| axis.with_pixel_span(500.0, 0.0))
        .expect("y axis");
    let mut pane = BarPane::new(x, y, fixed_width(0.5)).expect("pane");
    pane.add_series(BarSeries::new(
        "log",
        vec![
            Point::new(-5.0, 50.0),
            Point::new(10.0, -3.0),
            Point::new(10.0, 100.0),
        ],
    ));
    let engine = BarLayoutEngine::new(&pane);

    assert!(engine.layout(0, 0).is_none());
    assert!(engine.layout(0, 1).is_none());

    let drawn = engine.layout(0, 2).expect("positive bar");
    assert_abs_diff_eq!(drawn.base_px, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(drawn.low_px, 500.0, epsilon = 1e-9);
    assert_abs_diff_eq!(drawn.high_px, 500.0 / 3.0, epsilon = 1e-9);

    let indices: Vec<usize> = engine.layout_series(0).iter().map(|bar| bar.index).collect();
    assert_eq!(indices, vec![2]);
}

#[test]
fn bars_without_finite_pixels_are_skipped() {
    let mut pane = pane(fixed_width(1.0));
    pane.add_series(BarSeries::new(
        "huge",
        vec![Point::new(1.0, 5.0), Point::new(2.0, 1e308)],
    ));
    let engine = BarLayoutEngine::new(&pane);

    assert!(engine.layout(0, 0).is_some());
    assert!(engine.layout(0, 1).is_none());
    assert_eq!(engine.layout_series(0).len(), 1);
}

#[test]
fn error_bar_is_centered_on_bar_end() {
    let mut pane = pane(fixed_width(1.0));
    let series = BarSeries::with_error_values("a", vec![Point::new(5.0, 50.0)], vec![10.0])
        .expect("series");
    pane.add_series(series);
    let whisker = BarLayoutEngine::new(&pane).error_bar(0, 0).expect("whisker");

    assert_abs_diff_eq!(whisker.center_px, 500.0, epsilon = 1e-9);
    assert_abs_diff_eq!(whisker.low_px, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(whisker.high_px, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(whisker.cap_width_px, 25.0, epsilon = 1e-9);
}

#[test]
fn series_without_error_values_has_no_error_bar() {
    let mut pane = pane(fixed_width(1.0));
    pane.add_series(BarSeries::new("a", vec![Point::new(5.0, 50.0)]));
    assert!(BarLayoutEngine::new(&pane).error_bar(0, 0).is_none());
}

#[test]
fn find_closest_prefers_containing_bar_and_lowest_index_on_ties() {
    let mut pane = pane(fixed_width(1.0));
    pane.add_series(BarSeries::new(
        "a",
        vec![Point::new(2.0, 50.0), Point::new(4.0, 50.0)],
    ));
    let engine = BarLayoutEngine::new(&pane);

    let inside = engine.find_closest(0, 200.0, 400.0, 10.0).expect("inside");
    assert_eq!(inside.index, 0);
    assert_eq!(inside.distance, 0.0);

    let tie = engine.find_closest(0, 300.0, 300.0, 100.0).expect("tie");
    assert_eq!(tie.index, 0);
    assert_abs_diff_eq!(tie.distance, 75.0, epsilon = 1e-9);

    let right = engine.find_closest(0, 430.0, 300.0, 100.0).expect("right");
    assert_eq!(right.index, 1);

    assert!(engine.find_closest(0, 300.0, 300.0, 50.0).is_none());
    assert!(engine.find_closest(0, f64::NAN, 300.0, 50.0).is_none());
}
