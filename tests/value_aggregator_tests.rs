use approx::assert_abs_diff_eq;
use chart_bars::core::{
    AxisScale, BarBase, BarPane, BarSeries, BarSettings, BarType, BarValues, MISSING, Point,
    ValueAggregator,
};

fn pane_with(settings: BarSettings, series_y: &[&[f64]]) -> BarPane {
    let x = AxisScale::linear(0.0, 10.0)
        .and_then(|axis| axis.with_pixel_span(0.0, 1000.0))
        .expect("x axis");
    let y = AxisScale::linear(-100.0, 100.0)
        .and_then(|axis| axis.with_pixel_span(500.0, 0.0))
        .expect("y axis");
    let mut pane = BarPane::new(x, y, settings).expect("pane");
    for (position, ys) in series_y.iter().enumerate() {
        let points = ys
            .iter()
            .enumerate()
            .map(|(index, y)| Point::new(index as f64, *y))
            .collect();
        pane.add_series(BarSeries::new(format!("s{position}"), points));
    }
    pane
}

fn stack_settings() -> BarSettings {
    BarSettings::default().with_bar_type(BarType::Stack)
}

#[test]
fn stack_accumulates_previous_series() {
    let pane = pane_with(stack_settings(), &[&[2.0], &[3.0], &[1.0]]);
    let aggregator = ValueAggregator::new(&pane);

    assert_eq!(
        aggregator.resolve(2, 0),
        Some(BarValues {
            base: 0.0,
            low: 5.0,
            high: 6.0
        })
    );
    let middle = aggregator.resolve(1, 0).expect("middle");
    assert_eq!((middle.low, middle.high), (2.0, 5.0));
}

#[test]
fn negative_values_stack_separately() {
    let pane = pane_with(stack_settings(), &[&[2.0], &[-3.0], &[4.0], &[-1.0]]);
    let aggregator = ValueAggregator::new(&pane);

    let negative = aggregator.resolve(1, 0).expect("negative");
    assert_eq!((negative.low, negative.high), (-3.0, 0.0));
    let positive = aggregator.resolve(2, 0).expect("positive");
    assert_eq!((positive.low, positive.high), (2.0, 6.0));
    let second_negative = aggregator.resolve(3, 0).expect("second negative");
    assert_eq!((second_negative.low, second_negative.high), (-4.0, -3.0));
}

#[test]
fn percent_stack_normalizes_to_total_magnitude() {
    let settings = BarSettings::default().with_bar_type(BarType::PercentStack);
    let pane = pane_with(settings, &[&[2.0], &[3.0], &[5.0]]);
    let aggregator = ValueAggregator::new(&pane);

    let middle = aggregator.resolve(1, 0).expect("middle");
    assert_abs_diff_eq!(middle.low, 20.0, epsilon = 1e-9);
    assert_abs_diff_eq!(middle.high, 50.0, epsilon = 1e-9);
    let top = aggregator.resolve(2, 0).expect("top");
    assert_abs_diff_eq!(top.high, 100.0, epsilon = 1e-9);
}

#[test]
fn percent_stack_with_zero_total_collapses_to_zero() {
    let settings = BarSettings::default().with_bar_type(BarType::PercentStack);
    let pane = pane_with(settings, &[&[0.0], &[0.0]]);
    let values = ValueAggregator::new(&pane).resolve(1, 0).expect("values");
    assert_eq!((values.low, values.high), (0.0, 0.0));
}

#[test]
fn missing_value_only_affects_its_own_index() {
    let pane = pane_with(
        stack_settings(),
        &[&[4.0, 1.0], &[2.0, MISSING], &[3.0, 2.0]],
    );
    let aggregator = ValueAggregator::new(&pane);

    assert_eq!(aggregator.resolve(1, 1), None);
    let top = aggregator.resolve(2, 1).expect("skips missing");
    assert_eq!((top.low, top.high), (1.0, 3.0));

    let untouched = aggregator.resolve(2, 0).expect("index 0");
    assert_eq!((untouched.low, untouched.high), (6.0, 9.0));
    assert!(aggregator.resolve(1, 0).is_some());
}

#[test]
fn clustered_bars_root_at_zero_or_low_value() {
    let mut pane = pane_with(BarSettings::default(), &[]);
    pane.add_series(BarSeries::new(
        "hi-lo",
        vec![Point::with_low(1.0, 5.0, 2.0), Point::new(2.0, 7.0)],
    ));
    let aggregator = ValueAggregator::new(&pane);

    let with_low = aggregator.resolve(0, 0).expect("with low");
    assert_eq!((with_low.base, with_low.low, with_low.high), (1.0, 2.0, 5.0));
    let rooted = aggregator.resolve(0, 1).expect("rooted");
    assert_eq!(rooted.low, 0.0);
}

#[test]
fn hidden_or_unknown_series_resolve_to_none() {
    let mut pane = pane_with(stack_settings(), &[&[1.0], &[2.0], &[3.0]]);
    pane.series_mut(0).expect("series").set_visible(false);
    let aggregator = ValueAggregator::new(&pane);

    assert_eq!(aggregator.resolve(0, 0), None);
    assert_eq!(aggregator.resolve(7, 0), None);
    assert_eq!(aggregator.resolve(1, 9), None);
    let top = aggregator.resolve(2, 0).expect("top");
    assert_eq!((top.low, top.high), (2.0, 5.0));
}

#[test]
fn horizontal_bars_take_base_from_y() {
    let settings = BarSettings::default().with_base(BarBase::Y);
    let mut pane = pane_with(settings, &[]);
    pane.add_series(BarSeries::new("h", vec![Point::new(7.0, 3.0)]));

    let values = ValueAggregator::new(&pane).resolve(0, 0).expect("values");
    assert_eq!((values.base, values.low, values.high), (3.0, 0.0, 7.0));
}

#[test]
fn invalid_base_value_is_not_resolved() {
    let mut pane = pane_with(BarSettings::default(), &[]);
    pane.add_series(BarSeries::new(
        "bad",
        vec![Point::new(f64::NAN, 1.0), Point::new(1.0, f64::INFINITY)],
    ));
    let aggregator = ValueAggregator::new(&pane);
    assert_eq!(aggregator.resolve(0, 0), None);
    assert_eq!(aggregator.resolve(0, 1), None);
}
