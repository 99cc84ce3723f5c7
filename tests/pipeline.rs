use plotter::{BoundPolicy, ChartConfig, PlotError, SelectError, Series, chart};

const SAMPLE: &str = r#"{"01-01-2022": 10, "02-01-2022": 0, "03-01-2022": 100000}"#;

fn plot(json: &str, start: &str, end: &str, cfg: &ChartConfig) -> Result<String, PlotError> {
    let series = Series::from_json(json)?;
    let sel = series.select(Some(start), Some(end), BoundPolicy::Strict)?;
    let mut buf = Vec::new();
    chart(&mut buf, sel.labels, sel.values, cfg)?;
    Ok(String::from_utf8(buf).expect("utf-8 output"))
}

#[test]
fn end_to_end_three_rows() {
    let out = plot(SAMPLE, "01-01-2022", "03-01-2022", &ChartConfig::default()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "01-01-2022: ▏ 10 ");
    assert_eq!(lines[1], "02-01-2022: ▏ 0 ");
    assert_eq!(lines[2], format!("03-01-2022: {} 100.0 K", "▇".repeat(50)));
}

#[test]
fn rerun_is_byte_identical() {
    let cfg = ChartConfig::default();
    let a = plot(SAMPLE, "01-01-2022", "03-01-2022", &cfg).unwrap();
    let b = plot(SAMPLE, "01-01-2022", "03-01-2022", &cfg).unwrap();
    assert_eq!(a, b);
}

#[test]
fn window_is_inclusive() {
    let json = r#"{"a": 1, "b": 2, "c": 3, "d": 4}"#;
    let cfg = ChartConfig::builder().width(6).build().unwrap();
    let out = plot(json, "b", "c", &cfg).unwrap();
    // two ticks per unit
    assert_eq!(out, "b: ▇▇▇▇ 2 \nc: ▇▇▇▇▇▇ 3 \n");
}

#[test]
fn inverted_dates_fail_before_rendering() {
    let err = plot(SAMPLE, "03-01-2022", "01-01-2022", &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, PlotError::Select(SelectError::InvertedRange { .. })));
    assert!(err.hint().is_some());
}

#[test]
fn unknown_dates_fail_closed() {
    let err = plot(SAMPLE, "31-12-2021", "03-01-2022", &ChartConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        PlotError::Select(SelectError::InvalidStartDate(ref s)) if s == "31-12-2021"
    ));
}

#[test]
fn large_values_abbreviate() {
    let json = r#"{"q1": 19561100, "q2": 125000, "q3": -125000}"#;
    let out = plot(json, "q1", "q3", &ChartConfig::default()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].ends_with("▇ 19.561 M"));
    assert!(lines[1].ends_with(": ▏ 125.0 K"));
    assert!(lines[2].ends_with(" -125.0 K"));
}
