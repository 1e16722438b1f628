use chrono::{TimeZone, Utc};
use range_slider::core::{
    CalendarUnit, DAY_MS, Domain, DomainKind, RangePoint, StepSpec, build_range,
};

fn utc_ms(year: i32, month: u32, day: u32) -> f64 {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid date")
        .timestamp_millis() as f64
}

fn date_domain(min: f64, max: f64) -> Domain {
    Domain::new(min, max, DomainKind::Date).expect("valid domain")
}

#[test]
fn monthly_walk_pops_overshooting_boundary_into_effective_max() {
    let domain = date_domain(utc_ms(2024, 1, 1), utc_ms(2024, 4, 15));
    let build =
        build_range(domain, StepSpec::Calendar(CalendarUnit::Monthly)).expect("monthly range");

    assert_eq!(build.effective_max, utc_ms(2024, 4, 1));

    let values: Vec<f64> = build.table.entries().iter().map(|e| e.value).collect();
    assert_eq!(
        values,
        vec![
            utc_ms(2024, 1, 1),
            utc_ms(2024, 2, 1),
            utc_ms(2024, 3, 1),
            utc_ms(2024, 4, 1)
        ]
    );

    let percents: Vec<f64> = build.table.entries().iter().map(|e| e.percent).collect();
    assert_eq!(percents[0], 0.0);
    assert!((percents[1] - 100.0 / 3.0).abs() <= 1e-9);
    assert!((percents[2] - 200.0 / 3.0).abs() <= 1e-9);
    assert_eq!(percents[3], 100.0);
}

#[test]
fn monthly_widths_follow_month_lengths() {
    let domain = date_domain(utc_ms(2024, 1, 1), utc_ms(2024, 4, 15));
    let build =
        build_range(domain, StepSpec::Calendar(CalendarUnit::Monthly)).expect("monthly range");

    let widths: Vec<Option<f64>> = build.table.entries().iter().map(|e| e.width).collect();
    assert_eq!(
        widths,
        vec![
            Some(31.0 * DAY_MS),
            Some(29.0 * DAY_MS),
            Some(31.0 * DAY_MS),
            None
        ]
    );
}

#[test]
fn widget_range_uses_min_percent_max_keys() {
    let domain = date_domain(utc_ms(2024, 1, 1), utc_ms(2024, 4, 15));
    let build =
        build_range(domain, StepSpec::Calendar(CalendarUnit::Monthly)).expect("monthly range");
    let range = build.table.to_widget_range();

    let keys: Vec<&str> = range.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["min", "33.333333333333336%", "66.66666666666667%", "max"]
    );
    assert_eq!(
        range.get("min"),
        Some(&RangePoint::Stepped([utc_ms(2024, 1, 1), 31.0 * DAY_MS]))
    );
    assert_eq!(
        range.get("max"),
        Some(&RangePoint::Terminal([utc_ms(2024, 4, 1)]))
    );

    let json = serde_json::to_value(&range).expect("serialize range");
    assert_eq!(json["max"], serde_json::json!([utc_ms(2024, 4, 1)]));
}

#[test]
fn month_end_start_walks_with_calendar_clamping() {
    let domain = date_domain(utc_ms(2024, 1, 31), utc_ms(2024, 6, 1));
    let build =
        build_range(domain, StepSpec::Calendar(CalendarUnit::Monthly)).expect("monthly range");

    let values: Vec<f64> = build.table.entries().iter().map(|e| e.value).collect();
    assert_eq!(
        values,
        vec![
            utc_ms(2024, 1, 31),
            utc_ms(2024, 2, 29),
            utc_ms(2024, 3, 29),
            utc_ms(2024, 4, 29),
            utc_ms(2024, 5, 29)
        ]
    );
    assert_eq!(build.effective_max, utc_ms(2024, 5, 29));
}

#[test]
fn walk_landing_on_max_keeps_configured_max() {
    let domain = date_domain(utc_ms(2024, 1, 1), utc_ms(2024, 3, 1));
    let build =
        build_range(domain, StepSpec::Calendar(CalendarUnit::Monthly)).expect("monthly range");

    assert_eq!(build.effective_max, utc_ms(2024, 3, 1));
    assert_eq!(build.table.entries().len(), 3);
    assert!((build.table.entries()[1].percent - 50.0).abs() <= 1e-9);
}

#[test]
fn range_shorter_than_one_unit_uses_walked_value_as_max() {
    let domain = date_domain(utc_ms(2024, 1, 1), utc_ms(2024, 1, 20));
    let build =
        build_range(domain, StepSpec::Calendar(CalendarUnit::Monthly)).expect("monthly range");

    assert_eq!(build.effective_max, utc_ms(2024, 2, 1));
    let range = build.table.to_widget_range();
    assert_eq!(range.len(), 2);
    assert_eq!(
        range.get("min"),
        Some(&RangePoint::Stepped([utc_ms(2024, 1, 1), 31.0 * DAY_MS]))
    );
    assert_eq!(
        range.get("max"),
        Some(&RangePoint::Terminal([utc_ms(2024, 2, 1)]))
    );
}

#[test]
fn yearly_walk_from_leap_day_clamps_to_february_end() {
    let domain = date_domain(utc_ms(2020, 2, 29), utc_ms(2023, 6, 1));
    let build =
        build_range(domain, StepSpec::Calendar(CalendarUnit::Yearly)).expect("yearly range");

    let values: Vec<f64> = build.table.entries().iter().map(|e| e.value).collect();
    assert_eq!(
        values,
        vec![
            utc_ms(2020, 2, 29),
            utc_ms(2021, 2, 28),
            utc_ms(2022, 2, 28),
            utc_ms(2023, 2, 28)
        ]
    );
    assert!(build.table.is_strictly_increasing());
}

#[test]
fn fixed_daily_step_keeps_linear_table() {
    let domain = date_domain(utc_ms(2024, 1, 1), utc_ms(2024, 4, 15));
    let build = build_range(domain, StepSpec::Fixed(DAY_MS)).expect("daily range");

    assert!(!build.table.is_calendar());
    assert_eq!(build.effective_max, domain.max);
    assert_eq!(build.table.entries().len(), 2);
    assert_eq!(
        build.table.snap(utc_ms(2024, 2, 10) + 0.4 * DAY_MS, Some(DAY_MS)),
        utc_ms(2024, 2, 10)
    );
}

#[test]
fn calendar_snap_rounds_within_segment() {
    let domain = date_domain(utc_ms(2024, 1, 1), utc_ms(2024, 4, 15));
    let build =
        build_range(domain, StepSpec::Calendar(CalendarUnit::Monthly)).expect("monthly range");

    assert_eq!(build.table.snap(utc_ms(2024, 2, 10), None), utc_ms(2024, 2, 1));
    assert_eq!(build.table.snap(utc_ms(2024, 3, 20), None), utc_ms(2024, 4, 1));
    assert_eq!(build.table.snap(utc_ms(2024, 4, 14), None), utc_ms(2024, 4, 1));
}
