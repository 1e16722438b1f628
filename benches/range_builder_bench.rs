use criterion::{Criterion, criterion_group, criterion_main};
use range_slider::RangeSlider;
use range_slider::api::RangeSliderConfig;
use range_slider::core::{
    CalendarUnit, Domain, DomainKind, NumberFormat, NumberFormatConfig, StepSetting, StepSpec,
    build_range,
};
use range_slider::field::{HeadlessField, HeadlessFieldHost};
use range_slider::widget::HeadlessWidget;
use std::hint::black_box;

// 1970-01-01 .. 2070-01-01
const CENTURY_MS: (f64, f64) = (0.0, 3_155_760_000_000.0);

fn bench_monthly_range_century(c: &mut Criterion) {
    let domain = Domain::new(CENTURY_MS.0, CENTURY_MS.1, DomainKind::Date).expect("valid domain");

    c.bench_function("monthly_range_century", |b| {
        b.iter(|| {
            let _ = build_range(
                black_box(domain),
                black_box(StepSpec::Calendar(CalendarUnit::Monthly)),
            )
            .expect("range should build");
        })
    });
}

fn bench_number_format_round_trip(c: &mut Criterion) {
    let format = NumberFormat::from_config(Some(&NumberFormatConfig {
        decimals: Some(2),
        thousand: Some(".".to_owned()),
        suffix: Some(" €".to_owned()),
        ..NumberFormatConfig::default()
    }))
    .expect("valid format");

    c.bench_function("number_format_round_trip", |b| {
        b.iter(|| {
            let text = format.to(black_box(1_234_567.891));
            let _ = format.from(&text).expect("readable");
        })
    });
}

fn bench_field_sync_round_trip(c: &mut Criterion) {
    let field = HeadlessField::new("P1_DATE", "");
    let host = HeadlessFieldHost::new().with_field(field.clone());
    let config = RangeSliderConfig::temporal("P1_SLIDER", "2000-01-01", "2030-01-01")
        .with_step(StepSetting::Tag("monthly".to_owned()))
        .with_ret_items("P1_DATE");
    let mut slider = RangeSlider::<HeadlessWidget>::new(&config, &host).expect("slider init");
    let inputs = ["2010-05-17", "2024-11-02"];

    c.bench_function("field_sync_round_trip", |b| {
        let mut index = 0;
        b.iter(|| {
            field.edit(black_box(inputs[index % 2]));
            slider.on_field_change(0);
            index += 1;
        })
    });
}

criterion_group!(
    benches,
    bench_monthly_range_century,
    bench_number_format_round_trip,
    bench_field_sync_round_trip
);
criterion_main!(benches);
