use range_slider::RangeSlider;
use range_slider::api::RangeSliderConfig;
use range_slider::core::{DomainKind, HandleCount, StepSpec};
use range_slider::field::{HeadlessField, HeadlessFieldHost};
use range_slider::widget::{Behaviour, ConnectMode, HeadlessWidget, TickMode, TickValues};

const DATE_CONFIG: &str = r##"{
    "itemName": "P1_PERIOD",
    "minimumValue": "2024-01-01",
    "maximumValue": "2024-04-15",
    "type": "date",
    "handles": 2,
    "step": "monthly",
    "retItems": "P1_FROM,P1_TO",
    "connectBar": true,
    "rangeColor": "#0572ce",
    "showTicks": true,
    "tickValues": [1704067200000, 1711929600000]
}"##;

fn create(config: &RangeSliderConfig) -> RangeSlider<HeadlessWidget> {
    RangeSlider::new(config, &HeadlessFieldHost::new()).expect("slider")
}

fn date_slider() -> RangeSlider<HeadlessWidget> {
    let config = RangeSliderConfig::from_json_str(DATE_CONFIG).expect("config");
    let host = HeadlessFieldHost::new()
        .with_field(HeadlessField::new("P1_FROM", ""))
        .with_field(HeadlessField::new("P1_TO", ""));
    RangeSlider::new(&config, &host).expect("slider")
}

#[test]
fn host_json_payload_deserializes_with_defaults() {
    let config = RangeSliderConfig::from_json_str(DATE_CONFIG).expect("config");

    assert_eq!(config.kind, DomainKind::Date);
    assert_eq!(config.handles, HandleCount::Two);
    assert!(config.keyboard_support);
    assert!(config.ticks_stepped);
    assert!(config.click_on_ticks);
    assert!(!config.flip_range);
    assert_eq!(config.bound_field_names(), vec![(0, "P1_FROM"), (1, "P1_TO")]);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = RangeSliderConfig::from_json_str("{\"itemName\": 1}").expect_err("must fail");
    assert!(format!("{err}").contains("failed to parse slider config"));
}

#[test]
fn unknown_date_step_is_rejected() {
    let json = r#"{"itemName":"P1","minimumValue":"2024-01-01","maximumValue":"2024-02-01","type":"date","step":"hourly"}"#;
    let config = RangeSliderConfig::from_json_str(json).expect("config");

    let err = config.resolve().expect_err("unknown tag");
    assert!(format!("{err}").contains("hourly"));
}

#[test]
fn numeric_string_step_resolves_to_fixed() {
    let json = r#"{"itemName":"P1","minimumValue":"0","maximumValue":"50","type":"number","step":"2.5"}"#;
    let config = RangeSliderConfig::from_json_str(json).expect("config");

    assert_eq!(config.resolve().expect("resolved").step, StepSpec::Fixed(2.5));
}

#[test]
fn widget_config_reflects_handles_and_connect_bar() {
    let slider = date_slider();
    let widget = slider.widget_config();

    assert_eq!(widget.connect, ConnectMode::Between);
    assert_eq!(widget.connect_color.as_deref(), Some("#0572ce"));
    assert_eq!(widget.limit, None);
    assert_eq!(widget.behaviour, Behaviour::TapDrag);
    assert_eq!(widget.start.len(), 2);

    let pips = widget.pips.as_ref().expect("ticks enabled");
    assert_eq!(pips.mode, TickMode::Values);
    assert_eq!(
        pips.values,
        Some(TickValues::List(vec![1_704_067_200_000.0, 1_711_929_600_000.0]))
    );
}

#[test]
fn single_handle_connects_lower_and_numeric_limit_applies_to_two() {
    let single = create(
        &RangeSliderConfig::numeric("P1", 0.0, 100.0)
            .with_connect_bar(None)
            .with_tooltip(true),
    );
    assert_eq!(single.widget_config().connect, ConnectMode::Lower);
    assert_eq!(single.widget_config().tooltips, 1);

    let double = create(
        &RangeSliderConfig::numeric("P1", 0.0, 100.0)
            .with_handles(HandleCount::Two)
            .with_range_limit(40.0)
            .with_tooltip(true),
    );
    assert_eq!(double.widget_config().limit, Some(40.0));
    assert_eq!(double.widget_config().tooltips, 2);
    assert_eq!(double.widget_config().connect, ConnectMode::None);
}

#[test]
fn flip_range_drops_margin_and_limit() {
    let slider = create(
        &RangeSliderConfig::numeric("P1", 0.0, 100.0)
            .with_handles(HandleCount::Two)
            .with_margin(5.0)
            .with_range_limit(40.0)
            .with_flip_range(true),
    );
    let widget = slider.widget_config();

    assert_eq!(widget.margin, None);
    assert_eq!(widget.limit, None);
    assert_eq!(widget.behaviour, Behaviour::UnconstrainedTap);
}

#[test]
fn tick_mode_prefers_percentages_then_values_then_count() {
    let by_percent = create(
        &RangeSliderConfig::numeric("P1", 0.0, 100.0)
            .with_ticks(Some(4))
            .with_tick_percentages(vec![0.0, 50.0, 100.0])
            .with_tick_values(vec![10.0]),
    );
    let pips = by_percent.widget_config().pips.as_ref().expect("pips");
    assert_eq!(pips.mode, TickMode::Positions);
    assert_eq!(pips.density, 2);

    let by_count = create(&RangeSliderConfig::numeric("P1", 0.0, 100.0).with_ticks(Some(4)));
    let pips = by_count.widget_config().pips.as_ref().expect("pips");
    assert_eq!(pips.mode, TickMode::Count);
    assert_eq!(pips.values, Some(TickValues::Count(4)));

    let hidden = create(&RangeSliderConfig::numeric("P1", 0.0, 100.0));
    assert!(hidden.widget_config().pips.is_none());
}

#[test]
fn widget_config_json_contract() {
    let slider = date_slider();
    let json = slider.widget_config().to_json_pretty().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");

    let range = value["range"].as_object().expect("range object");
    assert_eq!(range.len(), 4);
    assert_eq!(range["min"][0], 1_704_067_200_000.0);
    assert_eq!(range["max"], serde_json::json!([1_711_929_600_000.0]));
    assert_eq!(value["connect"], "between");
    assert_eq!(value["behaviour"], "tap-drag");
    assert!(value.get("format").is_none());
}
