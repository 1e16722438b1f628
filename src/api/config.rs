use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_DATE_FORMAT, Domain, DomainKind, FormatAdapter, HandleCount, NumberFormat,
    NumberFormatConfig, StepSetting, StepSpec, TemporalConverter,
};
use crate::error::{SliderError, SliderResult};
use crate::model::{InitialValue, ValueLiteral};
use crate::widget::{Direction, Orientation};

/// Slider configuration, consumed once when the slider is created.
///
/// Field names follow the host's camelCase JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSliderConfig {
    pub item_name: String,
    pub minimum_value: ValueLiteral,
    pub maximum_value: ValueLiteral,
    #[serde(rename = "type")]
    pub kind: DomainKind,
    #[serde(default = "default_handles")]
    pub handles: HandleCount,
    #[serde(default)]
    pub value: Option<InitialValue>,
    #[serde(default)]
    pub step: Option<StepSetting>,
    /// Maximum distance between two handles (numeric sliders only).
    #[serde(default)]
    pub range_limit: Option<f64>,
    /// Minimum distance between two handles.
    #[serde(default)]
    pub margin: Option<f64>,
    #[serde(default)]
    pub tooltip: bool,
    /// Comma-separated field names, ordered by handle index.
    #[serde(default)]
    pub ret_items: Option<String>,
    #[serde(default)]
    pub connect_bar: bool,
    #[serde(default)]
    pub range_color: Option<String>,
    /// Lets the handles pass each other; disables margin and limit.
    #[serde(default)]
    pub flip_range: bool,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub number_format: Option<NumberFormatConfig>,
    /// `strftime` mask for temporal sliders.
    #[serde(default)]
    pub date_format: Option<String>,
    #[serde(default = "default_true")]
    pub keyboard_support: bool,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub show_ticks: bool,
    /// Only draw ticks at positions the handles can step to.
    #[serde(default = "default_true")]
    pub ticks_stepped: bool,
    #[serde(default)]
    pub tick_percentages: Option<Vec<f64>>,
    #[serde(default)]
    pub tick_values: Option<Vec<f64>>,
    /// Tick count used when neither percentages nor values are given.
    #[serde(default)]
    pub ticks: Option<u32>,
    #[serde(default = "default_true")]
    pub click_on_ticks: bool,
}

fn default_handles() -> HandleCount {
    HandleCount::One
}

fn default_true() -> bool {
    true
}

/// Derived structures computed from a [`RangeSliderConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Domain as configured, before calendar stepping adjusts the max.
    pub domain: Domain,
    pub step: StepSpec,
    pub format: FormatAdapter,
}

impl RangeSliderConfig {
    /// Creates a minimal single-handle config.
    #[must_use]
    pub fn new(
        item_name: impl Into<String>,
        kind: DomainKind,
        minimum_value: ValueLiteral,
        maximum_value: ValueLiteral,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            minimum_value,
            maximum_value,
            kind,
            handles: default_handles(),
            value: None,
            step: None,
            range_limit: None,
            margin: None,
            tooltip: false,
            ret_items: None,
            connect_bar: false,
            range_color: None,
            flip_range: false,
            orientation: Orientation::default(),
            number_format: None,
            date_format: None,
            keyboard_support: true,
            direction: Direction::default(),
            show_ticks: false,
            ticks_stepped: true,
            tick_percentages: None,
            tick_values: None,
            ticks: None,
            click_on_ticks: true,
        }
    }

    /// Numeric slider over `[min, max]`.
    #[must_use]
    pub fn numeric(item_name: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(
            item_name,
            DomainKind::Number,
            ValueLiteral::Number(min),
            ValueLiteral::Number(max),
        )
    }

    /// Date slider; bounds are parsed like any other date input.
    #[must_use]
    pub fn temporal(item_name: impl Into<String>, min: &str, max: &str) -> Self {
        Self::new(
            item_name,
            DomainKind::Date,
            ValueLiteral::Text(min.to_owned()),
            ValueLiteral::Text(max.to_owned()),
        )
    }

    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidConfig(format!("failed to parse slider config: {e}")))
    }

    #[must_use]
    pub fn with_handles(mut self, handles: HandleCount) -> Self {
        self.handles = handles;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: InitialValue) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: StepSetting) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    #[must_use]
    pub fn with_range_limit(mut self, range_limit: f64) -> Self {
        self.range_limit = Some(range_limit);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: bool) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Binds fields by name, comma-separated in handle order.
    #[must_use]
    pub fn with_ret_items(mut self, ret_items: impl Into<String>) -> Self {
        self.ret_items = Some(ret_items.into());
        self
    }

    #[must_use]
    pub fn with_connect_bar(mut self, color: Option<String>) -> Self {
        self.connect_bar = true;
        self.range_color = color;
        self
    }

    #[must_use]
    pub fn with_flip_range(mut self, flip_range: bool) -> Self {
        self.flip_range = flip_range;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_number_format(mut self, number_format: NumberFormatConfig) -> Self {
        self.number_format = Some(number_format);
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }

    #[must_use]
    pub fn with_keyboard_support(mut self, keyboard_support: bool) -> Self {
        self.keyboard_support = keyboard_support;
        self
    }

    /// Shows ticks; clicking them sets values unless disabled afterwards.
    #[must_use]
    pub fn with_ticks(mut self, count: Option<u32>) -> Self {
        self.show_ticks = true;
        self.ticks = count;
        self
    }

    #[must_use]
    pub fn with_tick_percentages(mut self, percentages: Vec<f64>) -> Self {
        self.tick_percentages = Some(percentages);
        self
    }

    #[must_use]
    pub fn with_tick_values(mut self, values: Vec<f64>) -> Self {
        self.tick_values = Some(values);
        self
    }

    #[must_use]
    pub fn with_ticks_stepped(mut self, ticks_stepped: bool) -> Self {
        self.ticks_stepped = ticks_stepped;
        self
    }

    #[must_use]
    pub fn with_click_on_ticks(mut self, click_on_ticks: bool) -> Self {
        self.click_on_ticks = click_on_ticks;
        self
    }

    /// Field names to bind with their handle index.
    ///
    /// Names are trimmed and truncated to the handle count; an empty slot
    /// leaves that handle unbound.
    #[must_use]
    pub fn bound_field_names(&self) -> Vec<(usize, &str)> {
        self.ret_items
            .as_deref()
            .map(|items| {
                items
                    .split(',')
                    .map(str::trim)
                    .take(self.handles.get())
                    .enumerate()
                    .filter(|(_, name)| !name.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Builds the domain, step and format adapter.
    pub fn resolve(&self) -> SliderResult<ResolvedConfig> {
        match self.kind {
            DomainKind::Number => {
                let format = NumberFormat::from_config(self.number_format.as_ref())?;
                let min = numeric_bound(&self.minimum_value)?;
                let max = numeric_bound(&self.maximum_value)?;
                Ok(ResolvedConfig {
                    domain: Domain::new(min, max, DomainKind::Number)?,
                    step: StepSpec::resolve(self.step.as_ref(), DomainKind::Number)?,
                    format: FormatAdapter::Numeric(format),
                })
            }
            DomainKind::Date => {
                let converter = TemporalConverter::new(
                    self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT),
                )?;
                let min = temporal_bound(&self.minimum_value, &converter)?;
                let max = temporal_bound(&self.maximum_value, &converter)?;
                Ok(ResolvedConfig {
                    domain: Domain::new(min as f64, max as f64, DomainKind::Date)?,
                    step: StepSpec::resolve(self.step.as_ref(), DomainKind::Date)?,
                    format: FormatAdapter::Temporal(converter.with_fallback(min)),
                })
            }
        }
    }
}

fn numeric_bound(literal: &ValueLiteral) -> SliderResult<f64> {
    match literal {
        ValueLiteral::Number(value) => Ok(*value),
        ValueLiteral::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| SliderError::InvalidBound(text.clone())),
    }
}

fn temporal_bound(literal: &ValueLiteral, converter: &TemporalConverter) -> SliderResult<i64> {
    match literal {
        ValueLiteral::Number(value) if value.is_finite() => Ok(value.round() as i64),
        ValueLiteral::Number(value) => Err(SliderError::InvalidBound(value.to_string())),
        ValueLiteral::Text(text) => converter
            .parse(text)
            .ok_or_else(|| SliderError::InvalidBound(text.clone())),
    }
}
