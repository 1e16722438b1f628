use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{
    CoordinateTable, Domain, DomainKind, FormatAdapter, HandleCount, Handles, RangeBuild,
    StepSpec, build_range,
};
use crate::error::{SliderError, SliderResult};
use crate::field::{BoundField, FieldHost};
use crate::model::{SliderInput, ValueModel};
use crate::widget::{
    Behaviour, ConnectMode, PipsConfig, SliderWidget, TickMode, TickValues, WidgetConfig,
};

use super::config::RangeSliderConfig;
use super::events::ChangeObserver;
use super::ticks::TickSettings;

/// Range slider component: owns the widget, the value model and the field
/// bindings, and exposes the host-facing API.
pub struct RangeSlider<W: SliderWidget> {
    pub(super) component_id: String,
    pub(super) widget: W,
    pub(super) widget_config: WidgetConfig,
    pub(super) model: ValueModel,
    pub(super) range: RangeBuild,
    pub(super) bindings: SmallVec<[Option<Box<dyn BoundField>>; 2]>,
    pub(super) observers: Vec<Box<dyn ChangeObserver>>,
    pub(super) ticks: TickSettings,
}

impl<W: SliderWidget> RangeSlider<W> {
    /// Creates the slider and binds the configured fields.
    pub fn new(config: &RangeSliderConfig, host: &dyn FieldHost) -> SliderResult<Self> {
        Self::with_observers(config, host, Vec::new())
    }

    /// Like [`RangeSlider::new`], with observers registered before any field
    /// is bound so that changes caused by binding are reported too.
    pub fn with_observers(
        config: &RangeSliderConfig,
        host: &dyn FieldHost,
        observers: Vec<Box<dyn ChangeObserver>>,
    ) -> SliderResult<Self> {
        let resolved = config.resolve()?;
        let range = build_range(resolved.domain, resolved.step)?;
        let domain = resolved.domain.with_max(range.effective_max)?;

        let start = ValueModel::initial_value(
            config.value.as_ref(),
            domain,
            config.handles,
            &resolved.format,
        )
        .map(|&value| value.clamp(domain.min, domain.max));
        let widget_config =
            build_widget_config(config, &range, resolved.step, &resolved.format, &start);
        let widget = W::create(&widget_config)?;

        debug!(
            component = config.item_name.as_str(),
            kind = ?domain.kind,
            min = domain.min,
            effective_max = domain.max,
            handles = start.count(),
            "range slider created"
        );

        let mut slider = Self {
            component_id: config.item_name.clone(),
            widget,
            widget_config,
            model: ValueModel::new(start, domain, resolved.format),
            range,
            bindings: SmallVec::new(),
            observers,
            ticks: TickSettings {
                clickable: config.show_ticks && config.click_on_ticks,
                orientation: config.orientation,
            },
        };

        for (index, name) in config.bound_field_names() {
            let field = host
                .field(name)
                .ok_or_else(|| SliderError::UnknownField(name.to_owned()))?;
            slider.bind_field(index, field);
        }

        Ok(slider)
    }

    #[must_use]
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    /// Requests a new value; the widget decides the final positions.
    pub fn set_value(&mut self, input: impl Into<SliderInput>) {
        let request = self.model.sanitize(input.into());
        if request.is_empty() {
            trace!("empty set request ignored");
            return;
        }
        let payload = self.widget.set(&request);
        self.on_widget_set(&payload);
    }

    /// Return-formatted value, two handles joined by `:`.
    #[must_use]
    pub fn value(&self) -> String {
        self.model.value()
    }

    #[must_use]
    pub fn raw_value(&self) -> Handles<f64> {
        self.model.raw_value()
    }

    #[must_use]
    pub fn return_formatted_value(&self) -> Handles<String> {
        self.model.return_formatted_value()
    }

    pub fn disable(&mut self) {
        debug!(component = self.component_id.as_str(), "disable");
        self.widget.set_disabled(true);
    }

    pub fn enable(&mut self) {
        debug!(component = self.component_id.as_str(), "enable");
        self.widget.set_disabled(false);
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.widget.is_disabled()
    }

    #[must_use]
    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Configuration the widget was created with.
    #[must_use]
    pub fn widget_config(&self) -> &WidgetConfig {
        &self.widget_config
    }

    /// Domain with the effective max applied.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.model.domain()
    }

    #[must_use]
    pub fn coordinate_table(&self) -> &CoordinateTable {
        &self.range.table
    }
}

fn build_widget_config(
    config: &RangeSliderConfig,
    range: &RangeBuild,
    step: StepSpec,
    format: &FormatAdapter,
    start: &Handles<f64>,
) -> WidgetConfig {
    let two_handles = config.handles == HandleCount::Two;
    let limit = if !config.flip_range && two_handles && config.kind == DomainKind::Number {
        config.range_limit
    } else {
        None
    };

    let connect = match (config.connect_bar, two_handles) {
        (false, _) => ConnectMode::None,
        (true, false) => ConnectMode::Lower,
        (true, true) => ConnectMode::Between,
    };

    let pips = config.show_ticks.then(|| {
        let (mode, values) = match (&config.tick_percentages, &config.tick_values) {
            (Some(percentages), _) => (TickMode::Positions, Some(TickValues::List(percentages.clone()))),
            (None, Some(values)) => (TickMode::Values, Some(TickValues::List(values.clone()))),
            (None, None) => (TickMode::Count, config.ticks.map(TickValues::Count)),
        };
        PipsConfig {
            stepped: config.ticks_stepped,
            density: 2,
            mode,
            values,
        }
    });

    WidgetConfig {
        range: range.table.clone(),
        step: step.scalar(),
        start: start.as_slice().to_vec(),
        margin: if config.flip_range { None } else { config.margin },
        limit,
        connect,
        connect_color: config
            .connect_bar
            .then(|| config.range_color.clone())
            .flatten(),
        orientation: config.orientation,
        direction: config.direction,
        behaviour: if config.flip_range {
            Behaviour::UnconstrainedTap
        } else {
            Behaviour::TapDrag
        },
        keyboard_support: config.keyboard_support,
        tooltips: if config.tooltip { start.count() } else { 0 },
        pips,
        format: format.clone(),
    }
}
