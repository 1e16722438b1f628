use tracing::{debug, trace, warn};

use crate::field::BoundField;
use crate::model::{SetComponent, SetRequest};
use crate::widget::SliderWidget;

use super::RangeSlider;

/// The single echo guard: a write only happens when the target does not
/// already show `candidate`.
pub(super) fn propagate_if_changed(current: &str, candidate: &str) -> bool {
    let changed = current != candidate;
    if !changed {
        trace!(candidate, "write suppressed, target already in sync");
    }
    changed
}

impl<W: SliderWidget> RangeSlider<W> {
    /// Attaches `field` to handle `index`.
    ///
    /// A field that already holds a value is authoritative and drives the
    /// widget; an empty field receives the slider's value.
    pub(super) fn bind_field(&mut self, index: usize, mut field: Box<dyn BoundField>) {
        if index >= self.model.handle_count() {
            warn!(field = field.name(), index, "no handle for bound field");
            return;
        }
        debug!(field = field.name(), index, "bind field");

        let authoritative = !field.value().is_empty();
        if !authoritative {
            field.set_value(&self.model.return_formatted_at(index));
        }

        if self.bindings.len() <= index {
            self.bindings.resize_with(index + 1, || None);
        }
        self.bindings[index] = Some(field);

        if authoritative {
            self.on_field_change(index);
        }
    }

    /// Names of the bound fields by handle index.
    #[must_use]
    pub fn bound_fields(&self) -> Vec<Option<&str>> {
        self.bindings
            .iter()
            .map(|field| field.as_ref().map(|field| field.name()))
            .collect()
    }

    /// Widget "set" event: `payload` holds the formatted handle positions.
    pub fn on_widget_set(&mut self, payload: &[String]) {
        let values: Option<Vec<f64>> = payload
            .iter()
            .map(|text| self.model.format().from(text))
            .collect();
        let Some(mut values) = values else {
            warn!(?payload, "ignoring unreadable widget payload");
            return;
        };
        let domain = self.model.domain();
        for value in &mut values {
            *value = value.clamp(domain.min, domain.max);
        }

        let old_value = self.model.return_formatted_value();
        if !self.model.modify_value(&values) {
            trace!(?values, "widget set without change");
            return;
        }

        let new_value = self.model.return_formatted_value();
        self.dispatch_change(old_value, new_value);
        self.push_to_fields();
    }

    fn push_to_fields(&mut self) {
        for (index, slot) in self.bindings.iter_mut().enumerate() {
            let Some(field) = slot else {
                continue;
            };
            let slider_value = self.model.return_formatted_at(index);
            if propagate_if_changed(&field.value(), &slider_value) {
                trace!(field = field.name(), value = slider_value.as_str(), "push to field");
                field.set_value(&slider_value);
            }
        }
    }

    /// Bound field "change" event for the field bound to handle `index`.
    ///
    /// Out-of-domain input is clamped in the field and not forwarded; the
    /// field's own change notification for the clamp write brings the value
    /// back through here.
    pub fn on_field_change(&mut self, index: usize) {
        let Some(text) = self
            .bindings
            .get(index)
            .and_then(Option::as_ref)
            .map(|field| field.value())
        else {
            warn!(index, "change event for unbound handle");
            return;
        };

        let domain = self.model.domain();
        let mut value = self.model.field_to_value(&text);
        let clamp_to = if value > domain.max {
            Some(domain.max)
        } else if value < domain.min {
            Some(domain.min)
        } else {
            None
        };

        if let Some(bound) = clamp_to {
            let clamped = self.model.format_for_return(bound);
            // Rounding in the return format can leave the clamped text itself
            // outside the domain; once the field shows it, take the bound.
            if propagate_if_changed(&text, &clamped) {
                debug!(index, input = text.as_str(), clamped = clamped.as_str(), "clamp field");
                if let Some(Some(field)) = self.bindings.get_mut(index) {
                    field.set_value(&clamped);
                }
                return;
            }
            value = bound;
        }

        let slider_value = self.model.return_formatted_at(index);
        if propagate_if_changed(&text, &slider_value) {
            let request = SetRequest::at(
                index,
                self.model.handle_count(),
                SetComponent::Value(value),
            );
            let payload = self.widget.set(&request);
            self.on_widget_set(&payload);
        }
    }
}
