use tracing::{trace, warn};

use crate::core::{Domain, FormatAdapter, HandleCount, Handles};

use super::input::{InitialValue, SetComponent, SetRequest, SliderInput, ValueLiteral};

/// Canonical slider value and its conversions.
///
/// The handle values are only ever replaced through [`ValueModel::modify_value`],
/// which is also the gate deciding whether anything downstream should react.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueModel {
    value: Handles<f64>,
    domain: Domain,
    format: FormatAdapter,
    return_format: FormatAdapter,
}

impl ValueModel {
    /// `domain` must already carry the effective max.
    #[must_use]
    pub fn new(value: Handles<f64>, domain: Domain, format: FormatAdapter) -> Self {
        let return_format = format.return_format();
        Self {
            value,
            domain,
            format,
            return_format,
        }
    }

    /// Resolves the configured starting value.
    ///
    /// Missing values default to `min` for handle 0 and `max` for handle 1.
    #[must_use]
    pub fn initial_value(
        configured: Option<&InitialValue>,
        domain: Domain,
        handles: HandleCount,
        format: &FormatAdapter,
    ) -> Handles<f64> {
        let resolve = |index: usize, default: f64| {
            configured
                .and_then(|value| value.literal(index))
                .and_then(|literal| literal_to_value(literal, format))
                .unwrap_or(default)
        };

        match handles {
            HandleCount::One => Handles::One(resolve(0, domain.min)),
            HandleCount::Two => Handles::Two([resolve(0, domain.min), resolve(1, domain.max)]),
        }
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn format(&self) -> &FormatAdapter {
        &self.format
    }

    #[must_use]
    pub fn handle_count(&self) -> usize {
        self.value.count()
    }

    /// Replaces the stored value when `candidate` differs in any component.
    ///
    /// Returns whether the value changed.
    pub fn modify_value(&mut self, candidate: &[f64]) -> bool {
        let Some(candidate) = Handles::from_slice(candidate) else {
            warn!(len = candidate.len(), "ignoring candidate with unexpected arity");
            return false;
        };
        if candidate.count() != self.value.count() {
            warn!(
                expected = self.value.count(),
                got = candidate.count(),
                "ignoring candidate with mismatched handle count"
            );
            return false;
        }

        let changed = self
            .value
            .iter()
            .zip(candidate.iter())
            .any(|(current, next)| current != next);
        if changed {
            trace!(?candidate, "value modified");
            self.value = candidate;
        }
        changed
    }

    #[must_use]
    pub fn raw_value(&self) -> Handles<f64> {
        self.value
    }

    #[must_use]
    pub fn handle_value(&self, index: usize) -> Option<f64> {
        self.value.get(index).copied()
    }

    #[must_use]
    pub fn return_formatted_value(&self) -> Handles<String> {
        self.value.map(|value| self.return_format.to(*value))
    }

    /// Return-formatted value at `index`; a single-handle slider answers
    /// every index with its only value.
    #[must_use]
    pub fn return_formatted_at(&self, index: usize) -> String {
        let formatted = self.return_formatted_value();
        let last = formatted.count() - 1;
        formatted.as_slice()[index.min(last)].clone()
    }

    /// Canonical external string: handle values joined by `:`.
    #[must_use]
    pub fn value(&self) -> String {
        self.return_formatted_value().joined()
    }

    #[must_use]
    pub fn format_for_return(&self, value: f64) -> String {
        self.return_format.to(value)
    }

    /// Reads a bound field's text as a domain value.
    ///
    /// Unreadable text resolves to the domain minimum.
    #[must_use]
    pub fn field_to_value(&self, text: &str) -> f64 {
        self.format.from(text).unwrap_or_else(|| {
            trace!(text, "unreadable field value, using domain minimum");
            self.domain.min
        })
    }

    /// Normalizes an external write into the widget's `set` representation.
    #[must_use]
    pub fn sanitize(&self, input: SliderInput) -> SetRequest {
        match input {
            SliderInput::Number(value) => SetRequest::single(self.number_component(value)),
            SliderInput::Date(date) => {
                SetRequest::single(SetComponent::Value(date.timestamp_millis() as f64))
            }
            SliderInput::Text(text) => self.sanitize_text(&text),
        }
    }

    fn sanitize_text(&self, text: &str) -> SetRequest {
        // ISO date-times contain colons of their own.
        if let FormatAdapter::Temporal(converter) = &self.format {
            if let Some(timestamp) = converter.parse(text) {
                return SetRequest::single(SetComponent::Value(timestamp as f64));
            }
        }

        let mut parts: Vec<&str> = text.split(':').collect();
        if parts.len() > self.value.count() {
            warn!(
                text,
                handles = self.value.count(),
                "extra value components ignored"
            );
            parts.truncate(self.value.count());
        }

        let handles = parts
            .into_iter()
            .map(|part| {
                let part = part.trim();
                if part.is_empty() {
                    return None;
                }
                match part.parse::<f64>() {
                    Ok(number) if number.is_finite() => Some(self.number_component(number)),
                    _ => Some(SetComponent::Text(part.to_owned())),
                }
            })
            .collect();
        SetRequest { handles }
    }

    fn number_component(&self, value: f64) -> SetComponent {
        match &self.format {
            FormatAdapter::Numeric(format) => SetComponent::Text(format.to(value)),
            FormatAdapter::Temporal(_) => SetComponent::Value(value),
        }
    }
}

fn literal_to_value(literal: &ValueLiteral, format: &FormatAdapter) -> Option<f64> {
    match (literal, format) {
        (ValueLiteral::Number(value), _) => value.is_finite().then_some(*value),
        (ValueLiteral::Text(text), FormatAdapter::Temporal(converter)) => {
            Some(converter.to_timestamp(text) as f64)
        }
        (ValueLiteral::Text(text), FormatAdapter::Numeric(_)) => {
            let parsed = text.trim().parse::<f64>().ok().filter(|value| value.is_finite());
            if parsed.is_none() {
                warn!(text, "ignoring unparseable initial value");
            }
            parsed
        }
    }
}
