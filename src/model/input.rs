use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// External write request, classified once at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderInput {
    Number(f64),
    Date(DateTime<Utc>),
    /// One value or two values separated by `:`.
    Text(String),
}

impl From<f64> for SliderInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for SliderInput {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<DateTime<Utc>> for SliderInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<&str> for SliderInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SliderInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One handle's target inside a [`SetRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum SetComponent {
    /// Raw domain value (number or millisecond timestamp).
    Value(f64),
    /// Formatted text the widget reads back through its format adapter.
    Text(String),
}

/// Positional request sent to the widget's `set`.
///
/// `None` leaves the corresponding handle where it is.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRequest {
    pub handles: SmallVec<[Option<SetComponent>; 2]>,
}

impl SetRequest {
    #[must_use]
    pub fn single(component: SetComponent) -> Self {
        Self {
            handles: smallvec![Some(component)],
        }
    }

    /// Targets only handle `index` of a slider with `count` handles.
    #[must_use]
    pub fn at(index: usize, count: usize, component: SetComponent) -> Self {
        let mut handles: SmallVec<[Option<SetComponent>; 2]> = smallvec![None; count.max(1)];
        if let Some(slot) = handles.get_mut(index) {
            *slot = Some(component);
        }
        Self { handles }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.iter().all(Option::is_none)
    }
}

/// Literal value accepted in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueLiteral {
    Number(f64),
    Text(String),
}

/// Configured starting value: a single literal or one entry per handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InitialValue {
    One(ValueLiteral),
    Many(Vec<Option<ValueLiteral>>),
}

impl InitialValue {
    #[must_use]
    pub fn literal(&self, index: usize) -> Option<&ValueLiteral> {
        match self {
            Self::One(value) => (index == 0).then_some(value),
            Self::Many(values) => values.get(index).and_then(Option::as_ref),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InitialValue, SetComponent, SetRequest, ValueLiteral};

    #[test]
    fn request_at_leaves_other_handle_untouched() {
        let request = SetRequest::at(1, 2, SetComponent::Value(5.0));
        assert_eq!(request.handles.as_slice(), &[None, Some(SetComponent::Value(5.0))]);
        assert!(!request.is_empty());
    }

    #[test]
    fn initial_value_accepts_mixed_json_shapes() {
        let single: InitialValue = serde_json::from_str("\"2024-01-01\"").expect("single");
        assert_eq!(
            single.literal(0),
            Some(&ValueLiteral::Text("2024-01-01".to_owned()))
        );
        let many: InitialValue = serde_json::from_str("[20, null]").expect("many");
        assert_eq!(many.literal(0), Some(&ValueLiteral::Number(20.0)));
        assert_eq!(many.literal(1), None);
    }
}
