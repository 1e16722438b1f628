use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Kind of values a slider represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainKind {
    #[serde(alias = "numeric")]
    Number,
    /// Values are UTC millisecond timestamps.
    #[serde(alias = "temporal")]
    Date,
}

impl DomainKind {
    #[must_use]
    pub fn is_temporal(self) -> bool {
        matches!(self, Self::Date)
    }
}

/// Inclusive value range covered by the slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub kind: DomainKind,
}

impl Domain {
    pub fn new(min: f64, max: f64, kind: DomainKind) -> SliderResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(SliderError::InvalidDomain { min, max });
        }
        Ok(Self { min, max, kind })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns a copy with the upper bound replaced, keeping `min < max`.
    pub fn with_max(self, max: f64) -> SliderResult<Self> {
        Self::new(self.min, max, self.kind)
    }
}

/// Per-handle payload for a one- or two-handle slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Handles<T> {
    One(T),
    Two([T; 2]),
}

impl<T> Handles<T> {
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(_) => 2,
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Two(values) => values,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Handles<U> {
        match self {
            Self::One(value) => Handles::One(f(value)),
            Self::Two([low, high]) => Handles::Two([f(low), f(high)]),
        }
    }
}

impl<T: Clone> Handles<T> {
    /// Builds handles from a slice holding exactly one or two items.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Option<Self> {
        match values {
            [value] => Some(Self::One(value.clone())),
            [low, high] => Some(Self::Two([low.clone(), high.clone()])),
            _ => None,
        }
    }
}

impl Handles<String> {
    /// Canonical external string form: handle values joined by `:`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.as_slice().join(":")
    }
}

/// Number of handles on the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HandleCount {
    One,
    Two,
}

impl HandleCount {
    #[must_use]
    pub fn get(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<u8> for HandleCount {
    type Error = SliderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(SliderError::InvalidHandleCount(other)),
        }
    }
}

impl From<HandleCount> for u8 {
    fn from(value: HandleCount) -> Self {
        match value {
            HandleCount::One => 1,
            HandleCount::Two => 2,
        }
    }
}
