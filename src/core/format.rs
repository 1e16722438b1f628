use crate::core::number_format::NumberFormat;
use crate::core::temporal::TemporalConverter;

/// `to`/`from` pair selected once from the domain kind.
///
/// The widget uses it for handle values and tooltips; the slider uses it to
/// read positional payloads coming back from the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatAdapter {
    Numeric(NumberFormat),
    Temporal(TemporalConverter),
}

impl FormatAdapter {
    #[must_use]
    pub fn to(&self, value: f64) -> String {
        match self {
            Self::Numeric(format) => format.to(value),
            Self::Temporal(converter) => converter.format_value(value),
        }
    }

    /// Parses a formatted value. Temporal parsing never fails; unparseable
    /// dates resolve to the domain minimum.
    #[must_use]
    pub fn from(&self, text: &str) -> Option<f64> {
        match self {
            Self::Numeric(format) => format.from(text),
            Self::Temporal(converter) => Some(converter.to_timestamp(text) as f64),
        }
    }

    /// Format for values exposed outside the slider.
    #[must_use]
    pub fn return_format(&self) -> Self {
        match self {
            Self::Numeric(format) => Self::Numeric(format.return_format()),
            Self::Temporal(converter) => Self::Temporal(converter.clone()),
        }
    }

    #[must_use]
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Temporal(_))
    }
}
