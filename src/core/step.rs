use chrono::Months;
use serde::{Deserialize, Serialize};

use crate::core::types::DomainKind;
use crate::error::{SliderError, SliderResult};

const HOUR_MS: f64 = 60.0 * 60.0 * 1000.0;
pub const DAY_MS: f64 = 24.0 * HOUR_MS;
pub const WEEK_MS: f64 = 7.0 * DAY_MS;

/// Step value as it appears in configuration: a number or a granularity tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepSetting {
    Number(f64),
    Tag(String),
}

/// Calendar-relative step units. Their duration varies, so they cannot be
/// expressed as a scalar increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Monthly,
    Yearly,
}

impl CalendarUnit {
    #[must_use]
    pub fn months(self) -> Months {
        match self {
            Self::Monthly => Months::new(1),
            Self::Yearly => Months::new(12),
        }
    }
}

/// Resolved step granularity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StepSpec {
    /// No stepping; the widget moves continuously.
    Continuous,
    /// Uniform increment in domain units.
    Fixed(f64),
    Calendar(CalendarUnit),
}

impl StepSpec {
    /// Resolves the configured step for the given domain kind.
    ///
    /// Numeric domains accept a number or a numeric string. Temporal domains
    /// accept `daily`, `weekly`, `monthly` and `yearly`; anything else is a
    /// configuration error.
    pub fn resolve(setting: Option<&StepSetting>, kind: DomainKind) -> SliderResult<Self> {
        let Some(setting) = setting else {
            return Ok(Self::Continuous);
        };

        match kind {
            DomainKind::Number => {
                let step = match setting {
                    StepSetting::Number(value) => *value,
                    StepSetting::Tag(tag) => tag
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| SliderError::UnknownStepTag(tag.clone()))?,
                };
                if !step.is_finite() || step <= 0.0 {
                    return Err(SliderError::InvalidConfig(format!(
                        "numeric step must be finite and > 0, got {step}"
                    )));
                }
                Ok(Self::Fixed(step))
            }
            DomainKind::Date => {
                let StepSetting::Tag(tag) = setting else {
                    return Err(SliderError::UnknownStepTag(format!("{setting:?}")));
                };
                match tag.trim() {
                    "daily" => Ok(Self::Fixed(DAY_MS)),
                    "weekly" => Ok(Self::Fixed(WEEK_MS)),
                    "monthly" => Ok(Self::Calendar(CalendarUnit::Monthly)),
                    "yearly" => Ok(Self::Calendar(CalendarUnit::Yearly)),
                    other => Err(SliderError::UnknownStepTag(other.to_owned())),
                }
            }
        }
    }

    /// Scalar increment handed to the widget, if the step has one.
    #[must_use]
    pub fn scalar(self) -> Option<f64> {
        match self {
            Self::Fixed(step) => Some(step),
            Self::Continuous | Self::Calendar(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarUnit, DAY_MS, StepSetting, StepSpec, WEEK_MS};
    use crate::core::DomainKind;

    #[test]
    fn temporal_tags_resolve_to_fixed_or_calendar_steps() {
        let daily = StepSetting::Tag("daily".to_owned());
        let weekly = StepSetting::Tag("weekly".to_owned());
        let yearly = StepSetting::Tag("yearly".to_owned());
        assert_eq!(
            StepSpec::resolve(Some(&daily), DomainKind::Date).expect("daily"),
            StepSpec::Fixed(DAY_MS)
        );
        assert_eq!(
            StepSpec::resolve(Some(&weekly), DomainKind::Date).expect("weekly"),
            StepSpec::Fixed(WEEK_MS)
        );
        assert_eq!(
            StepSpec::resolve(Some(&yearly), DomainKind::Date).expect("yearly"),
            StepSpec::Calendar(CalendarUnit::Yearly)
        );
    }

    #[test]
    fn unknown_temporal_tag_is_rejected() {
        let hourly = StepSetting::Tag("hourly".to_owned());
        let err = StepSpec::resolve(Some(&hourly), DomainKind::Date).expect_err("must fail");
        assert!(format!("{err}").contains("hourly"));
    }

    #[test]
    fn numeric_step_accepts_numeric_strings() {
        let setting = StepSetting::Tag(" 2.5 ".to_owned());
        assert_eq!(
            StepSpec::resolve(Some(&setting), DomainKind::Number).expect("numeric"),
            StepSpec::Fixed(2.5)
        );
        let zero = StepSetting::Number(0.0);
        assert!(StepSpec::resolve(Some(&zero), DomainKind::Number).is_err());
    }

    #[test]
    fn missing_step_is_continuous() {
        assert_eq!(
            StepSpec::resolve(None, DomainKind::Date).expect("continuous"),
            StepSpec::Continuous
        );
    }
}
