use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

const MAX_DECIMALS: u32 = 7;

/// Number format options as they appear in configuration.
///
/// Every option is optional; `mark` defaults to `.` unless `thousand` is `.`,
/// in which case it defaults to `,`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormatConfig {
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub mark: Option<String>,
    #[serde(default)]
    pub thousand: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// Decimal number formatter with separator, prefix and suffix support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    decimals: u32,
    mark: String,
    thousand: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimals: 0,
            mark: ".".to_owned(),
            thousand: None,
            prefix: None,
            suffix: None,
        }
    }
}

impl NumberFormat {
    pub fn from_config(config: Option<&NumberFormatConfig>) -> SliderResult<Self> {
        let Some(config) = config else {
            return Ok(Self::default());
        };

        let decimals = config.decimals.unwrap_or(0);
        if decimals > MAX_DECIMALS {
            return Err(SliderError::InvalidNumberFormat(format!(
                "decimals must be <= {MAX_DECIMALS}, got {decimals}"
            )));
        }

        let thousand = config.thousand.clone().filter(|value| !value.is_empty());
        let mark = match &config.mark {
            Some(mark) => mark.clone(),
            None if thousand.as_deref() == Some(".") => ",".to_owned(),
            None => ".".to_owned(),
        };
        if mark.is_empty() {
            return Err(SliderError::InvalidNumberFormat(
                "decimal mark must not be empty".to_owned(),
            ));
        }
        if thousand.as_deref() == Some(mark.as_str()) {
            return Err(SliderError::InvalidNumberFormat(format!(
                "decimal mark and thousand separator are both `{mark}`"
            )));
        }

        Ok(Self {
            decimals,
            mark,
            thousand,
            prefix: config.prefix.clone().filter(|value| !value.is_empty()),
            suffix: config.suffix.clone().filter(|value| !value.is_empty()),
        })
    }

    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    #[must_use]
    pub fn mark(&self) -> &str {
        &self.mark
    }

    /// Format used for values leaving the slider: same decimals and mark, no
    /// grouping, prefix or suffix.
    #[must_use]
    pub fn return_format(&self) -> Self {
        Self {
            decimals: self.decimals,
            mark: self.mark.clone(),
            thousand: None,
            prefix: None,
            suffix: None,
        }
    }

    #[must_use]
    pub fn to(&self, value: f64) -> String {
        // Shortest round-trip digits, so 1.005 rounds like the literal it was.
        let Some(decimal) = value
            .to_string()
            .parse::<Decimal>()
            .ok()
            .or_else(|| Decimal::from_f64_retain(value))
        else {
            return value.to_string();
        };

        let mut rounded =
            decimal.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.decimals);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = rounded.abs().to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut out = String::with_capacity(digits.len() + 8);
        if let Some(prefix) = &self.prefix {
            out.push_str(prefix);
        }
        if negative {
            out.push('-');
        }
        match &self.thousand {
            Some(thousand) => out.push_str(&group_thousands(integer, thousand)),
            None => out.push_str(integer),
        }
        if !fraction.is_empty() {
            out.push_str(&self.mark);
            out.push_str(fraction);
        }
        if let Some(suffix) = &self.suffix {
            out.push_str(suffix);
        }
        out
    }

    #[must_use]
    pub fn from(&self, input: &str) -> Option<f64> {
        let mut text = input.trim();
        let mut negative = false;

        if let Some(rest) = text.strip_prefix('-') {
            negative = true;
            text = rest;
        }
        if let Some(prefix) = &self.prefix {
            text = text.strip_prefix(prefix.as_str()).unwrap_or(text);
        }
        if !negative {
            if let Some(rest) = text.strip_prefix('-') {
                negative = true;
                text = rest;
            }
        }
        if let Some(suffix) = &self.suffix {
            text = text.strip_suffix(suffix.as_str()).unwrap_or(text);
        }

        let mut normalized = text.trim().to_owned();
        if let Some(thousand) = &self.thousand {
            normalized = normalized.replace(thousand.as_str(), "");
        }
        if self.mark != "." {
            normalized = normalized.replace(self.mark.as_str(), ".");
        }

        let parsed = normalized.parse::<f64>().ok()?;
        let value = if negative { -parsed } else { parsed };
        value.is_finite().then_some(value)
    }
}

fn group_thousands(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
