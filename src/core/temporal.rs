use chrono::format::{self, Item, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::trace;

use crate::error::{SliderError, SliderResult};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

const ISO_DATE_TIME_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const ISO_DATE_PATTERN: &str = "%Y-%m-%d";

/// Converts between date-like input, UTC millisecond timestamps and display
/// strings rendered with a `strftime` mask.
///
/// Parsing never fails from the caller's point of view: anything that cannot
/// be read as a date resolves to the configured fallback (the domain minimum).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalConverter {
    mask: String,
    fallback_ms: i64,
}

impl TemporalConverter {
    /// Creates a converter after checking that `mask` is a valid format string.
    pub fn new(mask: impl Into<String>) -> SliderResult<Self> {
        let mask = mask.into();
        if StrftimeItems::new(&mask).any(|item| matches!(item, Item::Error)) {
            return Err(SliderError::InvalidConfig(format!(
                "invalid date format mask `{mask}`"
            )));
        }
        Ok(Self {
            mask,
            fallback_ms: 0,
        })
    }

    /// Sets the timestamp returned for unparseable input.
    #[must_use]
    pub fn with_fallback(mut self, fallback_ms: i64) -> Self {
        self.fallback_ms = fallback_ms;
        self
    }

    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }

    #[must_use]
    pub fn fallback(&self) -> i64 {
        self.fallback_ms
    }

    /// Strict parse used for configured bounds.
    ///
    /// A numeric string is a timestamp literal. Other input is tried as
    /// ISO-8601 first and against the display mask second.
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<i64> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(number) = input.parse::<f64>() {
            return number.is_finite().then(|| number.round() as i64);
        }

        parse_iso(input).or_else(|| self.parse_with_mask(input))
    }

    /// Converts a string to a timestamp, falling back to the domain minimum.
    #[must_use]
    pub fn to_timestamp(&self, input: &str) -> i64 {
        self.parse(input).unwrap_or_else(|| {
            trace!(input, fallback = self.fallback_ms, "unparseable date input");
            self.fallback_ms
        })
    }

    #[must_use]
    pub fn timestamp_from_date(&self, date: DateTime<Utc>) -> i64 {
        date.timestamp_millis()
    }

    /// Renders a timestamp with the display mask (UTC).
    #[must_use]
    pub fn format(&self, timestamp_ms: i64) -> String {
        match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
            Some(date) => date.format(&self.mask).to_string(),
            None => {
                trace!(timestamp_ms, "timestamp outside calendar range");
                timestamp_ms.to_string()
            }
        }
    }

    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        self.format(value.round() as i64)
    }

    /// Parses against the display mask. Fields the mask leaves out default to
    /// the start of the enclosing period, so `%m/%Y` reads back as day 1 at
    /// midnight.
    fn parse_with_mask(&self, input: &str) -> Option<i64> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, input, StrftimeItems::new(&self.mask)).ok()?;

        if parsed.timestamp().is_none() {
            let week_based = parsed.isoweek().is_some()
                || parsed.week_from_mon().is_some()
                || parsed.week_from_sun().is_some();
            if parsed.ordinal().is_none() && !week_based {
                if parsed.month().is_none() {
                    parsed.set_month(1).ok()?;
                }
                if parsed.day().is_none() {
                    parsed.set_day(1).ok()?;
                }
            }
            if parsed.hour_div_12().is_none() && parsed.hour_mod_12().is_none() {
                parsed.set_hour(0).ok()?;
            }
            if parsed.minute().is_none() {
                parsed.set_minute(0).ok()?;
            }
            if parsed.second().is_none() {
                parsed.set_second(0).ok()?;
            }
        }

        parsed
            .to_naive_datetime_with_offset(0)
            .ok()
            .map(|date_time| date_time.and_utc().timestamp_millis())
    }
}

fn parse_iso(input: &str) -> Option<i64> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
        return Some(date_time.timestamp_millis());
    }
    for pattern in ISO_DATE_TIME_PATTERNS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(input, pattern) {
            return Some(date_time.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(input, ISO_DATE_PATTERN)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date_time| date_time.and_utc().timestamp_millis())
}
