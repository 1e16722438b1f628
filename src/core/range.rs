use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::step::{CalendarUnit, StepSpec};
use crate::core::types::Domain;
use crate::error::{SliderError, SliderResult};

/// One breakpoint of the percentage -> value mapping.
///
/// `width` is the step used between this entry and the next one. The
/// terminal entry never carries a width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub percent: f64,
    pub value: f64,
    pub width: Option<f64>,
}

/// Range point in the shape the widget configuration expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangePoint {
    Value(f64),
    Stepped([f64; 2]),
    Terminal([f64; 1]),
}

/// Ordered breakpoints from `min` at 0% to the effective max at 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTable {
    entries: Vec<RangeEntry>,
    calendar: bool,
}

impl CoordinateTable {
    fn linear(min: f64, max: f64) -> Self {
        Self {
            entries: vec![
                RangeEntry {
                    percent: 0.0,
                    value: min,
                    width: None,
                },
                RangeEntry {
                    percent: 100.0,
                    value: max,
                    width: None,
                },
            ],
            calendar: false,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.entries[0].value
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.entries[self.entries.len() - 1].value
    }

    /// True when the table was materialized from a calendar-relative step.
    #[must_use]
    pub fn is_calendar(&self) -> bool {
        self.calendar
    }

    #[must_use]
    pub fn is_strictly_increasing(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].percent < pair[1].percent && pair[0].value < pair[1].value)
    }

    /// Renders the table keyed by `min`, `NN%` and `max`.
    #[must_use]
    pub fn to_widget_range(&self) -> IndexMap<String, RangePoint> {
        let last = self.entries.len() - 1;
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let key = match index {
                    0 => "min".to_owned(),
                    i if i == last => "max".to_owned(),
                    _ => format!("{}%", entry.percent),
                };
                let point = match (entry.width, self.calendar) {
                    (Some(width), _) => RangePoint::Stepped([entry.value, width]),
                    (None, true) => RangePoint::Terminal([entry.value]),
                    (None, false) => RangePoint::Value(entry.value),
                };
                (key, point)
            })
            .collect()
    }

    /// Snaps `value` to the nearest reachable position.
    ///
    /// The value is clamped to the table ends and then rounded to the step of
    /// the segment it falls in; `fallback_step` applies to segments without
    /// their own width.
    #[must_use]
    pub fn snap(&self, value: f64, fallback_step: Option<f64>) -> f64 {
        let value = value.clamp(self.min(), self.max());
        let Some(segment) = self
            .entries
            .windows(2)
            .find(|pair| value >= pair[0].value && value <= pair[1].value)
        else {
            return value;
        };

        let (start, end) = (segment[0].value, segment[1].value);
        if value >= end {
            return end;
        }
        match segment[0].width.or(fallback_step) {
            Some(width) if width > 0.0 => {
                let steps = ((value - start) / width).round();
                (start + steps * width).min(end)
            }
            _ => value,
        }
    }
}

/// Coordinate table plus the upper bound the slider must honor from now on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBuild {
    pub table: CoordinateTable,
    pub effective_max: f64,
}

/// Builds the coordinate table for `domain` stepped by `step`.
///
/// Fixed and continuous steps produce a plain `{min, max}` table. Calendar
/// steps walk from `min` one unit at a time and place every boundary at an
/// equal percentage distance; when the walk overshoots `max`, the last
/// boundary before it becomes the effective max.
pub fn build_range(domain: Domain, step: StepSpec) -> SliderResult<RangeBuild> {
    let StepSpec::Calendar(unit) = step else {
        return Ok(RangeBuild {
            table: CoordinateTable::linear(domain.min, domain.max),
            effective_max: domain.max,
        });
    };

    let (mut boundaries, walked) = walk_calendar(domain, unit)?;
    let mut effective_max = domain.max;

    if walked > domain.max {
        effective_max = boundaries.pop().unwrap_or(walked);
    }

    let perc_step = 100.0 / (boundaries.len() as f64 + 1.0);
    debug!(
        ?unit,
        boundaries = boundaries.len(),
        effective_max,
        perc_step,
        "built calendar range"
    );

    if perc_step >= 100.0 {
        let table = CoordinateTable {
            entries: vec![
                RangeEntry {
                    percent: 0.0,
                    value: domain.min,
                    width: Some(effective_max - domain.min),
                },
                RangeEntry {
                    percent: 100.0,
                    value: effective_max,
                    width: None,
                },
            ],
            calendar: true,
        };
        return Ok(RangeBuild {
            table,
            effective_max,
        });
    }

    let mut entries = Vec::with_capacity(boundaries.len() + 2);
    entries.push(RangeEntry {
        percent: 0.0,
        value: domain.min,
        width: Some(boundaries[0] - domain.min),
    });
    for (index, &value) in boundaries.iter().enumerate() {
        let next = boundaries.get(index + 1).copied().unwrap_or(effective_max);
        entries.push(RangeEntry {
            percent: perc_step * (index as f64 + 1.0),
            value,
            width: Some(next - value),
        });
    }
    entries.push(RangeEntry {
        percent: 100.0,
        value: effective_max,
        width: None,
    });

    Ok(RangeBuild {
        table: CoordinateTable {
            entries,
            calendar: true,
        },
        effective_max,
    })
}

/// Collects the boundaries strictly before `max` and returns them with the
/// first walked value that is not before `max`.
fn walk_calendar(domain: Domain, unit: CalendarUnit) -> SliderResult<(Vec<f64>, f64)> {
    let out_of_range = || SliderError::InvalidDomain {
        min: domain.min,
        max: domain.max,
    };

    let mut current = DateTime::<Utc>::from_timestamp_millis(domain.min as i64)
        .ok_or_else(out_of_range)?
        .checked_add_months(unit.months())
        .ok_or_else(out_of_range)?;
    let mut boundaries = Vec::new();

    while (current.timestamp_millis() as f64) < domain.max {
        boundaries.push(current.timestamp_millis() as f64);
        current = current
            .checked_add_months(unit.months())
            .ok_or_else(out_of_range)?;
    }

    Ok((boundaries, current.timestamp_millis() as f64))
}
