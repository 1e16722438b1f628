use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::{CoordinateTable, FormatAdapter};
use crate::error::{SliderError, SliderResult};
use crate::model::{SetComponent, SetRequest};

use super::{SetPayload, SliderWidget, WidgetConfig};

/// In-memory widget used by tests and headless hosts.
///
/// It implements the positional rules the slider depends on: snapping to the
/// coordinate table, clamping to its ends, and (unless handles may flip)
/// ordering with `margin` and `limit` between two handles.
#[derive(Debug, Clone)]
pub struct HeadlessWidget {
    table: CoordinateTable,
    step: Option<f64>,
    margin: Option<f64>,
    limit: Option<f64>,
    constrained: bool,
    format: FormatAdapter,
    positions: SmallVec<[f64; 2]>,
    disabled: bool,
    set_calls: usize,
}

impl HeadlessWidget {
    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Number of `set` requests received since creation.
    #[must_use]
    pub fn set_calls(&self) -> usize {
        self.set_calls
    }

    fn resolve(&self, component: &SetComponent) -> Option<f64> {
        match component {
            SetComponent::Value(value) => value.is_finite().then_some(*value),
            SetComponent::Text(text) => {
                let value = self.format.from(text);
                if value.is_none() {
                    warn!(text = text.as_str(), "widget ignoring unreadable position");
                }
                value
            }
        }
    }

    fn constrain(&self, index: usize, target: f64) -> f64 {
        let snapped = self.table.snap(target, self.step);
        if !self.constrained || self.positions.len() < 2 {
            return snapped;
        }

        let other = self.positions[1 - index];
        let margin = self.margin.unwrap_or(0.0);
        let constrained = if index == 0 {
            let mut value = snapped.min(other - margin);
            if let Some(limit) = self.limit {
                value = value.max(other - limit);
            }
            value
        } else {
            let mut value = snapped.max(other + margin);
            if let Some(limit) = self.limit {
                value = value.min(other + limit);
            }
            value
        };
        constrained.clamp(self.table.min(), self.table.max())
    }

    fn payload(&self) -> SetPayload {
        self.positions
            .iter()
            .map(|value| self.format.to(*value))
            .collect()
    }
}

impl SliderWidget for HeadlessWidget {
    fn create(config: &WidgetConfig) -> SliderResult<Self> {
        if config.start.is_empty() || config.start.len() > 2 {
            return Err(SliderError::Widget(format!(
                "expected 1 or 2 start positions, got {}",
                config.start.len()
            )));
        }

        let mut widget = Self {
            table: config.range.clone(),
            step: config.step,
            margin: config.margin,
            limit: config.limit,
            constrained: config.is_constrained(),
            format: config.format.clone(),
            positions: config
                .start
                .iter()
                .map(|value| config.range.snap(*value, config.step))
                .collect(),
            disabled: false,
            set_calls: 0,
        };
        if widget.constrained && widget.positions.len() == 2 && widget.positions[0] > widget.positions[1]
        {
            widget.positions.swap(0, 1);
        }
        Ok(widget)
    }

    fn set(&mut self, request: &SetRequest) -> SetPayload {
        self.set_calls += 1;
        let targets: SmallVec<[Option<f64>; 2]> = request
            .handles
            .iter()
            .take(self.positions.len())
            .map(|component| component.as_ref().and_then(|c| self.resolve(c)))
            .collect();

        // Second pass lets both handles move past each other's old position.
        for _ in 0..2 {
            for (index, target) in targets.iter().enumerate() {
                if let Some(target) = target {
                    self.positions[index] = self.constrain(index, *target);
                }
            }
        }

        trace!(positions = ?self.positions, "headless widget set");
        self.payload()
    }

    fn get(&self) -> SetPayload {
        self.payload()
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }
}
