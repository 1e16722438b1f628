use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Domain;
use crate::model::SliderInput;
use crate::widget::{Orientation, SliderWidget};

use super::RangeSlider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct TickSettings {
    pub clickable: bool,
    pub orientation: Orientation,
}

/// Screen rectangle of the tick strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickStripBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Click delivered from the tick strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickClick {
    /// The click hit a tick label carrying its own value.
    Tick { value: String },
    /// The click hit the strip between ticks.
    Pointer {
        x: f64,
        y: f64,
        bounds: TickStripBounds,
    },
}

/// Resolves a click to the value that should be set.
///
/// Pointer clicks are interpolated linearly between `domain.min` and
/// `domain.max` along the strip's main axis.
#[must_use]
pub fn resolve_tick_click(
    click: &TickClick,
    domain: Domain,
    orientation: Orientation,
) -> Option<SliderInput> {
    match click {
        TickClick::Tick { value } => Some(SliderInput::Text(value.clone())),
        TickClick::Pointer { x, y, bounds } => {
            let (offset, length) = match orientation {
                Orientation::Horizontal => (x - bounds.left, bounds.width),
                Orientation::Vertical => (y - bounds.top, bounds.height),
            };
            if !offset.is_finite() || !length.is_finite() || length <= 0.0 {
                return None;
            }
            let fraction = offset.clamp(0.0, length) / length;
            Some(SliderInput::Number(domain.min + fraction * domain.span()))
        }
    }
}

impl<W: SliderWidget> RangeSlider<W> {
    /// Handles a click on the tick strip. Returns whether a value was set.
    pub fn on_tick_click(&mut self, click: &TickClick) -> bool {
        if !self.ticks.clickable {
            trace!("tick click ignored, ticks are not clickable");
            return false;
        }
        let Some(input) = resolve_tick_click(click, self.model.domain(), self.ticks.orientation)
        else {
            trace!(?click, "tick click outside a usable strip");
            return false;
        };
        trace!(?input, "tick click");
        self.set_value(input);
        true
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{TickClick, TickStripBounds, resolve_tick_click};
    use crate::core::{Domain, DomainKind};
    use crate::model::SliderInput;
    use crate::widget::Orientation;

    const BOUNDS: TickStripBounds = TickStripBounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 400.0,
    };

    fn number(input: Option<SliderInput>) -> f64 {
        match input {
            Some(SliderInput::Number(value)) => value,
            other => panic!("expected a number, got {other:?}"),
        }
    }

    #[test]
    fn horizontal_click_interpolates_along_x() {
        let domain = Domain::new(0.0, 1000.0, DomainKind::Number).expect("domain");
        let click = TickClick::Pointer {
            x: 150.0,
            y: 0.0,
            bounds: BOUNDS,
        };
        assert_relative_eq!(
            number(resolve_tick_click(&click, domain, Orientation::Horizontal)),
            250.0
        );
    }

    #[test]
    fn vertical_click_uses_y_and_clamps() {
        let domain = Domain::new(0.0, 1000.0, DomainKind::Number).expect("domain");
        let click = TickClick::Pointer {
            x: 0.0,
            y: 900.0,
            bounds: BOUNDS,
        };
        assert_relative_eq!(
            number(resolve_tick_click(&click, domain, Orientation::Vertical)),
            1000.0
        );
    }

    #[test]
    fn zero_sized_strip_resolves_to_nothing() {
        let domain = Domain::new(0.0, 1.0, DomainKind::Number).expect("domain");
        let click = TickClick::Pointer {
            x: 1.0,
            y: 1.0,
            bounds: TickStripBounds {
                width: 0.0,
                ..BOUNDS
            },
        };
        assert!(resolve_tick_click(&click, domain, Orientation::Horizontal).is_none());
    }
}
