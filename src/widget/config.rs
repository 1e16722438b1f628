use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::core::{CoordinateTable, FormatAdapter, RangePoint};
use crate::error::{SliderError, SliderResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Which part of the track is drawn as a connect bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectMode {
    None,
    /// From the track start to the only handle.
    Lower,
    /// Between the two handles.
    Between,
}

/// Drag/tap behaviour handed to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Behaviour {
    /// Handles keep their order and the configured margin/limit.
    TapDrag,
    /// Handles may pass each other.
    UnconstrainedTap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
    Positions,
    Values,
    Count,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickValues {
    List(Vec<f64>),
    Count(u32),
}

/// Tick ("pips") display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipsConfig {
    pub stepped: bool,
    pub density: u32,
    pub mode: TickMode,
    pub values: Option<TickValues>,
}

/// Declarative configuration consumed by a [`super::SliderWidget`] on creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetConfig {
    #[serde(serialize_with = "serialize_range")]
    pub range: CoordinateTable,
    pub step: Option<f64>,
    pub start: Vec<f64>,
    pub margin: Option<f64>,
    pub limit: Option<f64>,
    pub connect: ConnectMode,
    pub connect_color: Option<String>,
    pub orientation: Orientation,
    pub direction: Direction,
    pub behaviour: Behaviour,
    pub keyboard_support: bool,
    /// Number of tooltips, one per handle, or zero.
    pub tooltips: usize,
    pub pips: Option<PipsConfig>,
    /// Formatter for handle values, tooltips and tick labels.
    #[serde(skip)]
    pub format: FormatAdapter,
}

impl WidgetConfig {
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.behaviour == Behaviour::TapDrag
    }

    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SliderError::InvalidConfig(format!("failed to serialize widget config: {e}"))
        })
    }
}

fn serialize_range<S: Serializer>(table: &CoordinateTable, serializer: S) -> Result<S::Ok, S::Error> {
    let range: IndexMap<String, RangePoint> = table.to_widget_range();
    range.serialize(serializer)
}
