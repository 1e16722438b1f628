mod config;
mod headless;

pub use config::{
    Behaviour, ConnectMode, Direction, Orientation, PipsConfig, TickMode, TickValues, WidgetConfig,
};
pub use headless::HeadlessWidget;

use smallvec::SmallVec;

use crate::error::SliderResult;
use crate::model::SetRequest;

/// Formatted handle positions carried by the widget's "set" event.
pub type SetPayload = SmallVec<[String; 2]>;

/// Contract implemented by the interval-selection widget.
///
/// The widget owns rendering, dragging and keyboard handling. The slider only
/// creates it, pushes positional requests and reacts to its "set" payloads.
pub trait SliderWidget {
    fn create(config: &WidgetConfig) -> SliderResult<Self>
    where
        Self: Sized;

    /// Applies `request` and returns the resulting "set" payload.
    fn set(&mut self, request: &SetRequest) -> SetPayload;

    /// Current formatted handle positions.
    fn get(&self) -> SetPayload;

    fn set_disabled(&mut self, disabled: bool);

    fn is_disabled(&self) -> bool;
}
