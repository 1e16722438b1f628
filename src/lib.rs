//! range-slider-rs: value model and field synchronization for range sliders.
//!
//! The crate sits between an interval-selection widget and a host's form
//! fields. It builds calendar-aware coordinate tables, converts between raw,
//! formatted and widget representations, and keeps up to two bound fields in
//! sync with the slider handles without echo writes.

pub mod api;
pub mod core;
pub mod error;
pub mod field;
pub mod model;
pub mod telemetry;
pub mod widget;

pub use api::{RangeSlider, RangeSliderConfig};
pub use error::{SliderError, SliderResult};
