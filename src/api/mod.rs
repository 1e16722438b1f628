//! Host-facing slider component.
//!
//! `RangeSlider` owns the widget, the value model and the bound fields. Its
//! behaviour is split across files the same way the responsibilities are:
//! creation and public operations, field synchronization, change dispatch
//! and tick clicks.

mod binding;
mod config;
mod engine;
mod events;
mod ticks;

pub use config::{RangeSliderConfig, ResolvedConfig};
pub use engine::RangeSlider;
pub use events::{CHANGE_EVENT, ChangeEvent, ChangeObserver, RecordingObserver};
pub use ticks::{TickClick, TickStripBounds, resolve_tick_click};
