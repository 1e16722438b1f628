//! Canonical slider value: change gating, formatted accessors and
//! normalization of external write requests.

pub mod input;
pub mod value_model;

pub use input::{InitialValue, SetComponent, SetRequest, SliderInput, ValueLiteral};
pub use value_model::ValueModel;
