mod headless;

pub use headless::{HeadlessField, HeadlessFieldHost};

/// External form field kept in sync with one slider handle.
///
/// The host owns the field; the slider only reads and writes its string value.
/// Hosts deliver the field's "change" notifications to
/// [`crate::api::RangeSlider::on_field_change`].
pub trait BoundField {
    fn name(&self) -> &str;
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
}

/// Name-based lookup of host fields.
pub trait FieldHost {
    fn field(&self, name: &str) -> Option<Box<dyn BoundField>>;
}
