use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use super::{BoundField, FieldHost};

#[derive(Debug, Default)]
struct FieldState {
    value: String,
    writes: Vec<String>,
    pending_change: bool,
}

/// In-memory field whose state is shared between clones.
///
/// The host keeps one clone to inspect or edit the value while the slider
/// holds another.
#[derive(Debug, Clone)]
pub struct HeadlessField {
    name: Rc<str>,
    state: Rc<RefCell<FieldState>>,
}

impl HeadlessField {
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: Rc::from(name),
            state: Rc::new(RefCell::new(FieldState {
                value: value.to_owned(),
                ..FieldState::default()
            })),
        }
    }

    /// Simulates a user edit. The caller is responsible for delivering the
    /// resulting change notification.
    pub fn edit(&self, value: &str) {
        self.state.borrow_mut().value = value.to_owned();
    }

    /// Values written through [`BoundField::set_value`], oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.state.borrow().writes.clone()
    }

    /// Returns and clears the flag raised by the last programmatic write.
    pub fn take_pending_change(&self) -> bool {
        std::mem::take(&mut self.state.borrow_mut().pending_change)
    }
}

impl BoundField for HeadlessField {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&mut self, value: &str) {
        let mut state = self.state.borrow_mut();
        state.value = value.to_owned();
        state.writes.push(value.to_owned());
        state.pending_change = true;
    }
}

/// Field registry keyed by name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct HeadlessFieldHost {
    fields: IndexMap<String, HeadlessField>,
}

impl HeadlessFieldHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, field: HeadlessField) -> Self {
        self.insert(field);
        self
    }

    pub fn insert(&mut self, field: HeadlessField) {
        self.fields.insert(field.name.to_string(), field);
    }
}

impl FieldHost for HeadlessFieldHost {
    fn field(&self, name: &str) -> Option<Box<dyn BoundField>> {
        self.fields
            .get(name)
            .map(|field| Box::new(field.clone()) as Box<dyn BoundField>)
    }
}
