use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Handles;
use crate::widget::SliderWidget;

use super::RangeSlider;

pub const CHANGE_EVENT: &str = "rangeslider-change";

/// Change notification, emitted only when the slider value actually changed.
///
/// Both values are return-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub component_id: String,
    pub old_value: Handles<String>,
    pub new_value: Handles<String>,
}

impl ChangeEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        CHANGE_EVENT
    }
}

/// Host event-bus hook scoped to one slider.
pub trait ChangeObserver {
    fn id(&self) -> &str;
    fn on_change(&mut self, event: &ChangeEvent);
}

/// Observer that keeps every event it receives; clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    id: String,
    events: Rc<RefCell<Vec<ChangeEvent>>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            events: Rc::default(),
        }
    }

    #[must_use]
    pub fn events(&self) -> Vec<ChangeEvent> {
        self.events.borrow().clone()
    }
}

impl ChangeObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_change(&mut self, event: &ChangeEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

impl<W: SliderWidget> RangeSlider<W> {
    pub fn register_observer(&mut self, observer: Box<dyn ChangeObserver>) {
        debug!(observer = observer.id(), "register change observer");
        self.observers.push(observer);
    }

    pub(super) fn dispatch_change(&mut self, old_value: Handles<String>, new_value: Handles<String>) {
        let event = ChangeEvent {
            component_id: self.component_id.clone(),
            old_value,
            new_value,
        };
        debug!(
            component = self.component_id.as_str(),
            old = %event.old_value.joined(),
            new = %event.new_value.joined(),
            "dispatch change"
        );
        for observer in &mut self.observers {
            observer.on_change(&event);
        }
    }
}
