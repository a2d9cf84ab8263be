//! Change notifications raised by components for their ancestors.
//!
//! Components record property writes in a [`ChangedProperties`] batch while
//! they handle input. Once the update cycle has settled, a
//! [`ChangeNotifier`] walks its static property table and raises one
//! bubbling [`Notification`] per recorded property, carrying its final
//! value. Focus signals go through
//! [`FocusSignals`], which only reacts to the designated primary element.
//!
//! Notifications travel over a [`NotificationSink`], the same
//! unbounded-channel shape the application uses for background actions.

use serde::Serialize;
use serde_json::{json, Value};
use tokio::sync::mpsc;

/// Identity of an element inside a component, used to tell the primary
/// input apart from auxiliary controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub &'static str);

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub name: &'static str,
    /// Tag of the component that raised it.
    pub source: &'static str,
    pub detail: Option<Value>,
    pub bubbles: bool,
    /// Crosses the component's encapsulation boundary.
    pub composed: bool,
    pub cancelable: bool,
}

impl Notification {
    /// A bubbling, composed notification carrying `{"value": value}`.
    pub fn value_changed(name: &'static str, source: &'static str, value: Value) -> Self {
        Self {
            name,
            source,
            detail: Some(json!({ "value": value })),
            bubbles: true,
            composed: true,
            cancelable: false,
        }
    }

    /// A bubbling, composed signal with no payload.
    pub fn signal(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            source,
            detail: None,
            bubbles: true,
            composed: true,
            cancelable: false,
        }
    }

    /// The `value` field of the detail payload, if any.
    pub fn value(&self) -> Option<&Value> {
        self.detail.as_ref().and_then(|detail| detail.get("value"))
    }
}

/// Sending half of a notification channel.
#[derive(Debug, Clone)]
pub struct NotificationSink {
    tx: mpsc::UnboundedSender<Notification>,
}

impl NotificationSink {
    pub fn new(tx: mpsc::UnboundedSender<Notification>) -> Self {
        Self { tx }
    }

    /// A sink and the receiver an ancestor listens on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn dispatch(&self, notification: Notification) {
        log::debug!("notify: {} from <{}>", notification.name, notification.source);
        if let Err(err) = self.tx.send(notification) {
            log::debug!("notify: no listener for {}", err.0.name);
        }
    }
}

/// A tracked property and the notification it raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyingProperty {
    pub property: &'static str,
    pub event_name: &'static str,
}

/// Properties written during the current update cycle, with the value each
/// had when the cycle began.
#[derive(Debug, Clone, Default)]
pub struct ChangedProperties {
    entries: Vec<(&'static str, Value)>,
}

impl ChangedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `value` into `slot` if it differs, recording the change.
    ///
    /// Returns whether anything was written. Assigning the current value is
    /// a no-op and is not recorded.
    pub fn assign<T>(&mut self, property: &'static str, slot: &mut T, value: T) -> bool
    where
        T: PartialEq + Serialize,
    {
        if *slot == value {
            return false;
        }
        if !self.has(property) {
            let previous = serde_json::to_value(&*slot).unwrap_or(Value::Null);
            self.entries.push((property, previous));
        }
        *slot = value;
        true
    }

    pub fn has(&self, property: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == property)
    }

    /// The value `property` had before the first write of this cycle.
    pub fn previous(&self, property: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Raises change notifications for a fixed property table.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    source: &'static str,
    properties: &'static [NotifyingProperty],
    sink: NotificationSink,
}

impl ChangeNotifier {
    pub fn new(source: &'static str, properties: &'static [NotifyingProperty], sink: NotificationSink) -> Self {
        Self {
            source,
            properties,
            sink,
        }
    }

    /// Settle one update cycle.
    ///
    /// `read` returns the current value of a property. Every property written
    /// during the cycle raises once with its final value, even if it ended
    /// up back where it started. The batch is cleared afterwards. Returns how
    /// many notifications were raised.
    pub fn notify_changes<F>(&self, changed: &mut ChangedProperties, read: F) -> usize
    where
        F: Fn(&str) -> Option<Value>,
    {
        let mut raised = 0;
        for entry in self.properties {
            if !changed.has(entry.property) {
                continue;
            }
            let Some(current) = read(entry.property) else {
                continue;
            };
            self.sink
                .dispatch(Notification::value_changed(entry.event_name, self.source, current));
            raised += 1;
        }
        changed.clear();
        raised
    }
}

/// One-shot focus and blur signals scoped to a primary element.
#[derive(Debug, Clone)]
pub struct FocusSignals {
    source: &'static str,
    primary: ElementId,
    focus_event: &'static str,
    blur_event: &'static str,
    sink: NotificationSink,
}

impl FocusSignals {
    pub fn new(
        source: &'static str,
        primary: ElementId,
        focus_event: &'static str,
        blur_event: &'static str,
        sink: NotificationSink,
    ) -> Self {
        Self {
            source,
            primary,
            focus_event,
            blur_event,
            sink,
        }
    }

    /// Returns whether a signal was raised.
    pub fn focus(&self, origin: ElementId) -> bool {
        self.raise_if_primary(origin, self.focus_event)
    }

    /// Returns whether a signal was raised.
    pub fn blur(&self, origin: ElementId) -> bool {
        self.raise_if_primary(origin, self.blur_event)
    }

    fn raise_if_primary(&self, origin: ElementId, name: &'static str) -> bool {
        if origin != self.primary {
            return false;
        }
        self.sink.dispatch(Notification::signal(name, self.source));
        true
    }

    pub fn primary(&self) -> ElementId {
        self.primary
    }
}
