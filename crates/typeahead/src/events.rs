//! Terminal picker events and the listeners that receive them.

use serde::Serialize;
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

/// What the host learns when a picker closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "value")]
pub enum SelectionEvent {
    /// The user backed out; apply nothing
    #[serde(rename = "selectionCancel")]
    Cancel,
    /// The user confirmed; `None` when nothing was selected
    #[serde(rename = "selectionChange")]
    Change(Option<String>),
}

impl SelectionEvent {
    /// Event name as the host UI knows it.
    pub fn name(&self) -> &'static str {
        match self {
            SelectionEvent::Cancel => "selectionCancel",
            SelectionEvent::Change(_) => "selectionChange",
        }
    }
}

type Callback = Box<dyn FnMut(&SelectionEvent)>;

/// Registered receivers of picker events.
///
/// Callbacks run in registration order, then every live channel subscriber
/// gets its own copy.
#[derive(Default)]
pub struct Listeners {
    callbacks: Vec<Callback>,
    subscribers: Vec<Sender<SelectionEvent>>,
}

impl Listeners {
    /// Create an empty listener set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every event.
    pub fn on_event(&mut self, callback: impl FnMut(&SelectionEvent) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Receive cancellations only.
    pub fn on_cancel(&mut self, mut callback: impl FnMut() + 'static) {
        self.on_event(move |event| {
            if let SelectionEvent::Cancel = event {
                callback();
            }
        });
    }

    /// Receive confirmed values only.
    pub fn on_change(&mut self, mut callback: impl FnMut(Option<&str>) + 'static) {
        self.on_event(move |event| {
            if let SelectionEvent::Change(value) = event {
                callback(value.as_deref());
            }
        });
    }

    /// Receive events over a channel.
    pub fn subscribe(&mut self) -> Receiver<SelectionEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver an event to everyone registered.
    pub fn emit(&mut self, event: SelectionEvent) {
        tracing::debug!(event = event.name(), "Emitting selection event");

        for callback in &mut self.callbacks {
            callback(&event);
        }
        // A failed send means the receiver is gone.
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of registered callbacks and live subscribers.
    pub fn len(&self) -> usize {
        self.callbacks.len() + self.subscribers.len()
    }

    /// True when nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("callbacks", &self.callbacks.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
