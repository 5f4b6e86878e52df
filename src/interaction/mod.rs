use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Keyboard shortcuts the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortcutKey {
    ArrowLeft,
    ArrowRight,
}

impl ShortcutKey {
    /// Maps a DOM-style key code. Unbound keys yield `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// Inbound request from the shell, already serialized into arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    SetTime(String),
    StepBackward,
    StepForward,
    SetChannel(String),
    Key(String),
    LoadFailed,
    LoadSucceeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

/// Environment-owned event source the viewer session attaches to.
///
/// Delivery happens only to live subscriptions; the shell decides what a
/// subscription maps to (window key listener, widget callbacks).
pub trait InputEventSource {
    fn subscribe(&mut self) -> SubscriptionId;
    /// Returns `true` when `id` was live.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
    fn next_event(&mut self, id: SubscriptionId) -> Option<InputEvent>;
}

/// FIFO source fed by the shell.
///
/// Events pushed while nobody is subscribed are dropped, the way a key press
/// is lost when no listener is installed.
#[derive(Debug, Default)]
pub struct QueuedInputSource {
    queue: VecDeque<InputEvent>,
    subscribers: Vec<SubscriptionId>,
    next_id: u64,
}

impl QueuedInputSource {
    pub fn push(&mut self, event: InputEvent) {
        if self.subscribers.is_empty() {
            trace!(?event, "dropping input event without subscribers");
            return;
        }
        self.queue.push_back(event);
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl InputEventSource for QueuedInputSource {
    fn subscribe(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(id);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(position) = self.subscribers.iter().position(|entry| *entry == id) else {
            return false;
        };
        self.subscribers.remove(position);
        if self.subscribers.is_empty() {
            self.queue.clear();
        }
        true
    }

    fn next_event(&mut self, id: SubscriptionId) -> Option<InputEvent> {
        if !self.subscribers.contains(&id) {
            return None;
        }
        self.queue.pop_front()
    }
}
