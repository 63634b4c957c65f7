//! Notification sink contract and toast state.
//!
//! DESIGN
//! ======
//! The wizard and the stub forms never talk to a toast UI directly. They
//! receive a `Notifier` so tests can substitute a recording fake and assert
//! on what was emitted. `ToastSink` is the production implementation,
//! pushing into the shared `ToastState` signal rendered by `ToastHost`.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Anything that can surface a notification to the user.
pub trait Notifier {
    fn notify(&self, note: Notification);
}

/// A queued toast with a stable id for dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub note: Notification,
}

/// Toast queue shared across the app via context.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a notification, returning the id assigned to it.
    pub fn push(&mut self, note: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, note });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Highest id handed out so far, if any toast was ever pushed.
    pub fn last_id(&self) -> Option<u64> {
        self.next_id.checked_sub(1)
    }
}

/// `Notifier` backed by the shared toast signal.
#[derive(Clone, Copy)]
pub struct ToastSink(pub RwSignal<ToastState>);

impl Notifier for ToastSink {
    fn notify(&self, note: Notification) {
        self.0.update(|state| {
            state.push(note);
        });
    }
}
