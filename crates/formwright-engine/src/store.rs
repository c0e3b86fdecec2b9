//! Form-state store contract and the bundled in-memory implementation.

use std::collections::HashMap;

use crossbeam_channel::{Receiver, Sender, unbounded};
use schema::Values;
use serde_json::Value;
use tracing::trace;

/// A recorded validation failure for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldFailure {
    /// Explicit display message; bare failures fall back to a label-derived
    /// string at resolution time.
    pub message: Option<String>,
}

impl FieldFailure {
    /// Failure carrying an explicit message.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
        }
    }
}

/// Notification that a field's value changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// Name of the field whose value changed.
    pub name: String,
}

/// The form-state collaborator as seen by the engine.
///
/// The store owns live values, registration, and validation results. The
/// engine reads snapshots, registers visible fields, and subscribes to
/// change notifications; it never holds values of its own. The widget layer
/// binds inputs to values through [`FormStore::set`].
pub trait FormStore {
    /// Register a field for value binding and validation.
    fn register(&mut self, name: &str);

    /// Remove a previously registered field.
    fn unregister(&mut self, name: &str);

    /// Write one field value, notifying watchers.
    fn set(&mut self, name: &str, value: Value);

    /// Current value snapshot.
    fn values(&self) -> &Values;

    /// Recorded validation failure for a field, if any.
    fn failure(&self, name: &str) -> Option<&FieldFailure>;

    /// Subscribe to change notifications.
    fn watch(&mut self) -> Receiver<FieldChange>;

    /// Clear all values and failures, notifying watchers.
    fn reset(&mut self);
}

/// Single-threaded in-memory store.
///
/// Validation failures are written onto it by the external validator through
/// [`MemoryStore::set_failure`]; the engine only reads them.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Live values keyed by field name.
    values: Values,
    /// Validation failures keyed by field name.
    failures: HashMap<String, FieldFailure>,
    /// Names currently registered by the engine, in registration order.
    registered: Vec<String>,
    /// Change notification subscribers.
    watchers: Vec<Sender<FieldChange>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with pre-seeded values.
    pub fn with_values(values: Values) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Record a validation failure for `name`.
    pub fn set_failure(&mut self, name: impl Into<String>, failure: FieldFailure) {
        self.failures.insert(name.into(), failure);
    }

    /// Clear the failure for `name`.
    pub fn clear_failure(&mut self, name: &str) {
        self.failures.remove(name);
    }

    /// Names registered by the engine, in registration order.
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// Fan a change notification out to live watchers, dropping closed ones.
    fn notify(&mut self, name: &str) {
        self.watchers.retain(|watcher| {
            watcher
                .send(FieldChange {
                    name: name.to_string(),
                })
                .is_ok()
        });
    }
}

impl FormStore for MemoryStore {
    fn register(&mut self, name: &str) {
        if !self.registered.iter().any(|n| n == name) {
            self.registered.push(name.to_string());
        }
    }

    fn unregister(&mut self, name: &str) {
        self.registered.retain(|n| n != name);
    }

    fn set(&mut self, name: &str, value: Value) {
        trace!(field = name, "store value updated");
        self.values.insert(name.to_string(), value);
        self.notify(name);
    }

    fn values(&self) -> &Values {
        &self.values
    }

    fn failure(&self, name: &str) -> Option<&FieldFailure> {
        self.failures.get(name)
    }

    fn watch(&mut self) -> Receiver<FieldChange> {
        let (sender, receiver) = unbounded();
        self.watchers.push(sender);
        receiver
    }

    fn reset(&mut self) {
        let cleared: Vec<String> = self.values.keys().cloned().collect();
        self.values.clear();
        self.failures.clear();
        for name in cleared {
            self.notify(&name);
        }
    }
}
