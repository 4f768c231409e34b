//! The runtime builder record.
//!
//! A [`Builder`] is an insertion-ordered map from keys to [`Entry`] values.
//! Data properties, setters and attached operations share one key space, so
//! the builder's "own keys" can be enumerated the same way whatever they hold.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::options::Action;

/// One slot of a builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Declared but never assigned.
    Absent,
    /// A data value.
    Value(Value),
    /// A setter assigning the property `target`.
    Setter {
        /// Stored property name the setter writes to.
        target: String,
    },
    /// An attached builder operation.
    Operation(Operation),
}

impl Entry {
    /// Setters and operations carry the callable tag; data does not.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Setter { .. } | Self::Operation(_))
    }

    /// The data value, if this entry holds one.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Operations a builder may carry besides its setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Bulk assignment, [`Builder::set`].
    Set,
    /// [`Builder::reset`].
    Reset,
    /// [`Builder::finalize`].
    Finalize,
}

impl Operation {
    /// The key the operation is attached under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Reset => "reset",
            Self::Finalize => "finalize",
        }
    }
}

/// Declared property and setter names, index-aligned, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    keys: Vec<String>,
    setters: Vec<String>,
}

impl Schema {
    /// Stored property names.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Setter names; `setters()[i]` assigns `keys()[i]`.
    #[must_use]
    pub fn setters(&self) -> &[String] {
        &self.setters
    }

    /// Number of declared properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if nothing was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// `(key, setter)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .zip(&self.setters)
            .map(|(k, s)| (k.as_str(), s.as_str()))
    }

    fn push(&mut self, key: String, setter: String) {
        self.keys.push(key);
        self.setters.push(setter);
    }
}

/// Cleanup queued for `finalize`, run in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FinalizeAction {
    RemoveSetters,
    RemoveUnused,
}

/// A builder produced by the factory.
///
/// Setters are looked up by name and return the builder, so calls chain:
///
/// ```
/// use alien::build;
/// use serde_json::json;
///
/// let mut builder = build(["a", "b"], None);
/// builder.invoke("setA", 1)?.invoke("setB", 2)?;
///
/// assert_eq!(builder.value("a"), Some(&json!(1)));
/// assert_eq!(builder.value("b"), Some(&json!(2)));
/// # Ok::<(), alien::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    entries: IndexMap<String, Entry>,
    schema: Option<Schema>,
    allow_unsafe: bool,
    create_blank: bool,
    finalize_actions: Vec<FinalizeAction>,
    final_action: Action,
    finalized: bool,
}

impl Builder {
    pub(crate) fn new(allow_unsafe: bool, create_blank: bool, final_action: Action) -> Self {
        Self {
            entries: IndexMap::new(),
            schema: None,
            allow_unsafe,
            create_blank,
            finalize_actions: Vec::new(),
            final_action,
            finalized: false,
        }
    }

    /// The entry stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// The data value stored under `key`, if it holds one.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(Entry::as_value)
    }

    /// Returns `true` if `key` exists and still holds the absent sentinel.
    #[must_use]
    pub fn is_absent(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Entry::Absent))
    }

    /// Returns `true` if `key` exists at all.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns `true` if `key` is a setter.
    #[must_use]
    pub fn is_setter(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Entry::Setter { .. }))
    }

    /// Returns `true` if `operation` is currently attached.
    #[must_use]
    pub fn has_operation(&self, operation: Operation) -> bool {
        matches!(self.get(operation.name()), Some(Entry::Operation(op)) if *op == operation)
    }

    /// Own keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Own entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Number of own keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the builder has no own keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The schema, when enabled.
    #[must_use]
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Data entries as a JSON object. Absent properties become `null`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .filter_map(|(key, entry)| match entry {
                Entry::Absent => Some((key.clone(), Value::Null)),
                Entry::Value(v) => Some((key.clone(), v.clone())),
                Entry::Setter { .. } | Entry::Operation(_) => None,
            })
            .collect();
        Value::Object(map)
    }

    /// Stores a data value under `key`, replacing whatever was there.
    ///
    /// This bypasses setters; hooks use it to decorate the builder.
    pub fn assign(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(key.into(), Entry::Value(value.into()));
        self
    }

    /// Removes `key`, returning its entry.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        self.entries.shift_remove(key)
    }

    /// Runs the setter named `setter` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSetter`] if `setter` is not a setter of this
    /// builder (never declared, or removed by finalization).
    pub fn invoke(&mut self, setter: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let target = match self.entries.get(setter) {
            Some(Entry::Setter { target }) => target.clone(),
            _ => {
                return Err(Error::UnknownSetter {
                    name: setter.to_string(),
                })
            }
        };
        self.entries.insert(target, Entry::Value(value.into()));
        Ok(self)
    }

    /// Bulk assignment over the known key set.
    ///
    /// Every known key present in `partial` is copied onto the builder.
    /// Keys of `partial` outside the known key set are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationUnavailable`] if `set` is not attached.
    pub fn set(&mut self, partial: &Map<String, Value>) -> Result<&mut Self> {
        self.require(Operation::Set)?;
        for key in self.known_keys() {
            if let Some(value) = partial.get(&key) {
                self.entries.insert(key, Entry::Value(value.clone()));
            }
        }
        Ok(self)
    }

    /// Restores every known key to the absent sentinel, or removes it when
    /// blank properties are disabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationUnavailable`] if `reset` is not attached.
    pub fn reset(&mut self) -> Result<&mut Self> {
        self.require(Operation::Reset)?;
        for key in self.known_keys() {
            if self.create_blank {
                self.entries.insert(key, Entry::Absent);
            } else {
                self.entries.shift_remove(&key);
            }
        }
        Ok(self)
    }

    /// Runs queued cleanup, then the final hook, then detaches itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationUnavailable`] if the builder was already
    /// finalized, including from inside the final hook. Nothing is re-run
    /// in that case.
    pub fn finalize(&mut self) -> Result<&mut Self> {
        self.require(Operation::Finalize)?;
        self.finalized = true;

        for action in std::mem::take(&mut self.finalize_actions) {
            match action {
                FinalizeAction::RemoveSetters => self.remove_setters(),
                FinalizeAction::RemoveUnused => self.remove_unused(),
            }
        }

        let hook = self.final_action.clone();
        hook.run(self);

        self.entries.shift_remove(Operation::Finalize.name());
        log::debug!("builder finalized with {} keys", self.entries.len());
        Ok(self)
    }

    fn require(&self, operation: Operation) -> Result<()> {
        let spent = operation == Operation::Finalize && self.finalized;
        if self.has_operation(operation) && !spent {
            Ok(())
        } else {
            Err(Error::OperationUnavailable {
                operation: operation.name(),
            })
        }
    }

    /// Keys that bulk operations act on.
    ///
    /// The schema's keys when there is one; otherwise, in unsafe mode, every
    /// own data key; otherwise nothing.
    fn known_keys(&self) -> Vec<String> {
        match &self.schema {
            Some(schema) => schema.keys.clone(),
            None if self.allow_unsafe => self
                .entries
                .iter()
                .filter(|(_, entry)| !entry.is_callable())
                .map(|(key, _)| key.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Keys considered setters by `removeSetters`.
    ///
    /// Without a schema, unsafe mode treats every callable entry as a
    /// setter, attached operations included.
    fn known_setters(&self) -> Vec<String> {
        match &self.schema {
            Some(schema) => schema.setters.clone(),
            None if self.allow_unsafe => self
                .entries
                .iter()
                .filter(|(_, entry)| entry.is_callable())
                .map(|(key, _)| key.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    fn remove_setters(&mut self) {
        for key in self.known_setters() {
            if self.entries.get(&key).is_some_and(Entry::is_callable) {
                self.entries.shift_remove(&key);
            }
        }
    }

    fn remove_unused(&mut self) {
        for key in self.known_keys() {
            if matches!(self.entries.get(&key), Some(Entry::Absent)) {
                self.entries.shift_remove(&key);
            }
        }
    }

    pub(crate) fn attach_schema(&mut self) {
        self.schema = Some(Schema::default());
    }

    pub(crate) fn attach_absent(&mut self, name: &str) {
        self.entries.insert(name.to_string(), Entry::Absent);
    }

    pub(crate) fn attach_setter(&mut self, setter: &str, target: &str) {
        self.entries.insert(
            setter.to_string(),
            Entry::Setter {
                target: target.to_string(),
            },
        );
    }

    pub(crate) fn attach_operation(&mut self, operation: Operation) {
        self.entries
            .insert(operation.name().to_string(), Entry::Operation(operation));
    }

    pub(crate) fn record(&mut self, name: &str, setter: &str) {
        if let Some(schema) = self.schema.as_mut() {
            schema.push(name.to_string(), setter.to_string());
        }
    }

    pub(crate) fn queue(&mut self, action: FinalizeAction) {
        self.finalize_actions.push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn wired(schema: bool, allow_unsafe: bool) -> Builder {
        let mut b = Builder::new(allow_unsafe, true, Action::noop());
        if schema {
            b.attach_schema();
        }
        for (name, setter) in [("name", "setName"), ("email", "setEmail")] {
            b.attach_absent(name);
            b.attach_setter(setter, name);
            b.record(name, setter);
        }
        b
    }

    #[test]
    fn test_entry_tags() {
        assert!(Entry::Setter { target: "a".into() }.is_callable());
        assert!(Entry::Operation(Operation::Set).is_callable());
        assert!(!Entry::Absent.is_callable());
        assert!(!Entry::Value(json!(1)).is_callable());
        assert_eq!(Entry::Value(json!("x")).as_value(), Some(&json!("x")));
    }

    #[test]
    fn test_invoke_assigns_and_chains() {
        let mut b = wired(true, true);
        b.invoke("setName", "John")
            .unwrap()
            .invoke("setEmail", "john@email.com")
            .unwrap();
        assert_eq!(b.value("name"), Some(&json!("John")));
        assert_eq!(b.value("email"), Some(&json!("john@email.com")));
    }

    #[test]
    fn test_invoke_rejects_non_setters() {
        let mut b = wired(true, true);
        assert!(matches!(
            b.invoke("name", 1),
            Err(Error::UnknownSetter { .. })
        ));
        assert!(matches!(
            b.invoke("setAge", 1),
            Err(Error::UnknownSetter { .. })
        ));
    }

    #[test]
    fn test_operations_require_attachment() {
        let mut b = wired(true, true);
        let partial = Map::new();
        assert!(matches!(
            b.set(&partial),
            Err(Error::OperationUnavailable { operation: "set" })
        ));
        assert!(b.reset().is_err());
        assert!(b.finalize().is_err());
    }

    #[test]
    fn test_set_ignores_unknown_keys() {
        let mut b = wired(true, true);
        b.attach_operation(Operation::Set);
        let partial = json!({"name": "John", "age": 3});
        b.set(partial.as_object().unwrap()).unwrap();
        assert_eq!(b.value("name"), Some(&json!("John")));
        assert!(b.is_absent("email"));
        assert!(!b.contains("age"));
    }

    #[test]
    fn test_known_keys_without_schema() {
        let safe = wired(false, false);
        assert!(safe.known_keys().is_empty());
        assert!(safe.known_setters().is_empty());

        let mut unsafe_mode = wired(false, true);
        unsafe_mode.attach_operation(Operation::Finalize);
        assert_eq!(unsafe_mode.known_keys(), vec!["name", "email"]);
        assert_eq!(
            unsafe_mode.known_setters(),
            vec!["setName", "setEmail", "finalize"]
        );
    }

    #[test]
    fn test_finalize_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut b = Builder::new(
            true,
            true,
            Action::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        b.attach_operation(Operation::Finalize);

        b.finalize().unwrap();
        assert!(!b.has_operation(Operation::Finalize));
        assert!(matches!(
            b.finalize(),
            Err(Error::OperationUnavailable {
                operation: "finalize"
            })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_finalize_from_final_hook_is_rejected() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut b = Builder::new(
            true,
            true,
            Action::new(move |b| {
                if counter.fetch_add(1, Ordering::SeqCst) < 50 {
                    let nested = b.finalize().is_err();
                    b.assign("nestedRejected", nested);
                }
            }),
        );
        b.attach_operation(Operation::Finalize);

        b.finalize().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(b.value("nestedRejected"), Some(&json!(true)));
        assert!(!b.has_operation(Operation::Finalize));
    }

    #[test]
    fn test_to_json_skips_callables() {
        let mut b = wired(true, true);
        b.attach_operation(Operation::Finalize);
        b.invoke("setName", "John").unwrap();
        assert_eq!(b.to_json(), json!({"name": "John", "email": null}));
    }

    #[test]
    fn test_schema_iter_pairs() {
        let b = wired(true, true);
        let schema = b.schema().unwrap();
        let pairs: Vec<_> = schema.iter().collect();
        assert_eq!(pairs, vec![("name", "setName"), ("email", "setEmail")]);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_assign_and_remove() {
        let mut b = wired(true, true);
        b.assign("extra", json!([1, 2]));
        assert_eq!(b.value("extra"), Some(&json!([1, 2])));
        assert_eq!(b.remove("extra"), Some(Entry::Value(json!([1, 2]))));
        assert!(b.remove("extra").is_none());
        assert_eq!(b.keys().collect::<Vec<_>>(), ["name", "setName", "email", "setEmail"]);
    }
}
