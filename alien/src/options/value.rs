//! Option leaf values.
//!
//! Options are either flags or callables. Callables are shared behind
//! `Arc` so configurations stay cheap to clone.

use std::fmt;
use std::sync::Arc;

use crate::builder::Builder;
use crate::options::defaults::OptionKind;

/// Maps a declared identifier to a derived name.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Transform {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(str::to_owned)
    }

    /// Applies the transform.
    #[must_use]
    pub fn apply(&self, ident: &str) -> String {
        (self.0)(ident)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// A lifecycle hook receiving the builder.
#[derive(Clone)]
pub struct Action(Arc<dyn Fn(&mut Builder) + Send + Sync>);

impl Action {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Builder) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A hook that does nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Runs the hook.
    pub fn run(&self, builder: &mut Builder) {
        (self.0)(builder);
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// A per-property hook receiving the builder and the stored property name.
#[derive(Clone)]
pub struct StepAction(Arc<dyn Fn(&mut Builder, &str) + Send + Sync>);

impl StepAction {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Builder, &str) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A hook that does nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_, _| {})
    }

    /// Runs the hook.
    pub fn run(&self, builder: &mut Builder, name: &str) {
        (self.0)(builder, name);
    }
}

impl fmt::Debug for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StepAction(..)")
    }
}

/// A single option value, tagged by kind.
///
/// # Examples
///
/// ```
/// use alien::options::{OptionKind, OptionValue};
///
/// let flag: OptionValue = true.into();
/// assert_eq!(flag.kind(), OptionKind::Flag);
///
/// let transform = OptionValue::transform(|name| format!("_{name}"));
/// assert_eq!(transform.kind(), OptionKind::Transform);
/// ```
#[derive(Debug, Clone)]
pub enum OptionValue {
    /// A boolean switch.
    Flag(bool),
    /// An identifier transform.
    Transform(Transform),
    /// A builder hook.
    Action(Action),
    /// A per-property builder hook.
    StepAction(StepAction),
}

impl OptionValue {
    /// Builds a [`OptionValue::Transform`] from a closure.
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Transform(Transform::new(f))
    }

    /// Builds a [`OptionValue::Action`] from a closure.
    pub fn action<F>(f: F) -> Self
    where
        F: Fn(&mut Builder) + Send + Sync + 'static,
    {
        Self::Action(Action::new(f))
    }

    /// Builds a [`OptionValue::StepAction`] from a closure.
    pub fn step_action<F>(f: F) -> Self
    where
        F: Fn(&mut Builder, &str) + Send + Sync + 'static,
    {
        Self::StepAction(StepAction::new(f))
    }

    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        match self {
            Self::Flag(_) => OptionKind::Flag,
            Self::Transform(_) => OptionKind::Transform,
            Self::Action(_) => OptionKind::Action,
            Self::StepAction(_) => OptionKind::StepAction,
        }
    }

    /// Returns the flag, if this is one.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Transform> for OptionValue {
    fn from(value: Transform) -> Self {
        Self::Transform(value)
    }
}

impl From<Action> for OptionValue {
    fn from(value: Action) -> Self {
        Self::Action(value)
    }
}

impl From<StepAction> for OptionValue {
    fn from(value: StepAction) -> Self {
        Self::StepAction(value)
    }
}
