//! User configuration schema.
//!
//! [`Options`] mirrors the defaults table with every leaf optional. `None`
//! means "not supplied" and falls back to the default at resolution time.
//! Flag leaves can be read from YAML or JSON text; callables can only be
//! supplied programmatically.

use serde::Deserialize;
use serde_yaml::Value as Yaml;

use crate::error::{Error, Result};
use crate::options::defaults::{OptionKey, OptionKind, Section};
use crate::options::value::{Action, OptionValue, StepAction, Transform};

/// Complete user configuration.
///
/// # Examples
///
/// ```
/// use alien::options::{FinalizationOptions, Options};
///
/// let options = Options {
///     finalization: FinalizationOptions {
///         remove_unused: Some(true),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert_eq!(options.finalization.remove_unused, Some(true));
/// assert_eq!(options.finalization.remove_setters, None);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Cleanup performed by `finalize`.
    #[serde(default)]
    pub finalization: FinalizationOptions,

    /// Extra operations attached to the builder.
    #[serde(default)]
    pub object_utilities: ObjectUtilitiesOptions,

    /// Property and setter naming.
    #[serde(default)]
    pub control: ControlOptions,

    /// Lifecycle hooks.
    #[serde(default)]
    pub advanced: AdvancedOptions,
}

/// `finalization` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizationOptions {
    /// Drop properties still absent at finalize time.
    pub remove_unused: Option<bool>,

    /// Drop every setter at finalize time.
    pub remove_setters: Option<bool>,
}

/// `objectUtilities` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectUtilitiesOptions {
    /// Record declared keys and setters in a schema.
    pub schema: Option<bool>,

    /// Attach a `reset` operation.
    pub reset: Option<bool>,
}

/// `control` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlOptions {
    /// Declared identifier to stored property name.
    #[serde(skip)]
    pub name_transformer: Option<Transform>,

    /// Declared identifier to setter name.
    #[serde(skip)]
    pub setter_transformer: Option<Transform>,

    /// Attach a bulk `set` operation.
    pub set_objects: Option<bool>,

    /// Pre-create every declared property as absent.
    pub create_blank_property: Option<bool>,
}

/// `advanced` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedOptions {
    /// Runs on the empty builder.
    #[serde(skip)]
    pub start_action: Option<Action>,

    /// Runs at the end of `finalize`.
    #[serde(skip)]
    pub final_action: Option<Action>,

    /// Runs after each declared property is attached.
    #[serde(skip)]
    pub step_action: Option<StepAction>,

    /// Fall back to the builder's own keys when there is no schema.
    pub allow_unsafe_finalization: Option<bool>,
}

impl Options {
    /// Creates an empty configuration (every option defaulted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses canonical configuration from YAML (or JSON) text.
    ///
    /// Only flag options can be expressed in text. Unknown sections or
    /// options, and callable options, are ignored with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the text does not parse or a
    /// flag holds something other than a boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use alien::options::Options;
    ///
    /// let options = Options::from_yaml_str("finalization: { removeUnused: true }").unwrap();
    /// assert_eq!(options.finalization.remove_unused, Some(true));
    ///
    /// let options = Options::from_yaml_str("control: { bogus: true }").unwrap();
    /// assert_eq!(options.supplied(), 0);
    /// ```
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let root: Yaml = serde_yaml::from_str(text)?;
        if root.is_null() {
            return Ok(Self::default());
        }
        warn_ignored_keys(&root);
        Ok(serde_yaml::from_value(root)?)
    }

    /// Places a value at the option's canonical path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptionValue`] if the value's kind does not
    /// match the option's kind. The configuration is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use alien::options::{OptionKey, Options, OptionValue};
    ///
    /// let mut options = Options::new();
    /// options.insert(OptionKey::Reset, true.into()).unwrap();
    /// assert_eq!(options.object_utilities.reset, Some(true));
    ///
    /// assert!(options.insert(OptionKey::NameTransformer, true.into()).is_err());
    /// ```
    pub fn insert(&mut self, key: OptionKey, value: OptionValue) -> Result<()> {
        let mismatch = |found: &OptionValue| Error::InvalidOptionValue {
            option: key.path(),
            expected: key.kind(),
            found: found.kind(),
        };

        match (key, value) {
            (OptionKey::RemoveUnused, OptionValue::Flag(b)) => {
                self.finalization.remove_unused = Some(b);
            }
            (OptionKey::RemoveSetters, OptionValue::Flag(b)) => {
                self.finalization.remove_setters = Some(b);
            }
            (OptionKey::Schema, OptionValue::Flag(b)) => self.object_utilities.schema = Some(b),
            (OptionKey::Reset, OptionValue::Flag(b)) => self.object_utilities.reset = Some(b),
            (OptionKey::NameTransformer, OptionValue::Transform(t)) => {
                self.control.name_transformer = Some(t);
            }
            (OptionKey::SetterTransformer, OptionValue::Transform(t)) => {
                self.control.setter_transformer = Some(t);
            }
            (OptionKey::SetObjects, OptionValue::Flag(b)) => self.control.set_objects = Some(b),
            (OptionKey::CreateBlankProperty, OptionValue::Flag(b)) => {
                self.control.create_blank_property = Some(b);
            }
            (OptionKey::StartAction, OptionValue::Action(a)) => {
                self.advanced.start_action = Some(a);
            }
            (OptionKey::FinalAction, OptionValue::Action(a)) => {
                self.advanced.final_action = Some(a);
            }
            (OptionKey::StepAction, OptionValue::StepAction(a)) => {
                self.advanced.step_action = Some(a);
            }
            (OptionKey::AllowUnsafeFinalization, OptionValue::Flag(b)) => {
                self.advanced.allow_unsafe_finalization = Some(b);
            }
            (_, other) => return Err(mismatch(&other)),
        }
        Ok(())
    }

    /// Reads the value supplied for an option, if any.
    #[must_use]
    pub fn get(&self, key: OptionKey) -> Option<OptionValue> {
        match key {
            OptionKey::RemoveUnused => self.finalization.remove_unused.map(OptionValue::Flag),
            OptionKey::RemoveSetters => self.finalization.remove_setters.map(OptionValue::Flag),
            OptionKey::Schema => self.object_utilities.schema.map(OptionValue::Flag),
            OptionKey::Reset => self.object_utilities.reset.map(OptionValue::Flag),
            OptionKey::NameTransformer => self
                .control
                .name_transformer
                .clone()
                .map(OptionValue::Transform),
            OptionKey::SetterTransformer => self
                .control
                .setter_transformer
                .clone()
                .map(OptionValue::Transform),
            OptionKey::SetObjects => self.control.set_objects.map(OptionValue::Flag),
            OptionKey::CreateBlankProperty => {
                self.control.create_blank_property.map(OptionValue::Flag)
            }
            OptionKey::StartAction => self.advanced.start_action.clone().map(OptionValue::Action),
            OptionKey::FinalAction => self.advanced.final_action.clone().map(OptionValue::Action),
            OptionKey::StepAction => self
                .advanced
                .step_action
                .clone()
                .map(OptionValue::StepAction),
            OptionKey::AllowUnsafeFinalization => self
                .advanced
                .allow_unsafe_finalization
                .map(OptionValue::Flag),
        }
    }

    /// Overlays `source` onto `target`: every option `source` supplies wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use alien::options::{ObjectUtilitiesOptions, Options};
    ///
    /// let mut target = Options::new();
    /// target.object_utilities.schema = Some(false);
    /// target.object_utilities.reset = Some(true);
    ///
    /// let mut source = Options::new();
    /// source.object_utilities.schema = Some(true);
    ///
    /// Options::merge_into(&mut target, &source);
    /// assert_eq!(target.object_utilities.schema, Some(true));
    /// assert_eq!(target.object_utilities.reset, Some(true));
    /// ```
    pub fn merge_into(target: &mut Self, source: &Self) {
        let (to, from) = (&mut target.finalization, &source.finalization);
        if from.remove_unused.is_some() {
            to.remove_unused = from.remove_unused;
        }
        if from.remove_setters.is_some() {
            to.remove_setters = from.remove_setters;
        }

        let (to, from) = (&mut target.object_utilities, &source.object_utilities);
        if from.schema.is_some() {
            to.schema = from.schema;
        }
        if from.reset.is_some() {
            to.reset = from.reset;
        }

        let (to, from) = (&mut target.control, &source.control);
        if from.name_transformer.is_some() {
            to.name_transformer.clone_from(&from.name_transformer);
        }
        if from.setter_transformer.is_some() {
            to.setter_transformer.clone_from(&from.setter_transformer);
        }
        if from.set_objects.is_some() {
            to.set_objects = from.set_objects;
        }
        if from.create_blank_property.is_some() {
            to.create_blank_property = from.create_blank_property;
        }

        let (to, from) = (&mut target.advanced, &source.advanced);
        if from.start_action.is_some() {
            to.start_action.clone_from(&from.start_action);
        }
        if from.final_action.is_some() {
            to.final_action.clone_from(&from.final_action);
        }
        if from.step_action.is_some() {
            to.step_action.clone_from(&from.step_action);
        }
        if from.allow_unsafe_finalization.is_some() {
            to.allow_unsafe_finalization = from.allow_unsafe_finalization;
        }
    }

    /// Number of options explicitly supplied.
    #[must_use]
    pub fn supplied(&self) -> usize {
        OptionKey::ALL
            .iter()
            .filter(|key| self.get(**key).is_some())
            .count()
    }
}

/// Logs every key that deserialization will skip.
fn warn_ignored_keys(root: &Yaml) {
    let Yaml::Mapping(sections) = root else {
        return;
    };
    for (section, inner) in sections {
        let Some(name) = section.as_str() else {
            continue;
        };
        let Some(section) = Section::ALL.into_iter().find(|s| s.name() == name) else {
            log::warn!("ignoring unknown configuration section '{name}'");
            continue;
        };
        let Yaml::Mapping(options) = inner else {
            continue;
        };
        for option in options.keys().filter_map(Yaml::as_str) {
            match section.options().iter().find(|k| k.ident() == option) {
                Some(key) if key.kind() == OptionKind::Flag => {}
                Some(key) => log::warn!("ignoring '{key}': a {} cannot be given as text", key.kind()),
                None => log::warn!("ignoring unknown option '{name}.{option}'"),
            }
        }
    }
}
