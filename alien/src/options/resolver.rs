//! Option resolution.
//!
//! Merges user configuration over the defaults table, producing one
//! concrete value per recognized option.

use crate::options::defaults::OptionKey;
use crate::options::schema::Options;
use crate::options::value::{Action, OptionValue, StepAction, Transform};

/// Fully resolved configuration. Every leaf is concrete.
///
/// `EffectiveConfig::default()` is the defaults table.
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    /// `finalization` section.
    pub finalization: FinalizationConfig,
    /// `objectUtilities` section.
    pub object_utilities: ObjectUtilitiesConfig,
    /// `control` section.
    pub control: ControlConfig,
    /// `advanced` section.
    pub advanced: AdvancedConfig,
}

/// Resolved `finalization` section.
#[derive(Debug, Clone)]
pub struct FinalizationConfig {
    /// Drop properties still absent at finalize time.
    pub remove_unused: bool,
    /// Drop every setter at finalize time.
    pub remove_setters: bool,
}

/// Resolved `objectUtilities` section.
#[derive(Debug, Clone)]
pub struct ObjectUtilitiesConfig {
    /// Record declared keys and setters in a schema.
    pub schema: bool,
    /// Attach a `reset` operation.
    pub reset: bool,
}

/// Resolved `control` section.
#[derive(Debug, Clone)]
pub struct ControlConfig {
    /// Declared identifier to stored property name.
    pub name_transformer: Transform,
    /// Declared identifier to setter name.
    pub setter_transformer: Transform,
    /// Attach a bulk `set` operation.
    pub set_objects: bool,
    /// Pre-create every declared property as absent.
    pub create_blank_property: bool,
}

/// Resolved `advanced` section.
#[derive(Debug, Clone)]
pub struct AdvancedConfig {
    /// Runs on the empty builder.
    pub start_action: Action,
    /// Runs at the end of `finalize`.
    pub final_action: Action,
    /// Runs after each declared property is attached.
    pub step_action: StepAction,
    /// Fall back to the builder's own keys when there is no schema.
    pub allow_unsafe_finalization: bool,
}

impl EffectiveConfig {
    /// Reads one resolved option as a tagged value.
    #[must_use]
    pub fn value(&self, key: OptionKey) -> OptionValue {
        match key {
            OptionKey::RemoveUnused => self.finalization.remove_unused.into(),
            OptionKey::RemoveSetters => self.finalization.remove_setters.into(),
            OptionKey::Schema => self.object_utilities.schema.into(),
            OptionKey::Reset => self.object_utilities.reset.into(),
            OptionKey::NameTransformer => self.control.name_transformer.clone().into(),
            OptionKey::SetterTransformer => self.control.setter_transformer.clone().into(),
            OptionKey::SetObjects => self.control.set_objects.into(),
            OptionKey::CreateBlankProperty => self.control.create_blank_property.into(),
            OptionKey::StartAction => self.advanced.start_action.clone().into(),
            OptionKey::FinalAction => self.advanced.final_action.clone().into(),
            OptionKey::StepAction => self.advanced.step_action.clone().into(),
            OptionKey::AllowUnsafeFinalization => self.advanced.allow_unsafe_finalization.into(),
        }
    }
}

/// Resolves user configuration against a fixed set of defaults.
///
/// # Examples
///
/// ```
/// use alien::options::{OptionResolver, Options};
///
/// let resolver = OptionResolver::default();
///
/// let mut user = Options::new();
/// user.finalization.remove_unused = Some(true);
///
/// let effective = resolver.resolve(&user);
/// assert!(effective.finalization.remove_unused);
/// assert!(effective.object_utilities.schema); // default
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionResolver {
    defaults: EffectiveConfig,
}

impl OptionResolver {
    /// Creates a resolver over the given defaults.
    #[must_use]
    pub fn new(defaults: EffectiveConfig) -> Self {
        Self { defaults }
    }

    /// The defaults this resolver falls back to.
    #[must_use]
    pub fn defaults(&self) -> &EffectiveConfig {
        &self.defaults
    }

    /// Resolves one user configuration.
    ///
    /// Each option takes the user's value when supplied, the default
    /// otherwise.
    #[must_use]
    pub fn resolve(&self, user: &Options) -> EffectiveConfig {
        let d = &self.defaults;
        EffectiveConfig {
            finalization: FinalizationConfig {
                remove_unused: user
                    .finalization
                    .remove_unused
                    .unwrap_or(d.finalization.remove_unused),
                remove_setters: user
                    .finalization
                    .remove_setters
                    .unwrap_or(d.finalization.remove_setters),
            },
            object_utilities: ObjectUtilitiesConfig {
                schema: user
                    .object_utilities
                    .schema
                    .unwrap_or(d.object_utilities.schema),
                reset: user
                    .object_utilities
                    .reset
                    .unwrap_or(d.object_utilities.reset),
            },
            control: ControlConfig {
                name_transformer: user
                    .control
                    .name_transformer
                    .clone()
                    .unwrap_or_else(|| d.control.name_transformer.clone()),
                setter_transformer: user
                    .control
                    .setter_transformer
                    .clone()
                    .unwrap_or_else(|| d.control.setter_transformer.clone()),
                set_objects: user.control.set_objects.unwrap_or(d.control.set_objects),
                create_blank_property: user
                    .control
                    .create_blank_property
                    .unwrap_or(d.control.create_blank_property),
            },
            advanced: AdvancedConfig {
                start_action: user
                    .advanced
                    .start_action
                    .clone()
                    .unwrap_or_else(|| d.advanced.start_action.clone()),
                final_action: user
                    .advanced
                    .final_action
                    .clone()
                    .unwrap_or_else(|| d.advanced.final_action.clone()),
                step_action: user
                    .advanced
                    .step_action
                    .clone()
                    .unwrap_or_else(|| d.advanced.step_action.clone()),
                allow_unsafe_finalization: user
                    .advanced
                    .allow_unsafe_finalization
                    .unwrap_or(d.advanced.allow_unsafe_finalization),
            },
        }
    }

    /// Resolves several configuration layers.
    ///
    /// Layers are given from lowest to highest precedence; later layers win
    /// for every option they supply.
    #[must_use]
    pub fn resolve_layers(&self, layers: &[Options]) -> EffectiveConfig {
        let mut merged = Options::default();
        for layer in layers {
            Options::merge_into(&mut merged, layer);
        }
        self.resolve(&merged)
    }
}
