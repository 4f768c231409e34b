//! The option defaults table.
//!
//! Every recognized option, its section, its canonical spelling and its
//! default value are declared here and nowhere else. Declaration order
//! matters: abbreviated keys resolve to the first matching name.

use std::fmt;

use crate::naming;
use crate::options::resolver::{
    AdvancedConfig, ControlConfig, EffectiveConfig, FinalizationConfig, ObjectUtilitiesConfig,
};
use crate::options::value::{Action, StepAction, Transform};

/// A configuration section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Cleanup performed by `finalize`.
    Finalization,
    /// Extra operations attached to the builder.
    ObjectUtilities,
    /// How properties and setters are named and created.
    Control,
    /// Lifecycle hooks and compatibility switches.
    Advanced,
}

impl Section {
    /// All sections, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Finalization,
        Self::ObjectUtilities,
        Self::Control,
        Self::Advanced,
    ];

    /// Canonical section name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Finalization => "finalization",
            Self::ObjectUtilities => "objectUtilities",
            Self::Control => "control",
            Self::Advanced => "advanced",
        }
    }

    /// Options belonging to this section, in declaration order.
    #[must_use]
    pub const fn options(self) -> &'static [OptionKey] {
        match self {
            Self::Finalization => &[OptionKey::RemoveUnused, OptionKey::RemoveSetters],
            Self::ObjectUtilities => &[OptionKey::Schema, OptionKey::Reset],
            Self::Control => &[
                OptionKey::NameTransformer,
                OptionKey::SetterTransformer,
                OptionKey::SetObjects,
                OptionKey::CreateBlankProperty,
            ],
            Self::Advanced => &[
                OptionKey::StartAction,
                OptionKey::FinalAction,
                OptionKey::StepAction,
                OptionKey::AllowUnsafeFinalization,
            ],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognized option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// `finalization.removeUnused`
    RemoveUnused,
    /// `finalization.removeSetters`
    RemoveSetters,
    /// `objectUtilities.schema`
    Schema,
    /// `objectUtilities.reset`
    Reset,
    /// `control.nameTransformer`
    NameTransformer,
    /// `control.setterTransformer`
    SetterTransformer,
    /// `control.setObjects`
    SetObjects,
    /// `control.createBlankProperty`
    CreateBlankProperty,
    /// `advanced.startAction`
    StartAction,
    /// `advanced.finalAction`
    FinalAction,
    /// `advanced.stepAction`
    StepAction,
    /// `advanced.allowUnsafeFinalization`
    AllowUnsafeFinalization,
}

impl OptionKey {
    /// All options, section by section in declaration order.
    pub const ALL: [Self; 12] = [
        Self::RemoveUnused,
        Self::RemoveSetters,
        Self::Schema,
        Self::Reset,
        Self::NameTransformer,
        Self::SetterTransformer,
        Self::SetObjects,
        Self::CreateBlankProperty,
        Self::StartAction,
        Self::FinalAction,
        Self::StepAction,
        Self::AllowUnsafeFinalization,
    ];

    /// The section this option lives in.
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::RemoveUnused | Self::RemoveSetters => Section::Finalization,
            Self::Schema | Self::Reset => Section::ObjectUtilities,
            Self::NameTransformer
            | Self::SetterTransformer
            | Self::SetObjects
            | Self::CreateBlankProperty => Section::Control,
            Self::StartAction
            | Self::FinalAction
            | Self::StepAction
            | Self::AllowUnsafeFinalization => Section::Advanced,
        }
    }

    /// Canonical option identifier.
    #[must_use]
    pub const fn ident(self) -> &'static str {
        match self {
            Self::RemoveUnused => "removeUnused",
            Self::RemoveSetters => "removeSetters",
            Self::Schema => "schema",
            Self::Reset => "reset",
            Self::NameTransformer => "nameTransformer",
            Self::SetterTransformer => "setterTransformer",
            Self::SetObjects => "setObjects",
            Self::CreateBlankProperty => "createBlankProperty",
            Self::StartAction => "startAction",
            Self::FinalAction => "finalAction",
            Self::StepAction => "stepAction",
            Self::AllowUnsafeFinalization => "allowUnsafeFinalization",
        }
    }

    /// The kind of value this option accepts.
    #[must_use]
    pub const fn kind(self) -> OptionKind {
        match self {
            Self::NameTransformer | Self::SetterTransformer => OptionKind::Transform,
            Self::StartAction | Self::FinalAction => OptionKind::Action,
            Self::StepAction => OptionKind::StepAction,
            _ => OptionKind::Flag,
        }
    }

    /// `section.option` path, e.g. `control.nameTransformer`.
    #[must_use]
    pub fn path(self) -> String {
        format!("{}.{}", self.section().name(), self.ident())
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.ident())
    }
}

/// The kind of value an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `bool`
    Flag,
    /// [`Transform`]
    Transform,
    /// [`Action`]
    Action,
    /// [`StepAction`]
    StepAction,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "flag"),
            Self::Transform => write!(f, "transform"),
            Self::Action => write!(f, "action"),
            Self::StepAction => write!(f, "step action"),
        }
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            finalization: FinalizationConfig {
                remove_unused: false,
                remove_setters: false,
            },
            object_utilities: ObjectUtilitiesConfig {
                schema: true,
                reset: false,
            },
            control: ControlConfig {
                name_transformer: Transform::identity(),
                setter_transformer: Transform::new(naming::setter_name),
                set_objects: true,
                create_blank_property: true,
            },
            advanced: AdvancedConfig {
                start_action: Action::noop(),
                final_action: Action::noop(),
                step_action: StepAction::noop(),
                allow_unsafe_finalization: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_option_in_exactly_one_section() {
        let mut seen = HashSet::new();
        for section in Section::ALL {
            for key in section.options() {
                assert_eq!(key.section(), section);
                assert!(seen.insert(*key), "{key} listed twice");
            }
        }
        assert_eq!(seen.len(), OptionKey::ALL.len());
    }

    #[test]
    fn test_all_follows_section_order() {
        let flattened: Vec<OptionKey> = Section::ALL
            .iter()
            .flat_map(|s| s.options().iter().copied())
            .collect();
        assert_eq!(flattened, OptionKey::ALL);
    }

    #[test]
    fn test_defaults_match_kinds() {
        let defaults = EffectiveConfig::default();
        for key in OptionKey::ALL {
            assert_eq!(defaults.value(key).kind(), key.kind(), "{key}");
        }
    }

    #[test]
    fn test_default_values() {
        let defaults = EffectiveConfig::default();
        assert!(!defaults.finalization.remove_unused);
        assert!(!defaults.finalization.remove_setters);
        assert!(defaults.object_utilities.schema);
        assert!(!defaults.object_utilities.reset);
        assert!(defaults.control.set_objects);
        assert!(defaults.control.create_blank_property);
        assert!(defaults.advanced.allow_unsafe_finalization);
        assert_eq!(defaults.control.name_transformer.apply("email"), "email");
        assert_eq!(
            defaults.control.setter_transformer.apply("email"),
            "setEmail"
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(OptionKey::NameTransformer.path(), "control.nameTransformer");
        assert_eq!(
            OptionKey::AllowUnsafeFinalization.to_string(),
            "advanced.allowUnsafeFinalization"
        );
        assert_eq!(Section::ObjectUtilities.to_string(), "objectUtilities");
    }
}
