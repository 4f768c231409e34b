//! Configuration for the builder factory.
//!
//! Options are grouped in four sections (`finalization`, `objectUtilities`,
//! `control`, `advanced`). Every option has a documented default in the
//! [defaults table](defaults); user configuration only overrides what it
//! supplies.
//!
//! # Resolution
//!
//! Configuration flows through two stages:
//!
//! 1. [`FastOptionResolver`] expands abbreviated keys (`{c: {nT: ..}}`) to
//!    canonical [`Options`] (`control.nameTransformer`).
//! 2. [`OptionResolver`] merges [`Options`] over the defaults, producing an
//!    [`EffectiveConfig`] with one concrete value per option.
//!
//! # Examples
//!
//! ```
//! use alien::options::{expand_fast_options, FastOptions, OptionResolver};
//!
//! let fast = FastOptions::new().with("f", "rU", true);
//! let effective = OptionResolver::default().resolve(&expand_fast_options(&fast));
//!
//! assert!(effective.finalization.remove_unused);
//! assert!(effective.control.create_blank_property);
//! ```

pub mod defaults;
pub mod fast;
pub mod resolver;
pub mod schema;
pub mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use defaults::{OptionKey, OptionKind, Section};
pub use fast::{expand_fast_options, resolve_key, FastOptionResolver, FastOptions};
pub use resolver::{
    AdvancedConfig, ControlConfig, EffectiveConfig, FinalizationConfig, ObjectUtilitiesConfig,
    OptionResolver,
};
pub use schema::{
    AdvancedOptions, ControlOptions, FinalizationOptions, ObjectUtilitiesOptions, Options,
};
pub use value::{Action, OptionValue, StepAction, Transform};
