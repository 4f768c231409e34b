//! The builder factory and the builders it produces.
//!
//! A builder is a record of declared properties plus one setter per
//! property. Depending on configuration it also carries a schema of what was
//! declared, a bulk `set`, a `reset`, and always a one-shot `finalize`.
//!
//! # Lifecycle
//!
//! 1. `startAction` runs on the empty builder.
//! 2. Each declared property is attached (absent sentinel, seed value,
//!    setter, schema entry), then `stepAction` runs for it.
//! 3. Operations are attached and finalize cleanup is queued.
//! 4. `finalize()` runs the queued cleanup in order, then `finalAction`,
//!    then removes itself.
//!
//! # Known keys
//!
//! `set`, `reset` and finalize cleanup act on the builder's *known keys*:
//! the schema when enabled; otherwise, with `allowUnsafeFinalization`, the
//! builder's own data keys; otherwise nothing. In that unsafe mode,
//! `removeSetters` treats every callable entry as a setter, so attached
//! operations are removed along with the setters.

pub mod factory;
pub mod object;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use factory::{build, BuilderFactory, PropertySpec};
pub use object::{Builder, Entry, Operation, Schema};
