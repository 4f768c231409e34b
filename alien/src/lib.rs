#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # alien
//!
//! A factory for runtime builders: given a list of property names it
//! produces a record with one cascadable setter per property, an optional
//! schema, and optional `set`/`reset`/`finalize` behaviour.
//!
//! ## Core Types
//!
//! - [`build`] and [`BuilderFactory`]: builder construction
//! - [`Builder`], [`Entry`] and [`Schema`]: the produced record
//! - [`options`]: defaults table, option resolution and abbreviated keys
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging backend for binaries
//!
//! ## Examples
//!
//! ```
//! use alien::build;
//! use alien::options::FastOptions;
//! use serde_json::json;
//!
//! // Abbreviated option keys: finalization.removeUnused
//! let config = FastOptions::new().with("f", "rU", true);
//!
//! let mut builder = build(["name", "email"], Some(&config));
//! builder.invoke("setName", "John")?.finalize()?;
//!
//! assert_eq!(builder.value("name"), Some(&json!("John")));
//! assert!(!builder.contains("email"));
//! # Ok::<(), alien::Error>(())
//! ```

pub mod builder;
pub mod error;
pub mod logging;
pub mod naming;
pub mod options;

// Re-export key types at crate root for convenience
pub use builder::{build, Builder, BuilderFactory, Entry, Operation, PropertySpec, Schema};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use options::{expand_fast_options, FastOptions, Options};
