//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `build`: Build a builder, drive it, and print the result
//! - `expand`: Expand abbreviated options to canonical names

pub mod build;
pub mod expand;

pub use build::BuildCommand;
pub use expand::ExpandCommand;
