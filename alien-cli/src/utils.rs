//! Utility functions for CLI operations.
//!
//! Argument parsing helpers shared by the commands, and output rendering.

use crate::error::CliError;
use alien::PropertySpec;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Output format for results.
    pub format: OutputFormat,
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Parses a command-line value: JSON when it parses, a plain string otherwise.
///
/// `42` becomes a number, `true` a boolean, `"x"` and `x` both the string `x`.
pub fn parse_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Splits `KEY=VALUE`, parsing the value with [`parse_value`].
pub fn split_assignment(arg: &str) -> Result<(String, Value), CliError> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), parse_value(value))),
        _ => Err(CliError::InvalidArguments(format!(
            "expected KEY=VALUE, got '{arg}'"
        ))),
    }
}

/// Parses `NAME` or `NAME=DEFAULT` into a property declaration.
pub fn parse_property(arg: &str) -> Result<PropertySpec, CliError> {
    if arg.contains('=') {
        let (name, value) = split_assignment(arg)?;
        Ok(PropertySpec::from((name, value)))
    } else if arg.is_empty() {
        Err(CliError::InvalidArguments(
            "property names must not be empty".to_string(),
        ))
    } else {
        Ok(PropertySpec::from(arg))
    }
}

/// Renders `document` in the requested format and prints it to stdout.
pub fn print_document<T: Serialize>(document: &T, format: OutputFormat) -> Result<(), CliError> {
    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(document).map_err(|e| CliError::Output(e.to_string()))?
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(document).map_err(|e| CliError::Output(e.to_string()))?
        }
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
