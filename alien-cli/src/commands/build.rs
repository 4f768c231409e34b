//! Build command implementation.

use crate::error::CliError;
use crate::utils::{parse_property, print_document, split_assignment, GlobalOptions};
use alien::options::FastOptions;
use alien::{PropertySpec, Schema};
use clap::Args;
use serde::Serialize;
use serde_json::{Map, Value};

/// Build a builder, apply setters and operations, and print the record.
///
/// Steps run in a fixed order: setter calls, one bulk `set`, `reset`,
/// `finalize`.
#[derive(Args)]
pub struct BuildCommand {
    /// Properties to declare, as NAME or NAME=DEFAULT
    #[arg(value_name = "PROPERTY")]
    pub properties: Vec<String>,

    /// Builder options as inline YAML or JSON (keys may be abbreviated)
    #[arg(short, long, value_name = "YAML", env = "ALIEN_CONFIG")]
    pub config: Option<String>,

    /// Invoke a setter (repeatable)
    #[arg(long = "call", value_name = "SETTER=VALUE")]
    pub calls: Vec<String>,

    /// Bulk-assign a property through `set` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub sets: Vec<String>,

    /// Run `reset` after the assignments
    #[arg(long)]
    pub reset: bool,

    /// Run `finalize` last
    #[arg(long)]
    pub finalize: bool,

    /// Include the schema in the output
    #[arg(long)]
    pub schema: bool,
}

#[derive(Serialize)]
struct BuildReport<'a> {
    values: Value,
    schema: Option<&'a Schema>,
}

impl BuildCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = self
            .config
            .as_deref()
            .map(FastOptions::from_yaml_str)
            .transpose()?;

        let specs = self
            .properties
            .iter()
            .map(|p| parse_property(p))
            .collect::<Result<Vec<PropertySpec>, _>>()?;

        let mut builder = alien::build(specs, config.as_ref());

        for call in &self.calls {
            let (setter, value) = split_assignment(call)?;
            builder.invoke(&setter, value)?;
        }

        if !self.sets.is_empty() {
            let mut partial = Map::new();
            for assignment in &self.sets {
                let (key, value) = split_assignment(assignment)?;
                partial.insert(key, value);
            }
            builder.set(&partial)?;
        }

        if self.reset {
            builder.reset()?;
        }

        if self.finalize {
            builder.finalize()?;
        }

        if self.schema {
            let report = BuildReport {
                values: builder.to_json(),
                schema: builder.schema(),
            };
            print_document(&report, global.format)
        } else {
            print_document(&builder.to_json(), global.format)
        }
    }
}
