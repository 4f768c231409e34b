//! Expand command implementation.

use crate::error::CliError;
use crate::utils::{print_document, GlobalOptions};
use alien::options::{
    expand_fast_options, FastOptionResolver, FastOptions, OptionKind, OptionResolver, Options,
    Section,
};
use clap::Args;
use serde_yaml::{Mapping, Value};

/// Expand abbreviated option keys and print the canonical configuration.
#[derive(Args)]
pub struct ExpandCommand {
    /// Options as inline YAML or JSON, e.g. '{f: {rU: true}}'
    #[arg(value_name = "YAML")]
    pub config: String,

    /// Fail on keys that match nothing instead of dropping them
    #[arg(long)]
    pub strict: bool,

    /// Print every flag after applying defaults, not just the supplied ones
    #[arg(long)]
    pub resolved: bool,
}

impl ExpandCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fast = FastOptions::from_yaml_str(&self.config)?;
        let options = if self.strict {
            FastOptionResolver::expand_strict(&fast)?
        } else {
            expand_fast_options(&fast)
        };

        let document = if self.resolved {
            resolved_document(&options)
        } else {
            supplied_document(&options)
        };
        print_document(&document, global.format)
    }
}

/// Supplied flags only, by canonical section and option name.
fn supplied_document(options: &Options) -> Mapping {
    flag_document(|key| options.get(key).and_then(|v| v.as_flag()))
}

/// Every flag after resolution against the defaults table.
fn resolved_document(options: &Options) -> Mapping {
    let effective = OptionResolver::default().resolve(options);
    flag_document(|key| effective.value(key).as_flag())
}

fn flag_document<F>(lookup: F) -> Mapping
where
    F: Fn(alien::options::OptionKey) -> Option<bool>,
{
    let mut document = Mapping::new();
    for section in Section::ALL {
        let mut inner = Mapping::new();
        for key in section.options() {
            if key.kind() != OptionKind::Flag {
                continue;
            }
            if let Some(flag) = lookup(*key) {
                inner.insert(Value::String(key.ident().to_string()), Value::Bool(flag));
            }
        }
        if !inner.is_empty() {
            document.insert(Value::String(section.name().to_string()), Value::Mapping(inner));
        }
    }
    document
}
