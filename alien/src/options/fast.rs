//! Abbreviated ("fast") option keys.
//!
//! A fast configuration uses shortened section and option keys. Each key is
//! resolved against the names declared in its scope, in two phases:
//!
//! 1. **Prefix**: the first name whose leading characters equal the key,
//!    ignoring case.
//! 2. **Initialism**: if no prefix matched, the same test against each
//!    name's initialism (first character plus every uppercase character).
//!
//! Section keys are matched against section names; option keys only against
//! the options of their resolved section.
//!
//! ```
//! use alien::options::{expand_fast_options, FastOptions};
//!
//! let fast = FastOptions::new()
//!     .with("f", "rU", true)     // finalization.removeUnused, by initialism
//!     .with("o", "re", true);    // objectUtilities.reset, by prefix
//!
//! let options = expand_fast_options(&fast);
//! assert_eq!(options.finalization.remove_unused, Some(true));
//! assert_eq!(options.object_utilities.reset, Some(true));
//! ```

use indexmap::IndexMap;
use serde_yaml::Value as Yaml;

use crate::error::{Error, Result};
use crate::naming;
use crate::options::defaults::{OptionKey, Section};
use crate::options::schema::Options;
use crate::options::value::OptionValue;

/// Scope label used in diagnostics for top-level keys.
const SECTIONS_SCOPE: &str = "sections";

/// Configuration with possibly abbreviated keys, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FastOptions {
    sections: IndexMap<String, IndexMap<String, OptionValue>>,
}

impl FastOptions {
    /// Creates an empty fast configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `section.option = value` and returns `self` for chaining.
    #[must_use]
    pub fn with(
        mut self,
        section: impl Into<String>,
        option: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Self {
        self.insert(section, option, value);
        self
    }

    /// Adds `section.option = value`. A repeated key replaces the earlier
    /// value in place.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        option: impl Into<String>,
        value: impl Into<OptionValue>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(option.into(), value.into());
    }

    /// Parses a fast configuration from YAML (or JSON) text.
    ///
    /// Leaves must be booleans; `null` leaves are skipped as unsupplied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for unparsable text, and
    /// [`Error::Validation`] when the text is not a mapping of mappings of
    /// booleans.
    ///
    /// # Examples
    ///
    /// ```
    /// use alien::options::{expand_fast_options, FastOptions};
    ///
    /// let fast = FastOptions::from_yaml_str("{c: {cBP: false}}").unwrap();
    /// let options = expand_fast_options(&fast);
    /// assert_eq!(options.control.create_blank_property, Some(false));
    /// ```
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let mut fast = Self::new();
        if text.trim().is_empty() {
            return Ok(fast);
        }

        let root = match serde_yaml::from_str::<Yaml>(text)? {
            Yaml::Null => return Ok(fast),
            Yaml::Mapping(map) => map,
            _ => return Err(shape_error("<root>", "expected a mapping of sections")),
        };

        for (section, inner) in root {
            let section = yaml_key(section, "<root>")?;
            let inner = match inner {
                Yaml::Null => {
                    fast.sections.entry(section).or_default();
                    continue;
                }
                Yaml::Mapping(map) => map,
                _ => return Err(shape_error(&section, "expected a mapping of options")),
            };
            for (option, leaf) in inner {
                let option = yaml_key(option, &section)?;
                match leaf {
                    Yaml::Bool(flag) => fast.insert(section.clone(), option, flag),
                    Yaml::Null => {}
                    _ => {
                        return Err(shape_error(
                            &format!("{section}.{option}"),
                            "only boolean options can be given as text",
                        ))
                    }
                }
            }
        }
        Ok(fast)
    }

    /// The raw sections, in insertion order.
    #[must_use]
    pub fn sections(&self) -> &IndexMap<String, IndexMap<String, OptionValue>> {
        &self.sections
    }

    /// Returns `true` if no section key was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl From<&Options> for FastOptions {
    /// Lists every supplied option under its canonical spelling.
    fn from(options: &Options) -> Self {
        let mut fast = Self::new();
        for key in OptionKey::ALL {
            if let Some(value) = options.get(key) {
                fast.insert(key.section().name(), key.ident(), value);
            }
        }
        fast
    }
}

fn yaml_key(key: Yaml, parent: &str) -> Result<String> {
    match key {
        Yaml::String(s) => Ok(s),
        _ => Err(shape_error(parent, "keys must be strings")),
    }
}

fn shape_error(field: &str, message: &str) -> Error {
    Error::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Index of the first candidate whose leading characters equal `key`,
/// ignoring case.
fn prefix_position<I, S>(key: &str, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let wanted = key.to_lowercase();
    let width = key.chars().count();
    candidates.into_iter().position(|candidate| {
        let head: String = candidate.as_ref().chars().take(width).collect();
        head.to_lowercase() == wanted
    })
}

/// Resolves an abbreviated key against `candidates`.
///
/// Prefix matches are tried first; initialisms only when no prefix matches.
/// Ties go to the earliest candidate.
///
/// # Examples
///
/// ```
/// use alien::options::resolve_key;
///
/// let names = ["nameTransformer", "setterTransformer", "setObjects"];
/// assert_eq!(resolve_key("set", &names), Some(1));
/// assert_eq!(resolve_key("sO", &names), Some(2));
/// assert_eq!(resolve_key("x", &names), None);
/// ```
pub fn resolve_key<S: AsRef<str>>(key: &str, candidates: &[S]) -> Option<usize> {
    prefix_position(key, candidates).or_else(|| {
        prefix_position(
            key,
            candidates.iter().map(|c| naming::initialism(c.as_ref())),
        )
    })
}

/// Expands fast configuration into canonical [`Options`].
///
/// # Examples
///
/// ```
/// use alien::options::{FastOptionResolver, FastOptions, OptionValue};
///
/// let fast = FastOptions::new().with("c", "nT", OptionValue::transform(|s| format!("_{s}")));
/// let options = FastOptionResolver::expand(&fast);
/// let transform = options.control.name_transformer.unwrap();
/// assert_eq!(transform.apply("email"), "_email");
/// ```
pub struct FastOptionResolver;

impl FastOptionResolver {
    /// Resolves an abbreviated section key.
    #[must_use]
    pub fn resolve_section(key: &str) -> Option<Section> {
        let names = Section::ALL.map(Section::name);
        resolve_key(key, &names).map(|i| Section::ALL[i])
    }

    /// Resolves an abbreviated option key within `section`.
    #[must_use]
    pub fn resolve_option(section: Section, key: &str) -> Option<OptionKey> {
        let options = section.options();
        let names: Vec<&str> = options.iter().map(|o| o.ident()).collect();
        resolve_key(key, &names).map(|i| options[i])
    }

    /// Expands leniently.
    ///
    /// Keys that match nothing, and values of the wrong kind, are dropped
    /// with a warning.
    #[must_use]
    pub fn expand(fast: &FastOptions) -> Options {
        let lenient = Self::expand_with(fast, |err| {
            log::warn!("ignoring fast option: {err}");
            Ok(())
        });
        lenient.unwrap_or_default()
    }

    /// Expands strictly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedOption`] for the first key that matches
    /// nothing, or [`Error::InvalidOptionValue`] for the first value of the
    /// wrong kind.
    pub fn expand_strict(fast: &FastOptions) -> Result<Options> {
        Self::expand_with(fast, Err)
    }

    fn expand_with<F>(fast: &FastOptions, mut on_problem: F) -> Result<Options>
    where
        F: FnMut(Error) -> Result<()>,
    {
        let mut options = Options::default();

        for (section_key, inner) in &fast.sections {
            let Some(section) = Self::resolve_section(section_key) else {
                on_problem(Error::UnresolvedOption {
                    key: section_key.clone(),
                    scope: SECTIONS_SCOPE.to_string(),
                })?;
                continue;
            };

            for (option_key, value) in inner {
                let Some(key) = Self::resolve_option(section, option_key) else {
                    on_problem(Error::UnresolvedOption {
                        key: option_key.clone(),
                        scope: section.name().to_string(),
                    })?;
                    continue;
                };

                match options.insert(key, value.clone()) {
                    Ok(()) => log::trace!("fast option '{section_key}.{option_key}' -> {key}"),
                    Err(err) => on_problem(err)?,
                }
            }
        }

        Ok(options)
    }
}

/// Expands fast configuration leniently; see [`FastOptionResolver::expand`].
#[must_use]
pub fn expand_fast_options(fast: &FastOptions) -> Options {
    FastOptionResolver::expand(fast)
}
