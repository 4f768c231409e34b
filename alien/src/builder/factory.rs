//! Builder construction.
//!
//! [`BuilderFactory`] turns a property list and a configuration into a
//! [`Builder`]: properties and setters are attached in declaration order,
//! hooks fire as they are reached, and cleanup is queued for `finalize`.

use serde_json::Value;

use crate::builder::object::{Builder, FinalizeAction, Operation};
use crate::options::{EffectiveConfig, FastOptionResolver, FastOptions, OptionResolver, Options};

/// One declared property.
///
/// # Examples
///
/// ```
/// use alien::PropertySpec;
/// use serde_json::json;
///
/// let plain = PropertySpec::from("email");
/// assert_eq!(plain.ident(), "email");
/// assert_eq!(plain.seed(), None);
///
/// let seeded = PropertySpec::from(("name", "John"));
/// assert_eq!(seeded.seed(), Some(&json!("John")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySpec {
    /// A plain identifier.
    Named(String),
    /// An identifier with a value assigned at creation time.
    NamedWithDefault(String, Value),
}

impl PropertySpec {
    /// The declared identifier.
    #[must_use]
    pub fn ident(&self) -> &str {
        match self {
            Self::Named(ident) | Self::NamedWithDefault(ident, _) => ident,
        }
    }

    /// The creation-time value, if any.
    #[must_use]
    pub fn seed(&self) -> Option<&Value> {
        match self {
            Self::Named(_) => None,
            Self::NamedWithDefault(_, value) => Some(value),
        }
    }
}

impl From<&str> for PropertySpec {
    fn from(ident: &str) -> Self {
        Self::Named(ident.to_string())
    }
}

impl From<String> for PropertySpec {
    fn from(ident: String) -> Self {
        Self::Named(ident)
    }
}

impl<V: Into<Value>> From<(&str, V)> for PropertySpec {
    fn from((ident, value): (&str, V)) -> Self {
        Self::NamedWithDefault(ident.to_string(), value.into())
    }
}

impl<V: Into<Value>> From<(String, V)> for PropertySpec {
    fn from((ident, value): (String, V)) -> Self {
        Self::NamedWithDefault(ident, value.into())
    }
}

/// Builds builders against a fixed option resolver.
///
/// # Examples
///
/// ```
/// use alien::options::FastOptions;
/// use alien::BuilderFactory;
///
/// let factory = BuilderFactory::default();
/// let config = FastOptions::new().with("finalization", "removeUnused", true);
///
/// let mut builder = factory.build(["name", "email"], Some(&config));
/// builder.invoke("setName", "John")?.finalize()?;
///
/// assert!(builder.contains("name"));
/// assert!(!builder.contains("email"));
/// # Ok::<(), alien::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuilderFactory {
    resolver: OptionResolver,
}

impl BuilderFactory {
    /// Creates a factory resolving options with `resolver`.
    #[must_use]
    pub fn new(resolver: OptionResolver) -> Self {
        Self { resolver }
    }

    /// The resolver used for configuration.
    #[must_use]
    pub fn resolver(&self) -> &OptionResolver {
        &self.resolver
    }

    /// Builds from possibly abbreviated configuration.
    ///
    /// With no configuration the resolver's defaults are used as they are.
    pub fn build<I, P>(&self, properties: I, config: Option<&FastOptions>) -> Builder
    where
        I: IntoIterator<Item = P>,
        P: Into<PropertySpec>,
    {
        match config {
            Some(fast) => self.build_with(properties, &FastOptionResolver::expand(fast)),
            None => self.build_resolved(properties, self.resolver.defaults()),
        }
    }

    /// Builds from canonical configuration.
    pub fn build_with<I, P>(&self, properties: I, options: &Options) -> Builder
    where
        I: IntoIterator<Item = P>,
        P: Into<PropertySpec>,
    {
        let config = self.resolver.resolve(options);
        self.build_resolved(properties, &config)
    }

    /// Builds from fully resolved configuration.
    pub fn build_resolved<I, P>(&self, properties: I, config: &EffectiveConfig) -> Builder
    where
        I: IntoIterator<Item = P>,
        P: Into<PropertySpec>,
    {
        let control = &config.control;
        let advanced = &config.advanced;

        let mut builder = Builder::new(
            advanced.allow_unsafe_finalization,
            control.create_blank_property,
            advanced.final_action.clone(),
        );

        advanced.start_action.run(&mut builder);

        if config.object_utilities.schema {
            builder.attach_schema();
        }

        for spec in properties.into_iter().map(Into::into) {
            let ident = spec.ident();
            let name = control.name_transformer.apply(ident);
            let setter = control.setter_transformer.apply(ident);

            if control.create_blank_property {
                builder.attach_absent(&name);
            }
            if let Some(seed) = spec.seed() {
                builder.assign(name.as_str(), seed.clone());
            }

            builder.attach_setter(&setter, &name);
            builder.record(&name, &setter);
            log::trace!("declared '{ident}' as '{name}' with setter '{setter}'");

            advanced.step_action.run(&mut builder, &name);
        }

        if control.set_objects {
            builder.attach_operation(Operation::Set);
        }

        if config.finalization.remove_setters {
            builder.queue(FinalizeAction::RemoveSetters);
        }

        if config.object_utilities.reset {
            builder.attach_operation(Operation::Reset);
        }

        if config.finalization.remove_unused {
            if control.create_blank_property {
                builder.queue(FinalizeAction::RemoveUnused);
            } else {
                log::debug!("removeUnused has no effect without createBlankProperty");
            }
        }

        builder.attach_operation(Operation::Finalize);

        log::debug!(
            "built builder with {} keys (schema: {})",
            builder.len(),
            builder.schema().is_some()
        );
        builder
    }
}

/// Builds a builder with the default option resolver.
///
/// # Examples
///
/// ```
/// use alien::build;
/// use serde_json::json;
///
/// let mut builder = build(["name", "email"], None);
/// builder.invoke("setName", "John")?;
///
/// assert_eq!(builder.value("name"), Some(&json!("John")));
/// assert!(builder.is_absent("email"));
/// # Ok::<(), alien::Error>(())
/// ```
pub fn build<I, P>(properties: I, config: Option<&FastOptions>) -> Builder
where
    I: IntoIterator<Item = P>,
    P: Into<PropertySpec>,
{
    BuilderFactory::default().build(properties, config)
}
