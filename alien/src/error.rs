//! Error types for the alien library.
//!
//! Building a builder never fails: misconfiguration degrades to the
//! documented defaults. The errors here cover runtime misuse of a
//! [`Builder`](crate::Builder) and the strict configuration paths.

use thiserror::Error;

/// Result type alias for operations that may fail with an alien error.
///
/// # Examples
///
/// ```
/// use alien::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the alien library.
#[derive(Debug, Error)]
pub enum Error {
    /// A setter was invoked that the builder does not carry.
    #[error("unknown setter '{name}'")]
    UnknownSetter {
        /// The requested setter name.
        name: String,
    },

    /// A builder operation was requested that is not attached, or has
    /// already been consumed (as `finalize` is after its first call).
    #[error("operation '{operation}' is not available on this builder")]
    OperationUnavailable {
        /// The operation name.
        operation: &'static str,
    },

    /// An abbreviated option key matched nothing in its scope.
    #[error("option key '{key}' matches nothing in {scope}")]
    UnresolvedOption {
        /// The abbreviated key as supplied.
        key: String,
        /// Where the key was looked up (`sections` or a section name).
        scope: String,
    },

    /// An option received a value of the wrong kind.
    #[error("option '{option}' expects a {expected}, got a {found}")]
    InvalidOptionValue {
        /// Canonical `section.option` path.
        option: String,
        /// The expected value kind.
        expected: crate::options::OptionKind,
        /// The kind that was supplied.
        found: crate::options::OptionKind,
    },

    /// Textual configuration could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error was caused by configuration rather than builder use.
    ///
    /// # Examples
    ///
    /// ```
    /// use alien::Error;
    ///
    /// let err = Error::UnresolvedOption { key: "zz".into(), scope: "sections".into() };
    /// assert!(err.is_configuration());
    ///
    /// let err = Error::UnknownSetter { name: "setAge".into() };
    /// assert!(!err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedOption { .. }
                | Self::InvalidOptionValue { .. }
                | Self::Configuration(_)
                | Self::Validation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionKind;

    #[test]
    fn test_unknown_setter_error() {
        let err = Error::UnknownSetter {
            name: "setAge".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("unknown setter"));
        assert!(display.contains("setAge"));
    }

    #[test]
    fn test_operation_unavailable_error() {
        let err = Error::OperationUnavailable {
            operation: "finalize",
        };
        let display = format!("{err}");
        assert!(display.contains("finalize"));
        assert!(display.contains("not available"));
    }

    #[test]
    fn test_unresolved_option_error() {
        let err = Error::UnresolvedOption {
            key: "zz".to_string(),
            scope: "control".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("'zz'"));
        assert!(display.contains("control"));
    }

    #[test]
    fn test_invalid_option_value_error() {
        let err = Error::InvalidOptionValue {
            option: "control.nameTransformer".to_string(),
            expected: OptionKind::Transform,
            found: OptionKind::Flag,
        };
        let display = format!("{err}");
        assert!(display.contains("control.nameTransformer"));
        assert!(display.contains("expects a transform"));
        assert!(display.contains("got a flag"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<bool>("[not, a, bool]").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").contains("configuration error"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<()> {
            Err(Error::OperationUnavailable { operation: "set" })
        }

        assert!(returns_result().is_err());
    }
}
