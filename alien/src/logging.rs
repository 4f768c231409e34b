//! Logging infrastructure for the alien library.
//!
//! The library itself only talks to the [`log`] facade. This module provides
//! a small stderr backend for binaries that want one, with three coarse
//! verbosity levels.

use std::env;
use std::fmt;

use log::{Level, LevelFilter, Metadata, Record};

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "ALIEN_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use alien::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, debug and trace messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use alien::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Trace,
        }
    }
}

/// A simple stderr-based logger.
///
/// Implements [`log::Log`], printing records at or above its level as
/// `LEVEL: message`.
///
/// # Examples
///
/// ```
/// use alien::{Logger, LogLevel};
/// use log::Log;
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.enabled(&log::Metadata::builder().level(log::Level::Warn).build()));
/// assert!(!logger.enabled(&log::Metadata::builder().level(log::Level::Debug).build()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Chooses a logger from CLI flags and the environment.
    ///
    /// The priority order is:
    /// 1. CLI flags (verbose/quiet)
    /// 2. `ALIEN_LOG_MODE` environment variable
    /// 3. Default (Normal)
    ///
    /// If both `verbose` and `quiet` are true, `verbose` takes precedence.
    #[must_use]
    pub fn from_env(verbose: bool, quiet: bool) -> Self {
        if verbose {
            return Self::new(LogLevel::Verbose);
        }
        if quiet {
            return Self::new(LogLevel::Quiet);
        }

        if let Ok(env_value) = env::var(LOG_MODE_ENV) {
            if let Ok(level) = LogLevel::parse(&env_value) {
                return Self::new(level);
            }
        }

        Self::new(LogLevel::Normal)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        match metadata.level() {
            Level::Error | Level::Warn => self.level >= LogLevel::Normal,
            Level::Info | Level::Debug | Level::Trace => self.level >= LogLevel::Verbose,
        }
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the stderr logger as the global `log` backend.
///
/// See [`Logger::from_env`] for how the level is chosen. Installing twice is
/// harmless: the first logger stays, only the max level is updated.
///
/// # Examples
///
/// ```
/// use alien::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false), LogLevel::Verbose);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let logger = Logger::from_env(verbose, quiet);
    let level = logger.level();
    if log::set_boxed_logger(Box::new(logger)).is_err() {
        log::debug!("logger already installed, adjusting level to {level}");
    }
    log::set_max_level(level.filter());
    level
}
