//! Unified error types for farmlog operations.

use std::fmt;

/// Error type for fallible farmlog operations (config loading, sink I/O).
#[derive(Debug)]
pub enum Error {
    /// I/O error from a sink or from reading a config file.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

/// Raised instead of terminating the process when the silent logger hits a fatal error.
///
/// The standard logger exits the process on fatal errors; test harnesses swap in
/// [`NoopLogger`](crate::NoopLogger) and catch this value to assert "this path
/// would have died" without losing the test process.
#[derive(Debug)]
pub struct FatalError {
    message: String,
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FatalError {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }

    /// The text the standard logger would have printed before exiting.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Assertions need the originating error without downcasting through `source()`.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FatalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|c| -> &(dyn std::error::Error + 'static) { &**c })
    }
}
