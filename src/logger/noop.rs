//! Automated tests want compiler output silenced, but "this error was fatal" must
//! stay observable — so the silent variant trades process exit for a returned error.

use super::{ErrorOptions, Log};
use crate::error::FatalError;

/// Drop-in [`Log`] implementation that emits nothing and never touches the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl NoopLogger {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Log for NoopLogger {
    fn trace(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    /// The one observable method: a fatal call surfaces as an `Err` the harness can
    /// catch and assert on, with the cause attached, instead of killing the test process.
    fn error(&self, message: &str, options: ErrorOptions) -> Result<(), FatalError> {
        if options.exit.unwrap_or(false) {
            return Err(FatalError::new(message, options.cause));
        }
        Ok(())
    }

    fn info_once(&self, _message: &str) {}

    fn warn_once(&self, _message: &str) {}

    fn error_once(&self, _message: &str) {}

    /// Nothing is ever recorded, so membership is always false.
    fn has_warn_logged(&self, _message: &str) -> bool {
        false
    }

    fn has_error_logged(&self, _message: &str) -> bool {
        false
    }
}
