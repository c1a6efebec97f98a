//! The compiler, dev server, and plugin pipeline all report through one logger —
//! bootstrapped here so dedup state is process-wide in normal use.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if multiple
//! entry points race to call `init`.

use crate::error::FatalError;
use crate::logger::{ErrorOptions, Log, Logger, LoggerOptions};
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger. `OnceLock` guarantees only the first call
/// takes effect; later calls are no-ops and get the already-installed instance.
pub fn init(options: LoggerOptions) -> &'static Logger {
    LOGGER.get_or_init(|| Logger::with_options(options))
}

/// Accessor that lazily installs a default logger, so early callers never panic.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::new)
}

pub fn trace(message: &str) {
    logger().trace(message);
}

pub fn debug(message: &str) {
    logger().debug(message);
}

pub fn info(message: &str) {
    logger().info(message);
}

pub fn warn(message: &str) {
    logger().warn(message);
}

/// Delegates to the singleton; with an exit option this never returns.
///
/// # Errors
/// Never on the standard logger — the `Result` exists for signature parity with [`Log::error`].
pub fn error(message: &str, options: ErrorOptions) -> Result<(), FatalError> {
    logger().error(message, options)
}

pub fn info_once(message: &str) {
    logger().info_once(message);
}

pub fn warn_once(message: &str) {
    logger().warn_once(message);
}

pub fn error_once(message: &str) {
    logger().error_once(message);
}
