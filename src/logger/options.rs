//! Construction-time and per-call knobs, separated so per-call state is never stored.

use crate::fmt::Color;
use crate::level::Level;

/// Everything the logger fixes at construction time.
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Brand text rendered inside the bracketed banner.
    pub prefix: String,
    /// Dev-server rebuilds may clear the terminal; batch builds should never.
    pub allow_clear_screen: bool,
    /// `None` renders the banner in the default purple brand color.
    pub brand_color: Option<Color>,
    /// Logger-wide default for whether `error` terminates the process —
    /// per-call [`ErrorOptions::exit`] overrides it.
    pub exit: bool,
    /// Minimum emitted severity. Trace by default so nothing is dropped
    /// unless a threshold is configured.
    pub level: Level,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            prefix: "Farm".to_string(),
            allow_clear_screen: true,
            brand_color: None,
            exit: false,
            level: Level::Trace,
        }
    }
}

impl LoggerOptions {
    /// Plugins embed their own name in the banner so their output is attributable.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Batch builds and tests must keep their scrollback intact.
    #[must_use]
    pub const fn allow_clear_screen(mut self, allow: bool) -> Self {
        self.allow_clear_screen = allow;
        self
    }

    /// White-label consumers re-brand the banner without touching level colors.
    #[must_use]
    pub const fn brand_color(mut self, color: Color) -> Self {
        self.brand_color = Some(color);
        self
    }

    /// One-shot CLI invocations want every error to be fatal without passing per-call options.
    #[must_use]
    pub const fn exit(mut self, exit: bool) -> Self {
        self.exit = exit;
        self
    }

    /// Noisy low-level messages slow down production output.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

/// Per-call error options — consumed by `error`, never stored on the logger.
#[derive(Debug, Default)]
pub struct ErrorOptions {
    /// `Some` overrides [`LoggerOptions::exit`] for this one call.
    pub exit: Option<bool>,
    /// The originating failure, appended to the message as a `Caused by:` line.
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ErrorOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unrecoverable build failures terminate the process after the message is flushed.
    #[must_use]
    pub const fn exit(mut self, exit: bool) -> Self {
        self.exit = Some(exit);
        self
    }

    /// Errors caught at a boundary often wrap a lower-level failure worth surfacing.
    #[must_use]
    pub fn cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}
