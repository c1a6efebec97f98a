//! The build tool reports all progress, warnings, and failures through one
//! branded logger. Output behavior is swappable behind the [`Log`] trait so test
//! harnesses can substitute the silent variant while keeping the fatal-error contract.

mod dedup;
mod noop;
mod options;

pub use dedup::DedupStore;
pub use noop::NoopLogger;
pub use options::{ErrorOptions, LoggerOptions};

use crate::env;
use crate::error::FatalError;
use crate::fmt::{Color, bold, colorize};
use crate::level::Level;
use crate::sink::{Sink, StdStreams};
use std::collections::HashMap;

/// Capability set shared by [`Logger`] and [`NoopLogger`] — code that only needs
/// to report takes `&dyn Log` and never learns which variant it got.
pub trait Log: Send + Sync {
    fn trace(&self, message: &str);
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);

    /// Reports a failure; with an effective exit flag the standard logger never
    /// returns and the silent variant returns the error instead.
    ///
    /// # Errors
    /// Only the silent variant errs — a [`FatalError`] standing in for process termination.
    fn error(&self, message: &str, options: ErrorOptions) -> Result<(), FatalError>;

    fn info_once(&self, message: &str);
    fn warn_once(&self, message: &str);
    fn error_once(&self, message: &str);

    fn has_warn_logged(&self, message: &str) -> bool;
    fn has_error_logged(&self, message: &str) -> bool;
}

/// Renders leveled, colorized, banner-prefixed lines to the terminal.
pub struct Logger {
    options: LoggerOptions,
    /// Fixed at construction — a CI flag flipping mid-run must not re-enable clearing.
    can_clear_screen: bool,
    /// Info is deliberately absent: the banner alone carries color on info lines.
    level_colors: HashMap<Level, Color>,
    /// Rendered once; `set_prefix` is the only thing that rebuilds it.
    banner: String,
    once: DedupStore,
    sink: Box<dyn Sink>,
}

impl Logger {
    /// Defaults: "Farm" banner, purple brand, emit everything, never exit on error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(LoggerOptions::default())
    }

    #[must_use]
    pub fn with_options(options: LoggerOptions) -> Self {
        Self::with_sink(options, StdStreams)
    }

    /// Test seam — swap the std streams for a capture buffer.
    #[must_use]
    pub fn with_sink(options: LoggerOptions, sink: impl Sink + 'static) -> Self {
        let can_clear_screen =
            options.allow_clear_screen && env::stdout_is_terminal() && !env::is_ci();

        let mut level_colors = HashMap::new();
        level_colors.insert(Level::Trace, Color::purple());
        level_colors.insert(Level::Debug, Color::blue());
        level_colors.insert(Level::Warn, Color::yellow());
        level_colors.insert(Level::Error, Color::red());

        let banner = render_banner(&options.prefix, options.brand_color);

        Self {
            options,
            can_clear_screen,
            level_colors,
            banner,
            once: DedupStore::new(),
            sink: Box::new(sink),
        }
    }

    /// Plugins that take over reporting mid-build re-brand the banner in place.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.options.prefix = prefix.into();
        self.banner = render_banner(&self.options.prefix, self.options.brand_color);
    }

    /// Tests verify the construction-time clearing decision without emitting anything.
    #[must_use]
    pub const fn can_clear_screen(&self) -> bool {
        self.can_clear_screen
    }

    /// Tests and diagnostics need to verify which severity threshold is active.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.options.level
    }

    /// Testing-only escape hatch — once-suppression normally lasts the process lifetime.
    pub fn reset_once_tracking(&self) {
        self.once.reset();
    }

    /// Core dispatch — filters by severity, optionally clears the screen, renders
    /// the banner + message line, and routes it to the level's stream.
    fn log_message(&self, level: Level, message: &str, color: Option<Color>, show_banner: bool) {
        if level < self.options.level {
            return;
        }

        if self.can_clear_screen {
            let _ = self.sink.clear_screen();
        }

        let rendered = color.map_or_else(|| message.to_string(), |c| colorize(message, c));
        let line = if show_banner {
            format!("{} {rendered}", self.banner)
        } else {
            rendered
        };

        // Errors go to stderr; everything else shares stdout.
        if level == Level::Error {
            let _ = self.sink.write_err(&line);
        } else {
            let _ = self.sink.write_out(&line);
        }
    }

    fn level_color(&self, level: Level) -> Option<Color> {
        self.level_colors.get(&level).copied()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for Logger {
    fn trace(&self, message: &str) {
        self.log_message(Level::Trace, message, self.level_color(Level::Trace), true);
    }

    fn debug(&self, message: &str) {
        self.log_message(Level::Debug, message, self.level_color(Level::Debug), true);
    }

    fn info(&self, message: &str) {
        self.log_message(Level::Info, message, self.level_color(Level::Info), true);
    }

    fn warn(&self, message: &str) {
        self.log_message(Level::Warn, message, self.level_color(Level::Warn), true);
    }

    fn error(&self, message: &str, options: ErrorOptions) -> Result<(), FatalError> {
        let ErrorOptions { exit, cause } = options;

        // Manual cause chaining: the terminal shows one flat report, not a source() walk.
        let rendered = cause.as_ref().map_or_else(
            || message.to_string(),
            |cause| format!("{message}\nCaused by: {cause}"),
        );
        self.log_message(Level::Error, &rendered, Some(Color::red()), true);

        if exit.unwrap_or(self.options.exit) {
            let _ = self.sink.flush();
            std::process::exit(1);
        }
        Ok(())
    }

    fn info_once(&self, message: &str) {
        if self.once.insert(Level::Info, message) {
            self.info(message);
        }
    }

    fn warn_once(&self, message: &str) {
        if self.once.insert(Level::Warn, message) {
            self.warn(message);
        }
    }

    fn error_once(&self, message: &str) {
        if self.once.insert(Level::Error, message) {
            let _ = self.error(message, ErrorOptions::default());
        }
    }

    fn has_warn_logged(&self, message: &str) -> bool {
        self.once.contains(Level::Warn, message)
    }

    fn has_error_logged(&self, message: &str) -> bool {
        self.once.contains(Level::Error, message)
    }
}

/// `"[ <bold prefix> ]"` wrapped in the brand color — rendered once, reused on every line.
fn render_banner(prefix: &str, brand_color: Option<Color>) -> String {
    let text = bold(&format!("[ {prefix} ]"));
    colorize(&text, brand_color.unwrap_or(Color::purple()))
}
