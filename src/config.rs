//! Logger settings live in the build tool's TOML config — loaded here and
//! converted into [`LoggerOptions`] for construction.

use crate::error::Error;
use crate::fmt::Color;
use crate::level::Level;
use crate::logger::LoggerOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A completely empty config section must still produce a working logger —
/// `#[serde(default)]` ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum severity as a lowercase string; unknown values fall back to trace.
    pub level: String,
    pub prefix: String,
    pub clear_screen: bool,
    /// Brand color as a `#RRGGBB` hex string.
    pub brand_color: Option<String>,
    /// Whether plain `error` calls terminate the process by default.
    pub exit: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Trace.as_str().to_string(),
            prefix: "Farm".to_string(),
            clear_screen: true,
            brand_color: None,
            exit: false,
        }
    }
}

impl LoggerConfig {
    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    /// Fails if the file can't be read or TOML parsing hits a syntax error.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// A typo'd level in config shouldn't kill the build — fall back to the default.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.level.parse().unwrap_or_default()
    }
}

impl From<&LoggerConfig> for LoggerOptions {
    fn from(config: &LoggerConfig) -> Self {
        let mut options = Self::default()
            .prefix(config.prefix.clone())
            .allow_clear_screen(config.clear_screen)
            .exit(config.exit)
            .level(config.parse_level());
        if let Some(hex) = &config.brand_color {
            options = options.brand_color(Color::from_hex(hex));
        }
        options
    }
}
