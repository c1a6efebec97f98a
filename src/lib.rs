//! `farmlog` - Leveled, branded console logging for the Farm build tool.
//!
//! The compiler, dev server, and plugin pipeline report progress, warnings, and
//! errors through one [`Logger`] that renders level-colored, banner-prefixed
//! lines to the terminal. Supports:
//! - Ordered severity levels with per-level colors
//! - One-shot (deduplicated) messages for diagnostics that repeat across rebuilds
//! - Screen-clearing coordination for dev-server watch mode
//! - Error-cause chaining and process-exit-on-fatal-error semantics
//! - A silent [`NoopLogger`] variant for test harnesses
//!
//! # Example
//!
//! ```
//! use farmlog::{ErrorOptions, Log, Logger, LoggerOptions};
//!
//! let logger = Logger::with_options(LoggerOptions::default().prefix("Farm"));
//!
//! logger.info("Compiling 42 modules...");
//! logger.warn_once("the sass plugin is deprecated");
//! logger.warn_once("the sass plugin is deprecated"); // suppressed
//! let _ = logger.error("failed to resolve ./missing.css", ErrorOptions::default());
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
pub mod report;
pub mod server;
pub mod sink;

// Re-exports for convenience
pub use config::LoggerConfig;
pub use error::{Error, FatalError};
pub use fmt::Color;
pub use level::Level;
pub use logger::{DedupStore, ErrorOptions, Log, Logger, LoggerOptions, NoopLogger};
pub use report::{Diagnostic, SourceLocation, build_error_message};
pub use server::{ServerUrls, print_server_urls};
pub use sink::{MemorySink, Sink, StdStreams};
