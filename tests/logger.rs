//! Tests for the logger: rendering, dedup, filtering, cause chaining, and the
//! silent variant's fatal-error contract.

use farmlog::{ErrorOptions, Level, Log, Logger, LoggerOptions, MemorySink, NoopLogger};
use std::fmt;

fn capture_logger(options: LoggerOptions) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    // Clearing would depend on the test environment's terminal — keep it off.
    let logger = Logger::with_sink(options.allow_clear_screen(false), sink.clone());
    (logger, sink)
}

#[derive(Debug)]
struct ResolveError(&'static str);

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not resolve '{}'", self.0)
    }
}

impl std::error::Error for ResolveError {}

#[test]
fn info_line_carries_banner_and_plain_message() {
    let (logger, sink) = capture_logger(LoggerOptions::default());
    logger.info("Compiled 42 modules");

    let out = sink.out();
    assert_eq!(out.len(), 1);
    assert!(out[0].contains("[ Farm ]"));
    // Info has no per-message color: the line ends with the raw text, no trailing reset.
    assert!(out[0].ends_with("Compiled 42 modules"));
}

#[test]
fn warn_line_is_colored() {
    let (logger, sink) = capture_logger(LoggerOptions::default());
    logger.warn("slow plugin");

    let out = sink.out();
    assert_eq!(out.len(), 1);
    assert!(out[0].contains("\x1b[38;2;"));
    assert!(out[0].ends_with("\x1b[0m"));
}

#[test]
fn error_goes_to_stderr_without_stack() {
    let (logger, sink) = capture_logger(LoggerOptions::default());
    logger.error("boom", ErrorOptions::default()).unwrap();

    assert!(sink.out().is_empty());
    let err = sink.err();
    assert_eq!(err.len(), 1);
    assert!(err[0].contains("boom"));
    assert!(!err[0].contains("at "));
}

#[test]
fn error_chains_cause_into_message() {
    let (logger, sink) = capture_logger(LoggerOptions::default());
    logger
        .error(
            "boom",
            ErrorOptions::new().cause(ResolveError("./missing.css")),
        )
        .unwrap();

    let err = sink.err();
    assert_eq!(err.len(), 1);
    assert!(err[0].contains("boom"));
    assert!(err[0].contains("Caused by: could not resolve './missing.css'"));
}

#[test]
fn warn_once_emits_exactly_once() {
    let (logger, sink) = capture_logger(LoggerOptions::default());

    assert!(!logger.has_warn_logged("deprecated option"));
    logger.warn_once("deprecated option");
    logger.warn_once("deprecated option");

    assert_eq!(sink.out().len(), 1);
    assert!(logger.has_warn_logged("deprecated option"));
}

#[test]
fn info_once_and_error_once_dedup_independently() {
    let (logger, sink) = capture_logger(LoggerOptions::default());

    logger.warn_once("shared message");
    // A message suppressed at warn must still emit through the other once-methods.
    logger.info_once("shared message");
    logger.error_once("shared message");
    logger.error_once("shared message");

    assert_eq!(sink.out().len(), 2);
    assert_eq!(sink.err().len(), 1);
    assert!(logger.has_warn_logged("shared message"));
    assert!(logger.has_error_logged("shared message"));
}

#[test]
fn has_queries_have_no_side_effects() {
    let (logger, sink) = capture_logger(LoggerOptions::default());

    assert!(!logger.has_warn_logged("m"));
    assert!(!logger.has_error_logged("m"));
    logger.warn_once("m");
    assert!(logger.has_warn_logged("m"));
    assert!(!logger.has_error_logged("m"));
    assert_eq!(sink.out().len(), 1);
}

#[test]
fn dedup_state_is_per_instance() {
    let (first, first_sink) = capture_logger(LoggerOptions::default());
    let (second, second_sink) = capture_logger(LoggerOptions::default());

    first.warn_once("deprecated option");
    second.warn_once("deprecated option");

    assert_eq!(first_sink.out().len(), 1);
    assert_eq!(second_sink.out().len(), 1);
}

#[test]
fn reset_once_tracking_allows_re_emission() {
    let (logger, sink) = capture_logger(LoggerOptions::default());

    logger.warn_once("deprecated option");
    logger.reset_once_tracking();
    logger.warn_once("deprecated option");

    assert_eq!(sink.out().len(), 2);
}

#[test]
fn threshold_filters_lower_levels() {
    let (logger, sink) = capture_logger(LoggerOptions::default().level(Level::Warn));

    logger.trace("dropped");
    logger.debug("dropped");
    logger.info("dropped");
    logger.warn("kept");

    let out = sink.out();
    assert_eq!(out.len(), 1);
    assert!(out[0].contains("kept"));
}

#[test]
fn set_prefix_rebrands_the_banner() {
    let sink = MemorySink::new();
    let mut logger = Logger::with_sink(
        LoggerOptions::default().allow_clear_screen(false),
        sink.clone(),
    );

    logger.info("before");
    logger.set_prefix("Dev");
    logger.info("after");

    let out = sink.out();
    assert!(out[0].contains("[ Farm ]"));
    assert!(out[1].contains("[ Dev ]"));
    assert!(!out[1].contains("[ Farm ]"));
}

#[test]
fn custom_brand_color_wraps_the_banner() {
    let (logger, sink) = capture_logger(
        LoggerOptions::default().brand_color(farmlog::Color::new(1, 2, 3)),
    );
    logger.info("hello");

    assert!(sink.out()[0].contains("\x1b[38;2;1;2;3m"));
}

#[test]
fn clear_screen_disabled_by_options() {
    let sink = MemorySink::new();
    let logger = Logger::with_sink(
        LoggerOptions::default().allow_clear_screen(false),
        sink.clone(),
    );

    assert!(!logger.can_clear_screen());
    logger.info("no clearing");
    assert_eq!(sink.clear_count(), 0);
}

#[test]
fn fatal_error_exits_the_process_with_status_one() {
    // Child mode: trigger the fatal path and let the process die.
    if std::env::var("FARMLOG_FATAL_CHILD").is_ok() {
        let logger = Logger::with_options(LoggerOptions::default().allow_clear_screen(false));
        let _ = logger.error("unrecoverable build failure", ErrorOptions::new().exit(true));
        unreachable!("a fatal error must terminate the process");
    }

    // Parent mode: re-invoke this test binary so the exit doesn't take the suite down.
    let exe = std::env::current_exe().unwrap();
    let output = std::process::Command::new(exe)
        .args(["fatal_error_exits_the_process_with_status_one", "--exact"])
        .env("FARMLOG_FATAL_CHILD", "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecoverable build failure"));
}

#[test]
fn noop_logger_stays_silent() {
    let logger = NoopLogger::new();

    logger.trace("quiet");
    logger.debug("quiet");
    logger.info("quiet");
    logger.warn("quiet");
    logger.warn_once("quiet");
    logger.error_once("quiet");

    assert!(!logger.has_warn_logged("quiet"));
    assert!(!logger.has_error_logged("quiet"));
}

#[test]
fn noop_error_without_exit_is_ok() {
    let logger = NoopLogger::new();
    assert!(logger.error("boom", ErrorOptions::default()).is_ok());
    assert!(logger.error("boom", ErrorOptions::new().exit(false)).is_ok());
}

#[test]
fn noop_error_with_exit_raises_instead_of_exiting() {
    let logger = NoopLogger::new();

    let fatal = logger
        .error("boom", ErrorOptions::new().exit(true))
        .unwrap_err();
    assert_eq!(fatal.message(), "boom");
    assert!(fatal.cause().is_none());
}

#[test]
fn noop_fatal_error_carries_the_cause() {
    let logger = NoopLogger::new();

    let fatal = logger
        .error(
            "boom",
            ErrorOptions::new()
                .exit(true)
                .cause(ResolveError("./missing.css")),
        )
        .unwrap_err();

    let cause = fatal.cause().expect("cause should be attached");
    assert_eq!(cause.to_string(), "could not resolve './missing.css'");
    assert!(std::error::Error::source(&fatal).is_some());
}

#[test]
fn loggers_are_object_safe() {
    let loggers: Vec<Box<dyn Log>> = vec![
        Box::new(NoopLogger::new()),
        Box::new(Logger::with_sink(
            LoggerOptions::default().allow_clear_screen(false),
            MemorySink::new(),
        )),
    ];

    for logger in &loggers {
        logger.info("dispatched dynamically");
    }
}
