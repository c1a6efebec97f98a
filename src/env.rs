//! Execution-context signals consumed once at logger construction.

use std::io::IsTerminal;

/// CI runners capture output into build logs where screen-clearing escapes would corrupt the transcript.
#[must_use]
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
}

/// Piped output (editors, wrappers, redirects) must never receive a clear-screen escape.
#[must_use]
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}
