//! A caught build failure carries scattered context (plugin, file, frame, stack) —
//! this module flattens it into one multi-line report ready for `Logger::error`.
//! Pure formatting; nothing here writes to a stream.

use crate::fmt::{Color, colorize, dim};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Call-stack frames look like `    at build (src/compiler.ts:3:5)` — anything
/// else in a `stack` field is middleware noise and gets filtered out.
static STACK_FRAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*at .+").expect("Invalid stack frame regex"));

/// Line/column pair pointing into the failing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A caught failure as the plugin pipeline hands it over — every field beyond the
/// message is optional and contributes a report line only when present.
#[derive(Debug, Clone, Default)]
pub struct Diagnostic {
    pub message: String,
    /// The plugin that raised the failure, when one did.
    pub plugin: Option<String>,
    /// Path of the file being processed.
    pub id: Option<String>,
    pub loc: Option<SourceLocation>,
    /// Source excerpt around the failing location, usually pre-rendered by the compiler.
    pub frame: Option<String>,
    pub stack: Option<String>,
}

/// Assembles the human-readable report: plugin line, message, file location,
/// indented frame, caller-supplied extra lines, and optionally the filtered stack.
#[must_use]
pub fn build_error_message(diag: &Diagnostic, extra_lines: &[String], include_stack: bool) -> String {
    let mut lines = Vec::new();

    if let Some(plugin) = &diag.plugin {
        lines.push(colorize(&format!("[plugin: {plugin}]"), Color::purple()));
    }

    if !diag.message.is_empty() {
        lines.push(colorize(&diag.message, Color::red()));
    }

    if let Some(id) = &diag.id {
        let location = diag
            .loc
            .map_or_else(String::new, |loc| format!(":{loc}"));
        lines.push(colorize(&format!("{id}{location}"), Color::cyan()));
    }

    if let Some(frame) = &diag.frame {
        lines.push(dim(&indent(frame)));
    }

    lines.extend(extra_lines.iter().cloned());

    if include_stack
        && let Some(stack) = &diag.stack
    {
        let frames: Vec<&str> = stack
            .lines()
            .filter(|line| STACK_FRAME_REGEX.is_match(line))
            .collect();
        if !frames.is_empty() {
            lines.push(dim(&indent(&frames.join("\n"))));
        }
    }

    lines.join("\n")
}

/// Two-space indent per line so frames and stacks read as subordinate to the message.
fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
