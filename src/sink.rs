//! The logger shouldn't care whether lines land on real std streams or in a test
//! buffer — the `Sink` trait is that seam, with one implementation for each.

use crate::error::Error;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// `Send + Sync` bounds let a logger behind a process-wide singleton serve multiple threads.
pub trait Sink: Send + Sync {
    /// Trace, debug, info, and warn lines.
    ///
    /// # Errors
    /// I/O errors from the underlying stream; the logger ignores them.
    fn write_out(&self, line: &str) -> Result<(), Error>;

    /// Error lines go to a separate stream so shell redirection can split diagnostics from output.
    ///
    /// # Errors
    /// I/O errors from the underlying stream; the logger ignores them.
    fn write_err(&self, line: &str) -> Result<(), Error>;

    /// Dev-server rebuilds clear stale output so the newest diagnostics are at the top.
    ///
    /// # Errors
    /// I/O errors from the underlying stream; the logger ignores them.
    fn clear_screen(&self) -> Result<(), Error>;

    /// The fatal-exit path must not lose buffered tail data when the process dies.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> Result<(), Error>;
}

/// Default sink — stdout for regular levels, stderr for errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdStreams;

impl Sink for StdStreams {
    fn write_out(&self, line: &str) -> Result<(), Error> {
        writeln!(io::stdout(), "{line}")?;
        Ok(())
    }

    fn write_err(&self, line: &str) -> Result<(), Error> {
        writeln!(io::stderr(), "{line}")?;
        Ok(())
    }

    fn clear_screen(&self) -> Result<(), Error> {
        let mut out = io::stdout();
        // Erase display, then home the cursor.
        write!(out, "\x1b[2J\x1b[H")?;
        out.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}

/// Captures emitted lines so tests can assert on exact output without touching real streams.
///
/// Clones share the same buffer — keep one handle for assertions and move the other
/// into the logger.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<Captured>>,
}

#[derive(Debug, Default)]
struct Captured {
    out: Vec<String>,
    err: Vec<String>,
    clears: usize,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written to the stdout side, in emission order.
    #[must_use]
    pub fn out(&self) -> Vec<String> {
        self.inner.lock().map(|c| c.out.clone()).unwrap_or_default()
    }

    /// Lines written to the stderr side, in emission order.
    #[must_use]
    pub fn err(&self) -> Vec<String> {
        self.inner.lock().map(|c| c.err.clone()).unwrap_or_default()
    }

    /// How many times the screen was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.inner.lock().map(|c| c.clears).unwrap_or_default()
    }
}

impl Sink for MemorySink {
    fn write_out(&self, line: &str) -> Result<(), Error> {
        if let Ok(mut captured) = self.inner.lock() {
            captured.out.push(line.to_string());
        }
        Ok(())
    }

    fn write_err(&self, line: &str) -> Result<(), Error> {
        if let Ok(mut captured) = self.inner.lock() {
            captured.err.push(line.to_string());
        }
        Ok(())
    }

    fn clear_screen(&self) -> Result<(), Error> {
        if let Ok(mut captured) = self.inner.lock() {
            captured.clears += 1;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}
