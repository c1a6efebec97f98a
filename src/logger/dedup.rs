//! One-shot diagnostics ("deprecated option", "missing sourcemap") would otherwise
//! repeat on every incremental rebuild. Each logger owns its store so independent
//! instances in tests never leak suppression state between cases.

use crate::level::Level;
use std::collections::HashSet;
use std::sync::Mutex;

/// Three independent sets — a message suppressed at warn must still emit at error.
#[derive(Debug, Default)]
pub struct DedupStore {
    info: Mutex<HashSet<String>>,
    warn: Mutex<HashSet<String>>,
    error: Mutex<HashSet<String>>,
}

impl DedupStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the message and reports whether it was new. False means "already emitted, skip".
    pub fn insert(&self, level: Level, message: &str) -> bool {
        self.set_for(level)
            .lock()
            .map(|mut set| set.insert(message.to_string()))
            .unwrap_or(false)
    }

    /// Pure membership query, no side effects.
    #[must_use]
    pub fn contains(&self, level: Level, message: &str) -> bool {
        self.set_for(level)
            .lock()
            .map(|set| set.contains(message))
            .unwrap_or(false)
    }

    /// Testing-only escape hatch — suppression normally lasts the process lifetime.
    pub fn reset(&self) {
        for set in [&self.info, &self.warn, &self.error] {
            if let Ok(mut set) = set.lock() {
                set.clear();
            }
        }
    }

    /// Trace and debug have no once-variant; anything below warn shares the info set.
    fn set_for(&self, level: Level) -> &Mutex<HashSet<String>> {
        match level {
            Level::Warn => &self.warn,
            Level::Error => &self.error,
            _ => &self.info,
        }
    }
}
