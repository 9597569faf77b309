//! [`RecordingLogger`]: captures pass narration for assertions.

use std::sync::Mutex;

use mirror_core::MirrorLogger;

/// Severity of a recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
}

/// A logger that stores every line it receives.
///
/// # Example
///
/// ```rust,no_run
/// use mirror_test_utils::{MirrorFixture, RecordingLogger};
///
/// let fixture = MirrorFixture::standard();
/// let logger = RecordingLogger::new();
/// fixture.run_pass(&logger).unwrap();
/// assert!(logger.contains("Updated"));
/// ```
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line recorded so far, oldest first.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }

    /// Messages recorded at `level`, oldest first.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(Level::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::Warning)
    }

    /// Whether any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|(_, m)| m.contains(needle))
    }

    /// Number of info lines starting with `verb` (`"Created"`, `"Updated"`, `"Removed"`).
    pub fn count(&self, verb: &str) -> usize {
        self.infos().iter().filter(|m| m.starts_with(verb)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl MirrorLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((Level::Info, message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((Level::Warning, message.to_string()));
    }
}
