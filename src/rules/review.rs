use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

/// Default file name for the unclassified-utterance log
pub const DEFAULT_REVIEW_LOG: &str = "unclassified_utterances.log";

/// Receives utterances that fell through every rule to the default label
///
/// Implementations must never fail the caller; this is an observability hook.
pub trait ReviewSink: Send + Sync {
    fn flag(&self, text: &str);
}

/// Format of one review-log line
pub fn review_line(text: &str) -> String {
    format!("[DEFAULT Statement] {}\n", text)
}

/// Appends flagged utterances to a file, one open-append-close per entry
#[derive(Debug, Clone)]
pub struct FileReviewLog {
    path: PathBuf,
}

impl FileReviewLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

impl Default for FileReviewLog {
    fn default() -> Self {
        Self::new(DEFAULT_REVIEW_LOG)
    }
}

impl ReviewSink for FileReviewLog {
    fn flag(&self, text: &str) {
        if let Err(e) = self.append(&review_line(text)) {
            warn!("Failed to append to review log {:?}: {}", self.path, e);
        }
    }
}

/// Keeps flagged utterances in memory
#[derive(Debug, Default)]
pub struct MemoryReviewLog {
    flagged: Mutex<Vec<String>>,
}

impl MemoryReviewLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the flagged texts, in the order they were flagged
    pub fn flagged(&self) -> Vec<String> {
        self.flagged
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    /// Flagged texts rendered as review-log lines
    pub fn lines(&self) -> String {
        self.flagged().iter().map(|t| review_line(t)).collect()
    }
}

impl ReviewSink for MemoryReviewLog {
    fn flag(&self, text: &str) {
        if let Ok(mut flagged) = self.flagged.lock() {
            flagged.push(text.to_string());
        }
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReviewLog;

impl ReviewSink for NullReviewLog {
    fn flag(&self, _text: &str) {}
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_review_line_format() {
        assert_eq!(review_line("hmm"), "[DEFAULT Statement] hmm\n");
    }

    #[test]
    fn test_file_log_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("review.log");
        let log = FileReviewLog::new(&path);

        log.flag("first");
        log.flag("Second Line");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "[DEFAULT Statement] first\n[DEFAULT Statement] Second Line\n"
        );
    }

    #[test]
    fn test_file_log_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let log = FileReviewLog::new(dir.path());
        log.flag("ignored");
    }

    #[test]
    fn test_memory_log() {
        let log = MemoryReviewLog::new();
        log.flag("a");
        log.flag("b");
        assert_eq!(log.flagged(), vec!["a", "b"]);
        assert_eq!(log.lines(), "[DEFAULT Statement] a\n[DEFAULT Statement] b\n");
    }

    #[test]
    fn test_sinks_as_trait_objects() {
        let memory = Arc::new(MemoryReviewLog::new());
        let sinks: [Arc<dyn ReviewSink>; 2] = [memory.clone(), Arc::new(NullReviewLog)];
        for sink in &sinks {
            sink.flag("x");
        }
        assert_eq!(memory.flagged(), vec!["x"]);
    }
}
