//! Append-only bounded record of calculation strings. The log keeps at most
//! 100 live entries; appending beyond that evicts the oldest first.

use crate::Utils::logger::save_history_to_file;
use crate::calculator::errors::CalcError;
use log::info;
use std::collections::VecDeque;
use std::path::Path;

/// Maximum number of live history entries.
pub const MAX_HISTORY: usize = 100;

/// One recorded calculation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub text: String,
}

/// FIFO-capped calculation history.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        HistoryLog {
            entries: VecDeque::new(),
        }
    }

    /// Adds an entry at the end, evicting the oldest entry above the cap.
    pub fn append(&mut self, text: impl Into<String>) {
        self.entries.push_back(HistoryEntry { text: text.into() });
        if self.entries.len() > MAX_HISTORY {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full entry sequence, oldest first, for list rendering.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Writes all entries as newline-delimited UTF-8 text. A write failure
    /// is reported to the caller, never fatal.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), CalcError> {
        let path = path.as_ref();
        save_history_to_file(self.entries.iter().map(|e| e.text.as_str()), path)?;
        info!("history exported to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_append_and_order() {
        let mut log = HistoryLog::new();
        log.append("1 + 1 = 2");
        log.append("2 * 2 = 4");
        let texts: Vec<_> = log.entries().map(|e| e.text.clone()).collect();
        assert_eq!(texts, vec!["1 + 1 = 2", "2 * 2 = 4"]);
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let mut log = HistoryLog::new();
        for i in 0..101 {
            log.append(format!("entry {}", i));
        }
        assert_eq!(log.len(), MAX_HISTORY);
        // entry 0 evicted, order of the remaining 100 preserved
        assert_eq!(log.entries().next().unwrap().text, "entry 1");
        assert_eq!(log.entries().last().unwrap().text, "entry 100");
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::new();
        log.append("something");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_export_writes_one_entry_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.txt");
        let mut log = HistoryLog::new();
        log.append("1 + 1 = 2");
        log.append("Error evaluating: 1/0");
        log.export(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1 + 1 = 2\nError evaluating: 1/0\n");
    }

    #[test]
    fn test_export_to_bad_path_is_reported() {
        let mut log = HistoryLog::new();
        log.append("x");
        let res = log.export("/nonexistent-dir/never/history.txt");
        assert!(res.is_err());
    }
}
