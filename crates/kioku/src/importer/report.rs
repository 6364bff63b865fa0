//! Import outcome and summary

use std::path::PathBuf;

/// How an import run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The library file does not exist. Not an error.
    SourceMissing(PathBuf),
    /// The library holds no prompt entries.
    NoPrompts,
    /// Every entry was processed.
    Completed(ImportSummary),
}

impl ImportOutcome {
    pub fn summary(&self) -> Option<&ImportSummary> {
        match self {
            ImportOutcome::Completed(summary) => Some(summary),
            _ => None,
        }
    }

    /// Number of prompts handed to the memory store
    pub fn written(&self) -> usize {
        self.summary().map_or(0, |s| s.written)
    }
}

/// Counts of a completed import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries found in the library
    pub total: usize,
    /// Entries successfully written
    pub written: usize,
    /// Ids of written entries, in file order
    pub written_ids: Vec<String>,
    /// Labels of skipped entries, in file order
    pub skipped: Vec<String>,
}

impl ImportSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub(crate) fn record_written(&mut self, id: String) {
        self.written += 1;
        self.written_ids.push(id);
    }

    pub(crate) fn record_skipped(&mut self, label: String) {
        self.skipped.push(label);
    }

    /// True when no entry was skipped
    pub fn is_complete(&self) -> bool {
        self.written == self.total
    }
}
