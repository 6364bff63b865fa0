//! Prompt library importer
//!
//! Reads the library, validates each entry and hands valid prompts to a
//! [`MemoryWriter`] one at a time, in file order. Progress goes to the
//! given output sink; tracing gets the structured version.

mod error;
mod library;
mod report;

pub use error::ImportError;
pub use report::{ImportOutcome, ImportSummary};

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::domain::PromptRecord;
use crate::ports::MemoryWriter;

/// Confirmations are cut to this many characters in progress output
pub const CONFIRMATION_PREVIEW_CHARS: usize = 70;

/// Importer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// Path of the YAML prompt library
    pub source_path: PathBuf,
}

impl ImportConfig {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
        }
    }
}

/// One-shot importer from a prompt library into a memory store
pub struct Importer<W> {
    config: ImportConfig,
    writer: W,
}

impl<W: MemoryWriter> Importer<W> {
    pub fn new(config: ImportConfig, writer: W) -> Self {
        Self { config, writer }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Run the import, printing progress to stdout
    pub async fn run(&self) -> Result<ImportOutcome, ImportError> {
        let mut stdout = std::io::stdout();
        self.run_with_output(&mut stdout).await
    }

    /// Run the import, printing progress to `out`
    pub async fn run_with_output<O: Write>(
        &self,
        out: &mut O,
    ) -> Result<ImportOutcome, ImportError> {
        let path = &self.config.source_path;

        if !path.exists() {
            tracing::warn!(path = %path.display(), "Prompt library not found");
            writeln!(out, "Library not found at {}", path.display())?;
            return Ok(ImportOutcome::SourceMissing(path.clone()));
        }

        let content = fs::read_to_string(path).map_err(|source| ImportError::Read {
            path: path.clone(),
            source,
        })?;
        let entries = library::parse_entries(path, &content)?;

        if entries.is_empty() {
            writeln!(out, "No prompts to migrate.")?;
            return Ok(ImportOutcome::NoPrompts);
        }

        tracing::info!(path = %path.display(), total = entries.len(), "Migrating prompts");
        writeln!(out, "Migrating {} prompts...", entries.len())?;

        let mut summary = ImportSummary::new(entries.len());

        for entry in &entries {
            let record = match PromptRecord::from_yaml(entry) {
                Ok(record) => record,
                Err(e) => {
                    let label = PromptRecord::label(entry);
                    tracing::warn!(prompt = %label, "Skipping prompt: {}", e);
                    writeln!(out, "  - Skipping '{}': missing required fields", label)?;
                    summary.record_skipped(label);
                    continue;
                }
            };

            let confirmation = self
                .writer
                .write(&record.id, &record.prompt, &record.triggers)
                .await
                .map_err(|source| ImportError::Write {
                    id: record.id.clone(),
                    source,
                })?;

            tracing::debug!(
                prompt = %record.id,
                triggers = record.triggers.len(),
                content_hash = %record.content_hash(),
                "Prompt written"
            );
            writeln!(
                out,
                "  + {}: {}",
                record.id,
                truncate_confirmation(&confirmation)
            )?;
            summary.record_written(record.id);
        }

        writeln!(out)?;
        writeln!(
            out,
            "Done. {}/{} prompts written to memory.",
            summary.written, summary.total
        )?;
        tracing::info!(
            written = summary.written,
            skipped = summary.skipped.len(),
            total = summary.total,
            "Prompt migration finished"
        );

        Ok(ImportOutcome::Completed(summary))
    }
}

/// Cut a store confirmation for display (by char count, not bytes)
pub fn truncate_confirmation(confirmation: &str) -> String {
    confirmation
        .chars()
        .take(CONFIRMATION_PREVIEW_CHARS)
        .collect()
}
