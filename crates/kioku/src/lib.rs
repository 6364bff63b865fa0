//! Kioku Domain Library
//!
//! Imports a YAML prompt library into an external memory store.
//!
//! # Architecture
//!
//! Same layering as the rest of the workspace:
//!
//! - **Domain Layer** (`domain/`): `PromptRecord` and `DomainError`
//! - **Ports** (`ports/`): `MemoryWriter`, the single write capability
//!   the importer needs from a memory store
//! - **Importer** (`importer/`): parse, validate, write, report
//!
//! The memory store owns deduplication. Writers are expected to be
//! idempotent for identical content, which makes re-running an import safe.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kioku::{ImportConfig, Importer};
//!
//! let importer = Importer::new(ImportConfig::new("prompt-library.yaml"), writer);
//! let outcome = importer.run().await?;
//! ```

pub mod domain;
pub mod importer;
pub mod ports;

// Re-export commonly used types
pub use domain::{DomainError, PromptRecord};
pub use importer::{
    truncate_confirmation, ImportConfig, ImportError, ImportOutcome, ImportSummary, Importer,
    CONFIRMATION_PREVIEW_CHARS,
};
pub use ports::MemoryWriter;
