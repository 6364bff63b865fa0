//! Import Errors
//!
//! Everything here is fatal for a run. Per-record validation problems
//! are not errors; they show up as skips in the summary.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DomainError;

/// Fatal import errors
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read prompt library {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse prompt library {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid prompt library: {0}")]
    InvalidDocument(String),

    #[error("Failed to write prompt '{id}' to memory")]
    Write {
        id: String,
        #[source]
        source: DomainError,
    },

    #[error("Failed to write progress output")]
    Output(#[from] std::io::Error),
}
