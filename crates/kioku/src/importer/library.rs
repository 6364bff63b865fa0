//! Prompt library document parsing
//!
//! The document is read as an untyped YAML tree so a single malformed
//! entry is skipped instead of failing the whole file.

use std::path::Path;

use serde_yaml::Value;

use super::error::ImportError;

const PROMPTS_KEY: &str = "prompts";

/// Extract the raw entries of the `prompts` sequence, in file order.
///
/// An empty document, a missing key and `prompts: null` all yield no entries.
pub(crate) fn parse_entries(path: &Path, content: &str) -> Result<Vec<Value>, ImportError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document: Value = serde_yaml::from_str(content).map_err(|source| ImportError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match document {
        Value::Null => Ok(Vec::new()),
        Value::Mapping(mut root) => match root.remove(PROMPTS_KEY) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Sequence(entries)) => Ok(entries),
            Some(other) => Err(ImportError::InvalidDocument(format!(
                "'{}' must be a sequence, found {}",
                PROMPTS_KEY,
                kind(&other)
            ))),
        },
        other => Err(ImportError::InvalidDocument(format!(
            "expected a mapping at the top level, found {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
