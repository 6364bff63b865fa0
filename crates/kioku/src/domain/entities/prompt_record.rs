//! PromptRecord - One entry of the prompt library
//!
//! Pure domain entity without infrastructure dependencies.

use serde_yaml::Value;
use sha2::{Digest, Sha256};

use crate::domain::errors::DomainError;

/// Label used in skip notices when a record has no usable id
pub const UNKNOWN_LABEL: &str = "unknown";

/// PromptRecord - A validated prompt ready to be written to memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRecord {
    /// Identifier of the prompt within the library
    pub id: String,
    /// Prompt body text
    pub prompt: String,
    /// Tokens the memory store indexes this prompt under
    pub triggers: Vec<String>,
}

impl PromptRecord {
    /// Create a record, rejecting empty fields
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        triggers: Vec<String>,
    ) -> Result<Self, DomainError> {
        let record = Self {
            id: id.into(),
            prompt: prompt.into(),
            triggers,
        };

        if record.id.is_empty() {
            return Err(DomainError::missing_field("id"));
        }
        if record.prompt.is_empty() {
            return Err(DomainError::missing_field("prompt"));
        }
        if record.triggers.is_empty() {
            return Err(DomainError::missing_field("triggers"));
        }

        Ok(record)
    }

    /// Build a record from one entry of the library's `prompts` sequence.
    ///
    /// Scalars (strings, numbers, booleans) are read as text for every
    /// field. A field of any other YAML type is treated as missing.
    pub fn from_yaml(value: &Value) -> Result<Self, DomainError> {
        if !value.is_mapping() {
            return Err(DomainError::Validation(
                "prompt entry is not a mapping".to_string(),
            ));
        }

        let id = value
            .get("id")
            .and_then(scalar_text)
            .ok_or_else(|| DomainError::missing_field("id"))?;
        let prompt = value
            .get("prompt")
            .and_then(scalar_text)
            .ok_or_else(|| DomainError::missing_field("prompt"))?;
        let triggers = value
            .get("triggers")
            .and_then(string_sequence)
            .ok_or_else(|| DomainError::missing_field("triggers"))?;

        Self::new(id, prompt, triggers)
    }

    /// Name to show for a raw entry in progress output
    pub fn label(value: &Value) -> String {
        value
            .get("id")
            .and_then(scalar_text)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }

    /// Hex SHA-256 of the prompt text
    pub fn content_hash(&self) -> String {
        hex::encode(Sha256::digest(self.prompt.as_bytes()))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_sequence(value: &Value) -> Option<Vec<String>> {
    value
        .as_sequence()?
        .iter()
        .map(scalar_text)
        .collect()
}
