//! Memory API Client
//!
//! HTTP adapter for the memory store. Deduplication by content hash
//! happens on the server; the hash is sent along as a hint.

use async_trait::async_trait;
use kioku::{DomainError, MemoryWriter, PromptRecord};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;

const SOURCE_TAG: &str = "prompt-library";

/// API Client for the memory store
pub struct MemoryApiClient {
    client: Client,
    base_url: String,
    namespace: String,
    api_key: Option<String>,
    memory_type: String,
    importance: f32,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct CreateMemoryRequest {
    pub content: String,
    pub memory_type: String,
    pub importance: f32,
    pub tags: Vec<String>,
    pub metadata: MemoryMetadata,
}

#[derive(Debug, Serialize)]
pub struct MemoryMetadata {
    pub prompt_id: String,
    pub content_hash: String,
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct MemoryResponse {
    pub id: String,
    #[serde(default)]
    pub deduplicated: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl MemoryResponse {
    /// Confirmation line shown next to the prompt id
    pub fn confirmation(&self) -> String {
        match &self.message {
            Some(message) if !message.is_empty() => message.clone(),
            _ if self.deduplicated => format!("already stored as {}", self.id),
            _ => format!("stored as {}", self.id),
        }
    }
}

impl MemoryApiClient {
    /// Create a new API client
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            namespace: config.namespace.clone(),
            api_key: config.api_key.clone(),
            memory_type: config.memory_type.clone(),
            importance: config.importance,
        }
    }

    fn memories_url(&self) -> String {
        format!("{}/kioku/{}/memories", self.base_url, self.namespace)
    }

    fn build_request(&self, record: &PromptRecord) -> CreateMemoryRequest {
        CreateMemoryRequest {
            content: record.prompt.clone(),
            memory_type: self.memory_type.clone(),
            importance: self.importance,
            tags: record.triggers.clone(),
            metadata: MemoryMetadata {
                prompt_id: record.id.clone(),
                content_hash: record.content_hash(),
                source: SOURCE_TAG.to_string(),
            },
        }
    }

    /// Add a prompt memory
    pub async fn add_memory(&self, record: &PromptRecord) -> Result<MemoryResponse, DomainError> {
        let request = self.build_request(record);

        let mut builder = self.client.post(self.memories_url()).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", api_key));
        }

        let resp = builder.send().await.map_err(|e| {
            DomainError::ExternalService(format!("Failed to connect to memory API: {}", e))
        })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::ExternalService(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        let memory: MemoryResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Repository(format!("Failed to parse response: {}", e)))?;

        tracing::debug!(
            prompt = %record.id,
            memory_id = %memory.id,
            deduplicated = memory.deduplicated,
            "Memory API accepted prompt"
        );

        Ok(memory)
    }
}

#[async_trait]
impl MemoryWriter for MemoryApiClient {
    async fn write(
        &self,
        id: &str,
        text: &str,
        triggers: &[String],
    ) -> Result<String, DomainError> {
        let record = PromptRecord::new(id, text, triggers.to_vec())?;
        let memory = self.add_memory(&record).await?;
        Ok(memory.confirmation())
    }
}
