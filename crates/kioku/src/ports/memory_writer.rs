//! Memory Writer Port
//!
//! The one capability the importer needs from a memory store.
//! Note: deduplication happens inside the store, keyed on content.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Write capability of an external memory store
#[async_trait]
pub trait MemoryWriter: Send + Sync {
    /// Store a prompt under its id and triggers.
    ///
    /// Returns a human-readable confirmation. Writing identical content
    /// twice must not create a second entry.
    async fn write(&self, id: &str, text: &str, triggers: &[String])
        -> Result<String, DomainError>;
}

#[async_trait]
impl<W: MemoryWriter + ?Sized> MemoryWriter for &W {
    async fn write(
        &self,
        id: &str,
        text: &str,
        triggers: &[String],
    ) -> Result<String, DomainError> {
        (**self).write(id, text, triggers).await
    }
}

#[async_trait]
impl<W: MemoryWriter + ?Sized> MemoryWriter for Box<W> {
    async fn write(
        &self,
        id: &str,
        text: &str,
        triggers: &[String],
    ) -> Result<String, DomainError> {
        (**self).write(id, text, triggers).await
    }
}

#[async_trait]
impl<W: MemoryWriter + ?Sized> MemoryWriter for Arc<W> {
    async fn write(
        &self,
        id: &str,
        text: &str,
        triggers: &[String],
    ) -> Result<String, DomainError> {
        (**self).write(id, text, triggers).await
    }
}
