//! Retrieval port for the displayed document.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("retrieval failed: {0}")]
    Retrieval(String),
}

impl SourceError {
    pub fn from_transport(err: impl std::fmt::Display) -> Self {
        Self::Retrieval(err.to_string())
    }
}

/// Read-only retrieval of a named text resource.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the named resource's body as text.
    async fn fetch_text(&self, name: &str) -> Result<String, SourceError>;
}
