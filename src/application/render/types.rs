use thiserror::Error;

use crate::application::source::SourceError;
use crate::domain::error::DomainError;

/// Structured errors surfaced by a converter implementation.
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    #[error("markdown conversion failed: {message}")]
    Markdown { message: String },
}

/// The text → markup capability. Implementations must be pure and
/// deterministic: given the same input, they return identical outputs or
/// errors.
pub trait Converter: Send + Sync {
    fn convert(&self, markdown: &str) -> Result<String, ConversionError>;
}

/// Single failure category caught at the render boundary. The variants exist
/// for propagation with `?`; callers only ever observe the logged description.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document retrieval failed: {0}")]
    Source(#[from] SourceError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Display(#[from] DomainError),
}
