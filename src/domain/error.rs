use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("display region `{id}` not found")]
    UnknownRegion { id: String },
}

impl DomainError {
    pub fn unknown_region(id: impl Into<String>) -> Self {
        Self::UnknownRegion { id: id.into() }
    }
}
