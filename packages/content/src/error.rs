// ABOUTME: Error types for content lifecycle operations
// ABOUTME: Suggestion failures are recovered locally and never surface here

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Content generation failed: {0}")]
    Generation(String),

    #[error("Persistence operation failed: {0}")]
    Persistence(String),

    #[error("Operation not ready: {0}")]
    Precondition(String),

    #[error("Publishing is not yet available")]
    PublishUnavailable,
}

impl ContentError {
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, ContentError::Precondition(_))
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
