// ABOUTME: Request validation for the generation path
// ABOUTME: Invalid requests must never reach the network boundary

use thiserror::Error;

use crate::types::GenerationRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a business")]
    MissingBusiness,

    #[error("Please enter a topic")]
    MissingTopic,
}

impl GenerationRequest {
    /// Check the request is complete enough to send.
    ///
    /// Content type is carried as an enum and cannot be missing; the two
    /// remaining required inputs are the business and a non-blank topic.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.business_id <= 0 {
            return Err(ValidationError::MissingBusiness);
        }
        if self.topic.trim().is_empty() {
            return Err(ValidationError::MissingTopic);
        }
        Ok(())
    }
}

/// Drop duplicate keywords while preserving the order of first occurrence
pub fn dedup_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        if !seen.contains(&keyword) {
            seen.push(keyword);
        }
    }
    seen
}
