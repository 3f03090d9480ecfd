// ABOUTME: Core types, constants, and validation for Copydeck
// ABOUTME: Foundational package shared by the client, controller, and console packages

pub mod constants;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{
    Business, BusinessRef, ContentDraft, ContentStatus, ContentType, ContentUpdate,
    GenerationRequest, Industry, KeywordSuggestionRequest, PersistedContent, PostCategory,
    TopicSuggestionRequest,
};

// Re-export constants
pub use constants::{
    DEFAULT_API_URL, MAX_KEYWORD_SUGGESTIONS, MAX_TOPIC_SUGGESTIONS, SEO_SCORE_GOOD,
    SEO_SCORE_OK,
};

// Re-export validation
pub use validation::{dedup_keywords, ValidationError};
