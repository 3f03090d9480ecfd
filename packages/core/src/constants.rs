// ABOUTME: Shared constants for the Copydeck console
// ABOUTME: Suggestion caps, SEO thresholds, and the default API endpoint

/// Default base URL of the content API, overridable via `COPYDECK_API_URL`
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Maximum number of topic suggestions shown in the generator form
pub const MAX_TOPIC_SUGGESTIONS: usize = 5;

/// Maximum number of keyword suggestions shown in the generator form
pub const MAX_KEYWORD_SUGGESTIONS: usize = 10;

/// SEO score at or above which content is considered well optimized
pub const SEO_SCORE_GOOD: u8 = 80;

/// SEO score at or above which content is considered acceptable
pub const SEO_SCORE_OK: u8 = 60;
