// ABOUTME: Local suggestion generation used when the remote AI service fails
// ABOUTME: Deterministic tables, shuffled per call; zero network dependency

pub mod keywords;
pub mod topics;

pub use keywords::keyword_suggestions;
pub use topics::topic_suggestions;
