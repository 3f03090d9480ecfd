// ABOUTME: HTTP client for the Copydeck content API
// ABOUTME: Typed wrappers over the content, business, industry, and suggestion endpoints

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiClient, ContentListFilter};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
