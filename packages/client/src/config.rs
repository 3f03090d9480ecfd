// ABOUTME: Environment-driven configuration for the API client
// ABOUTME: COPYDECK_API_URL and COPYDECK_TIMEOUT_SECS with validated defaults

use std::env;

use copydeck_core::DEFAULT_API_URL;

use crate::error::{ApiError, ApiResult};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the content API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the API prefix, e.g. `http://localhost:8000/api/v1`
    pub base_url: String,

    /// Per-request timeout
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Build a config from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let base_url = env::var("COPYDECK_API_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = env::var("COPYDECK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|&v| v > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ApiError::Configuration("API base URL is empty".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::Configuration(format!(
                "API base URL must be http(s): {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_http_url() {
        let config = ClientConfig::with_base_url("ftp://example.com");
        assert!(config.validate().is_err());
    }
}
