use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use copydeck_core::{
    Business, ContentDraft, ContentType, ContentUpdate, GenerationRequest, Industry,
    KeywordSuggestionRequest, PersistedContent, TopicSuggestionRequest,
};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Optional filters for `GET /content/`
#[derive(Debug, Clone, Default)]
pub struct ContentListFilter {
    pub business_id: Option<i64>,
    pub content_type: Option<ContentType>,
}

#[derive(Debug, Deserialize)]
struct SuggestionsResponse {
    suggestions: Vec<String>,
}

/// HTTP client for the Copydeck content API
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client from the given configuration
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Generate content for a business; the server persists the result and
    /// returns it with an assigned id
    pub async fn generate_content(&self, request: &GenerationRequest) -> ApiResult<ContentDraft> {
        debug!(
            business_id = request.business_id,
            content_type = %request.content_type,
            "requesting content generation"
        );

        let response = self
            .http
            .post(self.url("/content/generate"))
            .json(request)
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// List persisted content, optionally filtered by business or type
    pub async fn list_content(&self, filter: &ContentListFilter) -> ApiResult<Vec<PersistedContent>> {
        let mut request = self.http.get(self.url("/content/"));
        if let Some(business_id) = filter.business_id {
            request = request.query(&[("business_id", business_id.to_string())]);
        }
        if let Some(content_type) = filter.content_type {
            request = request.query(&[("content_type", content_type.as_str().to_string())]);
        }

        let response = request.send().await?;
        Self::parse_json(response).await
    }

    pub async fn get_content(&self, content_id: i64) -> ApiResult<PersistedContent> {
        let response = self
            .http
            .get(self.url(&format!("/content/{}", content_id)))
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// Partially update an existing content record
    pub async fn update_content(
        &self,
        content_id: i64,
        patch: &ContentUpdate,
    ) -> ApiResult<PersistedContent> {
        let response = self
            .http
            .put(self.url(&format!("/content/{}", content_id)))
            .json(patch)
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// Flip an existing content record back to draft status
    pub async fn mark_draft(&self, content_id: i64) -> ApiResult<()> {
        let response = self
            .http
            .put(self.url(&format!("/content/{}/draft", content_id)))
            .send()
            .await?;

        Self::expect_success(response).await
    }

    /// Move an existing content record to pending approval
    pub async fn approve_content(&self, content_id: i64) -> ApiResult<()> {
        let response = self
            .http
            .put(self.url(&format!("/content/{}/approve", content_id)))
            .send()
            .await?;

        Self::expect_success(response).await
    }

    pub async fn delete_content(&self, content_id: i64) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/content/{}", content_id)))
            .send()
            .await?;

        Self::expect_success(response).await
    }

    pub async fn list_businesses(&self) -> ApiResult<Vec<Business>> {
        let response = self.http.get(self.url("/businesses/")).send().await?;
        Self::parse_json(response).await
    }

    /// List industries; by default only active ones are returned
    pub async fn list_industries(&self, active_only: bool) -> ApiResult<Vec<Industry>> {
        let response = self
            .http
            .get(self.url("/industries/"))
            .query(&[("active_only", active_only.to_string())])
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// Remote topic suggestions; failures are recovered locally by the caller
    pub async fn topic_suggestions(
        &self,
        request: &TopicSuggestionRequest,
    ) -> ApiResult<Vec<String>> {
        let response = self
            .http
            .post(self.url("/suggestions/topics"))
            .json(request)
            .send()
            .await?;

        let body: SuggestionsResponse = Self::parse_json(response).await?;
        Ok(body.suggestions)
    }

    /// Remote keyword suggestions; failures are recovered locally by the caller
    pub async fn keyword_suggestions(
        &self,
        request: &KeywordSuggestionRequest,
    ) -> ApiResult<Vec<String>> {
        let response = self
            .http
            .post(self.url("/suggestions/keywords"))
            .json(request)
            .send()
            .await?;

        let body: SuggestionsResponse = Self::parse_json(response).await?;
        Ok(body.suggestions)
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string())),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(Self::error_text(response).await)),
            status => Err(ApiError::Status {
                status: status.as_u16(),
                message: Self::error_text(response).await,
            }),
        }
    }

    async fn expect_success(response: Response) -> ApiResult<()> {
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(Self::error_text(response).await)),
            status => Err(ApiError::Status {
                status: status.as_u16(),
                message: Self::error_text(response).await,
            }),
        }
    }

    async fn error_text(response: Response) -> String {
        let status = response.status();
        response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string())
    }
}
