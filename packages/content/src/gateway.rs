// ABOUTME: Network boundary trait between the controller and the content API
// ABOUTME: Implemented by ApiClient; mocked in controller tests

use async_trait::async_trait;

use copydeck_client::{ApiClient, ApiResult};
use copydeck_core::{
    ContentDraft, ContentUpdate, GenerationRequest, KeywordSuggestionRequest,
    TopicSuggestionRequest,
};

/// The remote calls the lifecycle controller depends on
#[async_trait]
pub trait ContentGateway: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> ApiResult<ContentDraft>;

    async fn mark_draft(&self, content_id: i64) -> ApiResult<()>;

    async fn approve(&self, content_id: i64) -> ApiResult<()>;

    async fn update(&self, content_id: i64, patch: &ContentUpdate) -> ApiResult<()>;

    async fn delete(&self, content_id: i64) -> ApiResult<()>;

    async fn topic_suggestions(&self, request: &TopicSuggestionRequest) -> ApiResult<Vec<String>>;

    async fn keyword_suggestions(
        &self,
        request: &KeywordSuggestionRequest,
    ) -> ApiResult<Vec<String>>;
}

#[async_trait]
impl ContentGateway for ApiClient {
    async fn generate(&self, request: &GenerationRequest) -> ApiResult<ContentDraft> {
        self.generate_content(request).await
    }

    async fn mark_draft(&self, content_id: i64) -> ApiResult<()> {
        ApiClient::mark_draft(self, content_id).await
    }

    async fn approve(&self, content_id: i64) -> ApiResult<()> {
        self.approve_content(content_id).await
    }

    async fn update(&self, content_id: i64, patch: &ContentUpdate) -> ApiResult<()> {
        self.update_content(content_id, patch).await.map(|_| ())
    }

    async fn delete(&self, content_id: i64) -> ApiResult<()> {
        self.delete_content(content_id).await
    }

    async fn topic_suggestions(&self, request: &TopicSuggestionRequest) -> ApiResult<Vec<String>> {
        ApiClient::topic_suggestions(self, request).await
    }

    async fn keyword_suggestions(
        &self,
        request: &KeywordSuggestionRequest,
    ) -> ApiResult<Vec<String>> {
        ApiClient::keyword_suggestions(self, request).await
    }
}
