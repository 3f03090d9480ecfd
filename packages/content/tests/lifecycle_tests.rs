// ABOUTME: Unit tests for the content lifecycle controller with a mocked gateway
// ABOUTME: Covers draft replacement, preconditions, publish, and suggestion fallback

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use pretty_assertions::assert_eq;

use copydeck_client::{ApiError, ApiResult};
use copydeck_content::{ContentError, ContentGateway, ContentManager, Notice, Notifier};
use copydeck_core::{
    Business, ContentDraft, ContentType, ContentUpdate, GenerationRequest,
    KeywordSuggestionRequest, PostCategory, TopicSuggestionRequest,
};

mock! {
    Gateway {}

    #[async_trait]
    impl ContentGateway for Gateway {
        async fn generate(&self, request: &GenerationRequest) -> ApiResult<ContentDraft>;
        async fn mark_draft(&self, content_id: i64) -> ApiResult<()>;
        async fn approve(&self, content_id: i64) -> ApiResult<()>;
        async fn update(&self, content_id: i64, patch: &ContentUpdate) -> ApiResult<()>;
        async fn delete(&self, content_id: i64) -> ApiResult<()>;
        async fn topic_suggestions(&self, request: &TopicSuggestionRequest) -> ApiResult<Vec<String>>;
        async fn keyword_suggestions(&self, request: &KeywordSuggestionRequest) -> ApiResult<Vec<String>>;
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn titles(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

fn manager_with(
    gateway: MockGateway,
) -> (ContentManager<MockGateway>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let manager = ContentManager::new(gateway, notifier.clone());
    (manager, notifier)
}

fn request(topic: &str) -> GenerationRequest {
    GenerationRequest {
        business_id: 3,
        content_type: ContentType::BlogPost,
        topic: topic.to_string(),
        category: Some(PostCategory::Promotional),
        description: None,
        keywords: vec!["retail".to_string()],
    }
}

fn rich_draft() -> ContentDraft {
    ContentDraft {
        id: Some(42),
        title: "Spring Collection Launch".to_string(),
        content_text: "# Spring Collection\n\nOur new arrivals...".to_string(),
        content_type: ContentType::BlogPost,
        meta_description: Some("Our new arrivals...".to_string()),
        keywords: vec!["retail".to_string(), "spring".to_string()],
        seo_score: Some(85),
        ai_model_used: Some("anthropic-claude".to_string()),
    }
}

fn sparse_draft() -> ContentDraft {
    ContentDraft {
        id: Some(43),
        title: "Short take".to_string(),
        content_text: "A quick post.".to_string(),
        content_type: ContentType::TwitterPost,
        meta_description: None,
        keywords: Vec::new(),
        seo_score: None,
        ai_model_used: None,
    }
}

fn acme() -> Business {
    Business {
        id: 3,
        name: "Acme".to_string(),
        industry: Some("Retail".to_string()),
        description: None,
        website_url: None,
        target_audience: None,
        brand_voice: None,
        created_at: Utc::now(),
    }
}

// ============================================================================
// Generation
// ============================================================================

#[tokio::test]
async fn generate_replaces_draft_entirely() {
    let mut seq = mockall::Sequence::new();
    let mut gateway = MockGateway::new();
    gateway
        .expect_generate()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(rich_draft()));
    gateway
        .expect_generate()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(sparse_draft()));
    let (mut manager, _) = manager_with(gateway);

    manager.generate(request("Spring launch")).await.unwrap();
    manager.generate(request("Quick take")).await.unwrap();

    // No field from the first draft leaks into the second.
    assert_eq!(manager.draft(), Some(&sparse_draft()));
}

#[tokio::test]
async fn failed_generation_preserves_previous_draft() {
    let mut seq = mockall::Sequence::new();
    let mut gateway = MockGateway::new();
    gateway
        .expect_generate()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(rich_draft()));
    gateway
        .expect_generate()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Err(ApiError::Status {
                status: 500,
                message: "backend down".to_string(),
            })
        });
    let (mut manager, notifier) = manager_with(gateway);

    manager.generate(request("Spring launch")).await.unwrap();
    let error = manager.generate(request("Another topic")).await.unwrap_err();

    assert!(matches!(error, ContentError::Generation(_)));
    assert_eq!(manager.draft(), Some(&rich_draft()));
    assert!(notifier.titles().contains(&"Generation Failed".to_string()));
}

#[tokio::test]
async fn invalid_request_never_reaches_the_network() {
    // No expectations set: any gateway call would panic the mock.
    let (mut manager, _) = manager_with(MockGateway::new());

    let error = manager.generate(request("   ")).await.unwrap_err();

    assert!(error.is_precondition());
    assert!(manager.draft().is_none());
}

#[tokio::test]
async fn generated_keywords_are_deduplicated() {
    let mut gateway = MockGateway::new();
    gateway.expect_generate().returning(|_| {
        let mut draft = rich_draft();
        draft.keywords = vec![
            "retail".to_string(),
            "spring".to_string(),
            "retail".to_string(),
        ];
        Ok(draft)
    });
    let (mut manager, _) = manager_with(gateway);

    manager.generate(request("Spring launch")).await.unwrap();

    assert_eq!(manager.draft().unwrap().keywords, vec!["retail", "spring"]);
}

// ============================================================================
// Regeneration
// ============================================================================

#[tokio::test]
async fn regenerate_requires_a_prior_generation() {
    let (mut manager, _) = manager_with(MockGateway::new());

    let error = manager.regenerate().await.unwrap_err();

    assert!(error.is_precondition());
    assert!(!manager.can_regenerate());
}

#[tokio::test]
async fn regenerate_reuses_the_last_request() {
    let expected = request("Spring launch");
    let mut seq = mockall::Sequence::new();
    let mut gateway = MockGateway::new();
    let first = expected.clone();
    gateway
        .expect_generate()
        .times(1)
        .in_sequence(&mut seq)
        .withf(move |req| *req == first)
        .returning(|_| Ok(rich_draft()));
    let second = expected.clone();
    gateway
        .expect_generate()
        .times(1)
        .in_sequence(&mut seq)
        .withf(move |req| *req == second)
        .returning(|_| Ok(sparse_draft()));
    let (mut manager, notifier) = manager_with(gateway);

    manager.generate(expected).await.unwrap();
    assert!(manager.can_regenerate());
    manager.regenerate().await.unwrap();

    assert_eq!(manager.draft(), Some(&sparse_draft()));
    assert!(notifier.titles().contains(&"Content Regenerated!".to_string()));
}

// ============================================================================
// Local edits
// ============================================================================

#[tokio::test]
async fn edit_patches_exactly_title_and_content() {
    let mut gateway = MockGateway::new();
    gateway.expect_generate().returning(|_| Ok(rich_draft()));
    let (mut manager, _) = manager_with(gateway);
    manager.generate(request("Spring launch")).await.unwrap();

    manager.edit("New title", "New body").unwrap();

    let mut expected = rich_draft();
    expected.title = "New title".to_string();
    expected.content_text = "New body".to_string();
    assert_eq!(manager.draft(), Some(&expected));
}

#[tokio::test]
async fn edit_without_a_draft_is_a_precondition_failure() {
    let (mut manager, _) = manager_with(MockGateway::new());

    let error = manager.edit("title", "body").unwrap_err();

    assert!(error.is_precondition());
}

// ============================================================================
// Save draft / approve
// ============================================================================

#[tokio::test]
async fn save_draft_without_id_fails_offline() {
    let mut gateway = MockGateway::new();
    gateway.expect_generate().returning(|_| {
        let mut draft = rich_draft();
        draft.id = None;
        Ok(draft)
    });
    // No mark_draft expectation: a network call would panic the mock.
    let (mut manager, _) = manager_with(gateway);
    manager.generate(request("Spring launch")).await.unwrap();

    let error = manager.save_draft().await.unwrap_err();

    assert!(error.is_precondition());
}

#[tokio::test]
async fn approve_without_id_fails_offline() {
    let mut gateway = MockGateway::new();
    gateway.expect_generate().returning(|_| {
        let mut draft = rich_draft();
        draft.id = None;
        Ok(draft)
    });
    let (mut manager, _) = manager_with(gateway);
    manager.generate(request("Spring launch")).await.unwrap();

    let error = manager.approve().await.unwrap_err();

    assert!(error.is_precondition());
}

#[tokio::test]
async fn save_draft_and_approve_transition_the_persisted_id() {
    let mut gateway = MockGateway::new();
    gateway.expect_generate().returning(|_| Ok(rich_draft()));
    gateway
        .expect_mark_draft()
        .with(mockall::predicate::eq(42i64))
        .times(1)
        .returning(|_| Ok(()));
    gateway
        .expect_approve()
        .with(mockall::predicate::eq(42i64))
        .times(1)
        .returning(|_| Ok(()));
    let (mut manager, notifier) = manager_with(gateway);
    manager.generate(request("Spring launch")).await.unwrap();

    manager.save_draft().await.unwrap();
    manager.approve().await.unwrap();

    let titles = notifier.titles();
    assert!(titles.contains(&"Draft Saved!".to_string()));
    assert!(titles.contains(&"Content Approved!".to_string()));
}

#[tokio::test]
async fn approve_failure_surfaces_as_persistence_error() {
    let mut gateway = MockGateway::new();
    gateway.expect_generate().returning(|_| Ok(rich_draft()));
    gateway.expect_approve().returning(|_| {
        Err(ApiError::Status {
            status: 500,
            message: "db write failed".to_string(),
        })
    });
    let (mut manager, notifier) = manager_with(gateway);
    manager.generate(request("Spring launch")).await.unwrap();

    let error = manager.approve().await.unwrap_err();

    assert!(matches!(error, ContentError::Persistence(_)));
    assert!(notifier.titles().contains(&"Approval Failed".to_string()));
    // The draft itself is untouched by the failed transition.
    assert_eq!(manager.draft(), Some(&rich_draft()));
}

// ============================================================================
// Publish
// ============================================================================

#[tokio::test(start_paused = true)]
async fn publish_is_always_unavailable_and_changes_nothing() {
    let mut gateway = MockGateway::new();
    gateway.expect_generate().returning(|_| Ok(rich_draft()));
    let (mut manager, notifier) = manager_with(gateway);
    manager.generate(request("Spring launch")).await.unwrap();

    let error = manager.publish().await.unwrap_err();

    assert!(matches!(error, ContentError::PublishUnavailable));
    assert_eq!(manager.draft(), Some(&rich_draft()));
    assert!(notifier
        .titles()
        .contains(&"Publishing Not Available".to_string()));
}

#[tokio::test]
async fn publish_without_a_draft_is_a_precondition_failure() {
    let (manager, _) = manager_with(MockGateway::new());

    let error = manager.publish().await.unwrap_err();

    assert!(error.is_precondition());
}

// ============================================================================
// Library operations
// ============================================================================

#[tokio::test]
async fn delete_failure_surfaces_as_persistence_error() {
    let mut gateway = MockGateway::new();
    gateway.expect_delete().returning(|_| {
        Err(ApiError::Status {
            status: 500,
            message: "Failed to delete content".to_string(),
        })
    });
    let (manager, notifier) = manager_with(gateway);

    let error = manager.delete_content(11).await.unwrap_err();

    assert!(matches!(error, ContentError::Persistence(_)));
    assert!(notifier.titles().contains(&"Delete Failed".to_string()));
}

#[tokio::test]
async fn update_content_sends_the_patch() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_update()
        .withf(|id, patch| {
            *id == 9
                && patch.title.as_deref() == Some("Edited")
                && patch.content_text.as_deref() == Some("Edited body")
        })
        .times(1)
        .returning(|_, _| Ok(()));
    let (manager, _) = manager_with(gateway);

    manager
        .update_content(9, ContentUpdate::new("Edited", "Edited body"))
        .await
        .unwrap();
}

// ============================================================================
// Suggestion fallback
// ============================================================================

#[tokio::test]
async fn topic_suggestions_recover_locally_on_remote_failure() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_topic_suggestions()
        .returning(|_| Err(ApiError::Network("connection refused".to_string())));
    let (manager, notifier) = manager_with(gateway);

    let suggestions = manager
        .topic_suggestions(&acme(), ContentType::BlogPost, Some(PostCategory::Promotional), None)
        .await;

    assert_eq!(suggestions.len(), 5);
    for suggestion in &suggestions {
        assert!(suggestion.contains("Acme") || suggestion.contains("Retail"));
    }
    assert!(notifier.titles().contains(&"Suggestions Failed".to_string()));
}

#[tokio::test]
async fn keyword_suggestions_recover_locally_on_remote_failure() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_keyword_suggestions()
        .returning(|_| Err(ApiError::Network("connection refused".to_string())));
    let (manager, _) = manager_with(gateway);

    let suggestions = manager
        .keyword_suggestions(&acme(), ContentType::BlogPost, None, Some("Spring launch"), None)
        .await;

    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 10);
    let mut deduped = suggestions.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), suggestions.len());
}

#[tokio::test]
async fn remote_suggestions_are_capped() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_topic_suggestions()
        .returning(|_| Ok((0..8).map(|i| format!("Topic {i}")).collect()));
    gateway
        .expect_keyword_suggestions()
        .returning(|_| Ok((0..15).map(|i| format!("keyword-{i}")).collect()));
    let (manager, _) = manager_with(gateway);

    let topics = manager
        .topic_suggestions(&acme(), ContentType::BlogPost, None, None)
        .await;
    let keywords = manager
        .keyword_suggestions(&acme(), ContentType::BlogPost, None, None, None)
        .await;

    assert_eq!(topics.len(), 5);
    assert_eq!(keywords.len(), 10);
}
