// ABOUTME: ContentManager mediates every transition a piece of content goes through
// ABOUTME: Generation, local edits, draft/approve/publish, and suggestion fallback

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use copydeck_core::{
    dedup_keywords, Business, ContentDraft, ContentType, ContentUpdate, GenerationRequest,
    KeywordSuggestionRequest, PostCategory, TopicSuggestionRequest, MAX_KEYWORD_SUGGESTIONS,
    MAX_TOPIC_SUGGESTIONS,
};
use copydeck_suggestions as fallback;

use crate::error::{ContentError, Result};
use crate::gateway::ContentGateway;
use crate::notifier::{Notice, Notifier};

/// Delay simulating the publishing flow that is not wired up yet
const PUBLISH_SIMULATION_DELAY: Duration = Duration::from_secs(1);

/// Owns the generated draft and its lifecycle.
///
/// One manager corresponds to one draft slot. Callers are expected to
/// disable generate/regenerate controls while a call is outstanding; on
/// top of that, every generation carries a sequence number and a stale
/// resolution is discarded instead of clobbering newer state.
pub struct ContentManager<G> {
    gateway: G,
    notifier: Arc<dyn Notifier>,
    draft: Option<ContentDraft>,
    last_request: Option<GenerationRequest>,
    generation_seq: u64,
}

impl<G: ContentGateway> ContentManager<G> {
    pub fn new(gateway: G, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            draft: None,
            last_request: None,
            generation_seq: 0,
        }
    }

    /// The currently held draft, if a generation has succeeded
    pub fn draft(&self) -> Option<&ContentDraft> {
        self.draft.as_ref()
    }

    /// Whether a prior successful generation allows regenerating
    pub fn can_regenerate(&self) -> bool {
        self.last_request.is_some()
    }

    /// Generate content and replace the held draft wholesale on success.
    ///
    /// Invalid requests never reach the network. On failure the previous
    /// draft is left untouched and the error is surfaced as a notice.
    pub async fn generate(&mut self, request: GenerationRequest) -> Result<&ContentDraft> {
        if let Err(e) = request.validate() {
            return Err(ContentError::precondition(e.to_string()));
        }
        self.run_generation(request, false).await
    }

    /// Re-run the last successful generation request
    pub async fn regenerate(&mut self) -> Result<&ContentDraft> {
        let request = self
            .last_request
            .clone()
            .ok_or_else(|| ContentError::precondition("nothing has been generated yet"))?;
        self.run_generation(request, true).await
    }

    async fn run_generation(
        &mut self,
        request: GenerationRequest,
        regeneration: bool,
    ) -> Result<&ContentDraft> {
        self.generation_seq += 1;
        let seq = self.generation_seq;

        match self.gateway.generate(&request).await {
            Ok(mut draft) => {
                if seq != self.generation_seq {
                    debug!(seq, current = self.generation_seq, "discarding stale generation response");
                    return Err(ContentError::Generation(
                        "superseded by a newer generation request".to_string(),
                    ));
                }

                draft.keywords = dedup_keywords(draft.keywords);
                self.last_request = Some(request);

                if regeneration {
                    self.notifier.notify(Notice::success(
                        "Content Regenerated!",
                        "New AI-powered content has been generated",
                    ));
                } else {
                    self.notifier.notify(Notice::success(
                        "Content Generated!",
                        "Your AI-powered content is ready for review",
                    ));
                }

                Ok(self.draft.insert(draft))
            }
            Err(e) => {
                warn!(error = %e, regeneration, "content generation failed");
                if regeneration {
                    self.notifier.notify(Notice::error(
                        "Regeneration Failed",
                        "There was an error regenerating content. Please try again.",
                    ));
                } else {
                    self.notifier.notify(Notice::error(
                        "Generation Failed",
                        "There was an error generating content. Please try again.",
                    ));
                }
                Err(ContentError::Generation(e.to_string()))
            }
        }
    }

    /// Apply a local edit to the held draft; never contacts the network
    pub fn edit(
        &mut self,
        title: impl Into<String>,
        content_text: impl Into<String>,
    ) -> Result<&ContentDraft> {
        let draft = self
            .draft
            .as_mut()
            .ok_or_else(|| ContentError::precondition("no generated content to edit"))?;

        draft.title = title.into();
        draft.content_text = content_text.into();

        self.notifier.notify(Notice::success(
            "Content Updated!",
            "Your content has been successfully edited",
        ));

        Ok(draft)
    }

    /// Flip the held draft's server record back to draft status.
    ///
    /// Only transitions an already-persisted id; it never creates a row.
    pub async fn save_draft(&self) -> Result<()> {
        let id = self.persisted_id()?;

        match self.gateway.mark_draft(id).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(
                    "Draft Saved!",
                    "Content has been saved as draft",
                ));
                Ok(())
            }
            Err(e) => {
                warn!(content_id = id, error = %e, "save draft failed");
                self.notifier.notify(Notice::error(
                    "Save Failed",
                    "There was an error saving the draft. Please try again.",
                ));
                Err(ContentError::Persistence(e.to_string()))
            }
        }
    }

    /// Move the held draft's server record to pending approval
    pub async fn approve(&self) -> Result<()> {
        let id = self.persisted_id()?;

        match self.gateway.approve(id).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(
                    "Content Approved!",
                    "Content has been approved and saved",
                ));
                Ok(())
            }
            Err(e) => {
                warn!(content_id = id, error = %e, "approval failed");
                self.notifier.notify(Notice::error(
                    "Approval Failed",
                    "There was an error approving the content. Please try again.",
                ));
                Err(ContentError::Persistence(e.to_string()))
            }
        }
    }

    /// Publishing is acknowledged but not implemented; after a simulated
    /// delay this always reports the unavailable outcome and changes no
    /// state anywhere.
    pub async fn publish(&self) -> Result<()> {
        if self.draft.is_none() {
            return Err(ContentError::precondition("no generated content to publish"));
        }

        tokio::time::sleep(PUBLISH_SIMULATION_DELAY).await;

        self.notifier.notify(Notice::warning(
            "Publishing Not Available",
            "Publishing functionality will be implemented in a future update",
        ));
        Err(ContentError::PublishUnavailable)
    }

    /// Partially update a persisted content record (library edit)
    pub async fn update_content(&self, content_id: i64, patch: ContentUpdate) -> Result<()> {
        match self.gateway.update(content_id, &patch).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(
                    "Content Updated!",
                    "Your content has been successfully edited",
                ));
                Ok(())
            }
            Err(e) => {
                warn!(content_id, error = %e, "content update failed");
                self.notifier.notify(Notice::error(
                    "Update Failed",
                    "There was an error updating the content",
                ));
                Err(ContentError::Persistence(e.to_string()))
            }
        }
    }

    /// Delete a persisted content record after explicit confirmation
    pub async fn delete_content(&self, content_id: i64) -> Result<()> {
        match self.gateway.delete(content_id).await {
            Ok(()) => {
                self.notifier.notify(Notice::success(
                    "Content Deleted",
                    "Content has been successfully deleted",
                ));
                Ok(())
            }
            Err(e) => {
                warn!(content_id, error = %e, "content deletion failed");
                self.notifier.notify(Notice::error(
                    "Delete Failed",
                    "There was an error deleting the content",
                ));
                Err(ContentError::Persistence(e.to_string()))
            }
        }
    }

    /// Topic suggestions for the generator form.
    ///
    /// Falls back to the local engine on any remote failure; this path
    /// never fails and never returns more than five entries.
    pub async fn topic_suggestions(
        &self,
        business: &Business,
        content_type: ContentType,
        category: Option<PostCategory>,
        description: Option<&str>,
    ) -> Vec<String> {
        let request = TopicSuggestionRequest {
            business_id: business.id,
            content_type,
            category,
            description: description.map(str::to_string),
        };

        match self.gateway.topic_suggestions(&request).await {
            Ok(mut suggestions) => {
                suggestions.truncate(MAX_TOPIC_SUGGESTIONS);
                suggestions
            }
            Err(e) => {
                warn!(error = %e, "remote topic suggestions failed, using local fallback");
                self.notifier.notify(Notice::error(
                    "Suggestions Failed",
                    "Could not generate topic suggestions. Showing local suggestions instead.",
                ));
                fallback::topic_suggestions(business, content_type, category)
            }
        }
    }

    /// Keyword suggestions for the generator form; same fallback contract
    /// as topic suggestions, capped at ten entries.
    pub async fn keyword_suggestions(
        &self,
        business: &Business,
        content_type: ContentType,
        category: Option<PostCategory>,
        topic: Option<&str>,
        description: Option<&str>,
    ) -> Vec<String> {
        let request = KeywordSuggestionRequest {
            business_id: business.id,
            content_type,
            category,
            topic: topic.map(str::to_string),
            description: description.map(str::to_string),
        };

        match self.gateway.keyword_suggestions(&request).await {
            Ok(mut suggestions) => {
                suggestions.truncate(MAX_KEYWORD_SUGGESTIONS);
                suggestions
            }
            Err(e) => {
                warn!(error = %e, "remote keyword suggestions failed, using local fallback");
                self.notifier.notify(Notice::error(
                    "Keywords Failed",
                    "Could not generate keyword suggestions. Showing local suggestions instead.",
                ));
                fallback::keyword_suggestions(business, content_type, category, topic)
            }
        }
    }

    fn persisted_id(&self) -> Result<i64> {
        self.draft
            .as_ref()
            .and_then(|d| d.id)
            .ok_or_else(|| ContentError::precondition("content has no server-assigned id yet"))
    }
}
