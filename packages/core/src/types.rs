use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of content the generator can produce
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    BlogPost,
    LinkedinPost,
    TwitterPost,
    FacebookPost,
    InstagramPost,
    Email,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::BlogPost,
        ContentType::LinkedinPost,
        ContentType::TwitterPost,
        ContentType::FacebookPost,
        ContentType::InstagramPost,
        ContentType::Email,
    ];

    /// Wire representation used by the content API
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "blog_post",
            ContentType::LinkedinPost => "linkedin_post",
            ContentType::TwitterPost => "twitter_post",
            ContentType::FacebookPost => "facebook_post",
            ContentType::InstagramPost => "instagram_post",
            ContentType::Email => "email",
        }
    }

    /// Short label used in table cells and form selects
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "Blog Post",
            ContentType::LinkedinPost => "LinkedIn",
            ContentType::TwitterPost => "Twitter",
            ContentType::FacebookPost => "Facebook",
            ContentType::InstagramPost => "Instagram",
            ContentType::Email => "Email",
        }
    }

    /// One-line format guidance shown next to the type select
    pub fn format_hint(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "Long-form content (1000-1500 words) optimized for SEO",
            ContentType::LinkedinPost => {
                "Professional content (200-300 words) for LinkedIn audience"
            }
            ContentType::TwitterPost => {
                "Short, engaging content under 280 characters with hashtags"
            }
            ContentType::FacebookPost => "Conversational content (100-200 words) for Facebook",
            ContentType::InstagramPost => {
                "Visual-focused caption (150-300 words) with hashtags"
            }
            ContentType::Email => "Newsletter content (500-1000 words) for email campaigns",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Editorial categories a piece of content can be filed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PostCategory {
    Educational,
    Promotional,
    News,
    BehindScenes,
    CustomerStory,
    HowTo,
    IndustryInsights,
    CompanyUpdates,
    ThoughtLeadership,
    Seasonal,
}

impl PostCategory {
    pub const ALL: [PostCategory; 10] = [
        PostCategory::Educational,
        PostCategory::Promotional,
        PostCategory::News,
        PostCategory::BehindScenes,
        PostCategory::CustomerStory,
        PostCategory::HowTo,
        PostCategory::IndustryInsights,
        PostCategory::CompanyUpdates,
        PostCategory::ThoughtLeadership,
        PostCategory::Seasonal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Educational => "educational",
            PostCategory::Promotional => "promotional",
            PostCategory::News => "news",
            PostCategory::BehindScenes => "behind_scenes",
            PostCategory::CustomerStory => "customer_story",
            PostCategory::HowTo => "how_to",
            PostCategory::IndustryInsights => "industry_insights",
            PostCategory::CompanyUpdates => "company_updates",
            PostCategory::ThoughtLeadership => "thought_leadership",
            PostCategory::Seasonal => "seasonal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostCategory::Educational => "Educational",
            PostCategory::Promotional => "Promotional",
            PostCategory::News => "Latest News",
            PostCategory::BehindScenes => "Behind the Scenes",
            PostCategory::CustomerStory => "Customer Story",
            PostCategory::HowTo => "How-to Guide",
            PostCategory::IndustryInsights => "Industry Insights",
            PostCategory::CompanyUpdates => "Company Updates",
            PostCategory::ThoughtLeadership => "Thought Leadership",
            PostCategory::Seasonal => "Seasonal Content",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a persisted content record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Draft,
    PendingApproval,
    Published,
    Rejected,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 4] = [
        ContentStatus::Draft,
        ContentStatus::PendingApproval,
        ContentStatus::Published,
        ContentStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::PendingApproval => "pending_approval",
            ContentStatus::Published => "published",
            ContentStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "Draft",
            ContentStatus::PendingApproval => "Pending Approval",
            ContentStatus::Published => "Published",
            ContentStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered business content is generated for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub target_audience: Option<String>,
    pub brand_voice: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Selectable industry reference; the console only lists these, never mutates them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Industry {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// Abbreviated business embedded in content list responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessRef {
    pub id: i64,
    pub name: String,
    pub industry: Option<String>,
}

/// In-memory generated content held by the lifecycle controller.
///
/// `id` is absent until the server has assigned one; save-draft and
/// approve act only on a present id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentDraft {
    pub id: Option<i64>,
    pub title: String,
    pub content_text: String,
    pub content_type: ContentType,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub seo_score: Option<u8>,
    #[serde(default)]
    pub ai_model_used: Option<String>,
}

/// A content record persisted by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedContent {
    pub id: i64,
    pub title: String,
    pub content_text: String,
    pub content_type: ContentType,
    pub status: ContentStatus,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub seo_score: Option<u8>,
    #[serde(default)]
    pub ai_model_used: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub business: Option<BusinessRef>,
}

impl PersistedContent {
    /// Business name for display and sorting; empty when not embedded
    pub fn business_name(&self) -> &str {
        self.business.as_ref().map(|b| b.name.as_str()).unwrap_or("")
    }
}

/// Payload for `POST /content/generate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    pub business_id: i64,
    pub content_type: ContentType,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PostCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// Partial update for `PUT /content/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_text: Option<String>,
}

impl ContentUpdate {
    pub fn new(title: impl Into<String>, content_text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content_text: Some(content_text.into()),
        }
    }
}

/// Payload for `POST /suggestions/topics`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicSuggestionRequest {
    pub business_id: i64,
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PostCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for `POST /suggestions/keywords`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordSuggestionRequest {
    pub business_id: i64,
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PostCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
