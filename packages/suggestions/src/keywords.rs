// ABOUTME: Keyword suggestion fallback tables and assembly logic
// ABOUTME: Industry, content-type, and category keyword sets plus name/topic terms

use copydeck_core::{Business, ContentType, PostCategory, MAX_KEYWORD_SUGGESTIONS};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Keyword sets matched against the business industry by case-insensitive
/// substring in either direction ("Tech" matches "Technology" and vice versa)
const INDUSTRY_KEYWORDS: [(&str, &[&str]); 10] = [
    (
        "Technology",
        &["tech", "digital", "innovation", "software", "AI", "automation", "cloud", "cybersecurity", "data"],
    ),
    (
        "Healthcare",
        &["health", "medical", "wellness", "patient care", "treatment", "diagnosis", "prevention", "medicine"],
    ),
    (
        "Finance & Banking",
        &["finance", "banking", "investment", "money", "financial planning", "loans", "savings", "credit"],
    ),
    (
        "Education",
        &["education", "learning", "teaching", "students", "curriculum", "skills", "training", "development"],
    ),
    (
        "Marketing & Advertising",
        &["marketing", "advertising", "branding", "digital marketing", "SEO", "social media", "campaigns"],
    ),
    (
        "E-commerce & Retail",
        &["ecommerce", "retail", "shopping", "products", "customers", "sales", "online store"],
    ),
    (
        "Manufacturing",
        &["manufacturing", "production", "quality", "efficiency", "supply chain", "industrial", "process"],
    ),
    (
        "Real Estate",
        &["real estate", "property", "housing", "investment", "market", "buying", "selling", "rental"],
    ),
    (
        "Food & Beverage",
        &["food", "restaurant", "cuisine", "dining", "nutrition", "recipes", "culinary", "beverage"],
    ),
    (
        "Travel & Tourism",
        &["travel", "tourism", "vacation", "destinations", "hotels", "flights", "adventure", "experience"],
    ),
];

fn content_type_keywords(content_type: ContentType) -> &'static [&'static str] {
    match content_type {
        ContentType::BlogPost => {
            &["SEO", "content marketing", "blog", "article", "guide", "tips", "how-to", "best practices"]
        }
        ContentType::LinkedinPost => {
            &["professional", "networking", "career", "business", "LinkedIn", "industry insights", "leadership"]
        }
        ContentType::TwitterPost => {
            &["trending", "hashtags", "Twitter", "viral", "engagement", "social media", "quick tips"]
        }
        ContentType::FacebookPost => {
            &["Facebook", "community", "engagement", "social", "sharing", "discussion", "audience"]
        }
        ContentType::InstagramPost => {
            &["Instagram", "visual", "photos", "stories", "aesthetic", "lifestyle", "inspiration"]
        }
        ContentType::Email => {
            &["email marketing", "newsletter", "subscribers", "campaigns", "personalization", "conversion"]
        }
    }
}

fn category_keywords(category: PostCategory) -> &'static [&'static str] {
    match category {
        PostCategory::Educational => {
            &["tutorial", "guide", "learning", "education", "training", "skills", "knowledge", "tips"]
        }
        PostCategory::Promotional => {
            &["sale", "offer", "discount", "promotion", "deal", "limited time", "exclusive", "special"]
        }
        PostCategory::News => {
            &["news", "update", "announcement", "breaking", "latest", "current", "trending", "industry news"]
        }
        PostCategory::BehindScenes => {
            &["behind the scenes", "team", "culture", "process", "story", "journey", "insider"]
        }
        PostCategory::CustomerStory => {
            &["customer", "testimonial", "success story", "case study", "client", "results", "experience"]
        }
        PostCategory::HowTo => {
            &["how to", "step by step", "tutorial", "guide", "instructions", "DIY", "beginner"]
        }
        PostCategory::IndustryInsights => {
            &["insights", "analysis", "trends", "market", "industry", "expert opinion", "forecast"]
        }
        PostCategory::CompanyUpdates => {
            &["company news", "updates", "announcements", "milestones", "achievements", "growth"]
        }
        PostCategory::ThoughtLeadership => {
            &["thought leadership", "expert", "opinion", "vision", "innovation", "future", "strategy"]
        }
        PostCategory::Seasonal => {
            &["seasonal", "holiday", "special occasion", "celebration", "festive", "limited time"]
        }
    }
}

fn industry_set(industry: &str) -> Option<&'static [&'static str]> {
    let industry = industry.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(name, _)| {
            let name = name.to_lowercase();
            industry.contains(&name) || name.contains(&industry)
        })
        .map(|(_, keywords)| *keywords)
}

fn push_unique(pool: &mut Vec<String>, keyword: impl Into<String>) {
    let keyword = keyword.into();
    if !pool.contains(&keyword) {
        pool.push(keyword);
    }
}

/// Produce up to ten keyword suggestions from local tables only.
///
/// An unknown or empty industry degrades to a generic term set rather than
/// failing; the result never contains duplicates.
pub fn keyword_suggestions(
    business: &Business,
    content_type: ContentType,
    category: Option<PostCategory>,
    topic: Option<&str>,
) -> Vec<String> {
    let industry = business
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("business");

    let mut pool: Vec<String> = Vec::new();

    match industry_set(industry) {
        Some(keywords) => {
            for keyword in keywords {
                push_unique(&mut pool, *keyword);
            }
        }
        None => {
            push_unique(&mut pool, industry.to_lowercase());
            for keyword in ["business", "professional", "services"] {
                push_unique(&mut pool, keyword);
            }
        }
    }

    for keyword in content_type_keywords(content_type) {
        push_unique(&mut pool, *keyword);
    }

    if let Some(category) = category {
        for keyword in category_keywords(category) {
            push_unique(&mut pool, *keyword);
        }
    }

    let name = business.name.to_lowercase();
    push_unique(&mut pool, name.clone());
    if name.contains(char::is_whitespace) {
        for word in name.split_whitespace() {
            push_unique(&mut pool, word);
        }
    }

    if let Some(topic) = topic {
        let normalized: String = topic
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
            .collect();
        for token in normalized
            .split_whitespace()
            .filter(|word| word.len() > 2)
            .take(3)
        {
            push_unique(&mut pool, token);
        }
    }

    pool.shuffle(&mut thread_rng());
    pool.truncate(MAX_KEYWORD_SUGGESTIONS);
    pool
}
