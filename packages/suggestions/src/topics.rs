// ABOUTME: Topic suggestion fallback tables and selection logic
// ABOUTME: Templates keyed by category and content type, filled from business context

use copydeck_core::{Business, ContentType, PostCategory, MAX_TOPIC_SUGGESTIONS};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Template lists for one category. An empty list means the content type
/// has no dedicated templates and falls back to the category's blog list.
struct TemplateSet {
    blog_post: &'static [&'static str],
    linkedin_post: &'static [&'static str],
    twitter_post: &'static [&'static str],
}

impl TemplateSet {
    fn for_content_type(&self, content_type: ContentType) -> &'static [&'static str] {
        let list = match content_type {
            ContentType::LinkedinPost => self.linkedin_post,
            ContentType::TwitterPost => self.twitter_post,
            _ => self.blog_post,
        };
        if list.is_empty() {
            self.blog_post
        } else {
            list
        }
    }
}

const EDUCATIONAL: TemplateSet = TemplateSet {
    blog_post: &[
        "5 Essential {industry} Trends Every Professional Should Know",
        "The Complete Guide to Getting Started in {industry}",
        "Common {industry} Mistakes and How to Avoid Them",
        "What is {industry}? A Beginner's Guide",
        "Top 10 Best Practices for {industry} Success",
    ],
    linkedin_post: &[
        "3 key lessons I learned in {industry}",
        "Why {industry} professionals need to focus on continuous learning",
        "The biggest misconception about {industry}",
        "Skills every {industry} professional should develop",
        "How {industry} has changed in the past 5 years",
    ],
    twitter_post: &[
        "Quick tip for {industry} beginners:",
        "The #1 mistake in {industry} is...",
        "{industry} fact of the day:",
        "Pro tip: In {industry}, always remember to...",
        "Thread: Essential {industry} skills",
    ],
};

const PROMOTIONAL: TemplateSet = TemplateSet {
    blog_post: &[
        "Why {business} is the Perfect Solution for Your {industry} Needs",
        "How {business} Helps {industry} Professionals Save Time and Money",
        "Case Study: How We Helped a {industry} Company Grow 300%",
        "What Makes {business} Different in the {industry} Space",
        "The {business} Advantage: Features That Matter",
    ],
    linkedin_post: &[
        "Excited to announce our latest {industry} solution at {business}",
        "Here's how {business} is transforming {industry}",
        "Client spotlight: Amazing results in {industry}",
        "Why we built {business} for {industry} professionals",
        "The future of {industry} with {business}",
    ],
    twitter_post: &[
        "New feature alert at {business}!",
        "{business} is now available for {industry}",
        "Join thousands of {industry} professionals using {business}",
        "Special offer for {industry} professionals",
        "{business} + {industry} = Perfect match",
    ],
};

const NEWS: TemplateSet = TemplateSet {
    blog_post: &[
        "Breaking: Major Changes Coming to {industry} This Year",
        "{industry} Industry Report: Key Takeaways and Trends",
        "How Recent {industry} Developments Affect Your Business",
        "Market Update: What's Happening in {industry} Right Now",
        "Regulatory Changes in {industry}: What You Need to Know",
    ],
    linkedin_post: &[
        "Big news in the {industry} world today",
        "Industry update: {industry} sees major changes",
        "What this week's {industry} news means for professionals",
        "My take on the latest {industry} developments",
        "Breaking: {industry} industry reaches new milestone",
    ],
    twitter_post: &[],
};

const HOW_TO: TemplateSet = TemplateSet {
    blog_post: &[
        "How to Get Started in {industry}: Step-by-Step Guide",
        "How to Choose the Right {industry} Solution for Your Business",
        "How to Optimize Your {industry} Strategy This Year",
        "How to Avoid Common {industry} Pitfalls",
        "How to Scale Your {industry} Operations Effectively",
    ],
    linkedin_post: &[
        "How I streamlined our {industry} process",
        "Step-by-step guide to {industry} success",
        "How to build a career in {industry}",
        "The process that transformed our {industry} approach",
        "How we solved our biggest {industry} challenge",
    ],
    twitter_post: &[],
};

/// Categories with dedicated template sets; the rest mix across all of them
fn template_set(category: PostCategory) -> Option<&'static TemplateSet> {
    match category {
        PostCategory::Educational => Some(&EDUCATIONAL),
        PostCategory::Promotional => Some(&PROMOTIONAL),
        PostCategory::News => Some(&NEWS),
        PostCategory::HowTo => Some(&HOW_TO),
        _ => None,
    }
}

const ALL_SETS: [&TemplateSet; 4] = [&EDUCATIONAL, &PROMOTIONAL, &NEWS, &HOW_TO];

fn fill(template: &str, business_name: &str, industry: &str) -> String {
    template
        .replace("{business}", business_name)
        .replace("{industry}", industry)
}

/// Produce up to five topic suggestions for the business without any
/// network dependency. Each call shuffles the candidate pool, so repeated
/// calls return different subsets.
pub fn topic_suggestions(
    business: &Business,
    content_type: ContentType,
    category: Option<PostCategory>,
) -> Vec<String> {
    let industry = business
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("business");

    let mut pool: Vec<String> = match category.and_then(template_set) {
        Some(set) => set
            .for_content_type(content_type)
            .iter()
            .map(|t| fill(t, &business.name, industry))
            .collect(),
        None => ALL_SETS
            .iter()
            .flat_map(|set| set.for_content_type(content_type).iter())
            .map(|t| fill(t, &business.name, industry))
            .collect(),
    };

    pool.shuffle(&mut thread_rng());
    pool.truncate(MAX_TOPIC_SUGGESTIONS);
    pool
}
