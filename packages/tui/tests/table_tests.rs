// ABOUTME: Unit tests for the content table projection
// ABOUTME: Filter conjunction, stable sort semantics, and column resize clamping

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use copydeck_core::{BusinessRef, ContentStatus, ContentType, PersistedContent};
use copydeck_tui::table::{ColumnKey, ContentTableView, SortDirection, SortField};

fn item(
    id: i64,
    title: &str,
    content_type: ContentType,
    status: ContentStatus,
    seo_score: Option<u8>,
    created_day: u32,
) -> PersistedContent {
    PersistedContent {
        id,
        title: title.to_string(),
        content_text: String::new(),
        content_type,
        status,
        meta_description: None,
        keywords: Vec::new(),
        seo_score,
        ai_model_used: None,
        created_at: Utc.with_ymd_and_hms(2025, 3, created_day, 12, 0, 0).unwrap(),
        business: Some(BusinessRef {
            id: 1,
            name: "Acme".to_string(),
            industry: Some("Retail".to_string()),
        }),
    }
}

fn collection() -> Vec<PersistedContent> {
    vec![
        item(1, "Alpha release notes", ContentType::BlogPost, ContentStatus::Draft, None, 1),
        item(2, "Beta roundup", ContentType::Email, ContentStatus::Published, Some(40), 2),
        item(3, "Gamma guide", ContentType::BlogPost, ContentStatus::PendingApproval, Some(90), 3),
    ]
}

fn ids(rows: &[&PersistedContent]) -> Vec<i64> {
    rows.iter().map(|c| c.id).collect()
}

#[test]
fn missing_seo_score_sorts_as_zero() {
    let items = collection();
    let mut view = ContentTableView::new();
    view.toggle_sort(SortField::SeoScore); // ascending
    view.toggle_sort(SortField::SeoScore); // descending

    let rows = view.rows(&items);

    // [null, 40, 90] descending yields [90, 40, null]
    assert_eq!(ids(&rows), vec![3, 2, 1]);
}

#[test]
fn sort_is_stable_and_double_toggle_flips_direction_only() {
    let mut items = collection();
    // Two blog posts tie on content type; ids 1 and 3 in insertion order.
    items.push(item(4, "Delta digest", ContentType::BlogPost, ContentStatus::Draft, Some(10), 4));

    let mut view = ContentTableView::new();
    view.toggle_sort(SortField::ContentType);
    assert_eq!(view.sort_direction(), SortDirection::Ascending);
    let ascending = view.rows(&items);
    // blog_post < email; tied blog posts keep original relative order
    assert_eq!(ids(&ascending), vec![1, 3, 4, 2]);

    view.toggle_sort(SortField::ContentType);
    assert_eq!(view.sort_direction(), SortDirection::Descending);
    let descending = view.rows(&items);
    // Direction flips, ties still keep original relative order
    assert_eq!(ids(&descending), vec![2, 1, 3, 4]);
}

#[test]
fn switching_to_a_new_field_resets_to_ascending() {
    let mut view = ContentTableView::new();
    view.toggle_sort(SortField::Title);
    view.toggle_sort(SortField::Title);
    assert_eq!(view.sort_direction(), SortDirection::Descending);

    view.toggle_sort(SortField::Status);

    assert_eq!(view.sort_field(), SortField::Status);
    assert_eq!(view.sort_direction(), SortDirection::Ascending);
}

#[test]
fn default_sort_is_newest_first() {
    let items = collection();
    let view = ContentTableView::new();

    assert_eq!(view.sort_field(), SortField::CreatedAt);
    assert_eq!(ids(&view.rows(&items)), vec![3, 2, 1]);
}

#[test]
fn title_sort_is_case_insensitive() {
    let items = vec![
        item(1, "beta", ContentType::BlogPost, ContentStatus::Draft, None, 1),
        item(2, "Alpha", ContentType::BlogPost, ContentStatus::Draft, None, 2),
    ];
    let mut view = ContentTableView::new();
    view.toggle_sort(SortField::Title);

    assert_eq!(ids(&view.rows(&items)), vec![2, 1]);
}

#[test]
fn business_sort_uses_embedded_name_and_tolerates_missing() {
    let mut items = collection();
    items[1].business = Some(BusinessRef {
        id: 2,
        name: "zenith".to_string(),
        industry: None,
    });
    items[2].business = None; // empty name sorts first ascending

    let mut view = ContentTableView::new();
    view.toggle_sort(SortField::Business);

    assert_eq!(ids(&view.rows(&items)), vec![3, 1, 2]);
}

#[test]
fn filters_are_conjunctive() {
    let items = collection();
    let mut view = ContentTableView::new();
    view.status_filter = Some(ContentStatus::Draft);
    view.type_filter = Some(ContentType::BlogPost);
    view.search = "alpha".to_string();

    assert_eq!(ids(&view.rows(&items)), vec![1]);

    // The same search with a mismatched status matches nothing.
    view.status_filter = Some(ContentStatus::Published);
    assert!(view.rows(&items).is_empty());
}

#[test]
fn search_matches_title_case_insensitively() {
    let items = collection();
    let mut view = ContentTableView::new();
    view.search = "GAMMA".to_string();

    assert_eq!(ids(&view.rows(&items)), vec![3]);
}

#[test]
fn filtering_never_mutates_the_collection() {
    let items = collection();
    let view = ContentTableView::new();

    let _ = view.rows(&items);

    assert_eq!(ids(&items.iter().collect::<Vec<_>>()), vec![1, 2, 3]);
}

#[test]
fn resize_clamps_to_minimum_width() {
    let mut view = ContentTableView::new();

    // minWidth 100, width 300, drag -500 => clamped to 100
    view.resize_column(ColumnKey::Type, 300, -500);
    assert_eq!(view.column(ColumnKey::Type).unwrap().width, 100);

    // Growth is unbounded
    view.resize_column(ColumnKey::Type, 100, 900);
    assert_eq!(view.column(ColumnKey::Type).unwrap().width, 1000);
}
