use std::cmp::Ordering;

use copydeck_core::{ContentStatus, ContentType, PersistedContent};

/// Fields the content table can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    ContentType,
    Status,
    SeoScore,
    CreatedAt,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Identity of a table column; Actions is the only non-sortable one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    Title,
    Type,
    Status,
    SeoScore,
    Created,
    Actions,
}

impl ColumnKey {
    /// The sort field a click on this column header maps to
    pub fn sort_field(&self) -> Option<SortField> {
        match self {
            ColumnKey::Title => Some(SortField::Title),
            ColumnKey::Type => Some(SortField::ContentType),
            ColumnKey::Status => Some(SortField::Status),
            ColumnKey::SeoScore => Some(SortField::SeoScore),
            ColumnKey::Created => Some(SortField::CreatedAt),
            ColumnKey::Actions => None,
        }
    }
}

/// One column's display configuration
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub key: ColumnKey,
    pub label: &'static str,
    pub sortable: bool,
    pub width: u16,
    pub min_width: u16,
}

fn default_columns() -> Vec<TableColumn> {
    vec![
        TableColumn { key: ColumnKey::Title, label: "Title", sortable: true, width: 300, min_width: 200 },
        TableColumn { key: ColumnKey::Type, label: "Type", sortable: true, width: 130, min_width: 100 },
        TableColumn { key: ColumnKey::Status, label: "Status", sortable: true, width: 150, min_width: 120 },
        TableColumn { key: ColumnKey::SeoScore, label: "SEO Score", sortable: true, width: 100, min_width: 80 },
        TableColumn { key: ColumnKey::Created, label: "Created", sortable: true, width: 150, min_width: 120 },
        TableColumn { key: ColumnKey::Actions, label: "Actions", sortable: false, width: 120, min_width: 100 },
    ]
}

/// Client-local view configuration over a content collection.
///
/// A pure projection: filtering and sorting never mutate the underlying
/// collection, and each view instance owns its own config so concurrent
/// tables stay independent.
#[derive(Debug, Clone)]
pub struct ContentTableView {
    pub status_filter: Option<ContentStatus>,
    pub type_filter: Option<ContentType>,
    pub search: String,
    sort_field: SortField,
    sort_direction: SortDirection,
    columns: Vec<TableColumn>,
}

impl Default for ContentTableView {
    fn default() -> Self {
        Self {
            status_filter: None,
            type_filter: None,
            search: String::new(),
            sort_field: SortField::CreatedAt,
            sort_direction: SortDirection::Descending,
            columns: default_columns(),
        }
    }
}

impl ContentTableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    /// Toggle direction when the current field is clicked again; a new
    /// field resets direction to ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Apply a resize drag that moved `delta` units from `start_width`.
    ///
    /// Width grows unbounded but never shrinks below the column minimum.
    pub fn resize_column(&mut self, key: ColumnKey, start_width: u16, delta: i32) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.key == key) {
            let desired = i64::from(start_width) + i64::from(delta);
            column.width = desired.max(i64::from(column.min_width)) as u16;
        }
    }

    pub fn column(&self, key: ColumnKey) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// An item passes when every active filter matches
    fn matches(&self, item: &PersistedContent) -> bool {
        if let Some(status) = self.status_filter {
            if item.status != status {
                return false;
            }
        }
        if let Some(content_type) = self.type_filter {
            if item.content_type != content_type {
                return false;
            }
        }
        if !self.search.is_empty()
            && !item
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        true
    }

    /// Filtered, sorted projection of the collection.
    ///
    /// The sort is stable: ties keep their original relative order in both
    /// directions.
    pub fn rows<'a>(&self, items: &'a [PersistedContent]) -> Vec<&'a PersistedContent> {
        let mut rows: Vec<&PersistedContent> =
            items.iter().filter(|item| self.matches(item)).collect();

        rows.sort_by(|a, b| {
            let ordering = compare(self.sort_field, a, b);
            match self.sort_direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        rows
    }
}

fn compare(field: SortField, a: &PersistedContent, b: &PersistedContent) -> Ordering {
    match field {
        SortField::Title => cmp_case_insensitive(&a.title, &b.title),
        SortField::ContentType => {
            cmp_case_insensitive(a.content_type.as_str(), b.content_type.as_str())
        }
        SortField::Status => cmp_case_insensitive(a.status.as_str(), b.status.as_str()),
        // A missing score sorts as zero, not last.
        SortField::SeoScore => a.seo_score.unwrap_or(0).cmp(&b.seo_score.unwrap_or(0)),
        // Compared by instant, not by string representation.
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Business => cmp_case_insensitive(a.business_name(), b.business_name()),
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
