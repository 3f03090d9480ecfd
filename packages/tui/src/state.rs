use copydeck_content::Notice;
use copydeck_core::{
    Business, ContentDraft, ContentStatus, ContentType, GenerationRequest, Industry, PersistedContent,
    PostCategory,
};

use crate::table::{ColumnKey, ContentTableView};

/// Top-level screens of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Generator,
    Library,
}

/// Focusable fields of the generator form, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Business,
    ContentType,
    Category,
    Topic,
    Description,
    Keywords,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Business,
        FormField::ContentType,
        FormField::Category,
        FormField::Topic,
        FormField::Description,
        FormField::Keywords,
    ];

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Mutable state of the generator form
#[derive(Debug, Clone)]
pub struct GeneratorForm {
    pub focus: FormField,
    pub business_index: Option<usize>,
    pub content_type_index: Option<usize>,
    pub category_index: Option<usize>,
    pub topic: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub keyword_input: String,
}

impl Default for GeneratorForm {
    fn default() -> Self {
        Self {
            focus: FormField::Business,
            business_index: None,
            content_type_index: None,
            category_index: None,
            topic: String::new(),
            description: String::new(),
            keywords: Vec::new(),
            keyword_input: String::new(),
        }
    }
}

impl GeneratorForm {
    pub fn selected_business<'a>(&self, businesses: &'a [Business]) -> Option<&'a Business> {
        self.business_index.and_then(|index| businesses.get(index))
    }

    pub fn selected_content_type(&self) -> Option<ContentType> {
        self.content_type_index
            .map(|index| ContentType::ALL[index % ContentType::ALL.len()])
    }

    pub fn selected_category(&self) -> Option<PostCategory> {
        self.category_index
            .map(|index| PostCategory::ALL[index % PostCategory::ALL.len()])
    }

    /// Cycle the selection of the focused select field by `step`.
    ///
    /// Category is optional and cycles through a leading "none" slot.
    pub fn cycle_selection(&mut self, step: i32, business_count: usize) -> bool {
        match self.focus {
            FormField::Business => {
                self.business_index = cycle_option(self.business_index, business_count, step, false);
                true
            }
            FormField::ContentType => {
                self.content_type_index =
                    cycle_option(self.content_type_index, ContentType::ALL.len(), step, false);
                true
            }
            FormField::Category => {
                self.category_index =
                    cycle_option(self.category_index, PostCategory::ALL.len(), step, true);
                true
            }
            _ => false,
        }
    }

    /// Type a character into the focused text field
    pub fn insert_char(&mut self, c: char) -> bool {
        match self.focus {
            FormField::Topic => self.topic.push(c),
            FormField::Description => self.description.push(c),
            FormField::Keywords => self.keyword_input.push(c),
            _ => return false,
        }
        true
    }

    pub fn backspace(&mut self) -> bool {
        let field = match self.focus {
            FormField::Topic => &mut self.topic,
            FormField::Description => &mut self.description,
            FormField::Keywords => {
                if self.keyword_input.is_empty() {
                    self.keywords.pop();
                    return true;
                }
                &mut self.keyword_input
            }
            _ => return false,
        };
        field.pop();
        true
    }

    /// Commit the pending keyword input as a keyword chip
    pub fn commit_keyword(&mut self) {
        let keyword = self.keyword_input.trim().to_string();
        if !keyword.is_empty() && !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
        self.keyword_input.clear();
    }

    /// Add a suggested keyword unless it is already present
    pub fn add_keyword(&mut self, keyword: &str) {
        if !self.keywords.iter().any(|k| k == keyword) {
            self.keywords.push(keyword.to_string());
        }
    }

    /// Build the generation request from current form state.
    ///
    /// Returns None when the required selections are missing; validation
    /// proper happens in the controller before the network boundary.
    pub fn to_request(&self, businesses: &[Business]) -> Option<GenerationRequest> {
        let business = self.selected_business(businesses)?;
        let content_type = self.selected_content_type()?;
        Some(GenerationRequest {
            business_id: business.id,
            content_type,
            topic: self.topic.trim().to_string(),
            category: self.selected_category(),
            description: trimmed_option(&self.description),
            keywords: self.keywords.clone(),
        })
    }
}

fn trimmed_option(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Step through `len` entries, optionally via a leading "none" position
fn cycle_option(current: Option<usize>, len: usize, step: i32, allow_none: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let slots = len as i32 + if allow_none { 1 } else { 0 };
    let position = match current {
        Some(index) => index as i32 + if allow_none { 1 } else { 0 },
        None => 0,
    };
    let next = (position + step).rem_euclid(slots);
    if allow_none {
        if next == 0 {
            None
        } else {
            Some((next - 1) as usize)
        }
    } else {
        Some(next as usize)
    }
}

/// What an open edit buffer writes back to when applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// The in-memory draft held by the lifecycle controller
    Draft,
    /// A persisted content record, by id
    Content(i64),
}

/// Which edit buffer field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Body,
}

/// In-progress title/body edit of a draft or persisted record
#[derive(Debug, Clone)]
pub struct EditState {
    pub target: EditTarget,
    pub title: String,
    pub body: String,
    pub focus: EditField,
}

impl EditState {
    pub fn new(target: EditTarget, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            target,
            title: title.into(),
            body: body.into(),
            focus: EditField::Title,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            EditField::Title => EditField::Body,
            EditField::Body => EditField::Title,
        };
    }

    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            EditField::Title => self.title.push(c),
            EditField::Body => self.body.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            EditField::Title => {
                self.title.pop();
            }
            EditField::Body => {
                self.body.pop();
            }
        }
    }
}

/// Network activity flags used to disable controls while a call is in
/// flight; the event loop is sequential so these double as UI hints
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingOps {
    pub generating: bool,
    pub saving_draft: bool,
    pub approving: bool,
    pub publishing: bool,
    pub loading_topics: bool,
    pub loading_keywords: bool,
}

/// Application state for the console
pub struct AppState {
    pub screen: Screen,
    pub businesses: Vec<Business>,
    pub industries: Vec<Industry>,
    pub content: Vec<PersistedContent>,
    pub table: ContentTableView,
    pub selected_row: Option<usize>,
    pub selected_column: usize,
    pub form: GeneratorForm,
    pub draft: Option<ContentDraft>,
    pub topic_suggestions: Vec<String>,
    pub keyword_suggestions: Vec<String>,
    pub pending: PendingOps,
    pub status_notice: Option<Notice>,
    pub search_active: bool,
    /// Content id awaiting a second delete keypress
    pub pending_delete: Option<i64>,
    pub edit: Option<EditState>,
    /// Index of the next topic suggestion adopted by the cycle key
    pub topic_pick: usize,
    pub refresh_interval: u64,
}

impl AppState {
    pub fn new(refresh_interval: u64) -> Self {
        Self {
            screen: Screen::Generator,
            businesses: Vec::new(),
            industries: Vec::new(),
            content: Vec::new(),
            table: ContentTableView::new(),
            selected_row: None,
            selected_column: 0,
            form: GeneratorForm::default(),
            draft: None,
            topic_suggestions: Vec::new(),
            keyword_suggestions: Vec::new(),
            pending: PendingOps::default(),
            status_notice: None,
            search_active: false,
            pending_delete: None,
            edit: None,
            topic_pick: 0,
            refresh_interval,
        }
    }

    pub fn set_businesses(&mut self, businesses: Vec<Business>) {
        if let Some(index) = self.form.business_index {
            if index >= businesses.len() {
                self.form.business_index = None;
            }
        }
        self.businesses = businesses;
    }

    pub fn set_content(&mut self, content: Vec<PersistedContent>) {
        self.content = content;
        let visible = self.table.rows(&self.content).len();
        match self.selected_row {
            Some(index) if index >= visible => {
                self.selected_row = if visible == 0 { None } else { Some(0) };
            }
            None if visible > 0 => self.selected_row = Some(0),
            _ => {}
        }
        self.pending_delete = None;
    }

    /// The content record currently highlighted in the library table
    pub fn selected_content(&self) -> Option<&PersistedContent> {
        let rows = self.table.rows(&self.content);
        self.selected_row.and_then(|index| rows.get(index).copied())
    }

    pub fn select_next_row(&mut self) {
        let visible = self.table.rows(&self.content).len();
        if visible == 0 {
            self.selected_row = None;
            return;
        }
        self.selected_row = Some(match self.selected_row {
            None => 0,
            Some(index) if index + 1 >= visible => 0,
            Some(index) => index + 1,
        });
    }

    pub fn select_previous_row(&mut self) {
        let visible = self.table.rows(&self.content).len();
        if visible == 0 {
            self.selected_row = None;
            return;
        }
        self.selected_row = Some(match self.selected_row {
            None | Some(0) => visible - 1,
            Some(index) => index - 1,
        });
    }

    pub fn select_next_column(&mut self) {
        let count = self.table.columns().len();
        self.selected_column = (self.selected_column + 1) % count;
    }

    pub fn select_previous_column(&mut self) {
        let count = self.table.columns().len();
        self.selected_column = (self.selected_column + count - 1) % count;
    }

    /// Column key currently selected for sorting/resizing
    pub fn selected_column_key(&self) -> ColumnKey {
        self.table.columns()[self.selected_column % self.table.columns().len()].key
    }

    /// Cycle the library status filter through none and each status
    pub fn cycle_status_filter(&mut self) {
        self.table.status_filter = match self.table.status_filter {
            None => Some(ContentStatus::ALL[0]),
            Some(current) => {
                let index = ContentStatus::ALL.iter().position(|s| *s == current).unwrap_or(0);
                if index + 1 >= ContentStatus::ALL.len() {
                    None
                } else {
                    Some(ContentStatus::ALL[index + 1])
                }
            }
        };
        self.clamp_selection();
    }

    /// Cycle the library type filter through none and each content type
    pub fn cycle_type_filter(&mut self) {
        self.table.type_filter = match self.table.type_filter {
            None => Some(ContentType::ALL[0]),
            Some(current) => {
                let index = ContentType::ALL.iter().position(|t| *t == current).unwrap_or(0);
                if index + 1 >= ContentType::ALL.len() {
                    None
                } else {
                    Some(ContentType::ALL[index + 1])
                }
            }
        };
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let visible = self.table.rows(&self.content).len();
        match self.selected_row {
            Some(index) if index >= visible => {
                self.selected_row = if visible == 0 { None } else { Some(0) };
            }
            _ => {}
        }
    }

    pub fn apply_notice(&mut self, notice: Notice) {
        self.status_notice = Some(notice);
    }

    pub fn next_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Generator => Screen::Library,
            Screen::Library => Screen::Generator,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_cycles_through_none() {
        let mut form = GeneratorForm::default();
        form.focus = FormField::Category;

        assert_eq!(form.category_index, None);
        form.cycle_selection(1, 0);
        assert_eq!(form.selected_category(), Some(PostCategory::Educational));

        // Stepping back returns to the none slot
        form.cycle_selection(-1, 0);
        assert_eq!(form.selected_category(), None);
    }

    #[test]
    fn keyword_commit_dedups_and_clears_input() {
        let mut form = GeneratorForm::default();
        form.focus = FormField::Keywords;
        form.keyword_input = "seo".to_string();
        form.commit_keyword();
        form.keyword_input = "seo".to_string();
        form.commit_keyword();

        assert_eq!(form.keywords, vec!["seo"]);
        assert!(form.keyword_input.is_empty());
    }

    #[test]
    fn to_request_requires_business_and_type() {
        let form = GeneratorForm::default();
        assert!(form.to_request(&[]).is_none());
    }
}
