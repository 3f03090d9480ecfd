use std::io::Stdout;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use copydeck_client::{ApiClient, ClientConfig, ContentListFilter};
use copydeck_content::{ContentError, ContentManager, Notice};
use copydeck_core::ContentUpdate;

use crate::events::{AppEvent, ChannelNotifier, EventHandler};
use crate::state::{AppState, EditField, EditState, EditTarget, FormField, Screen};
use crate::table::SortField;
use crate::ui;

/// Keyboard poll tick in milliseconds
const TICK_RATE_MS: u64 = 250;

/// Main console application
pub struct App {
    pub state: AppState,
    manager: ContentManager<ApiClient>,
    client: ApiClient,
    notices: mpsc::UnboundedReceiver<Notice>,
    pub should_quit: bool,
    ticks_since_refresh: u64,
}

impl App {
    pub fn new(config: &ClientConfig, refresh_interval: u64) -> Result<Self> {
        let client = ApiClient::new(config)?;
        let (sender, notices) = mpsc::unbounded_channel();
        let manager = ContentManager::new(client.clone(), Arc::new(ChannelNotifier::new(sender)));

        Ok(Self {
            state: AppState::new(refresh_interval),
            manager,
            client,
            notices,
            should_quit: false,
            ticks_since_refresh: 0,
        })
    }

    /// Load businesses, industries, and the content library
    pub async fn load_initial_data(&mut self) {
        match self.client.list_businesses().await {
            Ok(businesses) => self.state.set_businesses(businesses),
            Err(e) => self.state.apply_notice(Notice::error(
                "Load Failed",
                format!("Could not load businesses: {}", e),
            )),
        }

        match self.client.list_industries(true).await {
            Ok(industries) => self.state.industries = industries,
            Err(e) => self.state.apply_notice(Notice::error(
                "Load Failed",
                format!("Could not load industries: {}", e),
            )),
        }

        self.refresh_content().await;
    }

    async fn refresh_content(&mut self) {
        match self.client.list_content(&ContentListFilter::default()).await {
            Ok(content) => self.state.set_content(content),
            Err(e) => self.state.apply_notice(Notice::error(
                "Load Failed",
                format!("Could not load content: {}", e),
            )),
        }
        self.ticks_since_refresh = 0;
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut event_handler = EventHandler::new(TICK_RATE_MS);

        self.load_initial_data().await;

        while !self.should_quit {
            while let Ok(notice) = self.notices.try_recv() {
                self.state.apply_notice(notice);
            }

            terminal.draw(|frame| ui::render(frame, &self.state))?;

            match event_handler.next().await {
                Some(AppEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key).await;
                }
                Some(AppEvent::Tick) => self.handle_tick().await,
                Some(AppEvent::Quit) | None => self.should_quit = true,
                _ => {}
            }
        }

        Ok(())
    }

    async fn handle_tick(&mut self) {
        self.ticks_since_refresh += 1;
        let ticks_per_refresh = self.state.refresh_interval * 1000 / TICK_RATE_MS;
        if self.state.screen == Screen::Library
            && ticks_per_refresh > 0
            && self.ticks_since_refresh >= ticks_per_refresh
        {
            self.refresh_content().await;
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.state.edit.is_some() {
            self.handle_edit_key(key).await;
            return;
        }

        if self.state.screen == Screen::Library && self.state.search_active {
            self.handle_search_key(key);
            return;
        }

        if key.code == KeyCode::Tab {
            self.state.next_screen();
            return;
        }

        match self.state.screen {
            Screen::Generator => self.handle_generator_key(key).await,
            Screen::Library => self.handle_library_key(key).await,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.table.search.clear();
                self.state.search_active = false;
            }
            KeyCode::Enter => self.state.search_active = false,
            KeyCode::Backspace => {
                self.state.table.search.pop();
            }
            KeyCode::Char(c) => self.state.table.search.push(c),
            _ => {}
        }
    }

    async fn handle_edit_key(&mut self, key: KeyEvent) {
        let apply = match key.code {
            KeyCode::Esc => {
                self.state.edit = None;
                return;
            }
            KeyCode::Tab => {
                if let Some(edit) = self.state.edit.as_mut() {
                    edit.toggle_focus();
                }
                return;
            }
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Backspace => {
                if let Some(edit) = self.state.edit.as_mut() {
                    edit.backspace();
                }
                return;
            }
            KeyCode::Enter => {
                if let Some(edit) = self.state.edit.as_mut() {
                    if edit.focus == EditField::Body {
                        edit.insert_char('\n');
                    } else {
                        edit.toggle_focus();
                    }
                }
                return;
            }
            KeyCode::Char(c) => {
                if let Some(edit) = self.state.edit.as_mut() {
                    edit.insert_char(c);
                }
                return;
            }
            _ => return,
        };

        if apply {
            if let Some(edit) = self.state.edit.take() {
                self.apply_edit(edit).await;
            }
        }
    }

    async fn apply_edit(&mut self, edit: EditState) {
        match edit.target {
            EditTarget::Draft => match self.manager.edit(edit.title, edit.body) {
                Ok(draft) => self.state.draft = Some(draft.clone()),
                Err(e) => self.notify_error(e),
            },
            EditTarget::Content(id) => {
                let patch = ContentUpdate::new(edit.title, edit.body);
                if self.manager.update_content(id, patch).await.is_ok() {
                    self.refresh_content().await;
                }
            }
        }
    }

    async fn handle_generator_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('g') => self.generate().await,
                KeyCode::Char('r') => self.regenerate().await,
                KeyCode::Char('s') => self.save_draft().await,
                KeyCode::Char('a') => self.approve().await,
                KeyCode::Char('p') => self.publish().await,
                KeyCode::Char('t') => self.fetch_topic_suggestions().await,
                KeyCode::Char('k') => self.fetch_keyword_suggestions().await,
                KeyCode::Char('n') => self.adopt_topic_suggestion(),
                KeyCode::Char('b') => self.adopt_keyword_suggestion(),
                KeyCode::Char('e') => self.open_draft_editor(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Up => self.state.form.focus = self.state.form.focus.previous(),
            KeyCode::Down => self.state.form.focus = self.state.form.focus.next(),
            KeyCode::Left => self.cycle_form_selection(-1),
            KeyCode::Right => self.cycle_form_selection(1),
            KeyCode::Enter => {
                if self.state.form.focus == FormField::Keywords {
                    self.state.form.commit_keyword();
                } else {
                    self.state.form.focus = self.state.form.focus.next();
                }
            }
            KeyCode::Backspace => {
                self.state.form.backspace();
            }
            KeyCode::Char(c) => {
                self.state.form.insert_char(c);
            }
            _ => {}
        }
    }

    fn cycle_form_selection(&mut self, step: i32) {
        let business_count = self.state.businesses.len();
        let changed = self.state.form.cycle_selection(step, business_count);
        // Changing type or category invalidates previously fetched topics
        if changed
            && matches!(
                self.state.form.focus,
                FormField::ContentType | FormField::Category
            )
        {
            self.state.topic_suggestions.clear();
            self.state.topic_pick = 0;
        }
    }

    async fn handle_library_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.state.select_previous_row(),
            KeyCode::Down => self.state.select_next_row(),
            KeyCode::Left => self.state.select_previous_column(),
            KeyCode::Right => self.state.select_next_column(),
            KeyCode::Char('/') => self.state.search_active = true,
            KeyCode::Char('s') => self.state.cycle_status_filter(),
            KeyCode::Char('t') => self.state.cycle_type_filter(),
            KeyCode::Char('r') => self.refresh_content().await,
            KeyCode::Enter => {
                let key = self.state.selected_column_key();
                if let Some(field) = key.sort_field() {
                    self.state.table.toggle_sort(field);
                }
            }
            // No column shows the business by itself; sort it directly
            KeyCode::Char('b') => self.state.table.toggle_sort(SortField::Business),
            KeyCode::Char('[') => self.resize_selected_column(-8),
            KeyCode::Char(']') => self.resize_selected_column(8),
            KeyCode::Char('e') => self.open_content_editor(),
            KeyCode::Char('d') => self.delete_selected().await,
            _ => {}
        }
    }

    fn resize_selected_column(&mut self, delta: i32) {
        let key = self.state.selected_column_key();
        let start_width = self
            .state
            .table
            .column(key)
            .map(|c| c.width)
            .unwrap_or_default();
        self.state.table.resize_column(key, start_width, delta);
    }

    fn open_draft_editor(&mut self) {
        if let Some(draft) = self.state.draft.as_ref() {
            self.state.edit = Some(EditState::new(
                EditTarget::Draft,
                draft.title.clone(),
                draft.content_text.clone(),
            ));
        }
    }

    fn open_content_editor(&mut self) {
        if let Some(content) = self.state.selected_content() {
            let edit = EditState::new(
                EditTarget::Content(content.id),
                content.title.clone(),
                content.content_text.clone(),
            );
            self.state.edit = Some(edit);
        }
    }

    async fn generate(&mut self) {
        if self.state.pending.generating {
            return;
        }
        let Some(request) = self.state.form.to_request(&self.state.businesses) else {
            self.state.apply_notice(Notice::error(
                "Missing Information",
                "Select a business and a content type first",
            ));
            return;
        };

        self.state.pending.generating = true;
        match self.manager.generate(request).await {
            Ok(draft) => self.state.draft = Some(draft.clone()),
            Err(e) => self.notify_error(e),
        }
        self.state.pending.generating = false;
    }

    async fn regenerate(&mut self) {
        if self.state.pending.generating || !self.manager.can_regenerate() {
            return;
        }
        self.state.pending.generating = true;
        match self.manager.regenerate().await {
            Ok(draft) => self.state.draft = Some(draft.clone()),
            Err(e) => self.notify_error(e),
        }
        self.state.pending.generating = false;
    }

    async fn save_draft(&mut self) {
        if self.state.pending.saving_draft {
            return;
        }
        self.state.pending.saving_draft = true;
        if let Err(e) = self.manager.save_draft().await {
            self.notify_error(e);
        }
        self.state.pending.saving_draft = false;
    }

    async fn approve(&mut self) {
        if self.state.pending.approving {
            return;
        }
        self.state.pending.approving = true;
        if let Err(e) = self.manager.approve().await {
            self.notify_error(e);
        }
        self.state.pending.approving = false;
    }

    async fn publish(&mut self) {
        if self.state.pending.publishing {
            return;
        }
        self.state.pending.publishing = true;
        if let Err(e) = self.manager.publish().await {
            // The unavailable outcome already produced its notice
            if !matches!(e, ContentError::PublishUnavailable) {
                self.notify_error(e);
            }
        }
        self.state.pending.publishing = false;
    }

    async fn fetch_topic_suggestions(&mut self) {
        let Some(business) = self
            .state
            .form
            .selected_business(&self.state.businesses)
            .cloned()
        else {
            return;
        };
        let Some(content_type) = self.state.form.selected_content_type() else {
            return;
        };

        self.state.pending.loading_topics = true;
        let category = self.state.form.selected_category();
        let description = self.state.form.description.clone();
        let description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };

        let suggestions = self
            .manager
            .topic_suggestions(&business, content_type, category, description.as_deref())
            .await;
        self.state.topic_suggestions = suggestions;
        self.state.topic_pick = 0;
        self.state.pending.loading_topics = false;
    }

    async fn fetch_keyword_suggestions(&mut self) {
        let Some(business) = self
            .state
            .form
            .selected_business(&self.state.businesses)
            .cloned()
        else {
            return;
        };
        let Some(content_type) = self.state.form.selected_content_type() else {
            return;
        };

        self.state.pending.loading_keywords = true;
        let category = self.state.form.selected_category();
        let topic = self.state.form.topic.clone();
        let topic = if topic.trim().is_empty() { None } else { Some(topic) };
        let description = self.state.form.description.clone();
        let description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };

        let suggestions = self
            .manager
            .keyword_suggestions(
                &business,
                content_type,
                category,
                topic.as_deref(),
                description.as_deref(),
            )
            .await;
        self.state.keyword_suggestions = suggestions;
        self.state.pending.loading_keywords = false;
    }

    /// Adopt the next fetched topic suggestion as the form topic
    fn adopt_topic_suggestion(&mut self) {
        if self.state.topic_suggestions.is_empty() {
            return;
        }
        let index = self.state.topic_pick % self.state.topic_suggestions.len();
        self.state.form.topic = self.state.topic_suggestions[index].clone();
        self.state.topic_pick = self.state.topic_pick.wrapping_add(1);
    }

    /// Add the first suggested keyword not yet in the keyword list
    fn adopt_keyword_suggestion(&mut self) {
        let next = self
            .state
            .keyword_suggestions
            .iter()
            .find(|k| !self.state.form.keywords.contains(*k))
            .cloned();
        if let Some(keyword) = next {
            self.state.form.add_keyword(&keyword);
        }
    }

    async fn delete_selected(&mut self) {
        let Some(id) = self.state.selected_content().map(|c| c.id) else {
            return;
        };

        if self.state.pending_delete == Some(id) {
            self.state.pending_delete = None;
            if self.manager.delete_content(id).await.is_ok() {
                self.refresh_content().await;
            }
        } else {
            self.state.pending_delete = Some(id);
            self.state.apply_notice(Notice::warning(
                "Confirm Deletion",
                "Press d again to delete the selected content",
            ));
        }
    }

    fn notify_error(&mut self, error: ContentError) {
        // Network-side failures already emitted their notice through the
        // controller; preconditions are local and surfaced here.
        if error.is_precondition() {
            self.state
                .apply_notice(Notice::error("Not Ready", error.to_string()));
        }
    }
}
