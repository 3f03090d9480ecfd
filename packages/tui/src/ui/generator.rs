use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use copydeck_core::{ContentDraft, SEO_SCORE_GOOD, SEO_SCORE_OK};

use crate::state::{AppState, FormField};

/// Render the content generator screen: form on the left, draft on the right
pub fn render_with_area(frame: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_form(frame, state, chunks[0]);
    render_draft_panel(frame, state, chunks[1]);
}

fn field_line<'a>(state: &AppState, field: FormField, label: &'a str, value: String) -> Line<'a> {
    let focused = state.form.focus == field;
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(format!("{}{}: ", marker, label), label_style),
        Span::raw(value),
    ])
}

fn render_form(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .title("AI Content Generator - Ctrl+G generate · Ctrl+T topics · Ctrl+K keywords")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let business = state
        .form
        .selected_business(&state.businesses)
        .map(|b| match &b.industry {
            Some(industry) => format!("{} ({})", b.name, industry),
            None => b.name.clone(),
        })
        .unwrap_or_else(|| "<select with Left/Right>".to_string());

    let content_type = state
        .form
        .selected_content_type()
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| "<select with Left/Right>".to_string());

    let category = state
        .form
        .selected_category()
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| "none".to_string());

    let keywords = if state.form.keywords.is_empty() && state.form.keyword_input.is_empty() {
        "<type and press Enter>".to_string()
    } else if state.form.keyword_input.is_empty() {
        state.form.keywords.join(", ")
    } else {
        format!("{} [{}]", state.form.keywords.join(", "), state.form.keyword_input)
    };

    let mut lines = vec![
        field_line(state, FormField::Business, "Business", business),
        field_line(state, FormField::ContentType, "Content Type", content_type),
        field_line(state, FormField::Category, "Category", category),
        field_line(state, FormField::Topic, "Topic", state.form.topic.clone()),
        field_line(
            state,
            FormField::Description,
            "Description",
            state.form.description.clone(),
        ),
        field_line(state, FormField::Keywords, "Keywords", keywords),
    ];

    if let Some(content_type) = state.form.selected_content_type() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            content_type.format_hint(),
            Style::default().fg(Color::Blue),
        )));
    }

    if !state.industries.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{} active industries registered", state.industries.len()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if !state.topic_suggestions.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Topic suggestions (Ctrl+N to use):",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for suggestion in &state.topic_suggestions {
            lines.push(Line::from(Span::styled(
                format!("  - {}", suggestion),
                Style::default().fg(Color::Green),
            )));
        }
    } else if state.pending.loading_topics {
        lines.push(Line::from(Span::styled(
            "Loading topic suggestions...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if !state.keyword_suggestions.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Keyword suggestions (Ctrl+B to add):",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", state.keyword_suggestions.join(", ")),
            Style::default().fg(Color::Green),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn render_draft_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let title = if state.pending.generating {
        "Generated Content - generating..."
    } else {
        "Generated Content - Ctrl+S draft · Ctrl+A approve · Ctrl+P publish · Ctrl+E edit · Ctrl+R regenerate"
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.draft {
        Some(draft) => render_draft(frame, draft, inner),
        None => {
            let placeholder = Paragraph::new("Fill out the form and press Ctrl+G to generate content")
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            frame.render_widget(placeholder, inner);
        }
    }
}

fn render_draft(frame: &mut Frame, draft: &ContentDraft, area: Rect) {
    let mut lines = Vec::new();

    let mut badges = Vec::new();
    if let Some(score) = draft.seo_score {
        let color = if score >= SEO_SCORE_GOOD {
            Color::Green
        } else if score >= SEO_SCORE_OK {
            Color::Yellow
        } else {
            Color::Red
        };
        badges.push(Span::styled(
            format!("SEO: {}% ", score),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(model) = &draft.ai_model_used {
        badges.push(Span::styled(
            model.clone(),
            Style::default().fg(Color::Blue),
        ));
    }
    if !badges.is_empty() {
        lines.push(Line::from(badges));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Title: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(draft.title.clone()),
    ]));

    if let Some(meta) = &draft.meta_description {
        lines.push(Line::from(vec![
            Span::styled("Meta: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(meta.clone(), Style::default().fg(Color::Gray)),
        ]));
    }

    if !draft.keywords.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Keywords: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                draft.keywords.join(", "),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    lines.push(Line::raw(""));
    for text_line in draft.content_text.lines() {
        lines.push(Line::raw(text_line.to_string()));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
