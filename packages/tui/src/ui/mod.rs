pub mod generator;
pub mod library;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use copydeck_content::NoticeLevel;

use crate::state::{AppState, EditField, EditState, Screen};

/// Main UI rendering function
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content area
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match state.screen {
        Screen::Generator => generator::render_with_area(frame, state, chunks[0]),
        Screen::Library => library::render_with_area(frame, state, chunks[0]),
    }

    render_status_bar(frame, state, chunks[1]);

    if let Some(edit) = &state.edit {
        render_edit_overlay(frame, edit);
    }
}

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let breadcrumb = match state.screen {
        Screen::Generator => " Generator",
        Screen::Library => " Library",
    };

    let mut spans = vec![
        Span::styled(breadcrumb, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" | Tab switch screen | Ctrl+C quit"),
    ];

    if let Some(notice) = &state.status_notice {
        let color = match notice.level {
            NoticeLevel::Info => Color::Blue,
            NoticeLevel::Success => Color::Green,
            NoticeLevel::Warning => Color::Yellow,
            NoticeLevel::Error => Color::Red,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{}: {}", notice.title, notice.message),
            Style::default().fg(color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_edit_overlay(frame: &mut Frame, edit: &EditState) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Edit Content - Tab switch field, Ctrl+S save, Esc cancel")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(inner);

    let focus_style = Style::default().fg(Color::Yellow);
    let blur_style = Style::default().fg(Color::Gray);

    let title = Paragraph::new(edit.title.as_str()).block(
        Block::default()
            .title("Title")
            .borders(Borders::ALL)
            .border_style(if edit.focus == EditField::Title {
                focus_style
            } else {
                blur_style
            }),
    );
    frame.render_widget(title, chunks[0]);

    let body = Paragraph::new(edit.body.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Content")
                .borders(Borders::ALL)
                .border_style(if edit.focus == EditField::Body {
                    focus_style
                } else {
                    blur_style
                }),
        );
    frame.render_widget(body, chunks[1]);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
