use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use unicode_width::UnicodeWidthStr;

use copydeck_core::{ContentStatus, PersistedContent, SEO_SCORE_GOOD, SEO_SCORE_OK};

use crate::state::AppState;
use crate::table::{ColumnKey, SortDirection, TableColumn};

/// Render the content library screen
pub fn render_with_area(frame: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    render_filter_line(frame, state, chunks[0]);
    render_table(frame, state, chunks[1]);
}

fn render_filter_line(frame: &mut Frame, state: &AppState, area: Rect) {
    let rows = state.table.rows(&state.content);

    let search = if state.search_active {
        format!("/{}_", state.table.search)
    } else if state.table.search.is_empty() {
        "/ search".to_string()
    } else {
        format!("/{}", state.table.search)
    };

    let status = state
        .table
        .status_filter
        .map(|s| s.label())
        .unwrap_or("All statuses");
    let content_type = state
        .table
        .type_filter
        .map(|t| t.label())
        .unwrap_or("All types");

    let line = Line::from(vec![
        Span::styled(
            format!("Content Library ({}/{})", rows.len(), state.content.len()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(search, Style::default().fg(Color::Magenta)),
        Span::raw("  s:"),
        Span::styled(status, Style::default().fg(Color::Yellow)),
        Span::raw("  t:"),
        Span::styled(content_type, Style::default().fg(Color::Yellow)),
        Span::raw("  Enter sort · [ ] resize · e edit · d delete · r refresh"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_table(frame: &mut Frame, state: &AppState, area: Rect) {
    let columns = state.table.columns();
    let rows = state.table.rows(&state.content);

    let header = Row::new(
        columns
            .iter()
            .enumerate()
            .map(|(index, column)| header_cell(state, column, index))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let row = content_row(columns, item);
            if Some(index) == state.selected_row {
                row.style(Style::default().bg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect();

    // Model widths are kept in the source scale; one terminal cell ~ 10 units
    let constraints: Vec<Constraint> = columns
        .iter()
        .map(|column| Constraint::Length((column.width / 10).max(6)))
        .collect();

    let title = if rows.is_empty() {
        "No content found"
    } else {
        "Content"
    };

    let table = Table::new(body, constraints)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn header_cell<'a>(state: &AppState, column: &'a TableColumn, index: usize) -> Cell<'a> {
    let mut label = column.label.to_string();

    if let Some(field) = column.key.sort_field() {
        if state.table.sort_field() == field {
            label.push(match state.table.sort_direction() {
                SortDirection::Ascending => '^',
                SortDirection::Descending => 'v',
            });
        }
    }

    let style = if state.selected_column == index {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    };

    Cell::from(label).style(style)
}

fn content_row<'a>(columns: &[TableColumn], item: &'a PersistedContent) -> Row<'a> {
    let cells: Vec<Cell> = columns
        .iter()
        .map(|column| match column.key {
            ColumnKey::Title => {
                let width = usize::from((column.width / 10).max(6));
                let business = item.business_name();
                let text = if business.is_empty() {
                    item.title.clone()
                } else {
                    format!("{} · {}", item.title, business)
                };
                Cell::from(truncate_to_width(&text, width))
            }
            ColumnKey::Type => Cell::from(item.content_type.label())
                .style(Style::default().fg(Color::Blue)),
            ColumnKey::Status => {
                Cell::from(item.status.label()).style(Style::default().fg(status_color(item.status)))
            }
            ColumnKey::SeoScore => match item.seo_score {
                Some(score) => Cell::from(format!("{}%", score))
                    .style(Style::default().fg(seo_color(score))),
                None => Cell::from("N/A").style(Style::default().fg(Color::Gray)),
            },
            ColumnKey::Created => Cell::from(
                item.created_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d")
                    .to_string(),
            ),
            ColumnKey::Actions => {
                Cell::from("e/d").style(Style::default().fg(Color::Gray))
            }
        })
        .collect();

    Row::new(cells)
}

fn status_color(status: ContentStatus) -> Color {
    match status {
        ContentStatus::Published => Color::Green,
        ContentStatus::PendingApproval => Color::Yellow,
        ContentStatus::Draft => Color::Gray,
        ContentStatus::Rejected => Color::Red,
    }
}

fn seo_color(score: u8) -> Color {
    if score >= SEO_SCORE_GOOD {
        Color::Green
    } else if score >= SEO_SCORE_OK {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + char_width + 1 > width {
            break;
        }
        result.push(c);
        used += char_width;
    }
    result.push('…');
    result
}
