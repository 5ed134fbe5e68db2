//! UI rendering using ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Mode};

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for selected items
const HIGHLIGHT: Color = Color::Yellow;
/// Error color
const ERROR: Color = Color::Red;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // A provider error replaces the whole view: no partial list + error
    if let Some(ref message) = app.error {
        render_error_state(frame, area, message);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Content area
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_search_bar(frame, app, chunks[0]);

    // Content area: list + detail pane
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_list(frame, app, content_chunks[0]);
    render_detail(frame, app, content_chunks[1]);

    render_status_bar(frame, app, chunks[2]);

    if app.mode == Mode::ActionPalette {
        render_action_palette(frame, app);
    }
}

/// Render the search bar
fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.mode == Mode::Search;

    let border_style = if is_active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(SECONDARY)
    };

    let block = Block::default()
        .title(" Search recordings... ")
        .title_style(if is_active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SECONDARY)
        })
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = if is_active {
        // Show input with cursor
        let before = &app.search_input[..app.search_cursor];
        let after = &app.search_input[app.search_cursor..];
        Line::from(format!("{before}|{after}"))
    } else if app.search_input.is_empty() {
        Line::from(Span::styled("Press '/' to filter", Style::default().fg(DIM)))
    } else {
        Line::from(app.search_input.as_str())
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Render the recording list
fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let displayed_len = app.displayed_len();

    let title = if app.search_input.is_empty() {
        " Recordings ".to_string()
    } else {
        format!(" Recordings ({displayed_len} matches) ")
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    let inner = block.inner(area);
    let visible_height = inner.height as usize;

    let items: Vec<ListItem> = app
        .filtered
        .iter()
        .flatten()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(idx, recording)| {
            let is_selected = idx == app.selected_index;

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let snippet = first_line(recording.primary_text(), 30);
            let line = Line::from(vec![
                Span::styled(recording.title(), style),
                Span::styled(format!("  {snippet}"), Style::default().fg(DIM)),
            ]);
            ListItem::new(line)
        })
        .collect();

    // Placeholder covers both "still loading" and "filter matched nothing"
    let list = if items.is_empty() {
        let placeholder_text = if app.is_loading {
            "  Loading..."
        } else if app.search_input.is_empty() {
            "  No recordings"
        } else {
            "  No matches"
        };
        let placeholder = ListItem::new(Line::from(Span::styled(
            placeholder_text,
            Style::default().fg(DIM),
        )));
        List::new(vec![placeholder]).block(block)
    } else {
        List::new(items).block(block)
    };

    frame.render_widget(list, area);

    // Show scroll indicator
    if displayed_len > visible_height {
        let indicator = format!(" {}/{} ", app.selected_index + 1, displayed_len);
        let indicator_area = Rect {
            x: area.x + area.width.saturating_sub(indicator.len() as u16 + 2),
            y: area.y,
            width: indicator.len() as u16 + 2,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(indicator).style(Style::default().fg(DIM)),
            indicator_area,
        );
    }
}

/// Render the markdown detail pane for the selected recording
fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let title = if let Some(recording) = app.selected_recording() {
        format!(" {} ", recording.title())
    } else {
        " Detail ".to_string()
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(SECONDARY))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    let lines: Vec<Line<'static>> = match app.selected_recording() {
        Some(recording) => markdown_lines(&recording.detail_markdown()),
        None => vec![Line::from(Span::styled(
            "Select a recording",
            Style::default().fg(DIM),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

/// Light markdown styling: `###` headings in the accent color, emphasis
/// lines dimmed. The detail body is plain text otherwise.
fn markdown_lines(markdown: &str) -> Vec<Line<'static>> {
    markdown
        .lines()
        .map(|line| {
            if let Some(heading) = line.strip_prefix("### ") {
                Line::from(Span::styled(
                    heading.to_string(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ))
            } else if line.starts_with('_') && line.ends_with('_') {
                Line::from(Span::styled(
                    line.trim_matches('_').to_string(),
                    Style::default().fg(DIM),
                ))
            } else {
                Line::from(line.to_string())
            }
        })
        .collect()
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_indicator = match app.mode {
        Mode::Normal => Span::styled(" NORMAL ", Style::default().bg(ACCENT).fg(Color::Black)),
        Mode::Search => {
            Span::styled(" SEARCH ", Style::default().bg(Color::Magenta).fg(Color::Black))
        }
        Mode::ActionPalette => {
            Span::styled(" ACTION ", Style::default().bg(HIGHLIGHT).fg(Color::Black))
        }
    };

    let help_text = match app.mode {
        Mode::Normal => "j/k:nav  Enter:actions  /:filter  Ctrl+R:rescan  q:quit",
        Mode::Search => "Type to filter  Up/Down:nav  Enter/Esc:done",
        Mode::ActionPalette => "j/k:nav  Enter:execute  1-9:quick  Esc:cancel",
    };

    let mut spans = vec![
        mode_indicator,
        Span::raw(" "),
        Span::styled(help_text, Style::default().fg(DIM)),
    ];

    if app.is_loading {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            "Loading...",
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(HIGHLIGHT)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the action palette overlay
fn render_action_palette(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let width = 56.min(area.width.saturating_sub(4));
    let height = (app.action_items.len() + 2).min(12) as u16;

    let popup_area = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Actions ")
        .title_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(HIGHLIGHT));

    let items: Vec<ListItem> = app
        .action_items
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let is_selected = idx == app.action_selected;

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let shortcut = action
                .shortcut
                .as_deref()
                .map(|s| format!(" [{s}]"))
                .unwrap_or_default();
            let content = format!("{} {} - {}{}", idx + 1, action.name, action.description, shortcut);
            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), popup_area);
}

/// The single empty-state shown when the provider reported an error
fn render_error_state(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ERROR));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "!",
            Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Error",
            Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    // Vertically center-ish: drop the paragraph a third of the way down
    let centered = Rect {
        x: inner.x,
        y: inner.y + inner.height / 3,
        width: inner.width,
        height: inner.height.saturating_sub(inner.height / 3),
    };
    frame.render_widget(paragraph, centered);
}

/// First line of a text, truncated to `max` chars with an ellipsis
fn first_line(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() > max {
        let truncated: String = line.chars().take(max).collect();
        format!("{truncated}…")
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_truncation() {
        assert_eq!(first_line("short", 10), "short");
        assert_eq!(first_line("two\nlines", 10), "two");
        assert_eq!(first_line("abcdefghijk", 5), "abcde…");
    }

    #[test]
    fn test_markdown_heading_styled() {
        let lines = markdown_lines("### Raw Result\nhello\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, "Raw Result");
    }
}
