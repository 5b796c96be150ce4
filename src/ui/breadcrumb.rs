use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the trail spans: `1:root › 2:sub › 3:current` (extracted for testability)
///
/// Numbers are the keys that jump to each level; only 1-9 have one.
fn build_breadcrumb_spans(names: &[String]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let last = names.len().saturating_sub(1);

    for (idx, name) in names.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        if idx < 9 {
            spans.push(Span::styled(
                format!("{}:", idx + 1),
                Style::default().fg(Color::Yellow),
            ));
        }
        let style = if idx == last {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(name.clone(), style));
    }

    spans
}

/// Render the breadcrumb trail; `title` carries the folder name and item count
pub fn render_breadcrumb(f: &mut Frame, area: Rect, names: &[String], title: Option<&str>, loading: bool) {
    let line = if names.is_empty() {
        Line::from(Span::styled(
            "No folder chosen - press o to pick one",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = build_breadcrumb_spans(names);
        if loading {
            spans.push(Span::styled(
                "  loading…",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(title.unwrap_or("photodeck").to_string());

    f.render_widget(Paragraph::new(line).block(block), area);
}
