use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use photodeck::logic::layout::page_window;

/// Build the page number spans, current page highlighted (extracted for testability)
fn build_pagination_spans(page: usize, total_pages: usize, width: u16) -> Vec<Span<'static>> {
    let window = page_window(page, total_pages, width);
    let mut spans = Vec::new();

    if window.more_before {
        spans.push(Span::styled("… ", Style::default().fg(Color::DarkGray)));
    }
    for n in window.first..=window.last {
        let label = format!(" {} ", n);
        if n == page {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(label));
        }
    }
    if window.more_after {
        spans.push(Span::styled(" …", Style::default().fg(Color::DarkGray)));
    }

    spans
}

/// Render the pagination bar (only drawn when there is more than one page)
pub fn render_pagination(f: &mut Frame, area: Rect, page: usize, total_pages: usize) {
    let inner_width = area.width.saturating_sub(2);
    let line = Line::from(build_pagination_spans(page, total_pages, inner_width));
    let bar = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray))
                .title("Pages (n/p)"),
        );
    f.render_widget(bar, area);
}

/// Counts shown in the status line
pub struct StatusInfo<'a> {
    pub page: usize,
    pub total_pages: usize,
    pub image_count: usize,
    pub folder_count: usize,
    pub other_count: usize,
    pub failed_count: usize,
    pub selected: Option<&'a str>,
    pub loading: bool,
}

fn build_status_line(info: &StatusInfo<'_>) -> String {
    let mut parts = vec![
        format!("Page {}/{}", info.page, info.total_pages),
        format!("{} images", info.image_count),
        format!("{} folders", info.folder_count),
    ];
    if info.other_count > 0 {
        parts.push(format!("{} other files", info.other_count));
    }
    if info.failed_count > 0 {
        parts.push(format!("{} unreadable", info.failed_count));
    }
    if let Some(name) = info.selected {
        parts.push(name.to_string());
    }
    if info.loading {
        parts.push("Loading...".to_string());
    }
    parts.join(" │ ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: Option<&StatusInfo<'_>>) {
    let text = match info {
        Some(info) => build_status_line(info),
        None => String::new(),
    };
    let status = Paragraph::new(text).style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_all_pages_listed_when_they_fit() {
        let spans = build_pagination_spans(2, 3, 80);
        assert_eq!(text(&spans), " 1  2  3 ");
        // Only the current page is highlighted
        let highlighted: Vec<_> = spans
            .iter()
            .filter(|s| s.style.bg == Some(Color::Cyan))
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].content, " 2 ");
    }

    #[test]
    fn test_ellipsis_when_window_slides() {
        let rendered = text(&build_pagination_spans(50, 100, 30));
        assert!(rendered.starts_with("… "));
        assert!(rendered.ends_with(" …"));
        assert!(rendered.contains(" 50 "));
    }

    #[test]
    fn test_status_line() {
        let info = StatusInfo {
            page: 1,
            total_pages: 3,
            image_count: 120,
            folder_count: 3,
            other_count: 0,
            failed_count: 1,
            selected: Some("a.jpg"),
            loading: false,
        };
        assert_eq!(
            build_status_line(&info),
            "Page 1/3 │ 120 images │ 3 folders │ 1 unreadable │ a.jpg"
        );
    }
}
