use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, has_root: bool, multiple_pages: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if !has_root {
        hotkey_spans.extend(vec![
            Span::styled("o", Style::default().fg(Color::Yellow)),
            Span::raw(":Open Folder  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(":Quit"),
        ]);
        return hotkey_spans;
    }

    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("hjkl", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("gg/G", Style::default().fg(Color::Yellow)),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Open  "),
            Span::styled("←", Style::default().fg(Color::Yellow)),
            Span::raw(":Back  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(":Pane  "),
        Span::styled("1-9", Style::default().fg(Color::Yellow)),
        Span::raw(":Breadcrumb  "),
    ]);

    if multiple_pages {
        hotkey_spans.extend(vec![
            Span::styled("n/p", Style::default().fg(Color::Yellow)),
            Span::raw(":Page  "),
            Span::styled(":", Style::default().fg(Color::Yellow)),
            Span::raw(":Go to  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(":Refresh  "),
        Span::styled("d", Style::default().fg(Color::Yellow)),
        Span::raw(":Delete  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(":Help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, has_root: bool, multiple_pages: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, has_root, multiple_pages)));
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_no_root_shows_open_only() {
        let rendered = text(&build_hotkey_spans(false, false, false));
        assert_eq!(rendered, "o:Open Folder  q:Quit");
    }

    #[test]
    fn test_page_keys_only_with_multiple_pages() {
        assert!(!text(&build_hotkey_spans(false, true, false)).contains("n/p"));
        assert!(text(&build_hotkey_spans(false, true, true)).contains("n/p:Page  ::Go to"));
        assert!(!text(&build_hotkey_spans(false, true, false)).contains("Go to"));
    }

    #[test]
    fn test_vim_mode_keys() {
        let rendered = text(&build_hotkey_spans(true, true, false));
        assert!(rendered.contains("hjkl:Nav"));
        assert!(rendered.contains("gg/G:First/Last"));
        assert!(!rendered.contains("↑/↓"));
    }
}
