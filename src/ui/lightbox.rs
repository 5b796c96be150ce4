use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use photodeck::metadata::CaptureMetadata;

use super::image_list::render_image_state;
use crate::messages::ImagePreviewState;

/// Everything the lightbox draws, borrowed from the viewer
pub struct LightboxContent<'a> {
    pub name: &'a str,
    pub index: usize,
    pub len: usize,
    pub metadata: Option<&'a CaptureMetadata>,
    /// False when image previews are disabled
    pub can_display: bool,
}

fn metadata_lines(metadata: Option<&CaptureMetadata>) -> Vec<Line<'static>> {
    match metadata {
        Some(metadata) => metadata
            .lines()
            .into_iter()
            .map(|line| match line.split_once(": ") {
                Some((label, value)) => Line::from(vec![
                    Span::styled(format!("{}: ", label), Style::default().fg(Color::Yellow)),
                    Span::raw(value.to_string()),
                ]),
                None => Line::from(line),
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "Reading metadata...",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))],
    }
}

/// Render the full-screen viewer over everything else
pub fn render_lightbox(
    f: &mut Frame,
    content: LightboxContent<'_>,
    display: Option<&mut ImagePreviewState>,
) {
    let area = f.area();
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(34)])
        .split(chunks[0]);

    let title = format!("{} ({}/{})", content.name, content.index + 1, content.len);
    let image_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let image_area = image_block.inner(panes[0]);
    f.render_widget(image_block, panes[0]);

    if content.can_display {
        match display {
            Some(state) => render_image_state(f, image_area, Some(state)),
            // Display still being built for this focus
            None => render_image_state(f, image_area, Some(&mut ImagePreviewState::Loading)),
        }
    } else {
        render_image_state(f, image_area, None);
    }

    let info = Paragraph::new(metadata_lines(content.metadata))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray))
                .title("Metadata"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(info, panes[1]);

    let hints = Line::from(vec![
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(":Prev/Next  "),
        Span::styled("Home/End", Style::default().fg(Color::Yellow)),
        Span::raw(":First/Last  "),
        Span::styled("d", Style::default().fg(Color::Yellow)),
        Span::raw(":Delete  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(":Close"),
    ]);
    f.render_widget(Paragraph::new(hints), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_metadata_lines_keep_labels() {
        let lines = metadata_lines(Some(&CaptureMetadata::unknown()));
        assert_eq!(lines.len(), 5);
        assert_eq!(text(&lines[0]), "Camera Model: Unknown Model");
        assert_eq!(lines[0].spans.len(), 2);
    }

    #[test]
    fn test_pending_metadata() {
        let lines = metadata_lines(None);
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "Reading metadata...");
    }
}
