use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use photodeck::gallery::LoadedImage;
use photodeck::logic::formatting::format_bytes;

use crate::messages::ImagePreviewState;

/// Render the image pane: names and sizes of the loaded images on this page
pub fn render_image_list(
    f: &mut Frame,
    area: Rect,
    images: &[LoadedImage],
    images_state: &mut ListState,
    is_focused: bool,
    empty_message: Option<&str>,
) {
    let block = Block::default()
        .title(format!("Images ({})", images.len()))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        });

    if images.is_empty() {
        let message = empty_message.unwrap_or("No images on this page");
        let placeholder = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = images
        .iter()
        .map(|image| {
            ListItem::new(Line::from(vec![
                Span::raw(image.name.clone()),
                Span::styled(
                    format!("  {}", format_bytes(image.len())),
                    Style::default().fg(Color::Rgb(150, 150, 150)),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, images_state);
}

/// Draw an image state into `area`: the image itself, or a one-line placeholder
pub fn render_image_state(f: &mut Frame, area: Rect, state: Option<&mut ImagePreviewState>) {
    if area.width < 2 || area.height < 2 {
        return;
    }

    let placeholder = match state {
        Some(ImagePreviewState::Ready { protocol, .. }) => {
            f.render_stateful_widget(StatefulImage::default(), area, protocol);
            return;
        }
        Some(ImagePreviewState::Loading) => "Loading...".to_string(),
        Some(ImagePreviewState::Failed { reason }) => reason.clone(),
        None => "Image preview disabled".to_string(),
    };

    let y_offset = area.height / 2;
    let line_area = Rect::new(area.x, area.y + y_offset, area.width, 1);
    let text = Paragraph::new(placeholder)
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(text, line_area);
}

/// Render the inline preview of the selected image
pub fn render_preview(
    f: &mut Frame,
    area: Rect,
    name: Option<&str>,
    state: Option<&mut ImagePreviewState>,
) {
    let title = match (name, state.as_deref()) {
        (Some(name), Some(ImagePreviewState::Ready { dimensions, .. })) => {
            format!("{} ({}x{})", name, dimensions.0, dimensions.1)
        }
        (Some(name), _) => name.to_string(),
        (None, _) => "Preview".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if name.is_none() {
        return;
    }
    // No state yet means the build for this selection has not reported back
    let mut loading = ImagePreviewState::Loading;
    render_image_state(f, inner, Some(state.unwrap_or(&mut loading)));
}
