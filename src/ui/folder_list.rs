use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the subfolder pane
pub fn render_folder_list(
    f: &mut Frame,
    area: Rect,
    folder_names: &[&str],
    folders_state: &mut ListState,
    is_focused: bool,
) {
    let items: Vec<ListItem> = folder_names
        .iter()
        .map(|name| {
            ListItem::new(Line::from(vec![
                Span::styled("▸ ", Style::default().fg(Color::Yellow)),
                Span::raw(name.to_string()),
            ]))
        })
        .collect();

    let folders_list = List::new(items)
        .block(
            Block::default()
                .title(format!("Folders ({})", folder_names.len()))
                .borders(Borders::ALL)
                .border_style(if is_focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                }),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(folders_list, area, folders_state);
}
