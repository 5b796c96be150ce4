use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Breadcrumb trail with folder title (top)
    pub breadcrumb_area: Rect,
    /// Subfolder pane (left)
    pub folders_area: Rect,
    /// Image name list (right)
    pub images_area: Rect,
    /// Inline preview next to the image list (if enabled)
    pub preview_area: Option<Rect>,
    /// Pagination bar (only with more than one page)
    pub pagination_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, show_pagination: bool, show_preview: bool) -> LayoutInfo {
    let pagination_height = if show_pagination { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Breadcrumb (border, text, border)
            Constraint::Min(3),                    // Content area (folders + images)
            Constraint::Length(pagination_height), // Pagination bar
            Constraint::Length(1),                 // Legend
            Constraint::Length(1),                 // Status bar
        ])
        .split(terminal_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    let (images_area, preview_area) = if show_preview {
        let image_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(content_chunks[1]);
        (image_chunks[0], Some(image_chunks[1]))
    } else {
        (content_chunks[1], None)
    };

    LayoutInfo {
        breadcrumb_area: main_chunks[0],
        folders_area: content_chunks[0],
        images_area,
        preview_area,
        pagination_area: show_pagination.then_some(main_chunks[2]),
        legend_area: main_chunks[3],
        status_area: main_chunks[4],
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
