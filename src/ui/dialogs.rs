use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, folder_name: &str, file_name: &str) {
    let prompt_text = format!(
        "Delete image from {}?\n\n\
        File: {}\n\n\
        WARNING: This action cannot be undone!\n\n\
        Continue? (y/n)",
        folder_name, file_name
    );

    let prompt_area = centered_rect(f.area(), 50, 11);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the root folder prompt
pub fn render_root_prompt(f: &mut Frame, input: &str, remote: bool) {
    let hint = if remote {
        "Folder on the server (/ is the served root)"
    } else {
        "Path to a local folder (~ is your home)"
    };

    let lines = vec![
        Line::from(Span::styled(hint, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(input.to_string()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: open   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let prompt_area = centered_rect(f.area(), 60, 7);
    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Open Folder")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the go-to-page prompt
pub fn render_page_prompt(f: &mut Frame, input: &str, total_pages: usize) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("Page (1-{}): ", total_pages), Style::default().fg(Color::Gray)),
            Span::raw(input.to_string()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: go   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let prompt_area = centered_rect(f.area(), 40, 5);
    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Go to Page")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

fn help_rows(vim_mode: bool) -> Vec<(&'static str, &'static str)> {
    let mut rows = vec![
        ("↑/↓", "Move selection"),
        ("Tab", "Switch folders/images pane"),
        ("Enter", "Open folder / view image"),
        ("Backspace", "Parent folder"),
        ("1-9", "Jump to breadcrumb level"),
        ("n / p", "Next / previous page"),
        (":", "Go to page"),
        ("r", "Refresh folder"),
        ("d", "Delete image"),
        ("o", "Open another root folder"),
        ("q", "Quit"),
    ];
    if vim_mode {
        rows.push(("j/k h/l", "Move / parent / open"));
        rows.push(("gg / G", "First / last"));
    }
    rows
}

/// Render the keyboard help overlay
pub fn render_help(f: &mut Frame, vim_mode: bool) {
    let rows = help_rows(vim_mode);
    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>10}  ", key),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    let help_area = centered_rect(f.area(), 50, rows.len() as u16 + 2);
    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Keys (any key closes)")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, help_area);
    f.render_widget(help, help_area);
}
