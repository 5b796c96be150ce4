//! Keyboard Input Handler
//!
//! Modal keys are handled first (root prompt, delete confirmation, lightbox,
//! help), then the gallery screen's own bindings.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use photodeck::host::FolderHost;
use photodeck::model::VimCommandState;

use crate::App;

/// Handle keyboard input
pub async fn handle_key<F: FolderHost>(app: &mut App<F>, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    // Root folder prompt
    if let Some(prompt) = app.model.ui.root_prompt.as_mut() {
        match key.code {
            KeyCode::Enter => {
                let request = prompt.input.trim().to_string();
                app.model.ui.root_prompt = None;
                if request.is_empty() {
                    // Same as dismissing the picker: no toast
                    log::debug!("Root prompt submitted empty");
                } else {
                    app.pick_root(request);
                }
            }
            KeyCode::Esc => {
                app.model.ui.root_prompt = None;
            }
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) => {
                prompt.input.push(c);
            }
            _ => {}
        }
        return Ok(());
    }

    // Go-to-page prompt
    if let Some(prompt) = app.model.ui.page_prompt.as_mut() {
        match key.code {
            KeyCode::Enter => app.submit_page_prompt(),
            KeyCode::Esc => app.model.ui.page_prompt = None,
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) => prompt.push(c),
            _ => {}
        }
        return Ok(());
    }

    // Delete confirmation prompt
    if app.model.ui.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            // Ignore other keys while prompt is showing
            _ => {}
        }
        return Ok(());
    }

    // Lightbox
    if app.viewer.is_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_viewer(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => app.viewer_next(),
            KeyCode::Left | KeyCode::Char('h') => app.viewer_prev(),
            KeyCode::Home => app.viewer_jump(0),
            KeyCode::End => app.viewer_last(),
            KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
            _ => {}
        }
        return Ok(());
    }

    // Help overlay: any key closes it
    if app.model.ui.show_help {
        app.model.ui.show_help = false;
        return Ok(());
    }

    let vim_mode = app.model.ui.vim_mode;

    // Reset 'gg' sequence on any other key
    if vim_mode && key.code != KeyCode::Char('g') {
        app.model.ui.vim_command_state = VimCommandState::None;
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('?') => app.model.ui.show_help = true,
        KeyCode::Char('o') => app.open_root_prompt(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),

        KeyCode::Down => app.next_item(),
        KeyCode::Up => app.previous_item(),
        KeyCode::Char('j') if vim_mode => app.next_item(),
        KeyCode::Char('k') if vim_mode => app.previous_item(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        KeyCode::Char('g') if vim_mode => {
            if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
                // gg - jump to first
                app.jump_to_first();
                app.model.ui.vim_command_state = VimCommandState::None;
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if vim_mode => app.jump_to_last(),

        KeyCode::Enter | KeyCode::Right => app.activate_selection(),
        KeyCode::Char('l') if vim_mode => app.activate_selection(),
        KeyCode::Backspace | KeyCode::Left => app.go_up(),
        KeyCode::Char('h') if vim_mode => app.go_up(),

        // Breadcrumb jump: 1 is the root
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < app.gallery.path().len() {
                app.jump_to_breadcrumb(index);
            }
        }

        KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('p') | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char(':') => app.open_page_prompt(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        _ => {}
    }

    Ok(())
}
