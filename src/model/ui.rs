//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, dialogs, popups, and visual state.

use std::time::Instant;

use super::types::{PagePrompt, PendingDelete, RootPrompt, VimCommandState};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Whether the selected image is previewed inline
    pub image_preview_enabled: bool,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Root folder prompt (shown at startup when no root was given)
    pub root_prompt: Option<RootPrompt>,

    /// Go-to-page prompt
    pub page_prompt: Option<PagePrompt>,

    /// Confirmation dialog for deleting an image
    pub confirm_delete: Option<PendingDelete>,

    /// Keyboard help overlay
    pub show_help: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Sixel cleanup counter (render white screen for N frames)
    pub sixel_cleanup_frames: u8,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool, image_preview_enabled: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            image_preview_enabled,
            root_prompt: None,
            page_prompt: None,
            confirm_delete: None,
            show_help: false,
            toast_message: None,
            sixel_cleanup_frames: 0,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if the toast has been up long enough to go away
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false, true);
        assert!(!model.vim_mode);
        assert!(model.image_preview_enabled);
        assert!(!model.should_quit);
        assert_eq!(model.vim_command_state, VimCommandState::None);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false, true);
        assert!(model.toast_message.is_none());
        assert!(!model.should_dismiss_toast());

        model.show_toast("Test".to_string());
        assert!(model.toast_message.is_some());
        // Freshly shown toasts stay up
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }
}
