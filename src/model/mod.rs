//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state of the terminal gallery.
//! Folder contents and the current page are owned by the gallery controller;
//! what lives here is what the user is pointing at:
//!
//! - **NavigationModel**: pane focus, folder/image selection
//! - **UiModel**: preferences, dialogs, toast
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives in the runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::{NavigationModel, PathSegment, PathStack, PathStackError};
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Focus and selection
    pub navigation: NavigationModel,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool, image_preview_enabled: bool) -> Self {
        Self {
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode, image_preview_enabled),
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }

    /// Forget selections when a different folder is shown
    pub fn reset_selection(&mut self, folder_count: usize, image_count: usize) {
        self.navigation.folder_selection = if folder_count > 0 { Some(0) } else { None };
        // Same index may now point at a different image
        self.navigation.image_selection = if image_count > 0 { Some(0) } else { None };
        self.navigation.selection_generation += 1;
        if image_count == 0 && folder_count > 0 {
            self.navigation.focus = Pane::Folders;
        } else {
            self.navigation.focus = Pane::Images;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(false, true);
        assert_eq!(model.navigation.focus, Pane::Images);
        assert!(model.navigation.image_selection.is_none());
        assert!(!model.ui.vim_mode);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(true, false);
        let cloned = model.clone();
        assert!(cloned.ui.vim_mode);
    }

    #[test]
    fn test_toast() {
        let mut model = Model::new(false, true);
        model.show_toast("Deleted a.jpg".to_string());
        assert!(model.ui.toast_message.is_some());
        model.dismiss_toast();
        assert!(model.ui.toast_message.is_none());
    }

    #[test]
    fn test_reset_selection_focuses_folders_when_no_images() {
        let mut model = Model::new(false, true);
        model.reset_selection(3, 0);
        assert_eq!(model.navigation.focus, Pane::Folders);
        assert_eq!(model.navigation.folder_selection, Some(0));
        assert_eq!(model.navigation.image_selection, None);

        model.reset_selection(3, 10);
        assert_eq!(model.navigation.focus, Pane::Images);
        assert_eq!(model.navigation.image_selection, Some(0));
    }
}
