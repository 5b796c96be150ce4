//! Image display methods
//!
//! - Inline preview of the selected image, rebuilt when the selection changes
//! - Lightbox: open/close, stepping, and spawning display + metadata work for
//!   each focus change

use photodeck::host::FolderHost;
use photodeck::viewer::FocusTicket;

use crate::messages::{DisplayTarget, ImagePreviewState};
use crate::{services, App};

impl<F: FolderHost> App<F> {
    /// Start a preview build when the selection generation moved on
    pub(crate) fn sync_preview(&mut self) {
        if !self.model.ui.image_preview_enabled || self.viewer.is_open() {
            return;
        }
        let Some(picker) = self.image_picker.clone() else {
            return;
        };

        let generation = self.model.navigation.selection_generation;
        if matches!(self.preview, Some((built_for, _)) if built_for == generation) {
            return;
        }

        let selected = self
            .model
            .navigation
            .image_selection
            .and_then(|idx| self.gallery.images().get(idx).cloned());

        match selected {
            Some(image) => {
                self.preview = Some((generation, ImagePreviewState::Loading));
                services::spawn_display_build(
                    picker,
                    image,
                    DisplayTarget::Preview,
                    generation,
                    self.msg_tx.clone(),
                );
            }
            None => {
                if self.preview.is_some() {
                    self.model.ui.sixel_cleanup_frames = 1;
                }
                self.preview = None;
            }
        }
    }

    /// Install a built preview unless the selection moved since it was requested
    pub(crate) fn apply_preview(&mut self, generation: u64, state: ImagePreviewState) {
        match self.preview {
            Some((built_for, _)) if built_for == generation => {
                self.preview = Some((generation, state));
            }
            _ => log::debug!("Dropping stale preview for selection {}", generation),
        }
    }

    pub(crate) fn open_viewer(&mut self) {
        let Some(index) = self.model.navigation.image_selection else {
            return;
        };
        let images = self.gallery.images().clone();
        match self
            .viewer
            .open(images, self.gallery.page_generation(), index)
        {
            Ok(ticket) => {
                self.model.ui.sixel_cleanup_frames = 1;
                self.spawn_focus_work(ticket);
            }
            Err(e) => log::warn!("Cannot open viewer: {}", e),
        }
    }

    pub(crate) fn close_viewer(&mut self) {
        if let Some(index) = self.viewer.current_index() {
            // Leave the list selection on the last viewed image
            self.model.navigation.select_image(Some(index));
        }
        self.viewer.close();
        self.model.ui.sixel_cleanup_frames = 1;
    }

    pub(crate) fn viewer_next(&mut self) {
        if let Some(ticket) = self.viewer.next() {
            self.spawn_focus_work(ticket);
        }
    }

    pub(crate) fn viewer_prev(&mut self) {
        if let Some(ticket) = self.viewer.prev() {
            self.spawn_focus_work(ticket);
        }
    }

    pub(crate) fn viewer_jump(&mut self, index: usize) {
        if self.viewer.current_index() == Some(index) {
            return;
        }
        match self.viewer.jump_to(index) {
            Ok(ticket) => self.spawn_focus_work(ticket),
            Err(e) => log::debug!("Viewer jump ignored: {}", e),
        }
    }

    pub(crate) fn viewer_last(&mut self) {
        let len = self.viewer.len();
        if len > 0 {
            self.viewer_jump(len - 1);
        }
    }

    /// Build the display handle and extract metadata for a new focus
    fn spawn_focus_work(&mut self, ticket: FocusTicket) {
        self.model.ui.sixel_cleanup_frames = 1;
        if let Some(picker) = self.image_picker.clone() {
            services::spawn_display_build(
                picker,
                ticket.image.clone(),
                DisplayTarget::Viewer,
                ticket.generation,
                self.msg_tx.clone(),
            );
        }
        services::spawn_metadata(ticket.image, ticket.generation, self.msg_tx.clone());
    }
}
