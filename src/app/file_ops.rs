//! File operation methods
//!
//! Deleting the selected (or lightbox-focused) image after confirmation.

use photodeck::gallery::GalleryError;
use photodeck::host::FolderHost;
use photodeck::model::PendingDelete;

use crate::{services, App};

impl<F: FolderHost> App<F> {
    /// Name of the image a delete would target
    fn delete_target(&self) -> Option<String> {
        if let Some(image) = self.viewer.current_image() {
            return Some(image.name.clone());
        }
        self.model
            .navigation
            .image_selection
            .and_then(|idx| self.gallery.images().get(idx))
            .map(|image| image.name.clone())
    }

    pub(crate) fn request_delete(&mut self) {
        let Some(file_name) = self.delete_target() else {
            return;
        };
        let folder_name = self
            .gallery
            .path()
            .current_name()
            .unwrap_or_default()
            .to_string();

        self.model.ui.confirm_delete = Some(PendingDelete {
            folder_name,
            file_name,
        });
    }

    pub(crate) fn confirm_delete(&mut self) {
        let Some(pending) = self.model.ui.confirm_delete.take() else {
            return;
        };
        let Some(folder) = self.gallery.current_folder().cloned() else {
            self.report_error(&GalleryError::NoRoot);
            return;
        };

        log::info!("Deleting {} in {}", pending.file_name, pending.folder_name);
        services::spawn_delete(
            self.host.clone(),
            folder,
            pending.file_name,
            self.msg_tx.clone(),
        );
    }

    pub(crate) fn cancel_delete(&mut self) {
        self.model.ui.confirm_delete = None;
    }

    /// Toast and re-render the current page once a delete finished
    pub(crate) fn handle_delete_result(&mut self, name: String, result: Result<(), GalleryError>) {
        match result {
            Ok(()) => {
                self.model.show_toast(format!("Deleted {}", name));
                if self.viewer.is_open() {
                    self.close_viewer();
                }
                self.refresh();
            }
            Err(e) => self.report_error(&e),
        }
    }
}
