//! Background Message Handler
//!
//! Applies results of spawned work on the loop task. Render outcomes and
//! display handles carry generations; anything older than the current one is
//! dropped here.

use photodeck::gallery::{ApplyOutcome, GalleryError};
use photodeck::host::FolderHost;
use photodeck::logic;

use crate::messages::{AppMessage, DisplayTarget};
use crate::App;

pub fn handle_message<F: FolderHost>(app: &mut App<F>, message: AppMessage<F::Handle>) {
    match message {
        AppMessage::RootPicked { ticket, .. } if !app.gallery.pick_is_current(ticket) => {
            log::debug!("Ignoring root pick overtaken by later navigation");
        }
        AppMessage::RootPicked {
            ticket,
            result: Ok(root),
        } => {
            log::info!("Root folder: {}", root.name);
            if let Some(request) = app.gallery.complete_pick(ticket, root) {
                crate::services::spawn_render(app.host.clone(), request, app.msg_tx.clone());
            }
        }
        AppMessage::RootPicked {
            result: Err(GalleryError::UserCancelled),
            ..
        } => {
            log::debug!("Root picker dismissed");
        }
        AppMessage::RootPicked { result: Err(e), .. } => {
            app.report_error(&e);
            app.open_root_prompt();
        }

        AppMessage::Rendered(outcome) => {
            let previous_folder = app.gallery.current_folder().cloned();
            let previous_page = app.gallery.page();
            match app.gallery.apply(outcome) {
                ApplyOutcome::Applied => {
                    // The lightbox only ever shows images of the committed page
                    if app.viewer.invalidate_page(app.gallery.page_generation()) {
                        app.model.ui.sixel_cleanup_frames = 1;
                    }

                    let folder_count = app.gallery.view().map(|v| v.folders.len()).unwrap_or(0);
                    let image_count = app.gallery.images().len();
                    let same_view = previous_folder.as_ref() == app.gallery.current_folder()
                        && previous_page == app.gallery.page();

                    if same_view {
                        // Refresh of the shown page: keep what we can
                        let nav = &mut app.model.navigation;
                        nav.folder_selection =
                            logic::navigation::clamp_selection(nav.folder_selection, folder_count);
                        nav.image_selection =
                            logic::navigation::clamp_selection(nav.image_selection, image_count);
                        // Bytes behind the same index may differ now
                        nav.selection_generation += 1;
                    } else {
                        app.model.reset_selection(folder_count, image_count);
                    }

                    let failed = app.gallery.failed_entries().len();
                    if failed > 0 {
                        app.model
                            .show_toast(format!("{} image(s) could not be loaded", failed));
                    }
                }
                ApplyOutcome::Stale => {}
                ApplyOutcome::Failed(e) => app.report_error(&e),
            }
        }

        AppMessage::DisplayBuilt {
            target: DisplayTarget::Preview,
            generation,
            state,
        } => app.apply_preview(generation, state),
        AppMessage::DisplayBuilt {
            target: DisplayTarget::Viewer,
            generation,
            state,
        } => {
            if !app.viewer.apply_display(generation, state) {
                log::debug!("Dropping stale viewer display {}", generation);
            }
        }

        AppMessage::MetadataExtracted {
            generation,
            metadata,
        } => {
            app.viewer.apply_metadata(generation, metadata);
        }

        AppMessage::Deleted { name, result } => app.handle_delete_result(name, result),
    }
}
