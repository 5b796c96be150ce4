use ratatui::{widgets::ListState, Frame};

use photodeck::gallery::GalleryState;
use photodeck::host::FolderHost;
use photodeck::model::Pane;

use super::{
    breadcrumb, dialogs, folder_list, image_list, layout, legend,
    lightbox::{self, LightboxContent},
    status_bar::{self, StatusInfo},
    toast,
};
use crate::App;

/// Main render function - orchestrates all UI rendering
pub fn render<F: FolderHost>(f: &mut Frame, app: &mut App<F>) {
    let size = f.area();
    let loading = app.gallery.state() == GalleryState::Loading;

    // Lightbox covers the whole screen; dialogs still draw over it
    if app.viewer.is_open() {
        let (name, index) = match (app.viewer.current_image(), app.viewer.current_index()) {
            (Some(image), Some(index)) => (image.name.clone(), index),
            _ => (String::new(), 0),
        };
        let metadata = app.viewer.metadata().cloned();
        let content = LightboxContent {
            name: &name,
            index,
            len: app.viewer.len(),
            metadata: metadata.as_ref(),
            can_display: app.image_picker.is_some(),
        };
        lightbox::render_lightbox(f, content, app.viewer.display_mut());
    } else {
        render_gallery(f, app, loading);
    }

    if let Some(pending) = &app.model.ui.confirm_delete {
        dialogs::render_delete_confirmation(f, &pending.folder_name, &pending.file_name);
    }

    if let Some(prompt) = &app.model.ui.page_prompt {
        dialogs::render_page_prompt(f, &prompt.input, prompt.total_pages);
    }

    if let Some(prompt) = &app.model.ui.root_prompt {
        dialogs::render_root_prompt(f, &prompt.input, app.remote);
    }

    if app.model.ui.show_help {
        dialogs::render_help(f, app.model.ui.vim_mode);
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

fn render_gallery<F: FolderHost>(f: &mut Frame, app: &mut App<F>, loading: bool) {
    let size = f.area();
    let (page, total_pages) = app
        .gallery
        .view()
        .map(|v| (v.page, v.total_pages))
        .unwrap_or((1, 1));
    let show_preview = app.model.ui.image_preview_enabled && app.image_picker.is_some();
    let layout_info = layout::calculate_layout(size, total_pages > 1, show_preview);

    let names = app.gallery.path().names_from_root();
    let title = app.gallery.view().map(|v| v.title.as_str());
    breadcrumb::render_breadcrumb(f, layout_info.breadcrumb_area, &names, title, loading);

    let focus = app.model.navigation.focus;

    // Folders pane
    let folder_names: Vec<&str> = app
        .gallery
        .view()
        .map(|v| v.folders.iter().map(|folder| folder.name.as_str()).collect())
        .unwrap_or_default();
    let mut folders_state = ListState::default();
    folders_state.select(app.model.navigation.folder_selection);
    folder_list::render_folder_list(
        f,
        layout_info.folders_area,
        &folder_names,
        &mut folders_state,
        focus == Pane::Folders,
    );

    // Images pane
    let empty_message = match app.gallery.view() {
        None if app.gallery.path().is_empty() => Some("Press o to choose a folder"),
        None => Some("Loading..."),
        Some(view) if view.is_empty() => Some("This folder is empty"),
        Some(view) if view.image_count == 0 => Some("No images in this folder"),
        Some(_) => None,
    };
    let mut images_state = ListState::default();
    images_state.select(app.model.navigation.image_selection);
    image_list::render_image_list(
        f,
        layout_info.images_area,
        app.gallery.images(),
        &mut images_state,
        focus == Pane::Images,
        empty_message,
    );

    let selected_name = app
        .model
        .navigation
        .image_selection
        .and_then(|idx| app.gallery.images().get(idx))
        .map(|image| image.name.clone());

    if let Some(preview_area) = layout_info.preview_area {
        let generation = app.model.navigation.selection_generation;
        // A preview built for an older selection is not shown
        let state = match app.preview.as_mut() {
            Some((built_for, state)) if *built_for == generation => Some(state),
            _ => None,
        };
        image_list::render_preview(f, preview_area, selected_name.as_deref(), state);
    }

    if let Some(pagination_area) = layout_info.pagination_area {
        status_bar::render_pagination(f, pagination_area, page, total_pages);
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.ui.vim_mode,
        !app.gallery.path().is_empty(),
        total_pages > 1,
    );

    let info = app.gallery.view().map(|view| StatusInfo {
        page: view.page,
        total_pages: view.total_pages,
        image_count: view.image_count,
        folder_count: view.folders.len(),
        other_count: view.other_count,
        failed_count: app.gallery.failed_entries().len(),
        selected: selected_name.as_deref(),
        loading,
    });
    status_bar::render_status_bar(f, layout_info.status_area, info.as_ref());
}
