//! Navigation orchestration methods
//!
//! Methods for traversing the folder hierarchy:
//! - Picking a root and entering folders
//! - Going back up via the breadcrumb
//! - Changing page and refreshing
//! - Moving selection within the focused pane

use photodeck::gallery::{GalleryError, NavigationEvent};
use photodeck::host::FolderHost;
use photodeck::logic;
use photodeck::model::{PagePrompt, Pane};

use crate::{services, App};

impl<F: FolderHost> App<F> {
    /// Ask the host for a root folder; the first page renders once it resolves
    pub(crate) fn pick_root(&mut self, request: String) {
        self.root_hint = request.clone();
        let ticket = self.gallery.begin_pick();
        services::spawn_pick_root(self.host.clone(), request, ticket, self.msg_tx.clone());
    }

    /// Issue a render for `event`. Navigation errors become toasts.
    pub(crate) fn navigate(&mut self, event: NavigationEvent<F::Handle>) {
        match self.gallery.request(event) {
            Ok(request) => {
                log::debug!("Issuing render {} (page {})", request.generation, request.page);
                services::spawn_render(self.host.clone(), request, self.msg_tx.clone());
            }
            Err(e) => self.report_error(&e),
        }
    }

    pub(crate) fn report_error(&mut self, error: &GalleryError) {
        log::warn!("{}", error);
        if let Some(message) = logic::errors::toast_message(error) {
            self.model.show_toast(message);
        }
    }

    pub(crate) fn enter_selected_folder(&mut self) {
        let folder = self.model.navigation.folder_selection.and_then(|idx| {
            self.gallery
                .view()
                .and_then(|view| view.folders.get(idx).cloned())
        });

        if let Some(folder) = folder {
            self.navigate(NavigationEvent::EnterFolder(folder));
        }
    }

    /// Back to the parent folder; no-op at the root
    pub(crate) fn go_up(&mut self) {
        let depth = self.gallery.path().len();
        if depth > 1 {
            self.navigate(NavigationEvent::JumpToBreadcrumb(depth - 2));
        }
    }

    pub(crate) fn jump_to_breadcrumb(&mut self, index: usize) {
        self.navigate(NavigationEvent::JumpToBreadcrumb(index));
    }

    pub(crate) fn next_page(&mut self) {
        let Some(view) = self.gallery.view() else {
            return;
        };
        if view.page < view.total_pages {
            let page = view.page + 1;
            self.navigate(NavigationEvent::ChangePage(page));
        }
    }

    pub(crate) fn prev_page(&mut self) {
        let Some(view) = self.gallery.view() else {
            return;
        };
        if view.page > 1 {
            let page = view.page - 1;
            self.navigate(NavigationEvent::ChangePage(page));
        }
    }

    /// Ask for a page number; only useful with more than one page
    pub(crate) fn open_page_prompt(&mut self) {
        if let Some(view) = self.gallery.view() {
            if view.total_pages > 1 {
                self.model.ui.page_prompt = Some(PagePrompt::new(view.total_pages));
            }
        }
    }

    pub(crate) fn submit_page_prompt(&mut self) {
        let Some(prompt) = self.model.ui.page_prompt.take() else {
            return;
        };
        match prompt.target() {
            Some(page) if page != self.gallery.page() => {
                self.navigate(NavigationEvent::ChangePage(page));
            }
            Some(_) => {}
            None if prompt.input.is_empty() => {}
            None => self.model.show_toast(format!(
                "No page {} (1-{})",
                prompt.input, prompt.total_pages
            )),
        }
    }

    pub(crate) fn refresh(&mut self) {
        self.navigate(NavigationEvent::Refresh);
    }

    fn folder_count(&self) -> usize {
        self.gallery.view().map(|v| v.folders.len()).unwrap_or(0)
    }

    fn image_count(&self) -> usize {
        self.gallery.images().len()
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.model.navigation.toggle_focus();
    }

    pub(crate) fn next_item(&mut self) {
        match self.model.navigation.focus {
            Pane::Folders => {
                let count = self.folder_count();
                self.model.navigation.folder_selection =
                    logic::navigation::next_selection(self.model.navigation.folder_selection, count);
            }
            Pane::Images => {
                let count = self.image_count();
                let next =
                    logic::navigation::next_selection(self.model.navigation.image_selection, count);
                self.model.navigation.select_image(next);
            }
        }
    }

    pub(crate) fn previous_item(&mut self) {
        match self.model.navigation.focus {
            Pane::Folders => {
                let count = self.folder_count();
                self.model.navigation.folder_selection =
                    logic::navigation::prev_selection(self.model.navigation.folder_selection, count);
            }
            Pane::Images => {
                let count = self.image_count();
                let prev =
                    logic::navigation::prev_selection(self.model.navigation.image_selection, count);
                self.model.navigation.select_image(prev);
            }
        }
    }

    pub(crate) fn jump_to_first(&mut self) {
        match self.model.navigation.focus {
            Pane::Folders => {
                if self.folder_count() > 0 {
                    self.model.navigation.folder_selection = Some(0);
                }
            }
            Pane::Images => {
                if self.image_count() > 0 {
                    self.model.navigation.select_image(Some(0));
                }
            }
        }
    }

    pub(crate) fn jump_to_last(&mut self) {
        match self.model.navigation.focus {
            Pane::Folders => {
                let count = self.folder_count();
                if count > 0 {
                    self.model.navigation.folder_selection = Some(count - 1);
                }
            }
            Pane::Images => {
                let count = self.image_count();
                if count > 0 {
                    self.model.navigation.select_image(Some(count - 1));
                }
            }
        }
    }

    /// Enter on the folders pane opens the folder, on the images pane the lightbox
    pub(crate) fn activate_selection(&mut self) {
        match self.model.navigation.focus {
            Pane::Folders => self.enter_selected_folder(),
            Pane::Images => self.open_viewer(),
        }
    }
}
