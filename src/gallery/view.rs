//! Pure view computation: listing + path + page -> what the gallery shows

use super::lister::Listing;
use crate::host::{EntryRef, FolderRef};
use crate::logic::formatting::format_folder_title;
use crate::logic::pagination::{paginate, PAGE_SIZE};
use crate::model::PathStack;

/// Everything the gallery screen needs for one folder page, minus image bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState<H> {
    pub breadcrumb: Vec<String>,
    pub title: String,
    pub folders: Vec<FolderRef<H>>,
    /// Entries of the visible page only
    pub page_entries: Vec<EntryRef<H>>,
    pub page: usize,
    pub total_pages: usize,
    pub image_count: usize,
    pub other_count: usize,
}

impl<H> ViewState<H> {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.image_count == 0
    }
}

/// Classify, paginate and title one listing. Pure; performs no I/O.
pub fn compute_view_state<H: Clone>(
    path: &PathStack<H>,
    listing: &Listing<H>,
    page: usize,
) -> ViewState<H> {
    let slice = paginate(&listing.images, page, PAGE_SIZE);
    let breadcrumb = path.names_from_root();
    let name = breadcrumb.last().map(String::as_str).unwrap_or("");

    ViewState {
        title: format_folder_title(name, listing.folders.len(), listing.images.len()),
        breadcrumb,
        folders: listing.folders.clone(),
        page_entries: slice.items.to_vec(),
        page: slice.page,
        total_pages: slice.total_pages,
        image_count: listing.images.len(),
        other_count: listing.other_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(folders: usize, images: usize, other: usize) -> Listing<usize> {
        let mut entries = Vec::new();
        for i in 0..folders {
            entries.push(EntryRef::folder(format!("folder{}", i), i));
        }
        for i in 0..images {
            entries.push(EntryRef::file(format!("img{:03}.jpg", i), 1000 + i));
        }
        for i in 0..other {
            entries.push(EntryRef::file(format!("doc{}.txt", i), 5000 + i));
        }
        Listing::classify(entries)
    }

    fn root() -> PathStack<usize> {
        PathStack::rooted("Photos", FolderRef::new("Photos", 0))
    }

    #[test]
    fn test_first_page_of_large_folder() {
        let view = compute_view_state(&root(), &listing(3, 120, 2), 1);
        assert_eq!(view.folders.len(), 3);
        assert_eq!(view.page_entries.len(), 50);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.image_count, 120);
        assert_eq!(view.other_count, 2);
        assert_eq!(view.title, "Photos  items : 123");
    }

    #[test]
    fn test_last_page_and_clamping() {
        let view = compute_view_state(&root(), &listing(3, 120, 0), 3);
        assert_eq!(view.page_entries.len(), 20);
        assert_eq!(view.page_entries[0].name, "img100.jpg");

        let clamped = compute_view_state(&root(), &listing(3, 120, 0), 7);
        assert_eq!(clamped.page, 3);
        assert_eq!(clamped.page_entries, view.page_entries);
    }

    #[test]
    fn test_empty_folder() {
        let view = compute_view_state(&root(), &listing(0, 0, 4), 1);
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.breadcrumb, vec!["Photos"]);
    }
}
