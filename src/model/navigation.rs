//! Navigation Model
//!
//! The breadcrumb path from the picked root to the current folder, plus the
//! pane focus and selections of the gallery screen.

use thiserror::Error;

use super::types::Pane;
use crate::host::FolderRef;

/// One breadcrumb: a display name and the folder it opens
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSegment<H> {
    pub name: String,
    pub folder: FolderRef<H>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathStackError {
    #[error("no root folder has been picked")]
    Empty,

    #[error("breadcrumb {index} is out of range (path has {len} levels)")]
    OutOfBounds { index: usize, len: usize },
}

/// Ordered trail from root (index 0) to the current folder (last)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathStack<H> {
    segments: Vec<PathSegment<H>>,
}

impl<H> Default for PathStack<H> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<H: Clone> PathStack<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack holding only `root`
    pub fn rooted(root_name: impl Into<String>, root: FolderRef<H>) -> Self {
        let mut stack = Self::new();
        stack.reset(root_name, root);
        stack
    }

    /// Clear the trail and make `root` its sole element
    pub fn reset(&mut self, root_name: impl Into<String>, root: FolderRef<H>) {
        self.segments.clear();
        self.segments.push(PathSegment {
            name: root_name.into(),
            folder: root,
        });
    }

    /// Append a child folder; rejected while no root is set
    pub fn push(&mut self, name: impl Into<String>, folder: FolderRef<H>) -> Result<(), PathStackError> {
        if self.segments.is_empty() {
            return Err(PathStackError::Empty);
        }
        self.segments.push(PathSegment {
            name: name.into(),
            folder,
        });
        Ok(())
    }

    /// Keep elements `0..=index`; an out-of-range index leaves the stack unchanged
    pub fn truncate_to(&mut self, index: usize) -> Result<(), PathStackError> {
        if index >= self.segments.len() {
            return Err(PathStackError::OutOfBounds {
                index,
                len: self.segments.len(),
            });
        }
        self.segments.truncate(index + 1);
        Ok(())
    }

    pub fn current(&self) -> Option<&FolderRef<H>> {
        self.segments.last().map(|segment| &segment.folder)
    }

    pub fn current_name(&self) -> Option<&str> {
        self.segments.last().map(|segment| segment.name.trim())
    }

    /// Breadcrumb names, root first, whitespace-trimmed
    pub fn names_from_root(&self) -> Vec<String> {
        self.segments
            .iter()
            .map(|segment| segment.name.trim().to_string())
            .collect()
    }

    pub fn segments(&self) -> &[PathSegment<H>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Focus and selection state of the gallery screen
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Which pane receives movement keys
    pub focus: Pane,

    /// Selected subfolder in the folders pane
    pub folder_selection: Option<usize>,

    /// Selected image on the current page
    pub image_selection: Option<usize>,

    /// Bumped whenever the selected image changes, so stale previews can be dropped
    pub selection_generation: u64,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            focus: Pane::Images,
            folder_selection: None,
            image_selection: None,
            selection_generation: 0,
        }
    }

    /// Set the image selection, bumping the generation when it actually changes
    pub fn select_image(&mut self, selection: Option<usize>) -> bool {
        if self.image_selection == selection {
            return false;
        }
        self.image_selection = selection;
        self.selection_generation += 1;
        true
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Folders => Pane::Images,
            Pane::Images => Pane::Folders,
        };
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(name: &str) -> FolderRef<String> {
        FolderRef::new(name, format!("/{}", name))
    }

    #[test]
    fn test_push_requires_root() {
        let mut stack: PathStack<String> = PathStack::new();
        assert_eq!(stack.push("a", folder("a")), Err(PathStackError::Empty));
        assert!(stack.is_empty());
        assert!(stack.current().is_none());
    }

    #[test]
    fn test_reset_replaces_everything() {
        let mut stack = PathStack::rooted("root", folder("root"));
        stack.push("a", folder("a")).unwrap();
        stack.reset("other", folder("other"));
        assert_eq!(stack.names_from_root(), vec!["other"]);
    }

    #[test]
    fn test_truncate_out_of_bounds_leaves_stack() {
        let mut stack = PathStack::rooted("root", folder("root"));
        stack.push("a", folder("a")).unwrap();

        assert_eq!(
            stack.truncate_to(2),
            Err(PathStackError::OutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_names_are_trimmed() {
        let mut stack = PathStack::rooted("  Photos ", folder("root"));
        stack.push("2024\t", folder("2024")).unwrap();
        assert_eq!(stack.names_from_root(), vec!["Photos", "2024"]);
        assert_eq!(stack.current_name(), Some("2024"));
    }

    #[test]
    fn test_select_image_bumps_generation_on_change_only() {
        let mut nav = NavigationModel::new();
        assert!(nav.select_image(Some(0)));
        assert_eq!(nav.selection_generation, 1);
        assert!(!nav.select_image(Some(0)));
        assert_eq!(nav.selection_generation, 1);
        assert!(nav.select_image(None));
        assert_eq!(nav.selection_generation, 2);
    }

    #[test]
    fn test_toggle_focus() {
        let mut nav = NavigationModel::new();
        assert_eq!(nav.focus, Pane::Images);
        nav.toggle_focus();
        assert_eq!(nav.focus, Pane::Folders);
        nav.toggle_focus();
        assert_eq!(nav.focus, Pane::Images);
    }
}
