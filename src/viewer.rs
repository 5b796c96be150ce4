//! Lightbox viewer
//!
//! A cursor over the current page's loaded images. The image list is shared
//! with the gallery, not copied. Each focus change hands out a `FocusTicket`;
//! display handles and metadata produced for a ticket are accepted only while
//! that ticket's generation is still the current focus.
//!
//! `D` is the display handle type (terminal graphics protocol state in the
//! binary). The viewer owns at most one and drops it when focus moves or the
//! viewer closes.

use std::sync::Arc;
use thiserror::Error;

use crate::gallery::LoadedImage;
use crate::logic::navigation::{step_back, step_forward};
use crate::metadata::CaptureMetadata;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("image {index} is out of range (page has {len} images)")]
    OutOfRange { index: usize, len: usize },

    #[error("viewer is closed")]
    Closed,
}

/// Work order for one focus: build a display handle and extract metadata
#[derive(Debug, Clone)]
pub struct FocusTicket {
    pub generation: u64,
    pub index: usize,
    pub image: LoadedImage,
}

#[derive(Debug)]
struct Cursor {
    images: Arc<[LoadedImage]>,
    page_generation: u64,
    current_index: usize,
}

#[derive(Debug)]
pub struct Viewer<D> {
    cursor: Option<Cursor>,
    focus_generation: u64,
    display: Option<D>,
    metadata: Option<CaptureMetadata>,
}

impl<D> Default for Viewer<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Viewer<D> {
    pub fn new() -> Self {
        Self {
            cursor: None,
            focus_generation: 0,
            display: None,
            metadata: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor.as_ref().map(|c| c.current_index)
    }

    pub fn len(&self) -> usize {
        self.cursor.as_ref().map(|c| c.images.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_image(&self) -> Option<&LoadedImage> {
        self.cursor
            .as_ref()
            .and_then(|c| c.images.get(c.current_index))
    }

    /// Page generation the viewer is bound to, while open
    pub fn page_generation(&self) -> Option<u64> {
        self.cursor.as_ref().map(|c| c.page_generation)
    }

    pub fn focus_generation(&self) -> u64 {
        self.focus_generation
    }

    /// Metadata of the focused image, once extracted
    pub fn metadata(&self) -> Option<&CaptureMetadata> {
        self.metadata.as_ref()
    }

    pub fn display(&self) -> Option<&D> {
        self.display.as_ref()
    }

    pub fn display_mut(&mut self) -> Option<&mut D> {
        self.display.as_mut()
    }

    /// Bind to a page's images and focus `index`
    pub fn open(
        &mut self,
        images: Arc<[LoadedImage]>,
        page_generation: u64,
        index: usize,
    ) -> Result<FocusTicket, ViewerError> {
        if index >= images.len() {
            return Err(ViewerError::OutOfRange {
                index,
                len: images.len(),
            });
        }

        self.cursor = Some(Cursor {
            images,
            page_generation,
            current_index: index,
        });
        self.focus(index)
    }

    pub fn next(&mut self) -> Option<FocusTicket> {
        let cursor = self.cursor.as_ref()?;
        let target = step_forward(cursor.current_index, cursor.images.len());
        if target == cursor.current_index {
            return None;
        }
        self.focus(target).ok()
    }

    pub fn prev(&mut self) -> Option<FocusTicket> {
        let cursor = self.cursor.as_ref()?;
        let target = step_back(cursor.current_index, cursor.images.len());
        if target == cursor.current_index {
            return None;
        }
        self.focus(target).ok()
    }

    pub fn jump_to(&mut self, index: usize) -> Result<FocusTicket, ViewerError> {
        let len = self.cursor.as_ref().ok_or(ViewerError::Closed)?.images.len();
        if index >= len {
            return Err(ViewerError::OutOfRange { index, len });
        }
        self.focus(index)
    }

    fn focus(&mut self, index: usize) -> Result<FocusTicket, ViewerError> {
        let cursor = self.cursor.as_mut().ok_or(ViewerError::Closed)?;
        let image = cursor
            .images
            .get(index)
            .cloned()
            .ok_or(ViewerError::OutOfRange {
                index,
                len: cursor.images.len(),
            })?;
        cursor.current_index = index;

        self.focus_generation += 1;
        self.display = None;
        self.metadata = None;

        Ok(FocusTicket {
            generation: self.focus_generation,
            index,
            image,
        })
    }

    /// Hide, releasing the display handle and forgetting cursor and metadata
    pub fn close(&mut self) {
        self.cursor = None;
        self.display = None;
        self.metadata = None;
        // Anything still in flight for the old focus becomes stale
        self.focus_generation += 1;
    }

    /// Close when bound to a page other than `current_page_generation`
    pub fn invalidate_page(&mut self, current_page_generation: u64) -> bool {
        match self.page_generation() {
            Some(bound) if bound != current_page_generation => {
                self.close();
                true
            }
            _ => false,
        }
    }

    /// Install a display handle built for `generation`; stale handles are dropped
    pub fn apply_display(&mut self, generation: u64, display: D) -> bool {
        if !self.is_open() || generation != self.focus_generation {
            return false;
        }
        self.display = Some(display);
        true
    }

    /// Install metadata extracted for `generation`; stale metadata is ignored
    pub fn apply_metadata(&mut self, generation: u64, metadata: CaptureMetadata) -> bool {
        if !self.is_open() || generation != self.focus_generation {
            return false;
        }
        self.metadata = Some(metadata);
        true
    }
}
