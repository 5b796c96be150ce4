//! Message types for background work
//!
//! Every spawned task reports back through one unbounded channel. The run loop
//! drains it each frame and hands messages to `handlers::events`, so all state
//! changes still happen on the loop task.
//!
//! Message sources:
//! - Root picking (host folder picker)
//! - Page renders (listing + loading bytes)
//! - Display builds (decode + terminal protocol) for the inline preview and lightbox
//! - Metadata extraction for the lightbox
//! - Deletes

use photodeck::gallery::{GalleryError, PickTicket, RenderOutcome};
use photodeck::host::FolderRef;
use photodeck::metadata::CaptureMetadata;

/// Terminal image state for one image
pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        /// Original pixel dimensions
        dimensions: (u32, u32),
    },
    Failed {
        reason: String,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { dimensions, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("dimensions", dimensions)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { reason } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("reason", reason)
                .finish(),
        }
    }
}

/// Where a built display handle goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTarget {
    /// Inline preview of the selected image; generation is the selection generation
    Preview,
    /// Lightbox; generation is the viewer focus generation
    Viewer,
}

#[derive(Debug)]
pub enum AppMessage<H> {
    RootPicked {
        ticket: PickTicket,
        result: Result<FolderRef<H>, GalleryError>,
    },

    Rendered(RenderOutcome<H>),

    DisplayBuilt {
        target: DisplayTarget,
        generation: u64,
        state: ImagePreviewState,
    },

    MetadataExtracted {
        generation: u64,
        metadata: CaptureMetadata,
    },

    Deleted {
        name: String,
        result: Result<(), GalleryError>,
    },
}
