use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use photodeck::gallery::LoadedImage;
use photodeck::metadata::extract_capture_metadata;

use crate::messages::{AppMessage, DisplayTarget, ImagePreviewState};

/// Decoded images above this size are not previewed
const MAX_PREVIEW_BYTES: usize = 40 * 1024 * 1024;

/// Decode `bytes` and build a resizable terminal protocol for them
///
/// Runs on the blocking pool: decoding and downscaling are CPU bound.
async fn build_display(bytes: Arc<[u8]>, picker: ratatui_image::picker::Picker) -> ImagePreviewState {
    if bytes.len() > MAX_PREVIEW_BYTES {
        return ImagePreviewState::Failed {
            reason: "Too large to preview".to_string(),
        };
    }

    let result = tokio::task::spawn_blocking(move || {
        let img = image::load_from_memory(&bytes).map_err(|e| e.to_string())?;
        let dimensions = (img.width(), img.height());

        // Pre-downscale to about a large terminal's worth of pixels
        let font_size = picker.font_size();
        let max_width = 200 * font_size.0 as u32 * 5 / 4;
        let max_height = 60 * font_size.1 as u32 * 5 / 4;

        let processed = if img.width() > max_width || img.height() > max_height {
            let scale_factor = (img.width() as f32 / max_width as f32)
                .max(img.height() as f32 / max_height as f32);

            let filter = if scale_factor > 4.0 {
                image::imageops::FilterType::Triangle
            } else if scale_factor > 2.0 {
                image::imageops::FilterType::CatmullRom
            } else {
                image::imageops::FilterType::Lanczos3
            };
            log::debug!(
                "Pre-downscaling {}x{} by {:.2}x with {:?}",
                img.width(),
                img.height(),
                scale_factor,
                filter
            );
            img.resize(max_width, max_height, filter)
        } else {
            img
        };

        let protocol = picker.new_resize_protocol(processed);
        Ok::<_, String>((protocol, dimensions))
    })
    .await;

    match result {
        Ok(Ok((protocol, dimensions))) => ImagePreviewState::Ready {
            protocol,
            dimensions,
        },
        Ok(Err(reason)) => ImagePreviewState::Failed {
            reason: format!("Cannot decode: {}", reason),
        },
        Err(e) => ImagePreviewState::Failed {
            reason: format!("Task error: {}", e),
        },
    }
}

pub fn spawn_display_build<H: Send + 'static>(
    picker: ratatui_image::picker::Picker,
    image: LoadedImage,
    target: DisplayTarget,
    generation: u64,
    tx: UnboundedSender<AppMessage<H>>,
) {
    tokio::spawn(async move {
        let start = std::time::Instant::now();
        let state = build_display(image.bytes.clone(), picker).await;
        log::debug!(
            "Display for {} ({:?}) built in {:.2}s",
            image.name,
            target,
            start.elapsed().as_secs_f32()
        );
        let _ = tx.send(AppMessage::DisplayBuilt {
            target,
            generation,
            state,
        });
    });
}

pub fn spawn_metadata<H: Send + 'static>(
    image: LoadedImage,
    generation: u64,
    tx: UnboundedSender<AppMessage<H>>,
) {
    tokio::spawn(async move {
        let metadata = extract_capture_metadata(image.bytes.clone()).await;
        let _ = tx.send(AppMessage::MetadataExtracted {
            generation,
            metadata,
        });
    });
}
