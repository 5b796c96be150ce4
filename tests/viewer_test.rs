//! Lightbox scenarios: focus movement, stale work and page changes

use std::sync::Arc;

use photodeck::gallery::{GalleryController, LoadedImage, NavigationEvent};
use photodeck::host::{FolderRef, MemoryHost};
use photodeck::metadata::{extract_capture_metadata, CaptureMetadata};
use photodeck::viewer::{Viewer, ViewerError};

fn five_images() -> Arc<[LoadedImage]> {
    (1..=5)
        .map(|i| LoadedImage::new(format!("p{}.jpg", i), vec![i as u8; 8]))
        .collect::<Vec<_>>()
        .into()
}

/// Test: Open on the third of five, step to the ends and back
#[test]
fn test_five_image_walk() {
    let mut viewer: Viewer<String> = Viewer::new();
    let ticket = viewer.open(five_images(), 1, 2).unwrap();
    assert_eq!(ticket.index, 2);
    assert_eq!(ticket.image.name, "p3.jpg");

    assert_eq!(viewer.next().unwrap().index, 3);
    assert_eq!(viewer.next().unwrap().index, 4);
    // Already on the last image
    assert!(viewer.next().is_none());
    assert_eq!(viewer.current_index(), Some(4));

    viewer.jump_to(0).unwrap();
    assert!(viewer.prev().is_none());
    assert_eq!(viewer.current_image().unwrap().name, "p1.jpg");

    assert_eq!(
        viewer.jump_to(5).unwrap_err(),
        ViewerError::OutOfRange { index: 5, len: 5 }
    );
    assert_eq!(viewer.current_index(), Some(0));
}

/// Test: A display built for an earlier focus is dropped
#[test]
fn test_stale_display_is_dropped() {
    let mut viewer: Viewer<String> = Viewer::new();
    let first = viewer.open(five_images(), 1, 0).unwrap();
    let second = viewer.next().unwrap();

    assert!(!viewer.apply_display(first.generation, "p1 display".to_string()));
    assert!(viewer.display().is_none());

    assert!(viewer.apply_display(second.generation, "p2 display".to_string()));
    assert_eq!(viewer.display().map(String::as_str), Some("p2 display"));

    // Moving on releases the previous display
    viewer.next().unwrap();
    assert!(viewer.display().is_none());
}

/// Test: Work still in flight when the viewer closes is ignored
#[test]
fn test_close_invalidates_in_flight_work() {
    let mut viewer: Viewer<String> = Viewer::new();
    let ticket = viewer.open(five_images(), 1, 1).unwrap();
    viewer.close();

    assert!(!viewer.is_open());
    assert!(!viewer.apply_display(ticket.generation, "late".to_string()));
    assert!(!viewer.apply_metadata(ticket.generation, CaptureMetadata::unknown()));
    assert!(viewer.next().is_none());
}

/// Test: Metadata extracted from images without EXIF reads as unknown
#[tokio::test]
async fn test_metadata_for_plain_bytes() {
    let mut viewer: Viewer<String> = Viewer::new();
    let ticket = viewer.open(five_images(), 1, 0).unwrap();

    let metadata = extract_capture_metadata(ticket.image.bytes.clone()).await;
    assert!(viewer.apply_metadata(ticket.generation, metadata));

    let lines = viewer.metadata().unwrap().lines();
    assert_eq!(
        lines,
        vec![
            "Camera Model: Unknown Model",
            "F-stop: N/A",
            "Exposure: N/A",
            "ISO: N/A",
            "Focal Length: N/A",
        ]
    );
}

/// Test: The viewer closes once the gallery commits a different page
#[tokio::test]
async fn test_page_change_closes_viewer() {
    let host = MemoryHost::new("root");
    for i in 0..60 {
        host.add_file("root", &format!("{:02}.jpg", i), vec![i as u8]);
    }
    let mut gallery = GalleryController::new();
    gallery
        .dispatch(&host, NavigationEvent::PickRoot(FolderRef::new("root", "root".to_string())))
        .await
        .unwrap();

    let mut viewer: Viewer<()> = Viewer::new();
    viewer
        .open(gallery.images().clone(), gallery.page_generation(), 49)
        .unwrap();
    assert!(!viewer.invalidate_page(gallery.page_generation()));

    gallery
        .dispatch(&host, NavigationEvent::ChangePage(2))
        .await
        .unwrap();
    assert!(viewer.invalidate_page(gallery.page_generation()));
    assert!(!viewer.is_open());
    assert_eq!(gallery.images().len(), 10);
}
