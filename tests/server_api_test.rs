//! HTTP API tests against a real server on an ephemeral port
//!
//! Each test serves its own temp directory and talks to it with reqwest,
//! including through the remote folder host.

use std::fs;
use std::path::Path;

use photodeck::gallery::{GalleryController, NavigationEvent};
use photodeck::host::remote::RemoteHost;
use photodeck::host::FolderHost;
use photodeck::server::wire::{ErrorBody, ListEntry, MessageBody, PhotoPage};
use reqwest::StatusCode;
use serde_json::json;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Serve `root` in the background, returning the base URL
async fn start_server(root: &Path) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let root = root.to_path_buf();
    tokio::spawn(async move {
        let _ = photodeck::server::serve_listener(listener, root).await;
    });
    format!("http://{}", addr)
}

/// public/: a.jpg, b.png, notes.txt, shot.cr3, trips/ (c.jpg, 2024/)
fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("a.jpg"), b"jpeg-a").unwrap();
    fs::write(root.join("b.png"), b"png-b").unwrap();
    fs::write(root.join("notes.txt"), b"text").unwrap();
    fs::write(root.join("shot.cr3"), b"raw").unwrap();
    fs::create_dir_all(root.join("trips").join("2024")).unwrap();
    fs::write(root.join("trips").join("c.jpg"), b"jpeg-c").unwrap();
    dir
}

/// Test: Listing returns direct children typed as folder or file
#[tokio::test]
async fn test_list_root() {
    let dir = fixture();
    let base = start_server(dir.path()).await;

    let mut entries: Vec<ListEntry> = reqwest::get(format!("{}/api/list", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let summary: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.entry_type.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("a.jpg", "file"),
            ("b.png", "file"),
            ("notes.txt", "file"),
            ("shot.cr3", "file"),
            ("trips", "folder"),
        ]
    );
}

/// Test: A missing folder is a 404 with a JSON error
#[tokio::test]
async fn test_list_missing_folder() {
    let dir = fixture();
    let base = start_server(dir.path()).await;

    let response = reqwest::get(format!("{}/api/list?path=nope", base))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "Folder not found");
}

/// Test: Photos lists web images only, with paging fields
#[tokio::test]
async fn test_photos_page() {
    let dir = fixture();
    let base = start_server(dir.path()).await;

    let page: PhotoPage = reqwest::get(format!("{}/api/photos?page=abc", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let mut photos = page.photos.clone();
    photos.sort();
    assert_eq!(photos, vec!["a.jpg", "b.png"]);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.total_photos, 2);
    assert!(page.folder_path.is_empty());

    let nested: PhotoPage = reqwest::get(format!("{}/api/photos?path=trips&page=4", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(nested.photos, vec!["c.jpg"]);
    assert_eq!(nested.page, 1);
    assert_eq!(nested.folder_path, vec!["trips"]);
}

/// Test: Paths that climb out of the root are rejected with 400
#[tokio::test]
async fn test_traversal_rejected() {
    let dir = fixture();
    let base = start_server(dir.path()).await;

    for url in [
        format!("{}/api/list?path=../", base),
        format!("{}/api/photos?path=trips/../../etc", base),
    ] {
        let response = reqwest::get(&url).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", url);
        let body: ErrorBody = response.json().await.unwrap();
        assert!(!body.error.is_empty());
    }

    let client = reqwest::Client::new();
    let response = client
        .delete(format!("{}/api/delete-file", base))
        .json(&json!({ "path": [".."], "fileName": "secret.jpg" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Test: Delete decodes and trims the file name
#[tokio::test]
async fn test_delete_encoded_name() {
    let dir = fixture();
    fs::write(dir.path().join("trips").join("my photo.jpg"), b"x").unwrap();
    let base = start_server(dir.path()).await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{}/api/delete-file", base))
        .json(&json!({ "path": ["trips"], "fileName": "my%20photo.jpg " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: MessageBody = response.json().await.unwrap();
    assert_eq!(body.message, "File deleted");
    assert!(!dir.path().join("trips").join("my photo.jpg").exists());

    // Second delete: already gone
    let response = client
        .delete(format!("{}/api/delete-file", base))
        .json(&json!({ "path": ["trips"], "fileName": "my%20photo.jpg" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "File not found");
}

/// Test: Missing parameters and malformed bodies are 400 "Invalid parameters"
#[tokio::test]
async fn test_delete_invalid_parameters() {
    let dir = fixture();
    let base = start_server(dir.path()).await;
    let client = reqwest::Client::new();

    let missing = client
        .delete(format!("{}/api/delete-file", base))
        .json(&json!({ "path": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = missing.json().await.unwrap();
    assert_eq!(body.error, "Invalid parameters");

    let malformed = client
        .delete(format!("{}/api/delete-file", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

    assert!(dir.path().join("a.jpg").exists());
}

/// Test: Raw files are served with a content type; folders are not files
#[tokio::test]
async fn test_files_route() {
    let dir = fixture();
    let base = start_server(dir.path()).await;

    let response = reqwest::get(format!("{}/files/trips/c.jpg", base))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "image/jpeg"
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"jpeg-c");

    let folder = reqwest::get(format!("{}/files/trips", base)).await.unwrap();
    assert_eq!(folder.status(), StatusCode::NOT_FOUND);
}

/// Test: The gallery browses and deletes through the remote host
#[tokio::test]
async fn test_remote_host_gallery() {
    let dir = fixture();
    let base = start_server(dir.path()).await;
    let host = RemoteHost::new(base, "public");

    let root = host.pick_folder("/").await.unwrap();
    assert_eq!(root.name, "public");

    let mut gallery = GalleryController::new();
    gallery
        .dispatch(&host, NavigationEvent::PickRoot(root))
        .await
        .unwrap();

    let view = gallery.view().unwrap();
    assert_eq!(view.folders.len(), 1);
    // Raw files are images to the gallery even though /api/photos skips them
    assert_eq!(view.image_count, 3);
    assert_eq!(view.other_count, 1);

    let trips = view.folders[0].clone();
    gallery
        .dispatch(&host, NavigationEvent::EnterFolder(trips.clone()))
        .await
        .unwrap();
    assert_eq!(gallery.images().len(), 1);
    assert_eq!(gallery.images()[0].bytes.as_ref(), b"jpeg-c");
    assert_eq!(gallery.path().names_from_root(), vec!["public", "trips"]);

    host.delete_file(&trips, "c.jpg").await.unwrap();
    gallery
        .dispatch(&host, NavigationEvent::Refresh)
        .await
        .unwrap();
    assert!(gallery.images().is_empty());
    assert!(!dir.path().join("trips").join("c.jpg").exists());
}
