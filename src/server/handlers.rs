//! Route handlers
//!
//! Every handler resolves client paths against the sandbox root before it
//! touches the filesystem.

use std::path::{Path as FsPath, PathBuf};

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use super::error::ServerError;
use super::wire::{DeleteRequest, ListEntry, MessageBody, PhotoPage};
use super::ServerState;
use crate::logic::file::{content_type_for, is_web_image};
use crate::logic::pagination::{paginate, PAGE_SIZE};
use crate::logic::path::{decode_file_name, resolve_in_sandbox, split_query_path};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PhotosQuery {
    #[serde(default)]
    pub path: Option<String>,
    /// Kept as text so a malformed page falls back to 1 instead of rejecting
    #[serde(default)]
    pub page: Option<String>,
}

/// Parse a page parameter; missing, malformed or zero means page 1
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|p| p.trim().parse::<usize>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(1)
}

/// Direct children of a directory as (name, is_dir), in enumeration order
async fn read_entries(dir: &FsPath) -> Result<Vec<(String, bool)>, ServerError> {
    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| ServerError::from_io(e, "Folder not found"))?;

    let mut entries = Vec::new();
    while let Some(entry) = read_dir.next_entry().await? {
        let is_dir = entry.file_type().await?.is_dir();
        entries.push((entry.file_name().to_string_lossy().into_owned(), is_dir));
    }
    Ok(entries)
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ListEntry>>, ServerError> {
    let segments = split_query_path(query.path.as_deref().unwrap_or(""));
    let dir = resolve_in_sandbox(&state.root, &segments)?;

    let entries = read_entries(&dir)
        .await?
        .into_iter()
        .map(|(name, is_dir)| ListEntry {
            name,
            entry_type: (if is_dir { ListEntry::FOLDER } else { ListEntry::FILE }).to_string(),
        })
        .collect();

    Ok(Json(entries))
}

pub async fn photos(
    State(state): State<ServerState>,
    Query(query): Query<PhotosQuery>,
) -> Result<Json<PhotoPage>, ServerError> {
    let segments = split_query_path(query.path.as_deref().unwrap_or(""));
    let dir = resolve_in_sandbox(&state.root, &segments)?;
    let requested = parse_page(query.page.as_deref());

    let images: Vec<String> = read_entries(&dir)
        .await?
        .into_iter()
        .filter(|(name, is_dir)| !is_dir && is_web_image(name))
        .map(|(name, _)| name)
        .collect();

    let slice = paginate(&images, requested, PAGE_SIZE);
    Ok(Json(PhotoPage {
        photos: slice.items.to_vec(),
        page: slice.page,
        total_pages: slice.total_pages,
        total_photos: images.len(),
        folder_path: segments,
    }))
}

pub async fn delete_file(
    State(state): State<ServerState>,
    body: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, ServerError> {
    let invalid = || ServerError::BadRequest("Invalid parameters".to_string());

    let Json(request) = body.map_err(|e| {
        log::debug!("Rejected delete body: {}", e);
        invalid()
    })?;
    let folder = request.path.ok_or_else(invalid)?;
    let raw_name = request.file_name.ok_or_else(invalid)?;
    let name = decode_file_name(&raw_name).ok_or_else(invalid)?;

    let folder: Vec<String> = folder.iter().map(|p| p.trim().to_string()).collect();
    let folder_dir = resolve_in_sandbox(&state.root, &folder)?;
    let target: PathBuf = resolve_in_sandbox(&folder_dir, &[name.as_str()])?;
    if target == folder_dir || !target.starts_with(state.root.as_path()) {
        return Err(invalid());
    }

    log::info!("Deleting file at: {}", target.display());
    tokio::fs::remove_file(&target)
        .await
        .map_err(|e| ServerError::from_io(e, "File not found"))?;

    Ok(Json(MessageBody {
        message: "File deleted".to_string(),
    }))
}

pub async fn files(
    State(state): State<ServerState>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    let segments = split_query_path(&path);
    let target = resolve_in_sandbox(&state.root, &segments)?;

    let metadata = tokio::fs::metadata(&target)
        .await
        .map_err(|e| ServerError::from_io(e, "File not found"))?;
    if !metadata.is_file() {
        return Err(ServerError::NotFound("File not found".to_string()));
    }

    let bytes = tokio::fs::read(&target)
        .await
        .map_err(|e| ServerError::from_io(e, "File not found"))?;
    let name = segments.last().map(String::as_str).unwrap_or("");

    Ok(([(header::CONTENT_TYPE, content_type_for(name))], bytes))
}
