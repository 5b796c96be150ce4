//! Local filesystem host
//!
//! Handles are absolute paths. Permission is probed by opening the directory,
//! which is what a listing would do moments later anyway.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{EntryKind, EntryRef, FolderHost, FolderRef, HostError};
use crate::logic;

#[derive(Debug, Clone, Default)]
pub struct LocalHost;

impl LocalHost {
    pub fn new() -> Self {
        Self
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(request: &str) -> PathBuf {
    if request == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = request.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(request)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl FolderHost for LocalHost {
    type Handle = PathBuf;

    async fn pick_folder(&self, request: &str) -> Result<FolderRef<PathBuf>, HostError> {
        let request = request.trim();
        if request.is_empty() {
            return Err(HostError::Cancelled);
        }

        let path = tokio::fs::canonicalize(expand_home(request))
            .await
            .map_err(|e| HostError::from_io(e, request))?;

        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| HostError::from_io(e, request))?;
        if !metadata.is_dir() {
            return Err(HostError::NotFound(format!("{} is not a folder", path.display())));
        }

        log::debug!("Picked local root {:?}", path);
        Ok(FolderRef::new(display_name(&path), path))
    }

    async fn confirm_read_permission(&self, folder: &FolderRef<PathBuf>) -> Result<bool, HostError> {
        match tokio::fs::read_dir(&folder.handle).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Ok(false),
            Err(e) => Err(HostError::from_io(e, folder.handle.display().to_string())),
        }
    }

    async fn list_children(
        &self,
        folder: &FolderRef<PathBuf>,
    ) -> Result<Vec<EntryRef<PathBuf>>, HostError> {
        let what = folder.handle.display().to_string();
        let mut dir = tokio::fs::read_dir(&folder.handle)
            .await
            .map_err(|e| HostError::from_io(e, what.clone()))?;

        let mut entries = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| HostError::from_io(e, what.clone()))?
        {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            // file_type() does not follow symlinks; a linked folder should still be a folder
            let is_dir = match entry.file_type().await {
                Ok(ft) if ft.is_symlink() => tokio::fs::metadata(&path)
                    .await
                    .map(|m| m.is_dir())
                    .unwrap_or(false),
                Ok(ft) => ft.is_dir(),
                Err(e) => {
                    log::warn!("Skipping {:?}: {}", path, e);
                    continue;
                }
            };

            let kind = if is_dir { EntryKind::Folder } else { EntryKind::File };
            entries.push(EntryRef { name, kind, handle: path });
        }

        Ok(entries)
    }

    async fn read_binary(&self, entry: &EntryRef<PathBuf>) -> Result<Vec<u8>, HostError> {
        tokio::fs::read(&entry.handle)
            .await
            .map_err(|e| HostError::from_io(e, entry.name.clone()))
    }

    async fn delete_file(&self, folder: &FolderRef<PathBuf>, name: &str) -> Result<(), HostError> {
        let target = logic::path::resolve_in_sandbox(&folder.handle, &[name])
            .map_err(|e| HostError::PermissionDenied(e.to_string()))?;
        if target.parent() != Some(folder.handle.as_path()) {
            return Err(HostError::PermissionDenied(format!(
                "{} is not a file in {}",
                name, folder.name
            )));
        }

        log::info!("Deleting {:?}", target);
        tokio::fs::remove_file(&target)
            .await
            .map_err(|e| HostError::from_io(e, name.to_string()))
    }
}
