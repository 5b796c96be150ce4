//! Folder Hosts
//!
//! A host is whatever grants access to a folder hierarchy:
//! - local: the machine's own filesystem (tokio::fs)
//! - remote: a `photodeck serve` instance over HTTP
//! - memory: an in-memory tree with injectable latency and failures (tests)
//!
//! The gallery core only ever sees `FolderRef`/`EntryRef` values whose handle
//! is the host's associated `Handle` type. It never inspects the handle.

pub mod local;
pub mod memory;
pub mod remote;

use std::fmt::Debug;
use std::future::Future;
use thiserror::Error;

pub use local::LocalHost;
pub use memory::MemoryHost;
pub use remote::RemoteHost;

/// Kind of a directory entry as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

/// Handle to a folder the user has been granted access to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRef<H> {
    pub name: String,
    pub handle: H,
}

impl<H> FolderRef<H> {
    pub fn new(name: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }
}

/// A direct child of a folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRef<H> {
    pub name: String,
    pub kind: EntryKind,
    pub handle: H,
}

impl<H: Clone> EntryRef<H> {
    pub fn folder(name: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Folder,
            handle,
        }
    }

    pub fn file(name: impl Into<String>, handle: H) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            handle,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Image iff it is a file whose extension is on the allow-list
    pub fn is_image(&self) -> bool {
        self.kind == EntryKind::File && crate::logic::file::is_image_file(&self.name)
    }

    /// Reinterpret a folder entry as a navigable folder reference
    pub fn as_folder(&self) -> Option<FolderRef<H>> {
        if self.is_folder() {
            Some(FolderRef::new(self.name.clone(), self.handle.clone()))
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    /// The user dismissed the folder picker
    #[error("folder selection cancelled")]
    Cancelled,

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

impl HostError {
    /// Map an I/O error to the host taxonomy, naming what was being accessed
    pub fn from_io(err: std::io::Error, what: impl Into<String>) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => HostError::NotFound(what.into()),
            std::io::ErrorKind::PermissionDenied => HostError::PermissionDenied(what.into()),
            _ => HostError::Io(err),
        }
    }
}

/// Capability to pick, list, read and delete within a folder hierarchy
///
/// Every method may suspend on host I/O. None of them can be cancelled once
/// started; callers discard stale results instead.
pub trait FolderHost: Send + Sync + 'static {
    type Handle: Clone + Debug + PartialEq + Send + Sync + 'static;

    /// Resolve the user's folder choice. Blank input means the picker was dismissed
    /// and yields `HostError::Cancelled`.
    fn pick_folder(
        &self,
        request: &str,
    ) -> impl Future<Output = Result<FolderRef<Self::Handle>, HostError>> + Send;

    /// Confirm (or re-confirm) read access right before the folder is used
    fn confirm_read_permission(
        &self,
        folder: &FolderRef<Self::Handle>,
    ) -> impl Future<Output = Result<bool, HostError>> + Send;

    /// Direct children in the host's native enumeration order
    fn list_children(
        &self,
        folder: &FolderRef<Self::Handle>,
    ) -> impl Future<Output = Result<Vec<EntryRef<Self::Handle>>, HostError>> + Send;

    fn read_binary(
        &self,
        entry: &EntryRef<Self::Handle>,
    ) -> impl Future<Output = Result<Vec<u8>, HostError>> + Send;

    fn delete_file(
        &self,
        folder: &FolderRef<Self::Handle>,
        name: &str,
    ) -> impl Future<Output = Result<(), HostError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_classification() {
        let photo = EntryRef::file("IMG_0001.JPG", 1u32);
        let notes = EntryRef::file("notes.txt", 2u32);
        let album = EntryRef::folder("2024.jpg", 3u32);

        assert!(photo.is_image());
        assert!(!notes.is_image());
        // A folder is never an image, whatever its name says
        assert!(!album.is_image());
        assert!(album.is_folder());
    }

    #[test]
    fn test_as_folder() {
        let album = EntryRef::folder("Holidays", "root/Holidays".to_string());
        let folder = album.as_folder().expect("folder entry converts");
        assert_eq!(folder.name, "Holidays");
        assert_eq!(folder.handle, "root/Holidays");

        let photo = EntryRef::file("a.png", "root/a.png".to_string());
        assert!(photo.as_folder().is_none());
    }

    #[test]
    fn test_from_io_kinds() {
        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            HostError::from_io(not_found, "a.jpg"),
            HostError::NotFound(name) if name == "a.jpg"
        ));

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(
            HostError::from_io(denied, "dir"),
            HostError::PermissionDenied(_)
        ));

        let other = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        assert!(matches!(HostError::from_io(other, "x"), HostError::Io(_)));
    }
}
