//! In-memory host
//!
//! A folder tree kept in a map, keyed by slash-joined paths ("photos/2024").
//! Children keep insertion order, which plays the role of the host's native
//! enumeration order. Latency, permission denial and unreadable files can be
//! injected to exercise the gallery's ordering and failure rules.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use super::{EntryKind, EntryRef, FolderHost, FolderRef, HostError};

#[derive(Debug, Clone)]
enum MemoryNode {
    Folder,
    File(Vec<u8>),
}

#[derive(Debug, Default)]
struct MemoryTree {
    /// folder path -> ordered children (name, node)
    folders: HashMap<String, Vec<(String, MemoryNode)>>,
    denied: HashSet<String>,
    unreadable: HashSet<String>,
    latency: HashMap<String, Duration>,
}

#[derive(Debug)]
pub struct MemoryHost {
    tree: Mutex<MemoryTree>,
}

fn join(parent: &str, name: &str) -> String {
    format!("{}/{}", parent, name)
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

impl MemoryHost {
    /// Create a host whose tree has a single empty root folder
    pub fn new(root: &str) -> Self {
        let mut tree = MemoryTree::default();
        tree.folders.insert(root.to_string(), Vec::new());
        Self {
            tree: Mutex::new(tree),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryTree> {
        self.tree.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Add an empty subfolder, returning its path
    pub fn add_folder(&self, parent: &str, name: &str) -> String {
        let path = join(parent, name);
        let mut tree = self.lock();
        tree.folders
            .entry(parent.to_string())
            .or_default()
            .push((name.to_string(), MemoryNode::Folder));
        tree.folders.entry(path.clone()).or_default();
        path
    }

    /// Add a file with the given content, returning its path
    pub fn add_file(&self, parent: &str, name: &str, content: impl Into<Vec<u8>>) -> String {
        let path = join(parent, name);
        self.lock()
            .folders
            .entry(parent.to_string())
            .or_default()
            .push((name.to_string(), MemoryNode::File(content.into())));
        path
    }

    /// Make `confirm_read_permission` answer "no" for a folder
    pub fn deny_read(&self, folder: &str) {
        self.lock().denied.insert(folder.to_string());
    }

    pub fn allow_read(&self, folder: &str) {
        self.lock().denied.remove(folder);
    }

    /// Keep a file listed but fail every read of it
    pub fn make_unreadable(&self, file: &str) {
        self.lock().unreadable.insert(file.to_string());
    }

    /// Delay every pick and listing of a folder
    pub fn set_latency(&self, folder: &str, delay: Duration) {
        self.lock().latency.insert(folder.to_string(), delay);
    }

    /// Remove a file behind the gallery's back (external change)
    pub fn remove(&self, parent: &str, name: &str) -> bool {
        let mut tree = self.lock();
        match tree.folders.get_mut(parent) {
            Some(children) => {
                let before = children.len();
                children.retain(|(n, node)| !(n == name && matches!(node, MemoryNode::File(_))));
                children.len() != before
            }
            None => false,
        }
    }

    fn latency_for(&self, folder: &str) -> Option<Duration> {
        self.lock().latency.get(folder).copied()
    }
}

impl FolderHost for MemoryHost {
    type Handle = String;

    async fn pick_folder(&self, request: &str) -> Result<FolderRef<String>, HostError> {
        let request = request.trim().trim_end_matches('/');
        if request.is_empty() {
            return Err(HostError::Cancelled);
        }
        if let Some(delay) = self.latency_for(request) {
            tokio::time::sleep(delay).await;
        }
        if !self.lock().folders.contains_key(request) {
            return Err(HostError::NotFound(request.to_string()));
        }
        Ok(FolderRef::new(last_segment(request), request.to_string()))
    }

    async fn confirm_read_permission(&self, folder: &FolderRef<String>) -> Result<bool, HostError> {
        Ok(!self.lock().denied.contains(&folder.handle))
    }

    async fn list_children(&self, folder: &FolderRef<String>) -> Result<Vec<EntryRef<String>>, HostError> {
        if let Some(delay) = self.latency_for(&folder.handle) {
            tokio::time::sleep(delay).await;
        }

        let tree = self.lock();
        let children = tree
            .folders
            .get(&folder.handle)
            .ok_or_else(|| HostError::NotFound(folder.handle.clone()))?;

        Ok(children
            .iter()
            .map(|(name, node)| EntryRef {
                name: name.clone(),
                kind: match node {
                    MemoryNode::Folder => EntryKind::Folder,
                    MemoryNode::File(_) => EntryKind::File,
                },
                handle: join(&folder.handle, name),
            })
            .collect())
    }

    async fn read_binary(&self, entry: &EntryRef<String>) -> Result<Vec<u8>, HostError> {
        let tree = self.lock();
        if tree.unreadable.contains(&entry.handle) {
            return Err(HostError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("{} is unreadable", entry.name),
            )));
        }

        let (parent, name) = entry
            .handle
            .rsplit_once('/')
            .ok_or_else(|| HostError::NotFound(entry.handle.clone()))?;

        tree.folders
            .get(parent)
            .and_then(|children| {
                children.iter().find_map(|(n, node)| match node {
                    MemoryNode::File(bytes) if n == name => Some(bytes.clone()),
                    _ => None,
                })
            })
            .ok_or_else(|| HostError::NotFound(entry.name.clone()))
    }

    async fn delete_file(&self, folder: &FolderRef<String>, name: &str) -> Result<(), HostError> {
        if self.remove(&folder.handle, name) {
            Ok(())
        } else {
            Err(HostError::NotFound(name.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_listing_keeps_insertion_order() {
        let host = MemoryHost::new("root");
        host.add_file("root", "b.jpg", b"b".to_vec());
        host.add_folder("root", "Zebra");
        host.add_file("root", "a.jpg", b"a".to_vec());

        let root = host.pick_folder("root").await.expect("pick");
        let names: Vec<String> = host
            .list_children(&root)
            .await
            .expect("list")
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["b.jpg", "Zebra", "a.jpg"]);
    }

    #[tokio::test]
    async fn test_unreadable_file() {
        let host = MemoryHost::new("root");
        let path = host.add_file("root", "broken.jpg", b"x".to_vec());
        host.make_unreadable(&path);

        let entry = EntryRef::file("broken.jpg", path);
        assert!(host.read_binary(&entry).await.is_err());
    }

    #[tokio::test]
    async fn test_pick_unknown_and_blank() {
        let host = MemoryHost::new("root");
        assert!(matches!(host.pick_folder("").await, Err(HostError::Cancelled)));
        assert!(matches!(host.pick_folder("elsewhere").await, Err(HostError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_permission_toggle() {
        let host = MemoryHost::new("root");
        let root = host.pick_folder("root").await.expect("pick");
        assert!(host.confirm_read_permission(&root).await.expect("probe"));

        host.deny_read("root");
        assert!(!host.confirm_read_permission(&root).await.expect("probe"));

        host.allow_read("root");
        assert!(host.confirm_read_permission(&root).await.expect("probe"));
    }
}
