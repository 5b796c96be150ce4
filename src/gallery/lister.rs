//! Directory listing and classification

use super::GalleryError;
use crate::host::{EntryRef, FolderHost, FolderRef, HostError};

/// Direct children of one folder, split by kind, in host order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<H> {
    pub folders: Vec<FolderRef<H>>,
    pub images: Vec<EntryRef<H>>,
    /// Files that are neither folders nor images; counted, never shown
    pub other_count: usize,
}

impl<H> Default for Listing<H> {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            images: Vec::new(),
            other_count: 0,
        }
    }
}

impl<H: Clone> Listing<H> {
    /// Classify raw entries without reordering them
    pub fn classify(entries: Vec<EntryRef<H>>) -> Self {
        let mut listing = Self::default();
        for entry in entries {
            if let Some(folder) = entry.as_folder() {
                listing.folders.push(folder);
            } else if entry.is_image() {
                listing.images.push(entry);
            } else {
                listing.other_count += 1;
            }
        }
        listing
    }
}

/// List `folder`, confirming read permission right before enumerating
pub async fn list<F: FolderHost>(
    host: &F,
    folder: &FolderRef<F::Handle>,
) -> Result<Listing<F::Handle>, GalleryError> {
    let permitted = host.confirm_read_permission(folder).await?;
    if !permitted {
        return Err(GalleryError::PermissionDenied {
            folder: folder.name.clone(),
        });
    }

    let entries = host.list_children(folder).await.map_err(|e| match e {
        HostError::PermissionDenied(_) => GalleryError::PermissionDenied {
            folder: folder.name.clone(),
        },
        other => GalleryError::from(other),
    })?;

    let listing = Listing::classify(entries);
    log::debug!(
        "Listed {}: {} folders, {} images, {} other",
        folder.name,
        listing.folders.len(),
        listing.images.len(),
        listing.other_count
    );
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    #[test]
    fn test_classify_keeps_host_order() {
        let entries = vec![
            EntryRef::file("z.jpg", 1u8),
            EntryRef::folder("b", 2u8),
            EntryRef::file("notes.txt", 3u8),
            EntryRef::file("a.PNG", 4u8),
            EntryRef::folder("a", 5u8),
        ];

        let listing = Listing::classify(entries);
        let folder_names: Vec<_> = listing.folders.iter().map(|f| f.name.as_str()).collect();
        let image_names: Vec<_> = listing.images.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(folder_names, vec!["b", "a"]);
        assert_eq!(image_names, vec!["z.jpg", "a.PNG"]);
        assert_eq!(listing.other_count, 1);
    }

    #[tokio::test]
    async fn test_list_denied_has_no_partial_result() {
        let host = MemoryHost::new("root");
        let locked = host.add_folder("root", "locked");
        host.add_file(&locked, "a.jpg", b"x".to_vec());
        host.deny_read(&locked);

        let folder = FolderRef::new("locked", locked);
        let err = list(&host, &folder).await.unwrap_err();
        assert!(matches!(err, GalleryError::PermissionDenied { folder } if folder == "locked"));
    }

    #[tokio::test]
    async fn test_list_direct_children_only() {
        let host = MemoryHost::new("root");
        let sub = host.add_folder("root", "sub");
        host.add_file(&sub, "deep.jpg", b"x".to_vec());
        host.add_file("root", "top.jpg", b"x".to_vec());

        let folder = FolderRef::new("root", "root".to_string());
        let listing = list(&host, &folder).await.unwrap();
        assert_eq!(listing.folders.len(), 1);
        assert_eq!(listing.images.len(), 1);
        assert_eq!(listing.images[0].name, "top.jpg");
    }
}
