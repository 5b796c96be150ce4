//! On-demand image loading for the visible page

use std::fmt;
use std::sync::Arc;

use super::GalleryError;
use crate::host::{EntryRef, FolderHost};

/// Binary image data for one entry of the displayed page
///
/// Bytes are shared: the page, the inline preview and the lightbox all point
/// at the same buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

impl LoadedImage {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Read one entry's bytes
pub async fn materialize<F: FolderHost>(
    host: &F,
    entry: &EntryRef<F::Handle>,
) -> Result<LoadedImage, GalleryError> {
    match host.read_binary(entry).await {
        Ok(bytes) => Ok(LoadedImage::new(entry.name.clone(), bytes)),
        Err(e) => Err(GalleryError::EntryLoadFailed {
            name: entry.name.clone(),
            reason: e.to_string(),
        }),
    }
}

/// Load a page's entries one after another, in listing order
///
/// A failing entry is logged and skipped; the rest of the page still loads.
pub async fn load_page<F: FolderHost>(
    host: &F,
    entries: &[EntryRef<F::Handle>],
) -> (Vec<LoadedImage>, Vec<GalleryError>) {
    let mut images = Vec::with_capacity(entries.len());
    let mut failures = Vec::new();

    for entry in entries {
        match materialize(host, entry).await {
            Ok(image) => images.push(image),
            Err(e) => {
                log::warn!("Skipping image: {}", e);
                failures.push(e);
            }
        }
    }

    (images, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    #[tokio::test]
    async fn test_failed_entry_is_skipped() {
        let host = MemoryHost::new("root");
        host.add_file("root", "a.jpg", b"aaa".to_vec());
        let bad = host.add_file("root", "b.jpg", b"bbb".to_vec());
        host.add_file("root", "c.jpg", b"ccc".to_vec());
        host.make_unreadable(&bad);

        let entries = vec![
            EntryRef::file("a.jpg", "root/a.jpg".to_string()),
            EntryRef::file("b.jpg", "root/b.jpg".to_string()),
            EntryRef::file("c.jpg", "root/c.jpg".to_string()),
        ];

        let (images, failures) = load_page(&host, &entries).await;
        let names: Vec<_> = images.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "c.jpg"]);
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            &failures[0],
            GalleryError::EntryLoadFailed { name, .. } if name == "b.jpg"
        ));
    }

    #[tokio::test]
    async fn test_materialize_reads_bytes() {
        let host = MemoryHost::new("root");
        host.add_file("root", "a.jpg", b"jpeg bytes".to_vec());

        let image = materialize(&host, &EntryRef::file("a.jpg", "root/a.jpg".to_string()))
            .await
            .unwrap();
        assert_eq!(&image.bytes[..], b"jpeg bytes");
        assert_eq!(image.len(), 10);
    }

    #[test]
    fn test_debug_hides_bytes() {
        let image = LoadedImage::new("a.jpg", vec![0u8; 4096]);
        assert_eq!(format!("{:?}", image), "LoadedImage { name: \"a.jpg\", bytes: 4096 }");
    }
}
