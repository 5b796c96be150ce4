//! File type detection
//!
//! Pure functions for classifying directory entries by name.

/// Extensions browsers can display directly
pub const WEB_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Camera raw containers the gallery also lists
pub const RAW_IMAGE_EXTENSIONS: &[&str] = &["cr3", "raw"];

/// Lowercased extension of a file name, if it has one
///
/// # Examples
/// ```
/// use photodeck::logic::file::extension_of;
///
/// assert_eq!(extension_of("IMG_0001.JPG").as_deref(), Some("jpg"));
/// assert_eq!(extension_of("archive.tar.gz").as_deref(), Some("gz"));
/// assert_eq!(extension_of("README"), None);
/// assert_eq!(extension_of(".hidden"), None);
/// ```
pub fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Check if a file name is an image the gallery lists
///
/// Case-insensitive: JPG/JPEG, PNG, GIF, BMP, WEBP and the raw variants CR3/RAW.
///
/// # Examples
/// ```
/// use photodeck::logic::file::is_image_file;
///
/// assert!(is_image_file("photo.jpg"));
/// assert!(is_image_file("image.PNG"));
/// assert!(is_image_file("IMG_1234.CR3"));
/// assert!(!is_image_file("document.pdf"));
/// assert!(!is_image_file("jpg"));
/// ```
pub fn is_image_file(name: &str) -> bool {
    match extension_of(name) {
        Some(ext) => {
            WEB_IMAGE_EXTENSIONS.contains(&ext.as_str()) || RAW_IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Check if a file name is an image the HTTP photo listing reports (no raw variants)
pub fn is_web_image(name: &str) -> bool {
    extension_of(name)
        .map(|ext| WEB_IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Content type used when serving a file
pub fn content_type_for(name: &str) -> &'static str {
    match extension_of(name).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file_case_insensitive() {
        for name in ["a.jpg", "a.JPG", "a.Jpeg", "a.png", "a.gif", "a.bmp", "a.WebP", "a.cr3", "a.RAW"] {
            assert!(is_image_file(name), "{} should be an image", name);
        }
    }

    #[test]
    fn test_is_image_file_rejects_others() {
        for name in ["a.txt", "a.jpg.txt", "a.tiff", "jpg", "", "a."] {
            assert!(!is_image_file(name), "{} should not be an image", name);
        }
    }

    #[test]
    fn test_web_images_exclude_raw() {
        assert!(is_web_image("a.jpeg"));
        assert!(!is_web_image("a.cr3"));
        assert!(!is_web_image("a.raw"));
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("x.JPG"), "image/jpeg");
        assert_eq!(content_type_for("x.webp"), "image/webp");
        assert_eq!(content_type_for("x.cr3"), "application/octet-stream");
        assert_eq!(content_type_for("index.html"), "text/html; charset=utf-8");
    }
}
