//! Sandbox path resolution
//!
//! Maps client-supplied path segments onto a fixed root directory. Resolution is
//! purely lexical and happens before anything touches the filesystem.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SandboxViolation {
    #[error("path escapes the root: {0}")]
    EscapesRoot(String),

    #[error("absolute path segment: {0}")]
    Absolute(String),

    #[error("path contains a NUL byte")]
    NulByte,
}

/// Split a slash-joined query path into its segments, dropping empty ones
///
/// # Examples
/// ```
/// use photodeck::logic::path::split_query_path;
///
/// assert!(split_query_path("").is_empty());
/// assert_eq!(split_query_path("trips/2024"), vec!["trips", "2024"]);
/// assert_eq!(split_query_path("/trips//2024/"), vec!["trips", "2024"]);
/// ```
pub fn split_query_path(raw: &str) -> Vec<String> {
    raw.split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Resolve `segments` below `root`
///
/// Each segment may itself contain `/` or `\` separators. Empty and `.` parts are
/// skipped, `..` pops a previously pushed part. Popping past the root, absolute
/// segments, drive prefixes and NUL bytes are all rejected.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use photodeck::logic::path::resolve_in_sandbox;
///
/// let root = Path::new("/srv/photos");
/// assert_eq!(
///     resolve_in_sandbox(root, &["trips", "2024/a.jpg"]).unwrap(),
///     Path::new("/srv/photos/trips/2024/a.jpg")
/// );
/// assert!(resolve_in_sandbox(root, &["..", "etc"]).is_err());
/// ```
pub fn resolve_in_sandbox<S: AsRef<str>>(
    root: &Path,
    segments: &[S],
) -> Result<PathBuf, SandboxViolation> {
    let mut parts: Vec<&str> = Vec::new();

    for segment in segments {
        let segment = segment.as_ref();
        if segment.contains('\0') {
            return Err(SandboxViolation::NulByte);
        }
        if segment.starts_with('/') || segment.starts_with('\\') {
            return Err(SandboxViolation::Absolute(segment.to_string()));
        }

        for part in segment.split(['/', '\\']) {
            match part {
                "" | "." => {}
                ".." => {
                    if parts.pop().is_none() {
                        return Err(SandboxViolation::EscapesRoot(segments_display(segments)));
                    }
                }
                _ => {
                    // Anything that is not a plain name on this platform (e.g. "C:")
                    let mut components = Path::new(part).components();
                    match (components.next(), components.next()) {
                        (Some(Component::Normal(_)), None) => parts.push(part),
                        _ => return Err(SandboxViolation::Absolute(part.to_string())),
                    }
                }
            }
        }
    }

    let mut resolved = root.to_path_buf();
    resolved.extend(parts);
    Ok(resolved)
}

fn segments_display<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("/")
}

/// Decode a client-supplied file name: trim, percent-decode, trim again
///
/// Returns `None` when nothing is left or the decoded bytes are not UTF-8.
///
/// # Examples
/// ```
/// use photodeck::logic::path::decode_file_name;
///
/// assert_eq!(decode_file_name("my%20photo.jpg ").as_deref(), Some("my photo.jpg"));
/// assert_eq!(decode_file_name("%20a.png%20").as_deref(), Some("a.png"));
/// assert_eq!(decode_file_name("   "), None);
/// ```
pub fn decode_file_name(raw: &str) -> Option<String> {
    let decoded = urlencoding::decode(raw.trim()).ok()?;
    let name = decoded.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
