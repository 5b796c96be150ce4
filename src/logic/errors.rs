use crate::gallery::GalleryError;
use crate::host::HostError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    Cancelled,
    PermissionDenied,
    NotFound,
    Network,     // HTTP transport to a remote host
    ServerError, // Remote host answered with an error status
    EntryLoad,
    Navigation, // No root, bad breadcrumb
    Other,
}

/// Classify a gallery error for display
pub fn classify_error(error: &GalleryError) -> ErrorType {
    match error {
        GalleryError::UserCancelled => ErrorType::Cancelled,
        GalleryError::PermissionDenied { .. } => ErrorType::PermissionDenied,
        GalleryError::EntryLoadFailed { .. } => ErrorType::EntryLoad,
        GalleryError::NoRoot | GalleryError::InvalidBreadcrumb { .. } => ErrorType::Navigation,
        GalleryError::Host(host) => match host {
            HostError::Cancelled => ErrorType::Cancelled,
            HostError::PermissionDenied(_) => ErrorType::PermissionDenied,
            HostError::NotFound(_) => ErrorType::NotFound,
            HostError::Http(_) => ErrorType::Network,
            HostError::Server { .. } => ErrorType::ServerError,
            HostError::Io(_) => ErrorType::Other,
        },
    }
}

/// Toast text for an error, or `None` when it should stay silent
///
/// # Examples
/// ```
/// use photodeck::gallery::GalleryError;
/// use photodeck::logic::errors::toast_message;
///
/// assert_eq!(toast_message(&GalleryError::UserCancelled), None);
/// assert_eq!(
///     toast_message(&GalleryError::PermissionDenied { folder: "Trips".into() }).as_deref(),
///     Some("Permission denied: Trips")
/// );
/// ```
pub fn toast_message(error: &GalleryError) -> Option<String> {
    let message = match (classify_error(error), error) {
        (ErrorType::Cancelled, _) => return None,
        (_, GalleryError::PermissionDenied { folder }) => format!("Permission denied: {}", folder),
        (ErrorType::NotFound, GalleryError::Host(HostError::NotFound(what))) => {
            format!("Folder no longer exists: {}", what)
        }
        (ErrorType::Network, e) => format!("Cannot reach server: {}", e),
        (_, e) => e.to_string(),
    };
    Some(message)
}
