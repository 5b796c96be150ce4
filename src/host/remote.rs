//! Remote host: a photodeck server reached over HTTP
//!
//! Handles are path segments relative to the server's sandbox root.
//! The server enforces the sandbox, so permission confirmation always succeeds
//! here and a 403 on listing is reported as a denial instead.

use reqwest::{Client, Response, StatusCode};

use super::{EntryKind, EntryRef, FolderHost, FolderRef, HostError};
use crate::server::wire::{DeleteRequest, ErrorBody, ListEntry};

#[derive(Debug, Clone)]
pub struct RemoteHost {
    base_url: String,
    root_label: String,
    client: Client,
}

/// Percent-encode each segment and join with '/'
fn encode_segments(segments: &[String]) -> String {
    segments
        .iter()
        .map(|s| urlencoding::encode(s).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn parse_request_path(request: &str) -> Vec<String> {
    request
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != ".")
        .map(String::from)
        .collect()
}

impl RemoteHost {
    pub fn new(base_url: impl Into<String>, root_label: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            root_label: root_label.into(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into a host error, using the JSON `error` body if any
    async fn check(response: Response, what: &str) -> Result<Response, HostError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };

        Err(match status {
            StatusCode::NOT_FOUND => HostError::NotFound(what.to_string()),
            StatusCode::FORBIDDEN => HostError::PermissionDenied(what.to_string()),
            _ => HostError::Server {
                status: status.as_u16(),
                message,
            },
        })
    }

    async fn fetch_listing(&self, segments: &[String]) -> Result<Vec<ListEntry>, HostError> {
        let joined = segments.join("/");
        let url = format!(
            "{}/api/list?path={}",
            self.base_url,
            urlencoding::encode(&joined)
        );
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check(response, &joined).await?;
        Ok(response.json().await?)
    }
}

impl FolderHost for RemoteHost {
    type Handle = Vec<String>;

    async fn pick_folder(&self, request: &str) -> Result<FolderRef<Vec<String>>, HostError> {
        if request.trim().is_empty() {
            return Err(HostError::Cancelled);
        }

        let segments = parse_request_path(request);
        // Fail early when the server does not know the folder
        self.fetch_listing(&segments).await?;

        let name = segments
            .last()
            .cloned()
            .unwrap_or_else(|| self.root_label.clone());
        Ok(FolderRef::new(name, segments))
    }

    async fn confirm_read_permission(&self, _folder: &FolderRef<Vec<String>>) -> Result<bool, HostError> {
        Ok(true)
    }

    async fn list_children(
        &self,
        folder: &FolderRef<Vec<String>>,
    ) -> Result<Vec<EntryRef<Vec<String>>>, HostError> {
        let listing = self.fetch_listing(&folder.handle).await?;

        Ok(listing
            .into_iter()
            .map(|item| {
                let mut handle = folder.handle.clone();
                handle.push(item.name.clone());
                let kind = if item.is_folder() {
                    EntryKind::Folder
                } else {
                    EntryKind::File
                };
                EntryRef {
                    name: item.name,
                    kind,
                    handle,
                }
            })
            .collect())
    }

    async fn read_binary(&self, entry: &EntryRef<Vec<String>>) -> Result<Vec<u8>, HostError> {
        let url = format!("{}/files/{}", self.base_url, encode_segments(&entry.handle));
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check(response, &entry.name).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn delete_file(&self, folder: &FolderRef<Vec<String>>, name: &str) -> Result<(), HostError> {
        let url = format!("{}/api/delete-file", self.base_url);
        let body = DeleteRequest {
            path: Some(folder.handle.clone()),
            file_name: Some(urlencoding::encode(name).into_owned()),
        };
        log::debug!("DELETE {} {:?}", url, body);

        let response = self.client.delete(&url).json(&body).send().await?;
        Self::check(response, name).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_path() {
        assert!(parse_request_path("/").is_empty());
        assert!(parse_request_path(" . ").is_empty());
        assert_eq!(parse_request_path("trips/2024/"), vec!["trips", "2024"]);
        assert_eq!(parse_request_path("/a//b"), vec!["a", "b"]);
    }

    #[test]
    fn test_encode_segments() {
        let segments = vec!["my trips".to_string(), "día 1.jpg".to_string()];
        assert_eq!(encode_segments(&segments), "my%20trips/d%C3%ADa%201.jpg");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let host = RemoteHost::new("http://localhost:3000/", "photos");
        assert_eq!(host.base_url(), "http://localhost:3000");
    }
}
