//! JSON bodies shared by the server and the remote host client

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: String, // "folder" or "file"
}

impl ListEntry {
    pub const FOLDER: &'static str = "folder";
    pub const FILE: &'static str = "file";

    pub fn is_folder(&self) -> bool {
        self.entry_type == Self::FOLDER
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoPage {
    pub photos: Vec<String>,
    pub page: usize,
    pub total_pages: usize,
    pub total_photos: usize,
    pub folder_path: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    #[serde(default)]
    pub path: Option<Vec<String>>,
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_page_field_names() {
        let page = PhotoPage {
            photos: vec!["a.jpg".to_string()],
            page: 1,
            total_pages: 1,
            total_photos: 1,
            folder_path: vec!["trips".to_string()],
        };
        let json = serde_json::to_value(&page).expect("serialize");
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalPhotos"], 1);
        assert_eq!(json["folderPath"][0], "trips");
    }

    #[test]
    fn test_delete_request_tolerates_missing_fields() {
        let body: DeleteRequest = serde_json::from_str("{}").expect("parse");
        assert!(body.path.is_none());
        assert!(body.file_name.is_none());

        let body: DeleteRequest =
            serde_json::from_str(r#"{"path":["a","b"],"fileName":"c.jpg"}"#).expect("parse");
        assert_eq!(body.path, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(body.file_name.as_deref(), Some("c.jpg"));
    }

    #[test]
    fn test_list_entry_type_field() {
        let entry: ListEntry = serde_json::from_str(r#"{"name":"x","type":"folder"}"#).expect("parse");
        assert!(entry.is_folder());
    }
}
