// src/client/folders.rs
// Folder endpoints

use super::{ApiError, ZephyrClient};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolder {
    pub project_key: String,
    pub name: String,
    pub folder_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl ZephyrClient {
    /// GET /folders
    pub async fn list_folders(
        &self,
        project_key: &str,
        folder_type: Option<&str>,
        max_results: u32,
        start_at: u32,
    ) -> Result<Value, ApiError> {
        let mut query = vec![
            ("projectKey", project_key.to_string()),
            ("maxResults", max_results.to_string()),
            ("startAt", start_at.to_string()),
        ];
        if let Some(folder_type) = folder_type {
            query.push(("folderType", folder_type.to_string()));
        }
        self.get("/folders", &query).await
    }

    /// POST /folders
    pub async fn create_folder(&self, folder: &CreateFolder) -> Result<Value, ApiError> {
        self.post("/folders", folder).await
    }

    /// GET /folders/{id}
    pub async fn get_folder(&self, folder_id: i64) -> Result<Value, ApiError> {
        self.get(&format!("/folders/{folder_id}"), &[]).await
    }
}
