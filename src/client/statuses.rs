// src/client/statuses.rs
// Status endpoints

use super::{ApiError, ZephyrClient};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStatus {
    pub project_key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub status_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ZephyrClient {
    /// GET /statuses
    pub async fn list_statuses(
        &self,
        project_key: &str,
        max_results: u32,
        start_at: u32,
    ) -> Result<Value, ApiError> {
        let query = [
            ("projectKey", project_key.to_string()),
            ("maxResults", max_results.to_string()),
            ("startAt", start_at.to_string()),
        ];
        self.get("/statuses", &query).await
    }

    /// POST /statuses
    pub async fn create_status(&self, status: &CreateStatus) -> Result<Value, ApiError> {
        self.post("/statuses", status).await
    }

    /// GET /statuses/{id}
    pub async fn get_status(&self, status_id: i64) -> Result<Value, ApiError> {
        self.get(&format!("/statuses/{status_id}"), &[]).await
    }
}
