// src/client/links.rs
// Link payloads shared across entity types, plus link deletion

use super::{ApiError, ZephyrClient};
use serde::Serialize;
use serde_json::Value;

/// Web link payload (`links/weblinks` under any entity)
#[derive(Debug, Serialize)]
pub struct WebLink {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Jira issue link payload (`links/issues` under any entity)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLink {
    pub issue_id: i64,
}

impl ZephyrClient {
    /// DELETE /links/{id}
    pub async fn delete_link(&self, link_id: i64) -> Result<Value, ApiError> {
        self.delete(&format!("/links/{link_id}")).await
    }
}
