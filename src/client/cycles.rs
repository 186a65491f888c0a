// src/client/cycles.rs
// Test cycle endpoints

use super::links::{IssueLink, WebLink};
use super::{ApiError, ZephyrClient};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestCycle {
    pub project_key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
}

impl ZephyrClient {
    /// GET /testcycles
    pub async fn list_test_cycles(
        &self,
        project_key: &str,
        folder_id: Option<i64>,
        max_results: u32,
        start_at: u32,
    ) -> Result<Value, ApiError> {
        let mut query = vec![
            ("projectKey", project_key.to_string()),
            ("maxResults", max_results.to_string()),
            ("startAt", start_at.to_string()),
        ];
        if let Some(folder_id) = folder_id {
            query.push(("folderId", folder_id.to_string()));
        }
        self.get("/testcycles", &query).await
    }

    /// POST /testcycles
    pub async fn create_test_cycle(&self, cycle: &CreateTestCycle) -> Result<Value, ApiError> {
        self.post("/testcycles", cycle).await
    }

    /// GET /testcycles/{idOrKey}
    pub async fn get_test_cycle(&self, id_or_key: &str) -> Result<Value, ApiError> {
        self.get(&format!("/testcycles/{id_or_key}"), &[]).await
    }

    /// PUT /testcycles/{idOrKey} - full-record write, merge before calling
    pub async fn update_test_cycle(
        &self,
        id_or_key: &str,
        record: &Value,
    ) -> Result<Value, ApiError> {
        self.put(&format!("/testcycles/{id_or_key}"), record).await
    }

    /// POST /testcycles/{idOrKey}/links/weblinks
    pub async fn create_test_cycle_web_link(
        &self,
        id_or_key: &str,
        link: &WebLink,
    ) -> Result<Value, ApiError> {
        self.post(&format!("/testcycles/{id_or_key}/links/weblinks"), link)
            .await
    }

    /// POST /testcycles/{idOrKey}/links/issues
    pub async fn create_test_cycle_issue_link(
        &self,
        id_or_key: &str,
        link: &IssueLink,
    ) -> Result<Value, ApiError> {
        self.post(&format!("/testcycles/{id_or_key}/links/issues"), link)
            .await
    }
}
