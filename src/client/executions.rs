// src/client/executions.rs
// Test execution endpoints

use super::{ApiError, ZephyrClient};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestExecution {
    pub project_key: String,
    pub test_case_key: String,
    pub test_cycle_key: String,
    pub status_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
}

impl ZephyrClient {
    /// GET /testexecutions
    pub async fn list_test_executions(
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
        self.get("/testexecutions", &query).await
    }

    /// POST /testexecutions
    pub async fn create_test_execution(
        &self,
        execution: &CreateTestExecution,
    ) -> Result<Value, ApiError> {
        self.post("/testexecutions", execution).await
    }

    /// GET /testexecutions/{idOrKey}
    pub async fn get_test_execution(&self, id_or_key: &str) -> Result<Value, ApiError> {
        self.get(&format!("/testexecutions/{id_or_key}"), &[]).await
    }
}
