// src/client/cases.rs
// Test case endpoints

use super::links::{IssueLink, WebLink};
use super::{ApiError, ZephyrClient};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestCase {
    pub project_key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precondition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
}

impl ZephyrClient {
    /// GET /testcases
    pub async fn list_test_cases(
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
        self.get("/testcases", &query).await
    }

    /// POST /testcases
    pub async fn create_test_case(&self, test_case: &CreateTestCase) -> Result<Value, ApiError> {
        self.post("/testcases", test_case).await
    }

    /// GET /testcases/{key}
    pub async fn get_test_case(&self, test_case_key: &str) -> Result<Value, ApiError> {
        self.get(&format!("/testcases/{test_case_key}"), &[]).await
    }

    /// PUT /testcases/{key}
    ///
    /// The endpoint expects the full record, not a partial patch; callers
    /// merge over a fresh snapshot before coming here.
    pub async fn update_test_case(
        &self,
        test_case_key: &str,
        record: &Value,
    ) -> Result<Value, ApiError> {
        self.put(&format!("/testcases/{test_case_key}"), record)
            .await
    }

    /// GET /testcases/{key}/teststeps
    pub async fn get_test_steps(
        &self,
        test_case_key: &str,
        max_results: Option<u32>,
        start_at: Option<u32>,
    ) -> Result<Value, ApiError> {
        let mut query = Vec::new();
        if let Some(max_results) = max_results {
            query.push(("maxResults", max_results.to_string()));
        }
        if let Some(start_at) = start_at {
            query.push(("startAt", start_at.to_string()));
        }
        self.get(&format!("/testcases/{test_case_key}/teststeps"), &query)
            .await
    }

    /// POST /testcases/{key}/teststeps
    pub async fn create_test_steps(
        &self,
        test_case_key: &str,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.post(&format!("/testcases/{test_case_key}/teststeps"), body)
            .await
    }

    /// POST /testcases/{key}/links/weblinks
    pub async fn create_test_case_web_link(
        &self,
        test_case_key: &str,
        link: &WebLink,
    ) -> Result<Value, ApiError> {
        self.post(&format!("/testcases/{test_case_key}/links/weblinks"), link)
            .await
    }

    /// POST /testcases/{key}/links/issues
    pub async fn create_test_case_issue_link(
        &self,
        test_case_key: &str,
        link: &IssueLink,
    ) -> Result<Value, ApiError> {
        self.post(&format!("/testcases/{test_case_key}/links/issues"), link)
            .await
    }
}
