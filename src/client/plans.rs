// src/client/plans.rs
// Test plan endpoints

use super::links::IssueLink;
use super::{ApiError, ZephyrClient};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestPlan {
    pub project_key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
}

/// Plan web links require a description, unlike case and cycle web links.
#[derive(Debug, Serialize)]
pub struct PlanWebLink {
    pub url: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCycleLink {
    pub test_cycle_id_or_key: String,
}

impl ZephyrClient {
    /// GET /testplans
    pub async fn list_test_plans(
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
        self.get("/testplans", &query).await
    }

    /// POST /testplans
    pub async fn create_test_plan(&self, plan: &CreateTestPlan) -> Result<Value, ApiError> {
        self.post("/testplans", plan).await
    }

    /// GET /testplans/{idOrKey}
    pub async fn get_test_plan(&self, id_or_key: &str) -> Result<Value, ApiError> {
        self.get(&format!("/testplans/{id_or_key}"), &[]).await
    }

    /// POST /testplans/{idOrKey}/links/weblinks
    pub async fn create_test_plan_web_link(
        &self,
        id_or_key: &str,
        link: &PlanWebLink,
    ) -> Result<Value, ApiError> {
        self.post(&format!("/testplans/{id_or_key}/links/weblinks"), link)
            .await
    }

    /// POST /testplans/{idOrKey}/links/issues
    pub async fn create_test_plan_issue_link(
        &self,
        id_or_key: &str,
        link: &IssueLink,
    ) -> Result<Value, ApiError> {
        self.post(&format!("/testplans/{id_or_key}/links/issues"), link)
            .await
    }

    /// POST /testplans/{idOrKey}/links/testcycles
    pub async fn create_test_plan_test_cycle_link(
        &self,
        id_or_key: &str,
        link: &TestCycleLink,
    ) -> Result<Value, ApiError> {
        self.post(&format!("/testplans/{id_or_key}/links/testcycles"), link)
            .await
    }
}
