// src/mcp/tools/plans.rs
// Test plan tools

use rmcp::model::CallToolResult;

use crate::client::ZephyrClient;
use crate::client::links::IssueLink;
use crate::client::plans::{CreateTestPlan, PlanWebLink, TestCycleLink};
use crate::mcp::requests::{
    CreateTestPlanIssueLinkRequest, CreateTestPlanRequest, CreateTestPlanTestCycleLinkRequest,
    CreateTestPlanWebLinkRequest, GetTestPlanRequest, ListTestPlansRequest,
};
use crate::mcp::responses::{failure, success};

use super::DEFAULT_PAGE_SIZE;

pub async fn list_test_plans(client: &ZephyrClient, req: ListTestPlansRequest) -> CallToolResult {
    let max_results = req.max_results.unwrap_or(DEFAULT_PAGE_SIZE);
    let start_at = req.start_at.unwrap_or(0);
    match client
        .list_test_plans(&req.project_key, max_results, start_at)
        .await
    {
        Ok(plans) => success("Test plans retrieved successfully", [("testPlans", plans)]),
        Err(err) => failure(
            &format!("Error listing test plans for project: {}", req.project_key),
            &err,
        ),
    }
}

pub async fn create_test_plan(client: &ZephyrClient, req: CreateTestPlanRequest) -> CallToolResult {
    let payload = CreateTestPlan {
        project_key: req.project_key,
        name: req.name.clone(),
        objective: req.objective,
        status_name: req.status_name,
        folder_id: req.folder_id,
        custom_fields: req.custom_fields,
    };
    match client.create_test_plan(&payload).await {
        Ok(plan) => success("Test plan created successfully", [("testPlan", plan)]),
        Err(err) => failure(&format!("Error creating test plan: {}", req.name), &err),
    }
}

pub async fn get_test_plan(client: &ZephyrClient, req: GetTestPlanRequest) -> CallToolResult {
    match client.get_test_plan(&req.test_plan_id_or_key).await {
        Ok(plan) => success("Test plan retrieved successfully", [("testPlan", plan)]),
        Err(err) => failure(
            &format!("Error retrieving test plan: {}", req.test_plan_id_or_key),
            &err,
        ),
    }
}

pub async fn create_web_link(
    client: &ZephyrClient,
    req: CreateTestPlanWebLinkRequest,
) -> CallToolResult {
    let link = PlanWebLink {
        url: req.url,
        description: req.description,
    };
    match client
        .create_test_plan_web_link(&req.test_plan_id_or_key, &link)
        .await
    {
        Ok(link) => success("Web link created successfully", [("link", link)]),
        Err(err) => failure(
            &format!(
                "Error creating web link for test plan {}",
                req.test_plan_id_or_key
            ),
            &err,
        ),
    }
}

pub async fn create_issue_link(
    client: &ZephyrClient,
    req: CreateTestPlanIssueLinkRequest,
) -> CallToolResult {
    let link = IssueLink {
        issue_id: req.issue_id,
    };
    match client
        .create_test_plan_issue_link(&req.test_plan_id_or_key, &link)
        .await
    {
        Ok(link) => success("Issue link created successfully", [("link", link)]),
        Err(err) => failure(
            &format!(
                "Error creating issue link for test plan {}",
                req.test_plan_id_or_key
            ),
            &err,
        ),
    }
}

pub async fn create_test_cycle_link(
    client: &ZephyrClient,
    req: CreateTestPlanTestCycleLinkRequest,
) -> CallToolResult {
    let link = TestCycleLink {
        test_cycle_id_or_key: req.test_cycle_id_or_key,
    };
    match client
        .create_test_plan_test_cycle_link(&req.test_plan_id_or_key, &link)
        .await
    {
        Ok(link) => success("Test cycle link created successfully", [("link", link)]),
        Err(err) => failure(
            &format!(
                "Error creating test cycle link for test plan {}",
                req.test_plan_id_or_key
            ),
            &err,
        ),
    }
}
