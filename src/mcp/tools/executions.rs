// src/mcp/tools/executions.rs
// Test execution tools

use rmcp::model::CallToolResult;
use serde_json::Value;

use crate::client::ZephyrClient;
use crate::client::executions::CreateTestExecution;
use crate::mcp::requests::{
    CreateTestExecutionRequest, GetTestExecutionRequest, ListTestExecutionsRequest,
};
use crate::mcp::responses::{failure, success};

use super::DEFAULT_PAGE_SIZE;

pub async fn list_test_executions(
    client: &ZephyrClient,
    req: ListTestExecutionsRequest,
) -> CallToolResult {
    let max_results = req.max_results.unwrap_or(DEFAULT_PAGE_SIZE);
    let start_at = req.start_at.unwrap_or(0);
    match client
        .list_test_executions(&req.project_key, max_results, start_at)
        .await
    {
        Ok(executions) => success(
            "Test executions retrieved successfully",
            [("testExecutions", executions)],
        ),
        Err(err) => failure(
            &format!(
                "Error listing test executions for project: {}",
                req.project_key
            ),
            &err,
        ),
    }
}

pub async fn create_test_execution(
    client: &ZephyrClient,
    req: CreateTestExecutionRequest,
) -> CallToolResult {
    let payload = CreateTestExecution {
        project_key: req.project_key,
        test_case_key: req.test_case_key.clone(),
        test_cycle_key: req.test_cycle_key.clone(),
        status_name: req.status_name,
        environment_name: req.environment_name,
        actual_end_date: req.actual_end_date,
        execution_time: req.execution_time,
        comment: req.comment,
        custom_fields: req.custom_fields,
    };
    match client.create_test_execution(&payload).await {
        Ok(_) => success(
            "Test execution created successfully",
            [
                ("testCaseKey", Value::String(req.test_case_key)),
                ("testCycleKey", Value::String(req.test_cycle_key)),
            ],
        ),
        Err(err) => failure(
            &format!(
                "Error creating test execution for test case: {}",
                req.test_case_key
            ),
            &err,
        ),
    }
}

pub async fn get_test_execution(
    client: &ZephyrClient,
    req: GetTestExecutionRequest,
) -> CallToolResult {
    match client
        .get_test_execution(&req.test_execution_id_or_key)
        .await
    {
        Ok(execution) => success(
            "Test execution retrieved successfully",
            [("testExecution", execution)],
        ),
        Err(err) => failure(
            &format!(
                "Error retrieving test execution: {}",
                req.test_execution_id_or_key
            ),
            &err,
        ),
    }
}
