// src/mcp/tools/statuses.rs
// Status tools

use rmcp::model::CallToolResult;

use crate::client::ZephyrClient;
use crate::client::statuses::CreateStatus;
use crate::mcp::requests::{CreateStatusRequest, GetStatusRequest, ListStatusesRequest};
use crate::mcp::responses::{failure, success};

use super::METADATA_PAGE_SIZE;

pub async fn list_statuses(client: &ZephyrClient, req: ListStatusesRequest) -> CallToolResult {
    let max_results = req.max_results.unwrap_or(METADATA_PAGE_SIZE);
    let start_at = req.start_at.unwrap_or(0);
    match client
        .list_statuses(&req.project_key, max_results, start_at)
        .await
    {
        Ok(statuses) => success("Statuses retrieved successfully", [("statuses", statuses)]),
        Err(err) => failure(
            &format!("Error listing statuses for project: {}", req.project_key),
            &err,
        ),
    }
}

pub async fn create_status(client: &ZephyrClient, req: CreateStatusRequest) -> CallToolResult {
    let payload = CreateStatus {
        project_key: req.project_key,
        name: req.name.clone(),
        status_type: req.status_type.as_str().to_string(),
        description: req.description,
        color: req.color,
    };
    match client.create_status(&payload).await {
        Ok(status) => success("Status created successfully", [("status", status)]),
        Err(err) => failure(&format!("Error creating status: {}", req.name), &err),
    }
}

pub async fn get_status(client: &ZephyrClient, req: GetStatusRequest) -> CallToolResult {
    match client.get_status(req.status_id).await {
        Ok(status) => success("Status retrieved successfully", [("status", status)]),
        Err(err) => failure(
            &format!("Error retrieving status ID: {}", req.status_id),
            &err,
        ),
    }
}
