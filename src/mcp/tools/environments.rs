// src/mcp/tools/environments.rs

use rmcp::model::CallToolResult;

use crate::client::ZephyrClient;
use crate::mcp::requests::ListEnvironmentsRequest;
use crate::mcp::responses::{failure, success};

use super::METADATA_PAGE_SIZE;

pub async fn list_environments(
    client: &ZephyrClient,
    req: ListEnvironmentsRequest,
) -> CallToolResult {
    let max_results = req.max_results.unwrap_or(METADATA_PAGE_SIZE);
    let start_at = req.start_at.unwrap_or(0);
    match client
        .list_environments(&req.project_key, max_results, start_at)
        .await
    {
        Ok(environments) => success(
            "Environments retrieved successfully",
            [("environments", environments)],
        ),
        Err(err) => failure(
            &format!("Error listing environments for project: {}", req.project_key),
            &err,
        ),
    }
}
