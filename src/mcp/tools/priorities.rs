// src/mcp/tools/priorities.rs

use rmcp::model::CallToolResult;

use crate::client::ZephyrClient;
use crate::mcp::requests::ListPrioritiesRequest;
use crate::mcp::responses::{failure, success};

use super::METADATA_PAGE_SIZE;

pub async fn list_priorities(client: &ZephyrClient, req: ListPrioritiesRequest) -> CallToolResult {
    let max_results = req.max_results.unwrap_or(METADATA_PAGE_SIZE);
    let start_at = req.start_at.unwrap_or(0);
    match client
        .list_priorities(&req.project_key, max_results, start_at)
        .await
    {
        Ok(priorities) => success(
            "Priorities retrieved successfully",
            [("priorities", priorities)],
        ),
        Err(err) => failure(
            &format!("Error listing priorities for project: {}", req.project_key),
            &err,
        ),
    }
}
