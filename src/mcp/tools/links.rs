// src/mcp/tools/links.rs

use rmcp::model::CallToolResult;
use serde_json::json;

use crate::client::ZephyrClient;
use crate::mcp::requests::DeleteLinkRequest;
use crate::mcp::responses::{failure, success};

pub async fn delete_link(client: &ZephyrClient, req: DeleteLinkRequest) -> CallToolResult {
    match client.delete_link(req.link_id).await {
        Ok(_) => success("Link deleted successfully", [("linkId", json!(req.link_id))]),
        Err(err) => failure(&format!("Error deleting link ID: {}", req.link_id), &err),
    }
}
