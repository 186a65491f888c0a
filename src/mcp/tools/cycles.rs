// src/mcp/tools/cycles.rs
// Test cycle tools

use rmcp::model::CallToolResult;
use serde_json::{Map, Value};

use crate::client::ZephyrClient;
use crate::client::cycles::CreateTestCycle;
use crate::client::links::{IssueLink, WebLink};
use crate::mcp::requests::{
    CreateTestCycleIssueLinkRequest, CreateTestCycleRequest, CreateTestCycleWebLinkRequest,
    GetTestCycleRequest, ListTestCyclesRequest, UpdateTestCycleRequest,
};
use crate::mcp::responses::{failure, success};

use super::{DEFAULT_PAGE_SIZE, overlay_object, overlay_present, overlay_string};

pub async fn list_test_cycles(client: &ZephyrClient, req: ListTestCyclesRequest) -> CallToolResult {
    let max_results = req.max_results.unwrap_or(DEFAULT_PAGE_SIZE);
    let start_at = req.start_at.unwrap_or(0);
    match client
        .list_test_cycles(&req.project_key, req.folder_id, max_results, start_at)
        .await
    {
        Ok(cycles) => success("Test cycles retrieved successfully", [("testCycles", cycles)]),
        Err(err) => failure(
            &format!("Error listing test cycles for project: {}", req.project_key),
            &err,
        ),
    }
}

pub async fn create_test_cycle(client: &ZephyrClient, req: CreateTestCycleRequest) -> CallToolResult {
    let payload = CreateTestCycle {
        project_key: req.project_key,
        name: req.name.clone(),
        description: req.description,
        planned_start_date: req.planned_start_date,
        planned_end_date: req.planned_end_date,
        status_name: req.status_name,
        folder_id: req.folder_id,
        custom_fields: req.custom_fields,
    };
    match client.create_test_cycle(&payload).await {
        Ok(cycle) => success("Test cycle created successfully", [("testCycle", cycle)]),
        Err(err) => failure(&format!("Error creating test cycle: {}", req.name), &err),
    }
}

pub async fn get_test_cycle(client: &ZephyrClient, req: GetTestCycleRequest) -> CallToolResult {
    match client.get_test_cycle(&req.test_cycle_id_or_key).await {
        Ok(cycle) => success("Test cycle retrieved successfully", [("testCycle", cycle)]),
        Err(err) => failure(
            &format!("Error retrieving test cycle: {}", req.test_cycle_id_or_key),
            &err,
        ),
    }
}

/// Overlay caller fields onto the current record. Description and the two
/// planned dates overwrite on presence, so an explicit empty string clears
/// them; name and status fall back to the stored values when empty.
pub(crate) fn merge_test_cycle_update(snapshot: Value, req: &UpdateTestCycleRequest) -> Value {
    let mut record = match snapshot {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    overlay_string(&mut record, "name", &req.name);
    overlay_present(&mut record, "description", &req.description);
    overlay_present(&mut record, "plannedStartDate", &req.planned_start_date);
    overlay_present(&mut record, "plannedEndDate", &req.planned_end_date);
    overlay_string(&mut record, "statusName", &req.status_name);
    overlay_object(&mut record, "customFields", &req.custom_fields);
    Value::Object(record)
}

pub async fn update_test_cycle(client: &ZephyrClient, req: UpdateTestCycleRequest) -> CallToolResult {
    let context = format!("Error updating test cycle: {}", req.test_cycle_id_or_key);
    let snapshot = match client.get_test_cycle(&req.test_cycle_id_or_key).await {
        Ok(snapshot) => snapshot,
        Err(err) => return failure(&context, &err),
    };
    let record = merge_test_cycle_update(snapshot, &req);
    match client
        .update_test_cycle(&req.test_cycle_id_or_key, &record)
        .await
    {
        Ok(_) => success(
            "Test cycle updated successfully",
            [("testCycleKey", Value::String(req.test_cycle_id_or_key))],
        ),
        Err(err) => failure(&context, &err),
    }
}

pub async fn create_web_link(
    client: &ZephyrClient,
    req: CreateTestCycleWebLinkRequest,
) -> CallToolResult {
    let link = WebLink {
        url: req.url,
        description: req.description,
    };
    match client
        .create_test_cycle_web_link(&req.test_cycle_id_or_key, &link)
        .await
    {
        Ok(_) => success(
            "Web link created successfully",
            [("testCycleKey", Value::String(req.test_cycle_id_or_key))],
        ),
        Err(err) => failure(
            &format!(
                "Error creating web link for test cycle {}",
                req.test_cycle_id_or_key
            ),
            &err,
        ),
    }
}

pub async fn create_issue_link(
    client: &ZephyrClient,
    req: CreateTestCycleIssueLinkRequest,
) -> CallToolResult {
    let link = IssueLink {
        issue_id: req.issue_id,
    };
    match client
        .create_test_cycle_issue_link(&req.test_cycle_id_or_key, &link)
        .await
    {
        Ok(_) => success(
            "Issue link created successfully",
            [("testCycleKey", Value::String(req.test_cycle_id_or_key))],
        ),
        Err(err) => failure(
            &format!(
                "Error creating issue link for test cycle {}",
                req.test_cycle_id_or_key
            ),
            &err,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update_req(id_or_key: &str) -> UpdateTestCycleRequest {
        UpdateTestCycleRequest {
            test_cycle_id_or_key: id_or_key.to_string(),
            name: None,
            description: None,
            planned_start_date: None,
            planned_end_date: None,
            status_name: None,
            custom_fields: None,
        }
    }

    #[test]
    fn merge_clears_description_on_explicit_empty() {
        let snapshot = json!({
            "key": "KAN-R1",
            "name": "Sprint 1",
            "description": "old",
        });
        let mut req = update_req("KAN-R1");
        req.description = Some(String::new());
        let merged = merge_test_cycle_update(snapshot, &req);
        assert_eq!(merged["description"], "");
        assert_eq!(merged["name"], "Sprint 1");
    }

    #[test]
    fn merge_keeps_name_when_empty() {
        let snapshot = json!({"key": "KAN-R1", "name": "Sprint 1"});
        let mut req = update_req("KAN-R1");
        req.name = Some(String::new());
        req.planned_end_date = Some("2026-09-01T00:00:00Z".into());
        let merged = merge_test_cycle_update(snapshot, &req);
        assert_eq!(merged["name"], "Sprint 1");
        assert_eq!(merged["plannedEndDate"], "2026-09-01T00:00:00Z");
    }
}
