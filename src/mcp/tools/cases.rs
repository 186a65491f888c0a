// src/mcp/tools/cases.rs
// Test case tools, including merge-before-write updates and test steps

use rmcp::model::CallToolResult;
use serde_json::{Map, Value, json};

use crate::client::ZephyrClient;
use crate::client::cases::CreateTestCase;
use crate::client::links::{IssueLink, WebLink};
use crate::mcp::requests::{
    CreateTestCaseIssueLinkRequest, CreateTestCaseRequest, CreateTestCaseWebLinkRequest,
    CreateTestStepsRequest, GetTestCaseRequest, GetTestStepsRequest, ListTestCasesRequest,
    UpdateTestCaseRequest,
};
use crate::mcp::responses::{failure, success};

use super::{DEFAULT_PAGE_SIZE, overlay_array, overlay_number, overlay_object, overlay_string};

pub async fn list_test_cases(client: &ZephyrClient, req: ListTestCasesRequest) -> CallToolResult {
    let max_results = req.max_results.unwrap_or(DEFAULT_PAGE_SIZE);
    let start_at = req.start_at.unwrap_or(0);
    match client
        .list_test_cases(&req.project_key, req.folder_id, max_results, start_at)
        .await
    {
        Ok(cases) => success("Test cases retrieved successfully", [("testCases", cases)]),
        Err(err) => failure(
            &format!("Error fetching test cases for project {}", req.project_key),
            &err,
        ),
    }
}

pub async fn create_test_case(client: &ZephyrClient, req: CreateTestCaseRequest) -> CallToolResult {
    let payload = CreateTestCase {
        project_key: req.project_key,
        name: req.name.clone(),
        objective: req.objective,
        precondition: req.precondition,
        estimated_time: req.estimated_time,
        folder_id: req.folder_id,
        status_name: req.status_name,
        priority_name: req.priority_name,
        labels: req.labels,
        custom_fields: req.custom_fields,
    };
    match client.create_test_case(&payload).await {
        Ok(case) => success("Test case created successfully", [("testCase", case)]),
        Err(err) => failure(&format!("Error creating test case: {}", req.name), &err),
    }
}

pub async fn get_test_case(client: &ZephyrClient, req: GetTestCaseRequest) -> CallToolResult {
    match client.get_test_case(&req.test_case_key).await {
        Ok(case) => success("Test case retrieved successfully", [("testCase", case)]),
        Err(err) => failure(
            &format!("Error fetching test case {}", req.test_case_key),
            &err,
        ),
    }
}

/// Overlay caller fields onto the current record. Status and priority always
/// come from the stored record, never from the request.
pub(crate) fn merge_test_case_update(snapshot: Value, req: &UpdateTestCaseRequest) -> Value {
    let mut record = match snapshot {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    overlay_string(&mut record, "name", &req.name);
    overlay_string(&mut record, "objective", &req.objective);
    overlay_string(&mut record, "precondition", &req.precondition);
    overlay_number(&mut record, "estimatedTime", req.estimated_time);
    overlay_array(&mut record, "labels", &req.labels);
    overlay_object(&mut record, "customFields", &req.custom_fields);
    Value::Object(record)
}

pub async fn update_test_case(client: &ZephyrClient, req: UpdateTestCaseRequest) -> CallToolResult {
    let context = format!("Error updating test case {}", req.test_case_key);
    let snapshot = match client.get_test_case(&req.test_case_key).await {
        Ok(snapshot) => snapshot,
        Err(err) => return failure(&context, &err),
    };
    let record = merge_test_case_update(snapshot, &req);
    match client.update_test_case(&req.test_case_key, &record).await {
        Ok(_) => success(
            "Test case updated successfully",
            [("testCaseKey", Value::String(req.test_case_key))],
        ),
        Err(err) => failure(&context, &err),
    }
}

pub async fn get_test_steps(client: &ZephyrClient, req: GetTestStepsRequest) -> CallToolResult {
    match client
        .get_test_steps(&req.test_case_key, req.max_results, req.start_at)
        .await
    {
        Ok(steps) => success("Test steps retrieved successfully", [("testSteps", steps)]),
        Err(err) => failure(
            &format!("Error fetching test steps for test case {}", req.test_case_key),
            &err,
        ),
    }
}

pub async fn create_test_steps(client: &ZephyrClient, req: CreateTestStepsRequest) -> CallToolResult {
    let body = json!({
        "mode": req.mode.as_str(),
        "items": req.items,
    });
    match client.create_test_steps(&req.test_case_key, &body).await {
        Ok(result) => success("Test steps created successfully", [("result", result)]),
        Err(err) => failure(
            &format!("Error creating test steps for test case {}", req.test_case_key),
            &err,
        ),
    }
}

pub async fn create_web_link(
    client: &ZephyrClient,
    req: CreateTestCaseWebLinkRequest,
) -> CallToolResult {
    let link = WebLink {
        url: req.url,
        description: req.description,
    };
    match client
        .create_test_case_web_link(&req.test_case_key, &link)
        .await
    {
        Ok(link) => success("Web link created successfully", [("link", link)]),
        Err(err) => failure(
            &format!("Error creating web link for test case {}", req.test_case_key),
            &err,
        ),
    }
}

pub async fn create_issue_link(
    client: &ZephyrClient,
    req: CreateTestCaseIssueLinkRequest,
) -> CallToolResult {
    let link = IssueLink {
        issue_id: req.issue_id,
    };
    match client
        .create_test_case_issue_link(&req.test_case_key, &link)
        .await
    {
        Ok(link) => success("Issue link created successfully", [("link", link)]),
        Err(err) => failure(
            &format!("Error creating issue link for test case {}", req.test_case_key),
            &err,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_req(test_case_key: &str) -> UpdateTestCaseRequest {
        UpdateTestCaseRequest {
            test_case_key: test_case_key.to_string(),
            name: None,
            objective: None,
            precondition: None,
            estimated_time: None,
            labels: None,
            custom_fields: None,
        }
    }

    #[test]
    fn merge_overlays_provided_fields_and_keeps_the_rest() {
        let snapshot = json!({
            "key": "KAN-T1",
            "name": "old name",
            "objective": "old objective",
            "status": {"id": 10},
            "priority": {"id": 20},
        });
        let mut req = update_req("KAN-T1");
        req.name = Some("new name".into());
        let merged = merge_test_case_update(snapshot, &req);
        assert_eq!(merged["name"], "new name");
        assert_eq!(merged["objective"], "old objective");
        assert_eq!(merged["status"], json!({"id": 10}));
        assert_eq!(merged["priority"], json!({"id": 20}));
    }

    #[test]
    fn merge_never_touches_status_or_priority() {
        let snapshot = json!({
            "key": "KAN-T1",
            "name": "n",
            "status": {"id": 10},
            "priority": {"id": 20},
        });
        let mut req = update_req("KAN-T1");
        req.name = Some("renamed".into());
        req.labels = Some(vec!["smoke".into()]);
        let merged = merge_test_case_update(snapshot, &req);
        assert_eq!(merged["status"], json!({"id": 10}));
        assert_eq!(merged["priority"], json!({"id": 20}));
        assert_eq!(merged["labels"], json!(["smoke"]));
    }

    #[test]
    fn merge_overlays_empty_custom_fields() {
        let snapshot = json!({
            "name": "n",
            "customFields": {"Component": "auth"},
        });
        let mut req = update_req("KAN-T1");
        req.custom_fields = Some(serde_json::Map::new());
        let merged = merge_test_case_update(snapshot, &req);
        assert_eq!(merged["customFields"], json!({}));
    }

    #[test]
    fn merge_drops_empty_values() {
        let snapshot = json!({
            "name": "keep me",
            "labels": ["regression"],
            "estimatedTime": 5000,
        });
        let mut req = update_req("KAN-T1");
        req.name = Some(String::new());
        req.labels = Some(vec![]);
        req.estimated_time = Some(0);
        let merged = merge_test_case_update(snapshot, &req);
        assert_eq!(merged["name"], "keep me");
        assert_eq!(merged["labels"], json!(["regression"]));
        assert_eq!(merged["estimatedTime"], 5000);
    }
}
