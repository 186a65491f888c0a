// src/mcp/tools/flow_tests.rs
// End-to-end tool handler tests against a mock Zephyr Scale API

use rmcp::model::CallToolResult;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::ZephyrClient;
use crate::mcp::requests::*;
use crate::mcp::tools::{cases, folders, statuses};

fn client_for(server: &MockServer) -> ZephyrClient {
    ZephyrClient::new(server.uri(), "test-token")
}

/// Parse a tool result back into (is_error, envelope body).
fn envelope(result: &CallToolResult) -> (bool, Value) {
    let raw = serde_json::to_value(result).unwrap();
    let is_error = raw["isError"].as_bool().unwrap_or(false);
    let text = raw["content"][0]["text"].as_str().unwrap();
    (is_error, serde_json::from_str(text).unwrap())
}

#[tokio::test]
async fn list_folders_applies_default_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/folders"))
        .and(query_param("projectKey", "KAN"))
        .and(query_param("maxResults", "50"))
        .and(query_param("startAt", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [{"id": 1, "name": "Regression"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = folders::list_folders(
        &client,
        ListFoldersRequest {
            project_key: "KAN".into(),
            folder_type: None,
            max_results: None,
            start_at: None,
        },
    )
    .await;

    let (is_error, body) = envelope(&result);
    assert!(!is_error);
    assert_eq!(body["message"], "Folders retrieved successfully");
    assert_eq!(body["folders"]["values"][0]["name"], "Regression");
}

#[tokio::test]
async fn list_statuses_defaults_to_ten_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statuses"))
        .and(query_param("projectKey", "KAN"))
        .and(query_param("maxResults", "10"))
        .and(query_param("startAt", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"values": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = statuses::list_statuses(
        &client,
        ListStatusesRequest {
            project_key: "KAN".into(),
            max_results: None,
            start_at: None,
        },
    )
    .await;

    let (is_error, body) = envelope(&result);
    assert!(!is_error);
    assert_eq!(body["message"], "Statuses retrieved successfully");
}

#[tokio::test]
async fn upstream_error_is_shaped_into_the_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/folders/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"foo": "bar"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = folders::get_folder(&client, GetFolderRequest { folder_id: 9 }).await;

    let (is_error, body) = envelope(&result);
    assert!(is_error);
    assert_eq!(
        body["error"],
        "Error retrieving folder ID: 9: request failed with status 404 Not Found"
    );
    assert_eq!(body["status"], 404);
    assert_eq!(body["statusText"], "Not Found");
    assert_eq!(body["responseData"], json!({"foo": "bar"}));
}

#[tokio::test]
async fn update_test_case_merges_before_writing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/testcases/KAN-T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "key": "KAN-T1",
            "name": "old name",
            "objective": "old objective",
            "status": {"id": 1},
            "priority": {"id": 2},
        })))
        .expect(1)
        .mount(&server)
        .await;
    // The write must carry the full merged record, stored status and
    // priority included.
    Mock::given(method("PUT"))
        .and(path("/testcases/KAN-T1"))
        .and(body_json(json!({
            "id": 7,
            "key": "KAN-T1",
            "name": "new name",
            "objective": "old objective",
            "status": {"id": 1},
            "priority": {"id": 2},
            "labels": ["smoke"],
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = cases::update_test_case(
        &client,
        UpdateTestCaseRequest {
            test_case_key: "KAN-T1".into(),
            name: Some("new name".into()),
            objective: None,
            precondition: None,
            estimated_time: None,
            labels: Some(vec!["smoke".into()]),
            custom_fields: None,
        },
    )
    .await;

    let (is_error, body) = envelope(&result);
    assert!(!is_error);
    assert_eq!(body["message"], "Test case updated successfully");
    assert_eq!(body["testCaseKey"], "KAN-T1");
}

#[tokio::test]
async fn update_aborts_when_the_snapshot_fetch_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/testcases/KAN-T1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/testcases/KAN-T1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = cases::update_test_case(
        &client,
        UpdateTestCaseRequest {
            test_case_key: "KAN-T1".into(),
            name: Some("new name".into()),
            objective: None,
            precondition: None,
            estimated_time: None,
            labels: None,
            custom_fields: None,
        },
    )
    .await;

    let (is_error, body) = envelope(&result);
    assert!(is_error);
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn folder_case_steps_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/folders"))
        .and(body_json(json!({
            "projectKey": "KAN",
            "name": "Login",
            "folderType": "TEST_CASE",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 12})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/testcases"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 40,
            "key": "KAN-T2",
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/testcases/KAN-T2/teststeps"))
        .and(body_json(json!({
            "mode": "APPEND",
            "items": [
                {"inline": {"description": "Open the login page", "expectedResult": "Form is shown"}},
                {"inline": {"description": "Submit valid credentials", "testData": "user1 / hunter2", "expectedResult": "Dashboard loads"}},
            ],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/testcases/KAN-T2/teststeps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [
                {"inline": {"description": "Open the login page"}},
                {"inline": {"description": "Submit valid credentials"}},
            ],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let result = folders::create_folder(
        &client,
        CreateFolderRequest {
            project_key: "KAN".into(),
            name: "Login".into(),
            folder_type: FolderType::TestCase,
            parent_id: None,
        },
    )
    .await;
    let (is_error, body) = envelope(&result);
    assert!(!is_error);
    let folder_id = body["folder"]["id"].as_i64().unwrap();

    let result = cases::create_test_case(
        &client,
        CreateTestCaseRequest {
            project_key: "KAN".into(),
            name: "Valid login".into(),
            objective: None,
            precondition: None,
            estimated_time: None,
            folder_id: Some(folder_id),
            status_name: None,
            priority_name: None,
            labels: None,
            custom_fields: None,
        },
    )
    .await;
    let (is_error, body) = envelope(&result);
    assert!(!is_error);
    let case_key = body["testCase"]["key"].as_str().unwrap().to_string();
    assert_eq!(case_key, "KAN-T2");

    let result = cases::create_test_steps(
        &client,
        CreateTestStepsRequest {
            test_case_key: case_key.clone(),
            mode: TestStepsMode::Append,
            items: vec![
                TestStepItem {
                    inline: TestStepInline {
                        description: "Open the login page".into(),
                        test_data: None,
                        expected_result: "Form is shown".into(),
                    },
                },
                TestStepItem {
                    inline: TestStepInline {
                        description: "Submit valid credentials".into(),
                        test_data: Some("user1 / hunter2".into()),
                        expected_result: "Dashboard loads".into(),
                    },
                },
            ],
        },
    )
    .await;
    let (is_error, body) = envelope(&result);
    assert!(!is_error);
    assert_eq!(body["message"], "Test steps created successfully");

    let result = cases::get_test_steps(
        &client,
        GetTestStepsRequest {
            test_case_key: case_key,
            max_results: None,
            start_at: None,
        },
    )
    .await;
    let (is_error, body) = envelope(&result);
    assert!(!is_error);
    assert_eq!(
        body["testSteps"]["values"][0]["inline"]["description"],
        "Open the login page"
    );
    assert_eq!(
        body["testSteps"]["values"][1]["inline"]["description"],
        "Submit valid credentials"
    );
}
