// src/mcp/requests.rs
// MCP tool request types

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Enums - typed alternatives to stringly-typed wire values
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FolderType {
    TestCase,
    TestPlan,
    TestCycle,
}

impl FolderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TestCase => "TEST_CASE",
            Self::TestPlan => "TEST_PLAN",
            Self::TestCycle => "TEST_CYCLE",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusType {
    TestCase,
    TestPlan,
    TestCycle,
    TestExecution,
}

impl StatusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TestCase => "TEST_CASE",
            Self::TestPlan => "TEST_PLAN",
            Self::TestCycle => "TEST_CYCLE",
            Self::TestExecution => "TEST_EXECUTION",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStepsMode {
    Append,
    Overwrite,
}

impl TestStepsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Append => "APPEND",
            Self::Overwrite => "OVERWRITE",
        }
    }
}

// ============================================================================
// Folders
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListFoldersRequest {
    #[schemars(description = "The project key to filter folders (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Folder type filter: TEST_CASE, TEST_PLAN, or TEST_CYCLE")]
    pub folder_type: Option<FolderType>,
    #[schemars(description = "Maximum number of results to return (default: 50)")]
    pub max_results: Option<u32>,
    #[schemars(description = "Index to start at for pagination (default: 0)")]
    pub start_at: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    #[schemars(description = "The project key (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Folder name (1-255 characters)")]
    pub name: String,
    #[schemars(description = "Folder type: TEST_CASE, TEST_PLAN, or TEST_CYCLE")]
    pub folder_type: FolderType,
    #[schemars(description = "Parent folder ID. Omit for root folders")]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetFolderRequest {
    #[schemars(description = "Folder ID")]
    pub folder_id: i64,
}

// ============================================================================
// Test cases
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTestCasesRequest {
    #[schemars(description = "The project key to filter test cases (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Optional folder ID to filter test cases")]
    pub folder_id: Option<i64>,
    #[schemars(description = "Maximum number of results to return (default: 50)")]
    pub max_results: Option<u32>,
    #[schemars(description = "Index to start at for pagination (default: 0)")]
    pub start_at: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestCaseRequest {
    #[schemars(description = "The project key (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Test case name")]
    pub name: String,
    #[schemars(description = "Test objective description")]
    pub objective: Option<String>,
    #[schemars(description = "Preconditions for the test")]
    pub precondition: Option<String>,
    #[schemars(description = "Estimated time in milliseconds")]
    pub estimated_time: Option<i64>,
    #[schemars(description = "Folder ID to organize test case")]
    pub folder_id: Option<i64>,
    #[schemars(description = "Status name (e.g., 'Draft')")]
    pub status_name: Option<String>,
    #[schemars(description = "Priority name (e.g., 'High')")]
    pub priority_name: Option<String>,
    #[schemars(description = "Array of labels")]
    pub labels: Option<Vec<String>>,
    #[schemars(
        description = "Additional custom fields as key-value pairs. Multi-line text fields should denote a new line with the <br> syntax. Dates should be in the format 'yyyy-MM-dd'. Users should be provided by the user ID."
    )]
    pub custom_fields: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTestCaseRequest {
    #[schemars(description = "Test case key (e.g., 'KAN-T1')")]
    pub test_case_key: String,
}

/// Status and priority cannot be updated through this operation; the stored
/// values are carried over from the current record.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestCaseRequest {
    #[schemars(description = "Test case key (e.g., 'KAN-T1')")]
    pub test_case_key: String,
    #[schemars(description = "Test case name")]
    pub name: Option<String>,
    #[schemars(description = "Test objective description")]
    pub objective: Option<String>,
    #[schemars(description = "Preconditions for the test")]
    pub precondition: Option<String>,
    #[schemars(description = "Estimated time in milliseconds")]
    pub estimated_time: Option<i64>,
    #[schemars(description = "Array of labels")]
    pub labels: Option<Vec<String>>,
    #[schemars(
        description = "Additional custom fields as key-value pairs. Multi-line text fields should denote a new line with the <br> syntax. Dates should be in the format 'yyyy-MM-dd'. Users should be provided by the user ID."
    )]
    pub custom_fields: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTestStepsRequest {
    #[schemars(description = "Test case key (e.g., 'KAN-T1')")]
    pub test_case_key: String,
    #[schemars(description = "Maximum number of results")]
    pub max_results: Option<u32>,
    #[schemars(description = "Index to start at for pagination")]
    pub start_at: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TestStepItem {
    pub inline: TestStepInline,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestStepInline {
    #[schemars(description = "Step description")]
    pub description: String,
    #[schemars(description = "Test data for this step")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_data: Option<String>,
    #[schemars(description = "Expected result")]
    pub expected_result: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestStepsRequest {
    #[schemars(description = "Test case key (e.g., 'KAN-T1')")]
    pub test_case_key: String,
    #[schemars(description = "Mode: APPEND to add steps, OVERWRITE to replace all steps")]
    pub mode: TestStepsMode,
    #[schemars(description = "Array of test steps to add")]
    pub items: Vec<TestStepItem>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestCaseWebLinkRequest {
    #[schemars(description = "Test case key (e.g., 'KAN-T1')")]
    pub test_case_key: String,
    #[schemars(description = "The web link URL")]
    pub url: String,
    #[schemars(description = "The link description")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestCaseIssueLinkRequest {
    #[schemars(description = "Test case key (e.g., 'KAN-T1')")]
    pub test_case_key: String,
    #[schemars(description = "The Jira issue ID")]
    pub issue_id: i64,
}

// ============================================================================
// Test cycles
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTestCyclesRequest {
    #[schemars(description = "The project key to filter test cycles (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Folder ID filter")]
    pub folder_id: Option<i64>,
    #[schemars(description = "Maximum number of results to return (default: 50)")]
    pub max_results: Option<u32>,
    #[schemars(description = "Index to start at for pagination (default: 0)")]
    pub start_at: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestCycleRequest {
    #[schemars(description = "The project key (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Test cycle name")]
    pub name: String,
    #[schemars(description = "Description outlining the scope")]
    pub description: Option<String>,
    #[schemars(description = "Planned start date. Format: yyyy-MM-dd'T'HH:mm:ss'Z'")]
    pub planned_start_date: Option<String>,
    #[schemars(description = "Planned end date. Format: yyyy-MM-dd'T'HH:mm:ss'Z'")]
    pub planned_end_date: Option<String>,
    #[schemars(description = "Status name (e.g., 'Draft')")]
    pub status_name: Option<String>,
    #[schemars(description = "Folder ID to organize test cycle")]
    pub folder_id: Option<i64>,
    #[schemars(
        description = "Additional custom fields as key-value pairs. Multi-line text fields should denote a new line with the <br> syntax. Dates should be in the format 'yyyy-MM-dd'. Users should be provided by the user ID."
    )]
    pub custom_fields: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTestCycleRequest {
    #[schemars(description = "Test cycle ID or key (e.g., 'KAN-R1')")]
    pub test_cycle_id_or_key: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestCycleRequest {
    #[schemars(description = "Test cycle ID or key (e.g., 'KAN-R1')")]
    pub test_cycle_id_or_key: String,
    #[schemars(description = "Test cycle name")]
    pub name: Option<String>,
    #[schemars(description = "Description outlining the scope")]
    pub description: Option<String>,
    #[schemars(description = "Planned start date. Format: yyyy-MM-dd'T'HH:mm:ss'Z'")]
    pub planned_start_date: Option<String>,
    #[schemars(description = "Planned end date. Format: yyyy-MM-dd'T'HH:mm:ss'Z'")]
    pub planned_end_date: Option<String>,
    #[schemars(description = "Status name")]
    pub status_name: Option<String>,
    #[schemars(description = "Custom fields")]
    pub custom_fields: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestCycleWebLinkRequest {
    #[schemars(description = "Test cycle ID or key (e.g., 'KAN-R1')")]
    pub test_cycle_id_or_key: String,
    #[schemars(description = "The web link URL")]
    pub url: String,
    #[schemars(description = "The link description")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestCycleIssueLinkRequest {
    #[schemars(description = "Test cycle ID or key (e.g., 'KAN-R1')")]
    pub test_cycle_id_or_key: String,
    #[schemars(description = "The Jira issue ID")]
    pub issue_id: i64,
}

// ============================================================================
// Test plans
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTestPlansRequest {
    #[schemars(description = "The project key to filter test plans (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Maximum number of results to return (default: 50)")]
    pub max_results: Option<u32>,
    #[schemars(description = "Index to start at for pagination (default: 0)")]
    pub start_at: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestPlanRequest {
    #[schemars(description = "The project key (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Test plan name")]
    pub name: String,
    #[schemars(description = "A description of the objective")]
    pub objective: Option<String>,
    #[schemars(description = "Status name (e.g., 'Draft')")]
    pub status_name: Option<String>,
    #[schemars(description = "Folder ID to organize test plan")]
    pub folder_id: Option<i64>,
    #[schemars(
        description = "Additional custom fields as key-value pairs. Multi-line text fields should denote a new line with the <br> syntax. Dates should be in the format 'yyyy-MM-dd'. Users should be provided by the user ID."
    )]
    pub custom_fields: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTestPlanRequest {
    #[schemars(description = "Test plan ID or key (e.g., 'KAN-P1')")]
    pub test_plan_id_or_key: String,
}

/// Plan web links require a description at the schema level; case and cycle
/// web links treat it as optional. The divergence is intentional.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestPlanWebLinkRequest {
    #[schemars(description = "Test plan ID or key (e.g., 'KAN-P1')")]
    pub test_plan_id_or_key: String,
    #[schemars(description = "The web link URL")]
    pub url: String,
    #[schemars(description = "The link description")]
    pub description: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestPlanIssueLinkRequest {
    #[schemars(description = "Test plan ID or key (e.g., 'KAN-P1')")]
    pub test_plan_id_or_key: String,
    #[schemars(description = "The Jira issue ID")]
    pub issue_id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestPlanTestCycleLinkRequest {
    #[schemars(description = "Test plan ID or key (e.g., 'KAN-P1')")]
    pub test_plan_id_or_key: String,
    #[schemars(description = "Test cycle ID or key (e.g., 'KAN-R1')")]
    pub test_cycle_id_or_key: String,
}

// ============================================================================
// Test executions
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTestExecutionsRequest {
    #[schemars(description = "The project key to filter test executions (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Maximum number of results to return (default: 50)")]
    pub max_results: Option<u32>,
    #[schemars(description = "Index to start at for pagination (default: 0)")]
    pub start_at: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestExecutionRequest {
    #[schemars(description = "The project key (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Key of test case the execution applies to (e.g., 'KAN-T1')")]
    pub test_case_key: String,
    #[schemars(description = "Key of test cycle the execution applies to (e.g., 'KAN-R1')")]
    pub test_cycle_key: String,
    #[schemars(description = "The status name (e.g., 'Pass', 'Fail')")]
    pub status_name: String,
    #[schemars(description = "Environment assigned to the test case (e.g., 'Chrome Latest')")]
    pub environment_name: Option<String>,
    #[schemars(description = "Actual end date. Format: yyyy-MM-dd'T'HH:mm:ss'Z'")]
    pub actual_end_date: Option<String>,
    #[schemars(description = "Actual test execution time in milliseconds")]
    pub execution_time: Option<i64>,
    #[schemars(description = "Comment added against overall test case execution")]
    pub comment: Option<String>,
    #[schemars(
        description = "Additional custom fields as key-value pairs. Multi-line text fields should denote a new line with the <br> syntax. Dates should be in the format 'yyyy-MM-dd'. Users should be provided by the user ID."
    )]
    pub custom_fields: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTestExecutionRequest {
    #[schemars(description = "Test execution ID or key (e.g., 'KAN-E1')")]
    pub test_execution_id_or_key: String,
}

// ============================================================================
// Statuses, priorities, environments
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListStatusesRequest {
    #[schemars(description = "The project key to filter statuses (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub max_results: Option<u32>,
    #[schemars(description = "Index to start at for pagination (default: 0)")]
    pub start_at: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStatusRequest {
    #[schemars(description = "The project key (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "The status name")]
    pub name: String,
    #[schemars(description = "Valid values: TEST_CASE, TEST_PLAN, TEST_CYCLE, TEST_EXECUTION")]
    #[serde(rename = "type")]
    pub status_type: StatusType,
    #[schemars(description = "The status description")]
    pub description: Option<String>,
    #[schemars(description = "A color in hexadecimal format (e.g., '#FF5733')")]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetStatusRequest {
    #[schemars(description = "Status ID")]
    pub status_id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPrioritiesRequest {
    #[schemars(description = "The project key to filter priorities (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub max_results: Option<u32>,
    #[schemars(description = "Index to start at for pagination (default: 0)")]
    pub start_at: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvironmentsRequest {
    #[schemars(description = "The project key to filter environments (e.g., 'KAN')")]
    pub project_key: String,
    #[schemars(description = "Maximum number of results to return (default: 10)")]
    pub max_results: Option<u32>,
    #[schemars(description = "Index to start at for pagination (default: 0)")]
    pub start_at: Option<u32>,
}

// ============================================================================
// Links
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLinkRequest {
    #[schemars(description = "Link ID")]
    pub link_id: i64,
}
