// src/mcp/mod.rs
// MCP server implementation

pub mod requests;
pub mod responses;
pub mod tools;

use crate::client::ZephyrClient;
use rmcp::{
    ErrorData, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::ToolCallContext, wrapper::Parameters},
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use std::sync::Arc;

use requests::*;

/// MCP server state
#[derive(Clone)]
pub struct ZephyrServer {
    pub client: Arc<ZephyrClient>,
    tool_router: ToolRouter<Self>,
}

impl ZephyrServer {
    pub fn new(client: Arc<ZephyrClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl ZephyrServer {
    // -- Folders --

    #[tool(name = "listFolders", description = "List folders in a project")]
    async fn list_folders(
        &self,
        Parameters(req): Parameters<ListFoldersRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::folders::list_folders(&self.client, req).await)
    }

    #[tool(name = "createFolder", description = "Create a new folder")]
    async fn create_folder(
        &self,
        Parameters(req): Parameters<CreateFolderRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::folders::create_folder(&self.client, req).await)
    }

    #[tool(name = "getFolder", description = "Get details of a specific folder")]
    async fn get_folder(
        &self,
        Parameters(req): Parameters<GetFolderRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::folders::get_folder(&self.client, req).await)
    }

    // -- Test cases --

    #[tool(name = "listTestCases", description = "List test cases in a project")]
    async fn list_test_cases(
        &self,
        Parameters(req): Parameters<ListTestCasesRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cases::list_test_cases(&self.client, req).await)
    }

    #[tool(name = "createTestCase", description = "Create a new test case")]
    async fn create_test_case(
        &self,
        Parameters(req): Parameters<CreateTestCaseRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cases::create_test_case(&self.client, req).await)
    }

    #[tool(name = "getTestCase", description = "Get details of a specific test case")]
    async fn get_test_case(
        &self,
        Parameters(req): Parameters<GetTestCaseRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cases::get_test_case(&self.client, req).await)
    }

    #[tool(name = "updateTestCase", description = "Update an existing test case")]
    async fn update_test_case(
        &self,
        Parameters(req): Parameters<UpdateTestCaseRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cases::update_test_case(&self.client, req).await)
    }

    #[tool(name = "getTestCaseTestSteps", description = "Get test steps for a test case")]
    async fn get_test_case_test_steps(
        &self,
        Parameters(req): Parameters<GetTestStepsRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cases::get_test_steps(&self.client, req).await)
    }

    #[tool(
        name = "createTestCaseTestSteps",
        description = "Create or append test steps to a test case (supports APPEND/OVERWRITE modes). Tip: Use OVERWRITE mode for the first time to avoid unwanted empty placeholder steps"
    )]
    async fn create_test_case_test_steps(
        &self,
        Parameters(req): Parameters<CreateTestStepsRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cases::create_test_steps(&self.client, req).await)
    }

    #[tool(name = "createTestCaseWebLink", description = "Create a web link for a test case")]
    async fn create_test_case_web_link(
        &self,
        Parameters(req): Parameters<CreateTestCaseWebLinkRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cases::create_web_link(&self.client, req).await)
    }

    #[tool(
        name = "createTestCaseIssueLink",
        description = "Create an issue link for a test case"
    )]
    async fn create_test_case_issue_link(
        &self,
        Parameters(req): Parameters<CreateTestCaseIssueLinkRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cases::create_issue_link(&self.client, req).await)
    }

    // -- Test cycles --

    #[tool(name = "listTestCycles", description = "List test cycles in a project")]
    async fn list_test_cycles(
        &self,
        Parameters(req): Parameters<ListTestCyclesRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cycles::list_test_cycles(&self.client, req).await)
    }

    #[tool(name = "createTestCycle", description = "Create a new test cycle")]
    async fn create_test_cycle(
        &self,
        Parameters(req): Parameters<CreateTestCycleRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cycles::create_test_cycle(&self.client, req).await)
    }

    #[tool(name = "getTestCycle", description = "Get details of a specific test cycle")]
    async fn get_test_cycle(
        &self,
        Parameters(req): Parameters<GetTestCycleRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cycles::get_test_cycle(&self.client, req).await)
    }

    #[tool(name = "updateTestCycle", description = "Update an existing test cycle")]
    async fn update_test_cycle(
        &self,
        Parameters(req): Parameters<UpdateTestCycleRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cycles::update_test_cycle(&self.client, req).await)
    }

    #[tool(
        name = "createTestCycleWebLink",
        description = "Create a web link for a test cycle"
    )]
    async fn create_test_cycle_web_link(
        &self,
        Parameters(req): Parameters<CreateTestCycleWebLinkRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cycles::create_web_link(&self.client, req).await)
    }

    #[tool(
        name = "createTestCycleIssueLink",
        description = "Create an issue link for a test cycle"
    )]
    async fn create_test_cycle_issue_link(
        &self,
        Parameters(req): Parameters<CreateTestCycleIssueLinkRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::cycles::create_issue_link(&self.client, req).await)
    }

    // -- Test plans --

    #[tool(name = "listTestPlans", description = "List test plans in a project")]
    async fn list_test_plans(
        &self,
        Parameters(req): Parameters<ListTestPlansRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::plans::list_test_plans(&self.client, req).await)
    }

    #[tool(name = "createTestPlan", description = "Create a new test plan")]
    async fn create_test_plan(
        &self,
        Parameters(req): Parameters<CreateTestPlanRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::plans::create_test_plan(&self.client, req).await)
    }

    #[tool(name = "getTestPlan", description = "Get details of a specific test plan")]
    async fn get_test_plan(
        &self,
        Parameters(req): Parameters<GetTestPlanRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::plans::get_test_plan(&self.client, req).await)
    }

    #[tool(name = "createTestPlanWebLink", description = "Create a web link for a test plan")]
    async fn create_test_plan_web_link(
        &self,
        Parameters(req): Parameters<CreateTestPlanWebLinkRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::plans::create_web_link(&self.client, req).await)
    }

    #[tool(
        name = "createTestPlanIssueLink",
        description = "Create an issue link for a test plan"
    )]
    async fn create_test_plan_issue_link(
        &self,
        Parameters(req): Parameters<CreateTestPlanIssueLinkRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::plans::create_issue_link(&self.client, req).await)
    }

    #[tool(
        name = "createTestPlanTestCycleLink",
        description = "Create a test cycle link for a test plan"
    )]
    async fn create_test_plan_test_cycle_link(
        &self,
        Parameters(req): Parameters<CreateTestPlanTestCycleLinkRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::plans::create_test_cycle_link(&self.client, req).await)
    }

    // -- Test executions --

    #[tool(name = "listTestExecutions", description = "List test executions in a project")]
    async fn list_test_executions(
        &self,
        Parameters(req): Parameters<ListTestExecutionsRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::executions::list_test_executions(&self.client, req).await)
    }

    #[tool(name = "createTestExecution", description = "Create a new test execution")]
    async fn create_test_execution(
        &self,
        Parameters(req): Parameters<CreateTestExecutionRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::executions::create_test_execution(&self.client, req).await)
    }

    #[tool(
        name = "getTestExecution",
        description = "Get details of a specific test execution"
    )]
    async fn get_test_execution(
        &self,
        Parameters(req): Parameters<GetTestExecutionRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::executions::get_test_execution(&self.client, req).await)
    }

    // -- Statuses, priorities, environments --

    #[tool(name = "listStatuses", description = "List statuses")]
    async fn list_statuses(
        &self,
        Parameters(req): Parameters<ListStatusesRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::statuses::list_statuses(&self.client, req).await)
    }

    #[tool(name = "createStatus", description = "Create a new status")]
    async fn create_status(
        &self,
        Parameters(req): Parameters<CreateStatusRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::statuses::create_status(&self.client, req).await)
    }

    #[tool(name = "getStatus", description = "Get details of a specific status")]
    async fn get_status(
        &self,
        Parameters(req): Parameters<GetStatusRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::statuses::get_status(&self.client, req).await)
    }

    #[tool(name = "listPriorities", description = "List priorities")]
    async fn list_priorities(
        &self,
        Parameters(req): Parameters<ListPrioritiesRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::priorities::list_priorities(&self.client, req).await)
    }

    #[tool(name = "listEnvironments", description = "List environments")]
    async fn list_environments(
        &self,
        Parameters(req): Parameters<ListEnvironmentsRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::environments::list_environments(&self.client, req).await)
    }

    // -- Links --

    #[tool(name = "deleteLink", description = "Delete a link")]
    async fn delete_link(
        &self,
        Parameters(req): Parameters<DeleteLinkRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::links::delete_link(&self.client, req).await)
    }
}

impl ServerHandler for ZephyrServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: "zephyr-scale-mcp".into(),
                title: Some("Zephyr Scale MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Manage Zephyr Scale test cases, cycles, plans, and executions through the Zephyr Scale Cloud API.".into(),
            ),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        }))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        async move {
            let ctx = ToolCallContext::new(self, request, context);
            self.tool_router.call(ctx).await
        }
    }
}
