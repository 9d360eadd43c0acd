//! Tools acting on behalf of the authenticated user.

use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, McpContext};

#[mcp_tool(name = "get_me", description = "Get logged user session")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetMeTool {}

impl GetMeTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get current user", "getMe", Params::None).await
    }
}

#[mcp_tool(
    name = "get_my_dashboard",
    description = "Get the dashboard of the logged user without pagination"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetMyDashboardTool {}

impl GetMyDashboardTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get dashboard", "getMyDashboard", Params::None).await
    }
}

#[mcp_tool(
    name = "get_my_activity_stream",
    description = "Get the last 100 events for the logged user"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetMyActivityStreamTool {}

impl GetMyActivityStreamTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get activity stream", "getMyActivityStream", Params::None).await
    }
}

#[mcp_tool(
    name = "create_my_private_project",
    description = "Create a private project for the logged user"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateMyPrivateProjectTool {
    /// Name of the private project to create
    pub name: String,
    /// Description of the private project
    pub description: Option<String>,
}

impl CreateMyPrivateProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("name", self.name.as_str())
            .with_opt("description", self.description.as_deref());
        relay(context, "create private project", "createMyPrivateProject", params).await
    }
}

#[mcp_tool(name = "get_my_projects_list", description = "Get projects of the connected user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetMyProjectsListTool {}

impl GetMyProjectsListTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get my projects list", "getMyProjectsList", Params::None).await
    }
}

#[mcp_tool(name = "get_my_overdue_tasks", description = "Get my overdue tasks")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetMyOverdueTasksTool {}

impl GetMyOverdueTasksTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get my overdue tasks", "getMyOverdueTasks", Params::None).await
    }
}

#[mcp_tool(
    name = "get_my_projects",
    description = "Get projects of connected user with full details"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetMyProjectsTool {}

impl GetMyProjectsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get my projects", "getMyProjects", Params::None).await
    }
}
