use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::Params;

use super::{relay, McpContext};

#[mcp_tool(name = "get_version", description = "Get the application version")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetVersionTool {}

impl GetVersionTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get version", "getVersion", Params::None).await
    }
}

#[mcp_tool(name = "get_timezone", description = "Get the timezone of the connected user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTimezoneTool {}

impl GetTimezoneTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get timezone", "getTimezone", Params::None).await
    }
}

#[mcp_tool(name = "get_default_task_colors", description = "Get all default task colors")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetDefaultTaskColorsTool {}

impl GetDefaultTaskColorsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get default task colors", "getDefaultTaskColors", Params::None).await
    }
}

#[mcp_tool(name = "get_default_task_color", description = "Get default task color")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetDefaultTaskColorTool {}

impl GetDefaultTaskColorTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get default task color", "getDefaultTaskColor", Params::None).await
    }
}

#[mcp_tool(name = "get_color_list", description = "Get the list of task colors")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetColorListTool {}

impl GetColorListTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get color list", "getColorList", Params::None).await
    }
}

#[mcp_tool(name = "get_application_roles", description = "Get the application roles")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetApplicationRolesTool {}

impl GetApplicationRolesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get application roles", "getApplicationRoles", Params::None).await
    }
}

#[mcp_tool(name = "get_project_roles", description = "Get the project roles")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectRolesTool {}

impl GetProjectRolesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get project roles", "getProjectRoles", Params::None).await
    }
}
