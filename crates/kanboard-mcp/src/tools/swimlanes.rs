//! Swimlane tools. Kanboard's swimlane getters and toggles take positional
//! params.

use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, McpContext};

#[mcp_tool(
    name = "get_swimlanes",
    description = "List all swimlanes of a project (enabled or disabled) and sorted by position"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetSwimlanesTool {
    /// ID of the project to get swimlanes from
    pub project_id: i64,
}

impl GetSwimlanesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.project_id)]);
        relay(context, "get swimlanes", "getAllSwimlanes", params).await
    }
}

#[mcp_tool(
    name = "get_active_swimlanes",
    description = "Get the list of enabled swimlanes of a project (include default swimlane if enabled)"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetActiveSwimlanesTool {
    /// ID of the project to get active swimlanes from
    pub project_id: i64,
}

impl GetActiveSwimlanesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.project_id)]);
        relay(context, "get active swimlanes", "getActiveSwimlanes", params).await
    }
}

#[mcp_tool(name = "get_swimlane", description = "Get a swimlane by ID")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetSwimlaneTool {
    /// ID of the swimlane to retrieve
    pub swimlane_id: i64,
}

impl GetSwimlaneTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.swimlane_id)]);
        relay(context, "get swimlane", "getSwimlane", params).await
    }
}

#[mcp_tool(name = "get_swimlane_by_id", description = "Get a swimlane by ID")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetSwimlaneByIdTool {
    /// ID of the swimlane to retrieve
    pub swimlane_id: i64,
}

impl GetSwimlaneByIdTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.swimlane_id)]);
        relay(context, "get swimlane", "getSwimlaneById", params).await
    }
}

#[mcp_tool(name = "get_swimlane_by_name", description = "Get a swimlane by name")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetSwimlaneByNameTool {
    /// ID of the project the swimlane belongs to
    pub project_id: i64,
    /// Name of the swimlane to retrieve
    pub name: String,
}

impl GetSwimlaneByNameTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.project_id), json!(self.name)]);
        relay(context, "get swimlane by name", "getSwimlaneByName", params).await
    }
}

#[mcp_tool(name = "change_swimlane_position", description = "Move a swimlane's position")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ChangeSwimlanePositionTool {
    /// ID of the project containing the swimlane
    pub project_id: i64,
    /// ID of the swimlane to reorder
    pub swimlane_id: i64,
    /// New position for the swimlane (must be >= 1)
    pub position: i64,
}

impl ChangeSwimlanePositionTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![
            json!(self.project_id),
            json!(self.swimlane_id),
            json!(self.position),
        ]);
        relay(context, "change swimlane position", "changeSwimlanePosition", params).await
    }
}

#[mcp_tool(name = "create_swimlane", description = "Add a new swimlane")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateSwimlaneTool {
    /// ID of the project to add the swimlane to
    pub project_id: i64,
    /// Name of the swimlane to create
    pub name: String,
    /// Description of the swimlane
    pub description: Option<String>,
}

impl CreateSwimlaneTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("name", self.name.as_str())
            .with_opt("description", self.description.as_deref());
        relay(context, "create swimlane", "addSwimlane", params).await
    }
}

#[mcp_tool(name = "update_swimlane", description = "Update swimlane properties")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateSwimlaneTool {
    /// ID of the project the swimlane belongs to
    pub project_id: i64,
    /// ID of the swimlane to update
    pub swimlane_id: i64,
    /// New name for the swimlane
    pub name: Option<String>,
    /// New description for the swimlane
    pub description: Option<String>,
}

impl UpdateSwimlaneTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("swimlane_id", self.swimlane_id)
            .with_opt("name", self.name.as_deref())
            .with_opt("description", self.description.as_deref());
        relay(context, "update swimlane", "updateSwimlane", params).await
    }
}

#[mcp_tool(name = "remove_swimlane", description = "Remove a swimlane")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveSwimlaneTool {
    /// ID of the project the swimlane belongs to
    pub project_id: i64,
    /// ID of the swimlane to remove
    pub swimlane_id: i64,
}

impl RemoveSwimlaneTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.project_id), json!(self.swimlane_id)]);
        relay(context, "remove swimlane", "removeSwimlane", params).await
    }
}

#[mcp_tool(name = "disable_swimlane", description = "Disable a swimlane")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DisableSwimlaneTool {
    /// ID of the project the swimlane belongs to
    pub project_id: i64,
    /// ID of the swimlane to disable
    pub swimlane_id: i64,
}

impl DisableSwimlaneTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.project_id), json!(self.swimlane_id)]);
        relay(context, "disable swimlane", "disableSwimlane", params).await
    }
}

#[mcp_tool(name = "enable_swimlane", description = "Enable a swimlane")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct EnableSwimlaneTool {
    /// ID of the project the swimlane belongs to
    pub project_id: i64,
    /// ID of the swimlane to enable
    pub swimlane_id: i64,
}

impl EnableSwimlaneTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.project_id), json!(self.swimlane_id)]);
        relay(context, "enable swimlane", "enableSwimlane", params).await
    }
}
