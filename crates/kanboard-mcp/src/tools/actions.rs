//! Automatic actions.

use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, JsonObject, McpContext};

#[mcp_tool(name = "get_available_actions", description = "Get list of available automatic actions")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAvailableActionsTool {}

impl GetAvailableActionsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get available actions", "getAvailableActions", Params::None).await
    }
}

#[mcp_tool(
    name = "get_available_action_events",
    description = "Get list of available events for actions"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAvailableActionEventsTool {}

impl GetAvailableActionEventsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get action events", "getAvailableActionEvents", Params::None).await
    }
}

#[mcp_tool(
    name = "get_compatible_action_events",
    description = "Get list of events compatible with an action"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetCompatibleActionEventsTool {
    /// Action name
    pub action_name: String,
}

impl GetCompatibleActionEventsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.action_name)]);
        relay(context, "get compatible action events", "getCompatibleActionEvents", params).await
    }
}

#[mcp_tool(name = "get_actions", description = "Get list of actions for a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetActionsTool {
    /// Project ID
    pub project_id: i64,
}

impl GetActionsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.project_id)]);
        relay(context, "get actions", "getActions", params).await
    }
}

#[mcp_tool(name = "create_action", description = "Create an action")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateActionTool {
    /// Project ID
    pub project_id: i64,
    /// Event name
    pub event_name: String,
    /// Action name
    pub action_name: String,
    /// Key/value parameters
    pub params: JsonObject,
}

impl CreateActionTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("event_name", self.event_name.as_str())
            .with("action_name", self.action_name.as_str())
            .with("params", self.params.clone());
        relay(context, "create action", "createAction", params).await
    }
}

#[mcp_tool(name = "remove_action", description = "Remove an action")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveActionTool {
    /// Action ID
    pub action_id: i64,
}

impl RemoveActionTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.action_id)]);
        relay(context, "remove action", "removeAction", params).await
    }
}
