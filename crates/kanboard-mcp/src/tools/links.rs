//! Task-to-task links and the link types that label them.

use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, McpContext};

#[mcp_tool(name = "create_task_link", description = "Create a link between two tasks")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateTaskLinkTool {
    /// ID of the first task
    pub task_id: i64,
    /// ID of the opposite task
    pub opposite_task_id: i64,
    /// ID of the link type
    pub link_id: i64,
}

impl CreateTaskLinkTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("task_id", self.task_id)
            .with("opposite_task_id", self.opposite_task_id)
            .with("link_id", self.link_id);
        relay(context, "create task link", "createTaskLink", params).await
    }
}

#[mcp_tool(name = "update_task_link", description = "Update task link")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateTaskLinkTool {
    /// ID of the task link to update
    pub task_link_id: i64,
    /// ID of the first task
    pub task_id: i64,
    /// ID of the opposite task
    pub opposite_task_id: i64,
    /// ID of the link type
    pub link_id: i64,
}

impl UpdateTaskLinkTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("task_link_id", self.task_link_id)
            .with("task_id", self.task_id)
            .with("opposite_task_id", self.opposite_task_id)
            .with("link_id", self.link_id);
        relay(context, "update task link", "updateTaskLink", params).await
    }
}

#[mcp_tool(name = "get_task_link_by_id", description = "Get a task link by ID")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTaskLinkByIdTool {
    /// ID of the task link to retrieve
    pub task_link_id: i64,
}

impl GetTaskLinkByIdTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_link_id", self.task_link_id);
        relay(context, "get task link", "getTaskLinkById", params).await
    }
}

#[mcp_tool(name = "get_all_task_links", description = "Get all links related to a task")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAllTaskLinksTool {
    /// ID of the task to get links for
    pub task_id: i64,
}

impl GetAllTaskLinksTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "get task links", "getAllTaskLinks", params).await
    }
}

#[mcp_tool(name = "remove_task_link", description = "Remove a link between two tasks")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveTaskLinkTool {
    /// ID of the task link to remove
    pub task_link_id: i64,
}

impl RemoveTaskLinkTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_link_id", self.task_link_id);
        relay(context, "remove task link", "removeTaskLink", params).await
    }
}

#[mcp_tool(
    name = "get_all_links",
    description = "Get the list of possible relations between tasks"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAllLinksTool {}

impl GetAllLinksTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get links", "getAllLinks", Params::None).await
    }
}

#[mcp_tool(name = "get_opposite_link_id", description = "Get the opposite link id of a task link")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetOppositeLinkIdTool {
    /// ID of the link to get the opposite ID for
    pub link_id: i64,
}

impl GetOppositeLinkIdTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("link_id", self.link_id);
        relay(context, "get opposite link id", "getOppositeLinkId", params).await
    }
}

#[mcp_tool(name = "get_link_by_label", description = "Get a link by label")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetLinkByLabelTool {
    /// Label of the link to retrieve
    pub label: String,
}

impl GetLinkByLabelTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("label", self.label.as_str());
        relay(context, "get link by label", "getLinkByLabel", params).await
    }
}

#[mcp_tool(name = "get_link_by_id", description = "Get a link by id")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetLinkByIdTool {
    /// ID of the link to retrieve
    pub link_id: i64,
}

impl GetLinkByIdTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("link_id", self.link_id);
        relay(context, "get link", "getLinkById", params).await
    }
}

#[mcp_tool(name = "create_link", description = "Create a new task relation")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateLinkTool {
    /// Label of the new link
    pub label: String,
    /// Label of the opposite link
    pub opposite_label: Option<String>,
}

impl CreateLinkTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("label", self.label.as_str())
            .with_opt("opposite_label", self.opposite_label.as_deref());
        relay(context, "create link", "createLink", params).await
    }
}

#[mcp_tool(name = "update_link", description = "Update a link")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateLinkTool {
    /// ID of the link to update
    pub link_id: i64,
    /// ID of the opposite link
    pub opposite_link_id: i64,
    /// New label for the link
    pub label: String,
}

impl UpdateLinkTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("link_id", self.link_id)
            .with("opposite_link_id", self.opposite_link_id)
            .with("label", self.label.as_str());
        relay(context, "update link", "updateLink", params).await
    }
}

#[mcp_tool(name = "remove_link", description = "Remove a link")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveLinkTool {
    /// ID of the link to remove
    pub link_id: i64,
}

impl RemoveLinkTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("link_id", self.link_id);
        relay(context, "remove link", "removeLink", params).await
    }
}
