use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::NamedParams;

use super::{relay, McpContext};

#[mcp_tool(name = "create_subtask", description = "Create a new subtask")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateSubtaskTool {
    /// ID of the task to associate the subtask with
    pub task_id: i64,
    /// Title of the subtask
    pub title: String,
    /// ID of the user assigned to the subtask
    pub user_id: Option<i64>,
    /// Estimated time for the subtask in hours
    pub time_estimated: Option<f64>,
    /// Time spent on the subtask in hours
    pub time_spent: Option<f64>,
    /// Status of the subtask (0: Todo, 1: In Progress, 2: Done)
    pub status: Option<i64>,
}

impl CreateSubtaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("task_id", self.task_id)
            .with("title", self.title.as_str())
            .with_opt("user_id", self.user_id)
            .with_opt("time_estimated", self.time_estimated)
            .with_opt("time_spent", self.time_spent)
            .with_opt("status", self.status);
        relay(context, "create subtask", "createSubtask", params).await
    }
}

#[mcp_tool(name = "get_subtask", description = "Get subtask information")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetSubtaskTool {
    /// ID of the subtask to retrieve
    pub subtask_id: i64,
}

impl GetSubtaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("subtask_id", self.subtask_id);
        relay(context, "get subtask", "getSubtask", params).await
    }
}

#[mcp_tool(name = "get_all_subtasks", description = "Get all available subtasks for a task")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAllSubtasksTool {
    /// ID of the task to get subtasks for
    pub task_id: i64,
}

impl GetAllSubtasksTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "get subtasks", "getAllSubtasks", params).await
    }
}

#[mcp_tool(name = "update_subtask", description = "Update a subtask")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateSubtaskTool {
    /// ID of the subtask to update
    pub id: i64,
    /// ID of the associated task
    pub task_id: i64,
    /// New title for the subtask
    pub title: Option<String>,
    /// New user ID assigned to the subtask
    pub user_id: Option<i64>,
    /// New estimated time for the subtask in hours
    pub time_estimated: Option<f64>,
    /// New time spent on the subtask in hours
    pub time_spent: Option<f64>,
    /// New status of the subtask (0: Todo, 1: In Progress, 2: Done)
    pub status: Option<i64>,
}

impl UpdateSubtaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("id", self.id)
            .with("task_id", self.task_id)
            .with_opt("title", self.title.as_deref())
            .with_opt("user_id", self.user_id)
            .with_opt("time_estimated", self.time_estimated)
            .with_opt("time_spent", self.time_spent)
            .with_opt("status", self.status);
        relay(context, "update subtask", "updateSubtask", params).await
    }
}

#[mcp_tool(name = "remove_subtask", description = "Remove a subtask")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveSubtaskTool {
    /// ID of the subtask to remove
    pub subtask_id: i64,
}

impl RemoveSubtaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("subtask_id", self.subtask_id);
        relay(context, "remove subtask", "removeSubtask", params).await
    }
}

#[mcp_tool(
    name = "has_subtask_timer",
    description = "Check if a timer is started for the given subtask and user"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct HasSubtaskTimerTool {
    /// ID of the subtask
    pub subtask_id: i64,
    /// ID of the user
    pub user_id: Option<i64>,
}

impl HasSubtaskTimerTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("subtask_id", self.subtask_id)
            .with_opt("user_id", self.user_id);
        relay(context, "check subtask timer", "hasSubtaskTimer", params).await
    }
}

#[mcp_tool(name = "set_subtask_start_time", description = "Start subtask timer for a user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SetSubtaskStartTimeTool {
    /// ID of the subtask
    pub subtask_id: i64,
    /// ID of the user
    pub user_id: Option<i64>,
}

impl SetSubtaskStartTimeTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("subtask_id", self.subtask_id)
            .with_opt("user_id", self.user_id);
        relay(context, "start subtask timer", "setSubtaskStartTime", params).await
    }
}

#[mcp_tool(name = "set_subtask_end_time", description = "Stop subtask timer for a user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SetSubtaskEndTimeTool {
    /// ID of the subtask
    pub subtask_id: i64,
    /// ID of the user
    pub user_id: Option<i64>,
}

impl SetSubtaskEndTimeTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("subtask_id", self.subtask_id)
            .with_opt("user_id", self.user_id);
        relay(context, "stop subtask timer", "setSubtaskEndTime", params).await
    }
}

#[mcp_tool(name = "get_subtask_time_spent", description = "Get time spent on a subtask for a user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetSubtaskTimeSpentTool {
    /// ID of the subtask
    pub subtask_id: i64,
    /// ID of the user
    pub user_id: Option<i64>,
}

impl GetSubtaskTimeSpentTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("subtask_id", self.subtask_id)
            .with_opt("user_id", self.user_id);
        relay(context, "get subtask time spent", "getSubtaskTimeSpent", params).await
    }
}
