//! Task tools. `get_tasks`, `create_task` and `move_task` resolve names
//! to ids before the actual call.

use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::lookup::{move_params, resolve_column, resolve_project_id};
use kanboard_core::rpc::{NamedParams, Params};

use super::{fail, relay, McpContext};

/// `status_id` for active tasks.
const OPEN_STATUS: i64 = 1;

#[mcp_tool(
    name = "get_tasks",
    description = "Get the open tasks of a project, looked up by project name"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTasksTool {
    /// Name of the project to get tasks from
    pub project_name: String,
}

impl GetTasksTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let project_id = match resolve_project_id(context.api.as_ref(), &self.project_name).await {
            Ok(project_id) => project_id,
            Err(err) => return fail(err.to_string()),
        };
        let params = NamedParams::new()
            .with("project_id", project_id)
            .with("status_id", OPEN_STATUS);
        relay(context, "get tasks", "getAllTasks", params).await
    }
}

#[mcp_tool(
    name = "create_task",
    description = "Create a task in a project, looked up by project name"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateTaskTool {
    /// Name of the project to add the task to
    pub project_name: String,
    /// Title of the task to create
    pub title: String,
    /// Color ID for the task
    pub color_id: Option<String>,
    /// ID of the column to add the task to
    pub column_id: Option<i64>,
    /// ID of the task owner
    pub owner_id: Option<i64>,
    /// ID of the task creator
    pub creator_id: Option<i64>,
    /// Due date in YYYY-MM-DD HH:MM format
    pub date_due: Option<String>,
    /// Markdown content for the task description
    pub description: Option<String>,
    /// ID of the task category
    pub category_id: Option<i64>,
    /// Complexity score of the task
    pub score: Option<i64>,
    /// ID of the swimlane to add the task to
    pub swimlane_id: Option<i64>,
    /// Priority of the task
    pub priority: Option<i64>,
    /// Recurrence status of the task
    pub recurrence_status: Option<i64>,
    /// Recurrence trigger of the task
    pub recurrence_trigger: Option<i64>,
    /// Recurrence factor of the task
    pub recurrence_factor: Option<i64>,
    /// Recurrence timeframe of the task
    pub recurrence_timeframe: Option<i64>,
    /// Recurrence base date of the task
    pub recurrence_basedate: Option<i64>,
    /// External reference for the task
    pub reference: Option<String>,
    /// List of tags
    pub tags: Option<Vec<String>>,
    /// Start date in YYYY-MM-DD HH:MM format
    pub date_started: Option<String>,
}

impl CreateTaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let project_id = match resolve_project_id(context.api.as_ref(), &self.project_name).await {
            Ok(project_id) => project_id,
            Err(err) => return fail(err.to_string()),
        };
        let params = NamedParams::new()
            .with("project_id", project_id)
            .with("title", self.title.as_str())
            .with_opt("color_id", self.color_id.as_deref())
            .with_opt("column_id", self.column_id)
            .with_opt("owner_id", self.owner_id)
            .with_opt("creator_id", self.creator_id)
            .with_opt("date_due", self.date_due.as_deref())
            .with_opt("description", self.description.as_deref())
            .with_opt("category_id", self.category_id)
            .with_opt("score", self.score)
            .with_opt("swimlane_id", self.swimlane_id)
            .with_opt("priority", self.priority)
            .with_opt("recurrence_status", self.recurrence_status)
            .with_opt("recurrence_trigger", self.recurrence_trigger)
            .with_opt("recurrence_factor", self.recurrence_factor)
            .with_opt("recurrence_timeframe", self.recurrence_timeframe)
            .with_opt("recurrence_basedate", self.recurrence_basedate)
            .with_opt("reference", self.reference.as_deref())
            .with_opt("tags", self.tags.clone())
            .with_opt("date_started", self.date_started.as_deref());
        relay(context, "create task", "createTask", params).await
    }
}

#[mcp_tool(name = "move_task", description = "Move a task to a column of its board by column name")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct MoveTaskTool {
    /// ID of the task to move
    pub task_id: i64,
    /// Title of the destination column
    pub column_name: String,
    /// Position inside the column, defaults to 1
    pub position: Option<i64>,
    /// Destination swimlane, defaults to the default swimlane (0)
    pub swimlane_id: Option<i64>,
}

impl MoveTaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let api = context.api.as_ref();
        let target = match resolve_column(api, self.task_id, &self.column_name).await {
            Ok(target) => target,
            Err(err) => return fail(err.to_string()),
        };
        let params = move_params(target, self.task_id, self.position, self.swimlane_id);
        relay(context, "move task", "moveTaskPosition", params).await
    }
}

#[mcp_tool(name = "update_task", description = "Update a task")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateTaskTool {
    /// ID of the task to update
    pub id: i64,
    /// New title for the task
    pub title: Option<String>,
    /// New color ID for the task
    pub color_id: Option<String>,
    /// New owner ID for the task
    pub owner_id: Option<i64>,
    /// New due date in YYYY-MM-DD HH:MM format
    pub date_due: Option<String>,
    /// New Markdown content for the task description
    pub description: Option<String>,
    /// New ID of the task category
    pub category_id: Option<i64>,
    /// New complexity score of the task
    pub score: Option<i64>,
    /// New priority of the task
    pub priority: Option<i64>,
    /// New recurrence status of the task
    pub recurrence_status: Option<i64>,
    /// New recurrence trigger of the task
    pub recurrence_trigger: Option<i64>,
    /// New recurrence factor of the task
    pub recurrence_factor: Option<i64>,
    /// New recurrence timeframe of the task
    pub recurrence_timeframe: Option<i64>,
    /// New recurrence base date of the task
    pub recurrence_basedate: Option<i64>,
    /// New external reference for the task
    pub reference: Option<String>,
    /// New list of tags
    pub tags: Option<Vec<String>>,
    /// New start date in YYYY-MM-DD HH:MM format
    pub date_started: Option<String>,
}

impl UpdateTaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("id", self.id)
            .with_opt("title", self.title.as_deref())
            .with_opt("color_id", self.color_id.as_deref())
            .with_opt("owner_id", self.owner_id)
            .with_opt("date_due", self.date_due.as_deref())
            .with_opt("description", self.description.as_deref())
            .with_opt("category_id", self.category_id)
            .with_opt("score", self.score)
            .with_opt("priority", self.priority)
            .with_opt("recurrence_status", self.recurrence_status)
            .with_opt("recurrence_trigger", self.recurrence_trigger)
            .with_opt("recurrence_factor", self.recurrence_factor)
            .with_opt("recurrence_timeframe", self.recurrence_timeframe)
            .with_opt("recurrence_basedate", self.recurrence_basedate)
            .with_opt("reference", self.reference.as_deref())
            .with_opt("tags", self.tags.clone())
            .with_opt("date_started", self.date_started.as_deref());
        relay(context, "update task", "updateTask", params).await
    }
}

#[mcp_tool(name = "delete_task", description = "Remove tasks")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DeleteTaskTool {
    /// ID of the task to delete
    pub task_id: i64,
}

impl DeleteTaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "delete task", "removeTask", params).await
    }
}

#[mcp_tool(name = "get_task", description = "Get task by the unique id")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTaskTool {
    /// ID of the task to get details for
    pub task_id: i64,
}

impl GetTaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "get task details", "getTask", params).await
    }
}

#[mcp_tool(name = "get_task_by_reference", description = "Get task by the external reference")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTaskByReferenceTool {
    /// ID of the project
    pub project_id: i64,
    /// External reference for the task
    pub reference: String,
}

impl GetTaskByReferenceTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("reference", self.reference.as_str());
        relay(context, "get task by reference", "getTaskByReference", params).await
    }
}

#[mcp_tool(name = "get_all_tasks", description = "Get all available tasks")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAllTasksTool {
    /// ID of the project to get tasks from
    pub project_id: i64,
    /// The value 1 for active tasks and 0 for inactive
    pub status_id: i64,
}

impl GetAllTasksTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("status_id", self.status_id);
        relay(context, "get tasks", "getAllTasks", params).await
    }
}

#[mcp_tool(name = "get_overdue_tasks", description = "Get all overdue tasks")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetOverdueTasksTool {}

impl GetOverdueTasksTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get overdue tasks", "getOverdueTasks", Params::None).await
    }
}

#[mcp_tool(
    name = "get_overdue_tasks_by_project",
    description = "Get all overdue tasks for a special project"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetOverdueTasksByProjectTool {
    /// ID of the project
    pub project_id: i64,
}

impl GetOverdueTasksByProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "get overdue tasks", "getOverdueTasksByProject", params).await
    }
}

#[mcp_tool(name = "open_task", description = "Set a task to the status open")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct OpenTaskTool {
    /// ID of the task to open
    pub task_id: i64,
}

impl OpenTaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "open task", "openTask", params).await
    }
}

#[mcp_tool(name = "close_task", description = "Set a task to the status close")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CloseTaskTool {
    /// ID of the task to close
    pub task_id: i64,
}

impl CloseTaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "close task", "closeTask", params).await
    }
}

#[mcp_tool(
    name = "move_task_position",
    description = "Move a task to another column, position or swimlane inside the same board"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct MoveTaskPositionTool {
    /// ID of the project containing the task
    pub project_id: i64,
    /// ID of the task to move
    pub task_id: i64,
    /// ID of the column to move the task to
    pub column_id: i64,
    /// New position for the task (must be >= 1)
    pub position: i64,
    /// ID of the swimlane to move the task to
    pub swimlane_id: i64,
}

impl MoveTaskPositionTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("task_id", self.task_id)
            .with("column_id", self.column_id)
            .with("position", self.position)
            .with("swimlane_id", self.swimlane_id);
        relay(context, "move task", "moveTaskPosition", params).await
    }
}

#[mcp_tool(name = "move_task_to_project", description = "Move a task to another project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct MoveTaskToProjectTool {
    /// ID of the task to move
    pub task_id: i64,
    /// ID of the project to move the task to
    pub project_id: i64,
    /// ID of the swimlane
    pub swimlane_id: Option<i64>,
    /// ID of the column
    pub column_id: Option<i64>,
    /// ID of the category
    pub category_id: Option<i64>,
    /// ID of the owner
    pub owner_id: Option<i64>,
}

impl MoveTaskToProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("task_id", self.task_id)
            .with("project_id", self.project_id)
            .with_opt("swimlane_id", self.swimlane_id)
            .with_opt("column_id", self.column_id)
            .with_opt("category_id", self.category_id)
            .with_opt("owner_id", self.owner_id);
        relay(context, "move task", "moveTaskToProject", params).await
    }
}

#[mcp_tool(name = "duplicate_task_to_project", description = "Duplicate a task to another project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DuplicateTaskToProjectTool {
    /// ID of the task to duplicate
    pub task_id: i64,
    /// ID of the project to duplicate the task to
    pub project_id: i64,
    /// ID of the swimlane
    pub swimlane_id: Option<i64>,
    /// ID of the column
    pub column_id: Option<i64>,
    /// ID of the category
    pub category_id: Option<i64>,
    /// ID of the owner
    pub owner_id: Option<i64>,
}

impl DuplicateTaskToProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("task_id", self.task_id)
            .with("project_id", self.project_id)
            .with_opt("swimlane_id", self.swimlane_id)
            .with_opt("column_id", self.column_id)
            .with_opt("category_id", self.category_id)
            .with_opt("owner_id", self.owner_id);
        relay(context, "duplicate task", "duplicateTaskToProject", params).await
    }
}

#[mcp_tool(name = "search_tasks", description = "Find tasks by using the search engine")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SearchTasksTool {
    /// ID of the project to search tasks in
    pub project_id: i64,
    /// Search query string
    pub query: String,
}

impl SearchTasksTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("query", self.query.as_str());
        relay(context, "search tasks", "searchTasks", params).await
    }
}

#[mcp_tool(name = "assign_task", description = "Assign tasks to users")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct AssignTaskTool {
    /// ID of the task to assign
    pub task_id: i64,
    /// ID of the user to assign the task to
    pub user_id: i64,
}

impl AssignTaskTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("id", self.task_id)
            .with("owner_id", self.user_id);
        relay(context, "assign task", "updateTask", params).await
    }
}

#[mcp_tool(name = "set_task_due_date", description = "Set task deadlines")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SetTaskDueDateTool {
    /// ID of the task to set the due date for
    pub task_id: i64,
    /// Due date in YYYY-MM-DD format
    pub due_date: String,
}

impl SetTaskDueDateTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("id", self.task_id)
            .with("date_due", self.due_date.as_str());
        relay(context, "set task due date", "updateTask", params).await
    }
}
