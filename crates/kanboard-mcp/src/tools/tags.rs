use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, McpContext};

#[mcp_tool(name = "get_all_tags", description = "Get all tags")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAllTagsTool {}

impl GetAllTagsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get tags", "getAllTags", Params::None).await
    }
}

#[mcp_tool(name = "get_tags_by_project", description = "Get all tags for a given project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTagsByProjectTool {
    /// ID of the project to get tags for
    pub project_id: i64,
}

impl GetTagsByProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "get project tags", "getTagsByProject", params).await
    }
}

#[mcp_tool(name = "create_tag", description = "Create a new tag")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateTagTool {
    /// ID of the project to associate the tag with
    pub project_id: i64,
    /// Name of the tag
    pub tag: String,
    /// Color of the tag (e.g., 'blue')
    pub color_id: Option<String>,
}

impl CreateTagTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("tag", self.tag.as_str())
            .with_opt("color_id", self.color_id.as_deref());
        relay(context, "create tag", "createTag", params).await
    }
}

#[mcp_tool(name = "update_tag", description = "Rename a tag")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateTagTool {
    /// ID of the tag to update
    pub tag_id: i64,
    /// New name for the tag
    pub tag: String,
    /// New color for the tag
    pub color_id: Option<String>,
}

impl UpdateTagTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("tag_id", self.tag_id)
            .with("tag", self.tag.as_str())
            .with_opt("color_id", self.color_id.as_deref());
        relay(context, "update tag", "updateTag", params).await
    }
}

#[mcp_tool(name = "remove_tag", description = "Remove a tag")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveTagTool {
    /// ID of the tag to remove
    pub tag_id: i64,
}

impl RemoveTagTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("tag_id", self.tag_id);
        relay(context, "remove tag", "removeTag", params).await
    }
}

#[mcp_tool(name = "set_task_tags", description = "Assign/Create/Update tags for a task")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SetTaskTagsTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the task
    pub task_id: i64,
    /// List of tags
    pub tags: Vec<String>,
}

impl SetTaskTagsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("task_id", self.task_id)
            .with("tags", self.tags.clone());
        relay(context, "set task tags", "setTaskTags", params).await
    }
}

#[mcp_tool(name = "get_task_tags", description = "Get assigned tags to a task")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTaskTagsTool {
    /// ID of the task
    pub task_id: i64,
}

impl GetTaskTagsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "get task tags", "getTaskTags", params).await
    }
}
