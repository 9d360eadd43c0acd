use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, JsonObject, McpContext, StringMap};

#[mcp_tool(
    name = "get_task_metadata",
    description = "Get all metadata related to a task by task unique id"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTaskMetadataTool {
    /// ID of the task to get metadata from
    pub task_id: i64,
}

impl GetTaskMetadataTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.task_id)]);
        relay(context, "get task metadata", "getTaskMetadata", params).await
    }
}

#[mcp_tool(
    name = "get_task_metadata_by_name",
    description = "Get metadata related to a task by task unique id and metakey (name)"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTaskMetadataByNameTool {
    /// ID of the task to get metadata from
    pub task_id: i64,
    /// Name of the metadata key
    pub name: String,
}

impl GetTaskMetadataByNameTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.task_id), json!(self.name)]);
        relay(context, "get task metadata", "getTaskMetadataByName", params).await
    }
}

#[mcp_tool(name = "save_task_metadata", description = "Save/update task metadata")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SaveTaskMetadataTool {
    /// ID of the task to save/update metadata for
    pub task_id: i64,
    /// Metadata values as string key-value pairs
    pub values: StringMap,
}

impl SaveTaskMetadataTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("task_id", self.task_id)
            .with("values", self.values.clone());
        relay(context, "save task metadata", "saveTaskMetadata", params).await
    }
}

#[mcp_tool(name = "remove_task_metadata", description = "Remove task metadata by name")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveTaskMetadataTool {
    /// ID of the task to remove metadata from
    pub task_id: i64,
    /// Name of the metadata key to remove
    pub name: String,
}

impl RemoveTaskMetadataTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.task_id), json!(self.name)]);
        relay(context, "remove task metadata", "removeTaskMetadata", params).await
    }
}

#[mcp_tool(name = "get_project_metadata", description = "Get Project metadata")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectMetadataTool {
    /// ID of the project to get metadata from
    pub project_id: i64,
}

impl GetProjectMetadataTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "get project metadata", "getProjectMetadata", params).await
    }
}

#[mcp_tool(name = "get_project_metadata_by_name", description = "Fetch single metadata value")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectMetadataByNameTool {
    /// ID of the project
    pub project_id: i64,
    /// Name of the metadata key
    pub name: String,
}

impl GetProjectMetadataByNameTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("name", self.name.as_str());
        relay(context, "get project metadata", "getProjectMetadataByName", params).await
    }
}

#[mcp_tool(name = "save_project_metadata", description = "Add or update metadata")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SaveProjectMetadataTool {
    /// ID of the project
    pub project_id: i64,
    /// Dictionary of metadata values (key-value pairs)
    pub values: JsonObject,
}

impl SaveProjectMetadataTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("values", self.values.clone());
        relay(context, "save project metadata", "saveProjectMetadata", params).await
    }
}

#[mcp_tool(name = "remove_project_metadata", description = "Remove a project metadata")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveProjectMetadataTool {
    /// ID of the project
    pub project_id: i64,
    /// Name of the metadata key to remove
    pub name: String,
}

impl RemoveProjectMetadataTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("name", self.name.as_str());
        relay(context, "remove project metadata", "removeProjectMetadata", params).await
    }
}
