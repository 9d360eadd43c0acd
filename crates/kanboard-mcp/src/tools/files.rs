//! Project and task attachments. Blobs travel base64-encoded.

use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, McpContext};

#[mcp_tool(
    name = "create_project_file",
    description = "Create and upload a new project attachment"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateProjectFileTool {
    /// ID of the project to attach the file to
    pub project_id: i64,
    /// Name of the file
    pub filename: String,
    /// File content encoded in base64
    pub blob: String,
}

impl CreateProjectFileTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("filename", self.filename.as_str())
            .with("blob", self.blob.as_str());
        relay(context, "create project file", "createProjectFile", params).await
    }
}

#[mcp_tool(name = "get_all_project_files", description = "Get all files attached to a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAllProjectFilesTool {
    /// ID of the project to get files from
    pub project_id: i64,
}

impl GetAllProjectFilesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "get project files", "getAllProjectFiles", params).await
    }
}

#[mcp_tool(name = "get_project_file", description = "Get file information")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectFileTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the file to retrieve
    pub file_id: i64,
}

impl GetProjectFileTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("file_id", self.file_id);
        relay(context, "get project file", "getProjectFile", params).await
    }
}

#[mcp_tool(
    name = "download_project_file",
    description = "Download project file contents (encoded in base64)"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DownloadProjectFileTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the file to download
    pub file_id: i64,
}

impl DownloadProjectFileTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("file_id", self.file_id);
        relay(context, "download project file", "downloadProjectFile", params).await
    }
}

#[mcp_tool(name = "remove_project_file", description = "Remove a file associated to a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveProjectFileTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the file to remove
    pub file_id: i64,
}

impl RemoveProjectFileTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("file_id", self.file_id);
        relay(context, "remove project file", "removeProjectFile", params).await
    }
}

#[mcp_tool(
    name = "remove_all_project_files",
    description = "Remove all files associated to a project"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveAllProjectFilesTool {
    /// ID of the project to remove all files from
    pub project_id: i64,
}

impl RemoveAllProjectFilesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "remove project files", "removeAllProjectFiles", params).await
    }
}

#[mcp_tool(name = "create_task_file", description = "Create and upload a new task attachment")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateTaskFileTool {
    /// The project ID
    pub project_id: i64,
    /// The task ID
    pub task_id: i64,
    /// The filename
    pub filename: String,
    /// File content encoded in base64
    pub blob: String,
}

impl CreateTaskFileTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![
            json!(self.project_id),
            json!(self.task_id),
            json!(self.filename),
            json!(self.blob),
        ]);
        relay(context, "create task file", "createTaskFile", params).await
    }
}

#[mcp_tool(name = "get_all_task_files", description = "Get all files attached to task")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAllTaskFilesTool {
    /// The task ID
    pub task_id: i64,
}

impl GetAllTaskFilesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "get task files", "getAllTaskFiles", params).await
    }
}

#[mcp_tool(name = "get_task_file", description = "Get file information")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTaskFileTool {
    /// The file ID
    pub file_id: i64,
}

impl GetTaskFileTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.file_id)]);
        relay(context, "get task file", "getTaskFile", params).await
    }
}

#[mcp_tool(name = "download_task_file", description = "Download file contents (encoded in base64)")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DownloadTaskFileTool {
    /// The file ID
    pub file_id: i64,
}

impl DownloadTaskFileTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.file_id)]);
        relay(context, "download task file", "downloadTaskFile", params).await
    }
}

#[mcp_tool(name = "remove_task_file", description = "Remove file")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveTaskFileTool {
    /// The file ID
    pub file_id: i64,
}

impl RemoveTaskFileTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.file_id)]);
        relay(context, "remove task file", "removeTaskFile", params).await
    }
}

#[mcp_tool(name = "remove_all_task_files", description = "Remove all files associated to a task")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveAllTaskFilesTool {
    /// The task ID
    pub task_id: i64,
}

impl RemoveAllTaskFilesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "remove task files", "removeAllTaskFiles", params).await
    }
}
