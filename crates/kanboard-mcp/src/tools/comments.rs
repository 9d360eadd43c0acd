use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::NamedParams;

use super::{fail, relay, McpContext};

const COMMENT_VISIBILITIES: [&str; 3] = ["app-user", "app-manager", "app-admin"];

#[mcp_tool(name = "create_comment", description = "Create a new comment")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateCommentTool {
    /// ID of the task to add a comment to
    pub task_id: i64,
    /// ID of the user adding the comment
    pub user_id: i64,
    /// Markdown content for the comment
    pub content: String,
    /// External reference for the comment
    pub reference: Option<String>,
    /// Visibility of the comment (app-user, app-manager, app-admin)
    pub visibility: Option<String>,
}

impl CreateCommentTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        if let Some(visibility) = self.visibility.as_deref() {
            if !COMMENT_VISIBILITIES.contains(&visibility) {
                return fail(format!(
                    "Invalid visibility '{visibility}': must be one of {}",
                    COMMENT_VISIBILITIES.join(", ")
                ));
            }
        }
        let params = NamedParams::new()
            .with("task_id", self.task_id)
            .with("user_id", self.user_id)
            .with("content", self.content.as_str())
            .with_opt("reference", self.reference.as_deref())
            .with_opt("visibility", self.visibility.as_deref());
        relay(context, "create comment", "createComment", params).await
    }
}

#[mcp_tool(name = "get_task_comments", description = "Get task comments")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTaskCommentsTool {
    /// ID of the task to get comments for
    pub task_id: i64,
}

impl GetTaskCommentsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "get task comments", "getAllComments", params).await
    }
}

#[mcp_tool(name = "get_comment", description = "Get comment information")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetCommentTool {
    /// ID of the comment to get details for
    pub comment_id: i64,
}

impl GetCommentTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("comment_id", self.comment_id);
        relay(context, "get comment details", "getComment", params).await
    }
}

#[mcp_tool(name = "update_comment", description = "Update a comment")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateCommentTool {
    /// ID of the comment to update
    pub id: i64,
    /// New Markdown content for the comment
    pub content: String,
}

impl UpdateCommentTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("id", self.id)
            .with("content", self.content.as_str());
        relay(context, "update comment", "updateComment", params).await
    }
}

#[mcp_tool(name = "remove_comment", description = "Remove a comment")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveCommentTool {
    /// ID of the comment to remove
    pub comment_id: i64,
}

impl RemoveCommentTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("comment_id", self.comment_id);
        relay(context, "remove comment", "removeComment", params).await
    }
}
