use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, McpContext};

#[mcp_tool(name = "get_columns", description = "List project columns")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetColumnsTool {
    /// ID of the project to get columns from
    pub project_id: i64,
}

impl GetColumnsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "get columns", "getColumns", params).await
    }
}

#[mcp_tool(name = "get_column", description = "Get a single column")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetColumnTool {
    /// ID of the column to get details for
    pub column_id: i64,
}

impl GetColumnTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("column_id", self.column_id);
        relay(context, "get column details", "getColumn", params).await
    }
}

#[mcp_tool(name = "create_column", description = "Add new columns")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateColumnTool {
    /// ID of the project to add the column to
    pub project_id: i64,
    /// Title of the column to create
    pub title: String,
    /// Task limit for the new column
    pub task_limit: Option<i64>,
    /// Description for the new column
    pub description: Option<String>,
}

impl CreateColumnTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("title", self.title.as_str())
            .with_opt("task_limit", self.task_limit)
            .with_opt("description", self.description.as_deref());
        relay(context, "create column", "addColumn", params).await
    }
}

#[mcp_tool(name = "update_column", description = "Modify column settings")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateColumnTool {
    /// ID of the column to update
    pub column_id: i64,
    /// New title for the column
    pub title: String,
    /// New task limit for the column
    pub task_limit: Option<i64>,
    /// New description for the column
    pub description: Option<String>,
}

impl UpdateColumnTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("column_id", self.column_id)
            .with("title", self.title.as_str())
            .with_opt("task_limit", self.task_limit)
            .with_opt("description", self.description.as_deref());
        relay(context, "update column", "updateColumn", params).await
    }
}

#[mcp_tool(name = "delete_column", description = "Remove columns")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DeleteColumnTool {
    /// ID of the column to delete
    pub column_id: i64,
}

impl DeleteColumnTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("column_id", self.column_id);
        relay(context, "delete column", "removeColumn", params).await
    }
}

#[mcp_tool(name = "reorder_columns", description = "Change column positions")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ReorderColumnsTool {
    /// ID of the project containing the columns
    pub project_id: i64,
    /// ID of the column to reorder
    pub column_id: i64,
    /// New position for the column (must be >= 1)
    pub position: i64,
}

impl ReorderColumnsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("column_id", self.column_id)
            .with("position", self.position);
        relay(context, "reorder columns", "changeColumnPosition", params).await
    }
}

#[mcp_tool(name = "get_board", description = "Get all necessary information to display a board")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetBoardTool {
    /// ID of the project to get board details for
    pub project_id: i64,
}

impl GetBoardTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = Params::positional(vec![json!(self.project_id)]);
        relay(context, "get board details", "getBoard", params).await
    }
}
