use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::NamedParams;

use super::{relay, McpContext};

#[mcp_tool(name = "get_categories", description = "List project categories")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetCategoriesTool {
    /// ID of the project to get categories from
    pub project_id: i64,
}

impl GetCategoriesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "get categories", "getAllCategories", params).await
    }
}

#[mcp_tool(name = "create_category", description = "Add task categories")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateCategoryTool {
    /// Name of the category to create
    pub name: String,
    /// ID of the project to add the category to
    pub project_id: i64,
    /// Color ID for the category (e.g., 'blue', 'green')
    pub color_id: Option<String>,
}

impl CreateCategoryTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("name", self.name.as_str())
            .with("project_id", self.project_id)
            .with_opt("color_id", self.color_id.as_deref());
        relay(context, "create category", "createCategory", params).await
    }
}

#[mcp_tool(name = "get_category", description = "Get category information")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetCategoryTool {
    /// ID of the category to get details for
    pub category_id: i64,
}

impl GetCategoryTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("category_id", self.category_id);
        relay(context, "get category details", "getCategory", params).await
    }
}

#[mcp_tool(name = "update_category", description = "Modify categories")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateCategoryTool {
    /// ID of the category to update
    pub category_id: i64,
    /// New name for the category
    pub name: Option<String>,
    /// Color ID for the category (e.g., 'blue', 'green')
    pub color_id: Option<String>,
}

impl UpdateCategoryTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("id", self.category_id)
            .with_opt("name", self.name.as_deref())
            .with_opt("color_id", self.color_id.as_deref());
        relay(context, "update category", "updateCategory", params).await
    }
}

#[mcp_tool(name = "delete_category", description = "Remove categories")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DeleteCategoryTool {
    /// ID of the category to delete
    pub category_id: i64,
}

impl DeleteCategoryTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("category_id", self.category_id);
        relay(context, "delete category", "removeCategory", params).await
    }
}
