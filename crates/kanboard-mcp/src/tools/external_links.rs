use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, McpContext};

#[mcp_tool(
    name = "get_external_task_link_types",
    description = "Get all registered external link providers"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetExternalTaskLinkTypesTool {}

impl GetExternalTaskLinkTypesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get external link types", "getExternalTaskLinkTypes", Params::None).await
    }
}

#[mcp_tool(
    name = "get_ext_link_provider_deps",
    description = "Get available dependencies for a given provider"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetExtLinkProviderDepsTool {
    /// Provider name
    pub provider_name: String,
}

impl GetExtLinkProviderDepsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("providerName", self.provider_name.as_str());
        relay(
            context,
            "get provider dependencies",
            "getExternalTaskLinkProviderDependencies",
            params,
        )
        .await
    }
}

#[mcp_tool(name = "create_external_task_link", description = "Create a new external link")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateExternalTaskLinkTool {
    /// ID of the task
    pub task_id: i64,
    /// URL of the external link
    pub url: String,
    /// Dependency of the external link
    pub dependency: String,
    /// Type of the external link (provider name)
    #[serde(rename = "type")]
    pub link_type: Option<String>,
    /// Title of the external link
    pub title: Option<String>,
}

impl CreateExternalTaskLinkTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("task_id", self.task_id)
            .with("url", self.url.as_str())
            .with("dependency", self.dependency.as_str())
            .with_opt("type", self.link_type.as_deref())
            .with_opt("title", self.title.as_deref());
        relay(context, "create external link", "createExternalTaskLink", params).await
    }
}

#[mcp_tool(name = "update_external_task_link", description = "Update external task link")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateExternalTaskLinkTool {
    /// ID of the task
    pub task_id: i64,
    /// ID of the external link to update
    pub link_id: i64,
    /// New title for the external link
    pub title: Option<String>,
    /// New URL for the external link
    pub url: Option<String>,
    /// New dependency of the external link
    pub dependency: Option<String>,
}

impl UpdateExternalTaskLinkTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("task_id", self.task_id)
            .with("link_id", self.link_id)
            .with_opt("title", self.title.as_deref())
            .with_opt("url", self.url.as_deref())
            .with_opt("dependency", self.dependency.as_deref());
        relay(context, "update external link", "updateExternalTaskLink", params).await
    }
}

#[mcp_tool(name = "get_external_task_link_by_id", description = "Get an external task link by ID")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetExternalTaskLinkByIdTool {
    /// ID of the task
    pub task_id: i64,
    /// ID of the external link
    pub link_id: i64,
}

impl GetExternalTaskLinkByIdTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("task_id", self.task_id)
            .with("link_id", self.link_id);
        relay(context, "get external link", "getExternalTaskLinkById", params).await
    }
}

#[mcp_tool(
    name = "get_all_external_task_links",
    description = "Get all external links attached to a task"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAllExternalTaskLinksTool {
    /// ID of the task to get external links for
    pub task_id: i64,
}

impl GetAllExternalTaskLinksTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("task_id", self.task_id);
        relay(context, "get external links", "getAllExternalTaskLinks", params).await
    }
}

#[mcp_tool(name = "remove_external_task_link", description = "Remove an external link")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveExternalTaskLinkTool {
    /// ID of the task
    pub task_id: i64,
    /// ID of the external link to remove
    pub link_id: i64,
}

impl RemoveExternalTaskLinkTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("task_id", self.task_id)
            .with("link_id", self.link_id);
        relay(context, "remove external link", "removeExternalTaskLink", params).await
    }
}
