use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, McpContext};

#[mcp_tool(name = "get_projects", description = "List all projects")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectsTool {}

impl GetProjectsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get projects", "getAllProjects", Params::None).await
    }
}

#[mcp_tool(name = "create_project", description = "Create new projects")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateProjectTool {
    /// Name of the project to create
    pub name: String,
    /// Description of the project
    pub description: Option<String>,
    /// ID of the project owner
    pub owner_id: Option<i64>,
    /// Alphanumeric project identifier
    pub identifier: Option<String>,
    /// Project start date in ISO8601 format
    pub start_date: Option<String>,
    /// Project end date in ISO8601 format
    pub end_date: Option<String>,
    /// Default task priority
    pub priority_default: Option<i64>,
    /// Start priority
    pub priority_start: Option<i64>,
    /// End priority
    pub priority_end: Option<i64>,
    /// Project email address
    pub email: Option<String>,
}

impl CreateProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("name", self.name.as_str())
            .with_opt("description", self.description.as_deref())
            .with_opt("owner_id", self.owner_id)
            .with_opt("identifier", self.identifier.as_deref())
            .with_opt("start_date", self.start_date.as_deref())
            .with_opt("end_date", self.end_date.as_deref())
            .with_opt("priority_default", self.priority_default)
            .with_opt("priority_start", self.priority_start)
            .with_opt("priority_end", self.priority_end)
            .with_opt("email", self.email.as_deref());
        relay(context, "create project", "createProject", params).await
    }
}

#[mcp_tool(name = "get_project_by_id", description = "Get project information by ID")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectByIdTool {
    /// ID of the project to retrieve
    pub project_id: i64,
}

impl GetProjectByIdTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "get project by id", "getProjectById", params).await
    }
}

#[mcp_tool(name = "get_project_by_name", description = "Get project information by name")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectByNameTool {
    /// Name of the project to retrieve
    pub name: String,
}

impl GetProjectByNameTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("name", self.name.as_str());
        relay(context, "get project by name", "getProjectByName", params).await
    }
}

#[mcp_tool(
    name = "get_project_by_identifier",
    description = "Get project information by identifier"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectByIdentifierTool {
    /// Identifier of the project to retrieve
    pub identifier: String,
}

impl GetProjectByIdentifierTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("identifier", self.identifier.as_str());
        relay(context, "get project by identifier", "getProjectByIdentifier", params).await
    }
}

#[mcp_tool(name = "get_project_by_email", description = "Get project information by email")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectByEmailTool {
    /// Email of the project to retrieve
    pub email: String,
}

impl GetProjectByEmailTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("email", self.email.as_str());
        relay(context, "get project by email", "getProjectByEmail", params).await
    }
}

#[mcp_tool(name = "get_all_projects", description = "Get all available projects")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAllProjectsTool {}

impl GetAllProjectsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get all projects", "getAllProjects", Params::None).await
    }
}

#[mcp_tool(name = "update_project", description = "Update a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateProjectTool {
    /// ID of the project to update
    pub project_id: i64,
    /// New name for the project
    pub name: Option<String>,
    /// New description for the project
    pub description: Option<String>,
    /// New owner ID for the project
    pub owner_id: Option<i64>,
    /// New alphanumeric identifier for the project
    pub identifier: Option<String>,
    /// New start date in ISO8601 format
    pub start_date: Option<String>,
    /// New end date in ISO8601 format
    pub end_date: Option<String>,
    /// New default task priority
    pub priority_default: Option<i64>,
    /// New start priority
    pub priority_start: Option<i64>,
    /// New end priority
    pub priority_end: Option<i64>,
    /// New project email address
    pub email: Option<String>,
}

impl UpdateProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with_opt("name", self.name.as_deref())
            .with_opt("description", self.description.as_deref())
            .with_opt("owner_id", self.owner_id)
            .with_opt("identifier", self.identifier.as_deref())
            .with_opt("start_date", self.start_date.as_deref())
            .with_opt("end_date", self.end_date.as_deref())
            .with_opt("priority_default", self.priority_default)
            .with_opt("priority_start", self.priority_start)
            .with_opt("priority_end", self.priority_end)
            .with_opt("email", self.email.as_deref());
        relay(context, "update project", "updateProject", params).await
    }
}

#[mcp_tool(name = "remove_project", description = "Remove a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveProjectTool {
    /// ID of the project to remove
    pub project_id: i64,
}

impl RemoveProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "remove project", "removeProject", params).await
    }
}

#[mcp_tool(name = "enable_project", description = "Enable a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct EnableProjectTool {
    /// ID of the project to enable
    pub project_id: i64,
}

impl EnableProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "enable project", "enableProject", params).await
    }
}

#[mcp_tool(name = "disable_project", description = "Disable a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DisableProjectTool {
    /// ID of the project to disable
    pub project_id: i64,
}

impl DisableProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "disable project", "disableProject", params).await
    }
}

#[mcp_tool(
    name = "enable_project_public_access",
    description = "Enable public access for a given project"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct EnableProjectPublicAccessTool {
    /// ID of the project to enable public access for
    pub project_id: i64,
}

impl EnableProjectPublicAccessTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "enable project public access", "enableProjectPublicAccess", params).await
    }
}

#[mcp_tool(
    name = "disable_project_public_access",
    description = "Disable public access for a given project"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DisableProjectPublicAccessTool {
    /// ID of the project to disable public access for
    pub project_id: i64,
}

impl DisableProjectPublicAccessTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "disable project public access", "disableProjectPublicAccess", params).await
    }
}

#[mcp_tool(name = "get_project_activity", description = "Get activity stream for a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectActivityTool {
    /// ID of the project to get activity for
    pub project_id: i64,
}

impl GetProjectActivityTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "get project activity", "getProjectActivity", params).await
    }
}

#[mcp_tool(
    name = "get_project_activities",
    description = "Get activity feed for one or more projects"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectActivitiesTool {
    /// IDs of the projects to get activities for
    pub project_ids: Vec<i64>,
}

impl GetProjectActivitiesTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_ids", self.project_ids.clone());
        relay(context, "get project activities", "getProjectActivities", params).await
    }
}
