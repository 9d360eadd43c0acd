//! Project membership for users and groups.

use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

use kanboard_core::rpc::NamedParams;

use super::{fail, ok_json, relay, McpContext};

const DEFAULT_PROJECT_ROLE: &str = "project-member";
const PROJECT_ROLES: [&str; 3] = ["project-member", "project-manager", "project-viewer"];

#[mcp_tool(name = "get_project_users", description = "Get all members of a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectUsersTool {
    /// ID of the project to get users from
    pub project_id: i64,
}

impl GetProjectUsersTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("project_id", self.project_id);
        relay(context, "get project users", "getProjectUsers", params).await
    }
}

#[mcp_tool(
    name = "get_assignable_users",
    description = "Get users that can be assigned to a task for a project (all members except viewers)"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAssignableUsersTool {
    /// ID of the project
    pub project_id: i64,
    /// Prepend the 'Unassigned' option (default is false)
    pub prepend_unassigned: Option<bool>,
}

impl GetAssignableUsersTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with_opt("prepend_unassigned", self.prepend_unassigned);
        relay(context, "get assignable users", "getAssignableUsers", params).await
    }
}

#[mcp_tool(name = "add_project_user", description = "Grant access to a project for a user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct AddProjectUserTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the user
    pub user_id: i64,
    /// Role to assign
    pub role: Option<String>,
}

impl AddProjectUserTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("user_id", self.user_id)
            .with_opt("role", self.role.as_deref());
        relay(context, "add project user", "addProjectUser", params).await
    }
}

#[mcp_tool(name = "add_project_group", description = "Grant access to a project for a group")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct AddProjectGroupTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the group
    pub group_id: i64,
    /// Role to assign
    pub role: Option<String>,
}

impl AddProjectGroupTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("group_id", self.group_id)
            .with_opt("role", self.role.as_deref());
        relay(context, "add project group", "addProjectGroup", params).await
    }
}

#[mcp_tool(name = "remove_project_user", description = "Revoke user access to a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveProjectUserTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the user
    pub user_id: i64,
}

impl RemoveProjectUserTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("user_id", self.user_id);
        relay(context, "remove project user", "removeProjectUser", params).await
    }
}

#[mcp_tool(name = "remove_project_group", description = "Revoke group access to a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveProjectGroupTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the group
    pub group_id: i64,
}

impl RemoveProjectGroupTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("group_id", self.group_id);
        relay(context, "remove project group", "removeProjectGroup", params).await
    }
}

#[mcp_tool(name = "change_project_user_role", description = "Change role of a user for a project")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ChangeProjectUserRoleTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the user
    pub user_id: i64,
    /// New role to assign
    pub role: String,
}

impl ChangeProjectUserRoleTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("user_id", self.user_id)
            .with("role", self.role.as_str());
        relay(context, "change project user role", "changeProjectUserRole", params).await
    }
}

#[mcp_tool(
    name = "change_project_group_role",
    description = "Change role of a group for a project"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ChangeProjectGroupRoleTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the group
    pub group_id: i64,
    /// New role to assign
    pub role: String,
}

impl ChangeProjectGroupRoleTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("group_id", self.group_id)
            .with("role", self.role.as_str());
        relay(context, "change project group role", "changeProjectGroupRole", params).await
    }
}

#[mcp_tool(
    name = "get_project_user_role",
    description = "Get the role of a user for a given project"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetProjectUserRoleTool {
    /// ID of the project
    pub project_id: i64,
    /// ID of the user
    pub user_id: i64,
}

impl GetProjectUserRoleTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("user_id", self.user_id);
        relay(context, "get project user role", "getProjectUserRole", params).await
    }
}

#[mcp_tool(
    name = "assign_user_to_project",
    description = "Assign a user to a project with a specific role"
)]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct AssignUserToProjectTool {
    /// ID of the project to assign the user to
    pub project_id: i64,
    /// ID of the user to assign
    pub user_id: i64,
    /// Role to assign: project-member (default), project-manager or project-viewer
    pub role: Option<String>,
}

impl AssignUserToProjectTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let role = self.role.as_deref().unwrap_or(DEFAULT_PROJECT_ROLE);
        if !PROJECT_ROLES.contains(&role) {
            return fail(format!(
                "Invalid role '{role}': must be one of {}",
                PROJECT_ROLES.join(", ")
            ));
        }
        let params = NamedParams::new()
            .with("project_id", self.project_id)
            .with("user_id", self.user_id)
            .with("role", role);
        match context.api.call("addProjectUser", params.into()).await {
            Ok(value) => ok_json(&value),
            Err(err) if err.status_code() == Some(403) => {
                warn!(
                    project_id = self.project_id,
                    user_id = self.user_id,
                    "addProjectUser forbidden"
                );
                fail(format!(
                    "Failed to assign user to project: {err}. \
                     The API user needs the app-admin role to manage project members"
                ))
            }
            Err(err) => fail(format!("Failed to assign user to project: {err}")),
        }
    }
}
