use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, McpContext};

#[mcp_tool(name = "get_users", description = "List all system users")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetUsersTool {}

impl GetUsersTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get users", "getAllUsers", Params::None).await
    }
}

#[mcp_tool(name = "create_user", description = "Create a new user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateUserTool {
    /// Username for the new user (must be unique)
    pub username: String,
    /// Password for the new user (must have at least 6 characters)
    pub password: String,
    /// Full name of the new user
    pub name: Option<String>,
    /// Email address of the new user
    pub email: Option<String>,
    /// Role for the user (app-admin, app-manager, app-user)
    pub role: Option<String>,
}

impl CreateUserTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("username", self.username.as_str())
            .with("password", self.password.as_str())
            .with_opt("name", self.name.as_deref())
            .with_opt("email", self.email.as_deref())
            .with_opt("role", self.role.as_deref());
        relay(context, "create user", "createUser", params).await
    }
}

#[mcp_tool(name = "create_ldap_user", description = "Create a new user authenticated by LDAP")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateLdapUserTool {
    /// Username for the LDAP user
    pub username: String,
}

impl CreateLdapUserTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("username", self.username.as_str());
        relay(context, "create LDAP user", "createLdapUser", params).await
    }
}

#[mcp_tool(name = "get_user", description = "Get user information by ID")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetUserTool {
    /// ID of the user to retrieve
    pub user_id: i64,
}

impl GetUserTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("user_id", self.user_id);
        relay(context, "get user", "getUser", params).await
    }
}

#[mcp_tool(name = "get_user_by_name", description = "Get user information by username")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetUserByNameTool {
    /// Username of the user to retrieve
    pub username: String,
}

impl GetUserByNameTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("username", self.username.as_str());
        relay(context, "get user by name", "getUserByName", params).await
    }
}

#[mcp_tool(name = "update_user", description = "Update a user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateUserTool {
    /// ID of the user to update
    pub id: i64,
    /// New username
    pub username: Option<String>,
    /// New full name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New role (app-admin, app-manager, app-user)
    pub role: Option<String>,
}

impl UpdateUserTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("id", self.id)
            .with_opt("username", self.username.as_deref())
            .with_opt("name", self.name.as_deref())
            .with_opt("email", self.email.as_deref())
            .with_opt("role", self.role.as_deref());
        relay(context, "update user", "updateUser", params).await
    }
}

#[mcp_tool(name = "remove_user", description = "Remove a user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveUserTool {
    /// ID of the user to remove
    pub user_id: i64,
}

impl RemoveUserTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("user_id", self.user_id);
        relay(context, "remove user", "removeUser", params).await
    }
}

#[mcp_tool(name = "disable_user", description = "Disable a user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DisableUserTool {
    /// ID of the user to disable
    pub user_id: i64,
}

impl DisableUserTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("user_id", self.user_id);
        relay(context, "disable user", "disableUser", params).await
    }
}

#[mcp_tool(name = "enable_user", description = "Enable a user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct EnableUserTool {
    /// ID of the user to enable
    pub user_id: i64,
}

impl EnableUserTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("user_id", self.user_id);
        relay(context, "enable user", "enableUser", params).await
    }
}

#[mcp_tool(name = "is_active_user", description = "Check if a user is active")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct IsActiveUserTool {
    /// ID of the user to check
    pub user_id: i64,
}

impl IsActiveUserTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("user_id", self.user_id);
        relay(context, "check if user is active", "isActiveUser", params).await
    }
}
