use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use serde::{Deserialize, Serialize};

use kanboard_core::rpc::{NamedParams, Params};

use super::{relay, McpContext};

#[mcp_tool(name = "create_group", description = "Create a new group")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CreateGroupTool {
    /// Name of the group to create
    pub name: String,
    /// External ID for the group
    pub external_id: Option<String>,
}

impl CreateGroupTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("name", self.name.as_str())
            .with_opt("external_id", self.external_id.as_deref());
        relay(context, "create group", "createGroup", params).await
    }
}

#[mcp_tool(name = "update_group", description = "Update a group")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateGroupTool {
    /// ID of the group to update
    pub group_id: i64,
    /// New name for the group
    pub name: Option<String>,
    /// New external ID for the group
    pub external_id: Option<String>,
}

impl UpdateGroupTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("group_id", self.group_id)
            .with_opt("name", self.name.as_deref())
            .with_opt("external_id", self.external_id.as_deref());
        relay(context, "update group", "updateGroup", params).await
    }
}

#[mcp_tool(name = "remove_group", description = "Remove a group")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveGroupTool {
    /// ID of the group to remove
    pub group_id: i64,
}

impl RemoveGroupTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("group_id", self.group_id);
        relay(context, "remove group", "removeGroup", params).await
    }
}

#[mcp_tool(name = "get_group", description = "Get one group")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetGroupTool {
    /// ID of the group to retrieve
    pub group_id: i64,
}

impl GetGroupTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("group_id", self.group_id);
        relay(context, "get group", "getGroup", params).await
    }
}

#[mcp_tool(name = "get_all_groups", description = "Get all groups")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAllGroupsTool {}

impl GetAllGroupsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        relay(context, "get groups", "getAllGroups", Params::None).await
    }
}

#[mcp_tool(name = "get_member_groups", description = "Get all groups for a given user")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetMemberGroupsTool {
    /// ID of the user
    pub user_id: i64,
}

impl GetMemberGroupsTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("user_id", self.user_id);
        relay(context, "get member groups", "getMemberGroups", params).await
    }
}

#[mcp_tool(name = "get_group_members", description = "Get all members of a group")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetGroupMembersTool {
    /// ID of the group
    pub group_id: i64,
}

impl GetGroupMembersTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new().with("group_id", self.group_id);
        relay(context, "get group members", "getGroupMembers", params).await
    }
}

#[mcp_tool(name = "add_group_member", description = "Add a user to a group")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct AddGroupMemberTool {
    /// ID of the group
    pub group_id: i64,
    /// ID of the user to add
    pub user_id: i64,
}

impl AddGroupMemberTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("group_id", self.group_id)
            .with("user_id", self.user_id);
        relay(context, "add group member", "addGroupMember", params).await
    }
}

#[mcp_tool(name = "remove_group_member", description = "Remove a user from a group")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveGroupMemberTool {
    /// ID of the group
    pub group_id: i64,
    /// ID of the user to remove
    pub user_id: i64,
}

impl RemoveGroupMemberTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("group_id", self.group_id)
            .with("user_id", self.user_id);
        relay(context, "remove group member", "removeGroupMember", params).await
    }
}

#[mcp_tool(name = "is_group_member", description = "Check if a user is member of a group")]
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct IsGroupMemberTool {
    /// ID of the group
    pub group_id: i64,
    /// ID of the user
    pub user_id: i64,
}

impl IsGroupMemberTool {
    pub async fn call(&self, context: &McpContext) -> Result<CallToolResult, CallToolError> {
        let params = NamedParams::new()
            .with("group_id", self.group_id)
            .with("user_id", self.user_id);
        relay(context, "check group membership", "isGroupMember", params).await
    }
}
