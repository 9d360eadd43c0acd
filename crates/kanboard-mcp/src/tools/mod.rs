//! MCP tool surface for Kanboard.
//!
//! Every tool maps onto one Kanboard JSON-RPC method, except the lookup tools
//! (`get_tasks`, `create_task`, `move_task`) which resolve a name first.
//! Arguments are checked against the tool's input schema before any request
//! leaves the process.

mod actions;
mod application;
mod categories;
mod columns;
mod comments;
mod external_links;
mod files;
mod groups;
mod links;
mod me;
mod metadata;
mod permissions;
mod projects;
mod subtasks;
mod swimlanes;
mod tags;
mod tasks;
mod users;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use rust_mcp_sdk::schema::{
    schema_utils::CallToolError, CallToolRequestParams, CallToolResult, ListToolsResult,
    PaginatedRequestParams, RpcError, TextContent,
};
use rust_mcp_sdk::tool_box;
use rust_mcp_sdk::{mcp_server::ServerHandler, McpServer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use kanboard_core::args::prepare_arguments;
use kanboard_core::client::KanboardApi;
use kanboard_core::rpc::Params;

use self::actions::*;
use self::application::*;
use self::categories::*;
use self::columns::*;
use self::comments::*;
use self::external_links::*;
use self::files::*;
use self::groups::*;
use self::links::*;
use self::me::*;
use self::metadata::*;
use self::permissions::*;
use self::projects::*;
use self::subtasks::*;
use self::swimlanes::*;
use self::tags::*;
use self::tasks::*;
use self::users::*;

#[derive(Clone)]
pub struct McpContext {
    pub api: Arc<dyn KanboardApi>,
}

/// Arbitrary JSON object argument, forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct JsonObject(pub Map<String, Value>);

impl JsonObject {
    pub fn json_schema() -> Map<String, Value> {
        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema
    }
}

impl From<JsonObject> for Value {
    fn from(object: JsonObject) -> Self {
        Value::Object(object.0)
    }
}

/// Object argument whose values must all be strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StringMap(pub BTreeMap<String, String>);

impl StringMap {
    pub fn json_schema() -> Map<String, Value> {
        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert(
            "additionalProperties".to_string(),
            serde_json::json!({"type": "string"}),
        );
        schema
    }
}

impl From<StringMap> for Value {
    fn from(map: StringMap) -> Self {
        Value::Object(
            map.0
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect(),
        )
    }
}

fn ok_text(content: String) -> Result<CallToolResult, CallToolError> {
    Ok(CallToolResult::text_content(vec![TextContent::from(
        content,
    )]))
}

fn ok_json(value: &Value) -> Result<CallToolResult, CallToolError> {
    let text = serde_json::to_string_pretty(value).map_err(CallToolError::new)?;
    ok_text(text)
}

fn error_result(message: String) -> CallToolResult {
    let mut result = CallToolResult::text_content(vec![TextContent::from(message)]);
    result.is_error = Some(true);
    result
}

fn fail(message: String) -> Result<CallToolResult, CallToolError> {
    Ok(error_result(message))
}

/// One remote call whose result is handed back as pretty JSON.
async fn relay(
    context: &McpContext,
    action: &str,
    method: &str,
    params: impl Into<Params>,
) -> Result<CallToolResult, CallToolError> {
    match context.api.call(method, params.into()).await {
        Ok(value) => ok_json(&value),
        Err(err) => {
            warn!(method, error = %err, "kanboard call failed");
            fail(format!("Failed to {action}: {err}"))
        }
    }
}

tool_box!(
    KanboardTools,
    [
        GetProjectsTool,
        CreateProjectTool,
        GetProjectByIdTool,
        GetProjectByNameTool,
        GetProjectByIdentifierTool,
        GetProjectByEmailTool,
        GetAllProjectsTool,
        UpdateProjectTool,
        RemoveProjectTool,
        EnableProjectTool,
        DisableProjectTool,
        EnableProjectPublicAccessTool,
        DisableProjectPublicAccessTool,
        GetProjectActivityTool,
        GetProjectActivitiesTool,
        GetTasksTool,
        CreateTaskTool,
        MoveTaskTool,
        UpdateTaskTool,
        DeleteTaskTool,
        GetTaskTool,
        GetTaskByReferenceTool,
        GetAllTasksTool,
        GetOverdueTasksTool,
        GetOverdueTasksByProjectTool,
        OpenTaskTool,
        CloseTaskTool,
        MoveTaskPositionTool,
        MoveTaskToProjectTool,
        DuplicateTaskToProjectTool,
        SearchTasksTool,
        AssignTaskTool,
        SetTaskDueDateTool,
        GetUsersTool,
        CreateUserTool,
        CreateLdapUserTool,
        GetUserTool,
        GetUserByNameTool,
        UpdateUserTool,
        RemoveUserTool,
        DisableUserTool,
        EnableUserTool,
        IsActiveUserTool,
        GetMeTool,
        GetMyDashboardTool,
        GetMyActivityStreamTool,
        CreateMyPrivateProjectTool,
        GetMyProjectsListTool,
        GetMyOverdueTasksTool,
        GetMyProjectsTool,
        CreateCommentTool,
        GetTaskCommentsTool,
        GetCommentTool,
        UpdateCommentTool,
        RemoveCommentTool,
        GetColumnsTool,
        GetColumnTool,
        CreateColumnTool,
        UpdateColumnTool,
        DeleteColumnTool,
        ReorderColumnsTool,
        GetBoardTool,
        GetCategoriesTool,
        CreateCategoryTool,
        GetCategoryTool,
        UpdateCategoryTool,
        DeleteCategoryTool,
        GetSwimlanesTool,
        GetActiveSwimlanesTool,
        GetSwimlaneTool,
        GetSwimlaneByIdTool,
        GetSwimlaneByNameTool,
        ChangeSwimlanePositionTool,
        CreateSwimlaneTool,
        UpdateSwimlaneTool,
        RemoveSwimlaneTool,
        DisableSwimlaneTool,
        EnableSwimlaneTool,
        GetTaskMetadataTool,
        GetTaskMetadataByNameTool,
        SaveTaskMetadataTool,
        RemoveTaskMetadataTool,
        GetProjectMetadataTool,
        GetProjectMetadataByNameTool,
        SaveProjectMetadataTool,
        RemoveProjectMetadataTool,
        CreateGroupTool,
        UpdateGroupTool,
        RemoveGroupTool,
        GetGroupTool,
        GetAllGroupsTool,
        GetMemberGroupsTool,
        GetGroupMembersTool,
        AddGroupMemberTool,
        RemoveGroupMemberTool,
        IsGroupMemberTool,
        CreateTaskLinkTool,
        UpdateTaskLinkTool,
        GetTaskLinkByIdTool,
        GetAllTaskLinksTool,
        RemoveTaskLinkTool,
        GetAllLinksTool,
        GetOppositeLinkIdTool,
        GetLinkByLabelTool,
        GetLinkByIdTool,
        CreateLinkTool,
        UpdateLinkTool,
        RemoveLinkTool,
        GetExternalTaskLinkTypesTool,
        GetExtLinkProviderDepsTool,
        CreateExternalTaskLinkTool,
        UpdateExternalTaskLinkTool,
        GetExternalTaskLinkByIdTool,
        GetAllExternalTaskLinksTool,
        RemoveExternalTaskLinkTool,
        CreateProjectFileTool,
        GetAllProjectFilesTool,
        GetProjectFileTool,
        DownloadProjectFileTool,
        RemoveProjectFileTool,
        RemoveAllProjectFilesTool,
        CreateTaskFileTool,
        GetAllTaskFilesTool,
        GetTaskFileTool,
        DownloadTaskFileTool,
        RemoveTaskFileTool,
        RemoveAllTaskFilesTool,
        GetProjectUsersTool,
        GetAssignableUsersTool,
        AddProjectUserTool,
        AddProjectGroupTool,
        RemoveProjectUserTool,
        RemoveProjectGroupTool,
        ChangeProjectUserRoleTool,
        ChangeProjectGroupRoleTool,
        GetProjectUserRoleTool,
        AssignUserToProjectTool,
        CreateSubtaskTool,
        GetSubtaskTool,
        GetAllSubtasksTool,
        UpdateSubtaskTool,
        RemoveSubtaskTool,
        HasSubtaskTimerTool,
        SetSubtaskStartTimeTool,
        SetSubtaskEndTimeTool,
        GetSubtaskTimeSpentTool,
        GetAllTagsTool,
        GetTagsByProjectTool,
        CreateTagTool,
        UpdateTagTool,
        RemoveTagTool,
        SetTaskTagsTool,
        GetTaskTagsTool,
        GetVersionTool,
        GetTimezoneTool,
        GetDefaultTaskColorsTool,
        GetDefaultTaskColorTool,
        GetColorListTool,
        GetApplicationRolesTool,
        GetProjectRolesTool,
        GetAvailableActionsTool,
        GetAvailableActionEventsTool,
        GetCompatibleActionEventsTool,
        GetActionsTool,
        CreateActionTool,
        RemoveActionTool,
    ]
);

pub struct KanboardServerHandler {
    context: McpContext,
    schemas: HashMap<String, Value>,
}

impl KanboardServerHandler {
    pub fn new(context: McpContext) -> Self {
        let schemas = KanboardTools::tools()
            .into_iter()
            .filter_map(|tool| {
                let schema = serde_json::to_value(&tool.input_schema).ok()?;
                Some((tool.name, schema))
            })
            .collect();
        Self { context, schemas }
    }

    pub fn tool_count(&self) -> usize {
        self.schemas.len()
    }

    /// Run one tool call. Every failure comes back as an error result.
    pub async fn dispatch(&self, mut params: CallToolRequestParams) -> CallToolResult {
        let name = params.name.clone();
        let Some(schema) = self.schemas.get(&name) else {
            warn!(tool = %name, "unknown tool requested");
            return error_result(format!("Unknown tool: {name}"));
        };
        let arguments = params.arguments.take().unwrap_or_default();
        match prepare_arguments(schema, arguments) {
            Ok(arguments) => params.arguments = Some(arguments),
            Err(err) => {
                debug!(tool = %name, error = %err, "rejected arguments");
                return error_result(format!("Invalid arguments for {name}: {err}"));
            }
        }
        let tool = match KanboardTools::try_from(params) {
            Ok(tool) => tool,
            Err(err) => return error_result(format!("Invalid arguments for {name}: {err}")),
        };
        debug!(tool = %name, "calling tool");
        match self.call_tool(tool).await {
            Ok(result) => result,
            Err(err) => error_result(format!("{name} failed: {err}")),
        }
    }

    async fn call_tool(&self, tool: KanboardTools) -> Result<CallToolResult, CallToolError> {
        let context = &self.context;
        match tool {
            KanboardTools::GetProjectsTool(tool) => tool.call(context).await,
            KanboardTools::CreateProjectTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectByIdTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectByNameTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectByIdentifierTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectByEmailTool(tool) => tool.call(context).await,
            KanboardTools::GetAllProjectsTool(tool) => tool.call(context).await,
            KanboardTools::UpdateProjectTool(tool) => tool.call(context).await,
            KanboardTools::RemoveProjectTool(tool) => tool.call(context).await,
            KanboardTools::EnableProjectTool(tool) => tool.call(context).await,
            KanboardTools::DisableProjectTool(tool) => tool.call(context).await,
            KanboardTools::EnableProjectPublicAccessTool(tool) => tool.call(context).await,
            KanboardTools::DisableProjectPublicAccessTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectActivityTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectActivitiesTool(tool) => tool.call(context).await,
            KanboardTools::GetTasksTool(tool) => tool.call(context).await,
            KanboardTools::CreateTaskTool(tool) => tool.call(context).await,
            KanboardTools::MoveTaskTool(tool) => tool.call(context).await,
            KanboardTools::UpdateTaskTool(tool) => tool.call(context).await,
            KanboardTools::DeleteTaskTool(tool) => tool.call(context).await,
            KanboardTools::GetTaskTool(tool) => tool.call(context).await,
            KanboardTools::GetTaskByReferenceTool(tool) => tool.call(context).await,
            KanboardTools::GetAllTasksTool(tool) => tool.call(context).await,
            KanboardTools::GetOverdueTasksTool(tool) => tool.call(context).await,
            KanboardTools::GetOverdueTasksByProjectTool(tool) => tool.call(context).await,
            KanboardTools::OpenTaskTool(tool) => tool.call(context).await,
            KanboardTools::CloseTaskTool(tool) => tool.call(context).await,
            KanboardTools::MoveTaskPositionTool(tool) => tool.call(context).await,
            KanboardTools::MoveTaskToProjectTool(tool) => tool.call(context).await,
            KanboardTools::DuplicateTaskToProjectTool(tool) => tool.call(context).await,
            KanboardTools::SearchTasksTool(tool) => tool.call(context).await,
            KanboardTools::AssignTaskTool(tool) => tool.call(context).await,
            KanboardTools::SetTaskDueDateTool(tool) => tool.call(context).await,
            KanboardTools::GetUsersTool(tool) => tool.call(context).await,
            KanboardTools::CreateUserTool(tool) => tool.call(context).await,
            KanboardTools::CreateLdapUserTool(tool) => tool.call(context).await,
            KanboardTools::GetUserTool(tool) => tool.call(context).await,
            KanboardTools::GetUserByNameTool(tool) => tool.call(context).await,
            KanboardTools::UpdateUserTool(tool) => tool.call(context).await,
            KanboardTools::RemoveUserTool(tool) => tool.call(context).await,
            KanboardTools::DisableUserTool(tool) => tool.call(context).await,
            KanboardTools::EnableUserTool(tool) => tool.call(context).await,
            KanboardTools::IsActiveUserTool(tool) => tool.call(context).await,
            KanboardTools::GetMeTool(tool) => tool.call(context).await,
            KanboardTools::GetMyDashboardTool(tool) => tool.call(context).await,
            KanboardTools::GetMyActivityStreamTool(tool) => tool.call(context).await,
            KanboardTools::CreateMyPrivateProjectTool(tool) => tool.call(context).await,
            KanboardTools::GetMyProjectsListTool(tool) => tool.call(context).await,
            KanboardTools::GetMyOverdueTasksTool(tool) => tool.call(context).await,
            KanboardTools::GetMyProjectsTool(tool) => tool.call(context).await,
            KanboardTools::CreateCommentTool(tool) => tool.call(context).await,
            KanboardTools::GetTaskCommentsTool(tool) => tool.call(context).await,
            KanboardTools::GetCommentTool(tool) => tool.call(context).await,
            KanboardTools::UpdateCommentTool(tool) => tool.call(context).await,
            KanboardTools::RemoveCommentTool(tool) => tool.call(context).await,
            KanboardTools::GetColumnsTool(tool) => tool.call(context).await,
            KanboardTools::GetColumnTool(tool) => tool.call(context).await,
            KanboardTools::CreateColumnTool(tool) => tool.call(context).await,
            KanboardTools::UpdateColumnTool(tool) => tool.call(context).await,
            KanboardTools::DeleteColumnTool(tool) => tool.call(context).await,
            KanboardTools::ReorderColumnsTool(tool) => tool.call(context).await,
            KanboardTools::GetBoardTool(tool) => tool.call(context).await,
            KanboardTools::GetCategoriesTool(tool) => tool.call(context).await,
            KanboardTools::CreateCategoryTool(tool) => tool.call(context).await,
            KanboardTools::GetCategoryTool(tool) => tool.call(context).await,
            KanboardTools::UpdateCategoryTool(tool) => tool.call(context).await,
            KanboardTools::DeleteCategoryTool(tool) => tool.call(context).await,
            KanboardTools::GetSwimlanesTool(tool) => tool.call(context).await,
            KanboardTools::GetActiveSwimlanesTool(tool) => tool.call(context).await,
            KanboardTools::GetSwimlaneTool(tool) => tool.call(context).await,
            KanboardTools::GetSwimlaneByIdTool(tool) => tool.call(context).await,
            KanboardTools::GetSwimlaneByNameTool(tool) => tool.call(context).await,
            KanboardTools::ChangeSwimlanePositionTool(tool) => tool.call(context).await,
            KanboardTools::CreateSwimlaneTool(tool) => tool.call(context).await,
            KanboardTools::UpdateSwimlaneTool(tool) => tool.call(context).await,
            KanboardTools::RemoveSwimlaneTool(tool) => tool.call(context).await,
            KanboardTools::DisableSwimlaneTool(tool) => tool.call(context).await,
            KanboardTools::EnableSwimlaneTool(tool) => tool.call(context).await,
            KanboardTools::GetTaskMetadataTool(tool) => tool.call(context).await,
            KanboardTools::GetTaskMetadataByNameTool(tool) => tool.call(context).await,
            KanboardTools::SaveTaskMetadataTool(tool) => tool.call(context).await,
            KanboardTools::RemoveTaskMetadataTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectMetadataTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectMetadataByNameTool(tool) => tool.call(context).await,
            KanboardTools::SaveProjectMetadataTool(tool) => tool.call(context).await,
            KanboardTools::RemoveProjectMetadataTool(tool) => tool.call(context).await,
            KanboardTools::CreateGroupTool(tool) => tool.call(context).await,
            KanboardTools::UpdateGroupTool(tool) => tool.call(context).await,
            KanboardTools::RemoveGroupTool(tool) => tool.call(context).await,
            KanboardTools::GetGroupTool(tool) => tool.call(context).await,
            KanboardTools::GetAllGroupsTool(tool) => tool.call(context).await,
            KanboardTools::GetMemberGroupsTool(tool) => tool.call(context).await,
            KanboardTools::GetGroupMembersTool(tool) => tool.call(context).await,
            KanboardTools::AddGroupMemberTool(tool) => tool.call(context).await,
            KanboardTools::RemoveGroupMemberTool(tool) => tool.call(context).await,
            KanboardTools::IsGroupMemberTool(tool) => tool.call(context).await,
            KanboardTools::CreateTaskLinkTool(tool) => tool.call(context).await,
            KanboardTools::UpdateTaskLinkTool(tool) => tool.call(context).await,
            KanboardTools::GetTaskLinkByIdTool(tool) => tool.call(context).await,
            KanboardTools::GetAllTaskLinksTool(tool) => tool.call(context).await,
            KanboardTools::RemoveTaskLinkTool(tool) => tool.call(context).await,
            KanboardTools::GetAllLinksTool(tool) => tool.call(context).await,
            KanboardTools::GetOppositeLinkIdTool(tool) => tool.call(context).await,
            KanboardTools::GetLinkByLabelTool(tool) => tool.call(context).await,
            KanboardTools::GetLinkByIdTool(tool) => tool.call(context).await,
            KanboardTools::CreateLinkTool(tool) => tool.call(context).await,
            KanboardTools::UpdateLinkTool(tool) => tool.call(context).await,
            KanboardTools::RemoveLinkTool(tool) => tool.call(context).await,
            KanboardTools::GetExternalTaskLinkTypesTool(tool) => tool.call(context).await,
            KanboardTools::GetExtLinkProviderDepsTool(tool) => tool.call(context).await,
            KanboardTools::CreateExternalTaskLinkTool(tool) => tool.call(context).await,
            KanboardTools::UpdateExternalTaskLinkTool(tool) => tool.call(context).await,
            KanboardTools::GetExternalTaskLinkByIdTool(tool) => tool.call(context).await,
            KanboardTools::GetAllExternalTaskLinksTool(tool) => tool.call(context).await,
            KanboardTools::RemoveExternalTaskLinkTool(tool) => tool.call(context).await,
            KanboardTools::CreateProjectFileTool(tool) => tool.call(context).await,
            KanboardTools::GetAllProjectFilesTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectFileTool(tool) => tool.call(context).await,
            KanboardTools::DownloadProjectFileTool(tool) => tool.call(context).await,
            KanboardTools::RemoveProjectFileTool(tool) => tool.call(context).await,
            KanboardTools::RemoveAllProjectFilesTool(tool) => tool.call(context).await,
            KanboardTools::CreateTaskFileTool(tool) => tool.call(context).await,
            KanboardTools::GetAllTaskFilesTool(tool) => tool.call(context).await,
            KanboardTools::GetTaskFileTool(tool) => tool.call(context).await,
            KanboardTools::DownloadTaskFileTool(tool) => tool.call(context).await,
            KanboardTools::RemoveTaskFileTool(tool) => tool.call(context).await,
            KanboardTools::RemoveAllTaskFilesTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectUsersTool(tool) => tool.call(context).await,
            KanboardTools::GetAssignableUsersTool(tool) => tool.call(context).await,
            KanboardTools::AddProjectUserTool(tool) => tool.call(context).await,
            KanboardTools::AddProjectGroupTool(tool) => tool.call(context).await,
            KanboardTools::RemoveProjectUserTool(tool) => tool.call(context).await,
            KanboardTools::RemoveProjectGroupTool(tool) => tool.call(context).await,
            KanboardTools::ChangeProjectUserRoleTool(tool) => tool.call(context).await,
            KanboardTools::ChangeProjectGroupRoleTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectUserRoleTool(tool) => tool.call(context).await,
            KanboardTools::AssignUserToProjectTool(tool) => tool.call(context).await,
            KanboardTools::CreateSubtaskTool(tool) => tool.call(context).await,
            KanboardTools::GetSubtaskTool(tool) => tool.call(context).await,
            KanboardTools::GetAllSubtasksTool(tool) => tool.call(context).await,
            KanboardTools::UpdateSubtaskTool(tool) => tool.call(context).await,
            KanboardTools::RemoveSubtaskTool(tool) => tool.call(context).await,
            KanboardTools::HasSubtaskTimerTool(tool) => tool.call(context).await,
            KanboardTools::SetSubtaskStartTimeTool(tool) => tool.call(context).await,
            KanboardTools::SetSubtaskEndTimeTool(tool) => tool.call(context).await,
            KanboardTools::GetSubtaskTimeSpentTool(tool) => tool.call(context).await,
            KanboardTools::GetAllTagsTool(tool) => tool.call(context).await,
            KanboardTools::GetTagsByProjectTool(tool) => tool.call(context).await,
            KanboardTools::CreateTagTool(tool) => tool.call(context).await,
            KanboardTools::UpdateTagTool(tool) => tool.call(context).await,
            KanboardTools::RemoveTagTool(tool) => tool.call(context).await,
            KanboardTools::SetTaskTagsTool(tool) => tool.call(context).await,
            KanboardTools::GetTaskTagsTool(tool) => tool.call(context).await,
            KanboardTools::GetVersionTool(tool) => tool.call(context).await,
            KanboardTools::GetTimezoneTool(tool) => tool.call(context).await,
            KanboardTools::GetDefaultTaskColorsTool(tool) => tool.call(context).await,
            KanboardTools::GetDefaultTaskColorTool(tool) => tool.call(context).await,
            KanboardTools::GetColorListTool(tool) => tool.call(context).await,
            KanboardTools::GetApplicationRolesTool(tool) => tool.call(context).await,
            KanboardTools::GetProjectRolesTool(tool) => tool.call(context).await,
            KanboardTools::GetAvailableActionsTool(tool) => tool.call(context).await,
            KanboardTools::GetAvailableActionEventsTool(tool) => tool.call(context).await,
            KanboardTools::GetCompatibleActionEventsTool(tool) => tool.call(context).await,
            KanboardTools::GetActionsTool(tool) => tool.call(context).await,
            KanboardTools::CreateActionTool(tool) => tool.call(context).await,
            KanboardTools::RemoveActionTool(tool) => tool.call(context).await,
        }
    }
}

#[async_trait]
impl ServerHandler for KanboardServerHandler {
    async fn handle_list_tools_request(
        &self,
        _params: Option<PaginatedRequestParams>,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<ListToolsResult, RpcError> {
        Ok(ListToolsResult {
            meta: None,
            next_cursor: None,
            tools: KanboardTools::tools(),
        })
    }

    async fn handle_call_tool_request(
        &self,
        params: CallToolRequestParams,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<CallToolResult, CallToolError> {
        Ok(self.dispatch(params).await)
    }
}

#[cfg(test)]
mod tests;
