use std::collections::HashSet;
use std::sync::Mutex;

use pretty_assertions::assert_eq;
use serde_json::json;

use kanboard_core::args::ArgKind;
use kanboard_core::client::KanboardError;

use super::*;

/// Outbound JSON-RPC method of every tool (the last call for lookup tools).
const OUTBOUND: [(&str, &str); 166] = [
    ("get_projects", "getAllProjects"),
    ("create_project", "createProject"),
    ("get_project_by_id", "getProjectById"),
    ("get_project_by_name", "getProjectByName"),
    ("get_project_by_identifier", "getProjectByIdentifier"),
    ("get_project_by_email", "getProjectByEmail"),
    ("get_all_projects", "getAllProjects"),
    ("update_project", "updateProject"),
    ("remove_project", "removeProject"),
    ("enable_project", "enableProject"),
    ("disable_project", "disableProject"),
    ("enable_project_public_access", "enableProjectPublicAccess"),
    ("disable_project_public_access", "disableProjectPublicAccess"),
    ("get_project_activity", "getProjectActivity"),
    ("get_project_activities", "getProjectActivities"),
    ("get_tasks", "getAllTasks"),
    ("create_task", "createTask"),
    ("move_task", "moveTaskPosition"),
    ("update_task", "updateTask"),
    ("delete_task", "removeTask"),
    ("get_task", "getTask"),
    ("get_task_by_reference", "getTaskByReference"),
    ("get_all_tasks", "getAllTasks"),
    ("get_overdue_tasks", "getOverdueTasks"),
    ("get_overdue_tasks_by_project", "getOverdueTasksByProject"),
    ("open_task", "openTask"),
    ("close_task", "closeTask"),
    ("move_task_position", "moveTaskPosition"),
    ("move_task_to_project", "moveTaskToProject"),
    ("duplicate_task_to_project", "duplicateTaskToProject"),
    ("search_tasks", "searchTasks"),
    ("assign_task", "updateTask"),
    ("set_task_due_date", "updateTask"),
    ("get_users", "getAllUsers"),
    ("create_user", "createUser"),
    ("create_ldap_user", "createLdapUser"),
    ("get_user", "getUser"),
    ("get_user_by_name", "getUserByName"),
    ("update_user", "updateUser"),
    ("remove_user", "removeUser"),
    ("disable_user", "disableUser"),
    ("enable_user", "enableUser"),
    ("is_active_user", "isActiveUser"),
    ("get_me", "getMe"),
    ("get_my_dashboard", "getMyDashboard"),
    ("get_my_activity_stream", "getMyActivityStream"),
    ("create_my_private_project", "createMyPrivateProject"),
    ("get_my_projects_list", "getMyProjectsList"),
    ("get_my_overdue_tasks", "getMyOverdueTasks"),
    ("get_my_projects", "getMyProjects"),
    ("create_comment", "createComment"),
    ("get_task_comments", "getAllComments"),
    ("get_comment", "getComment"),
    ("update_comment", "updateComment"),
    ("remove_comment", "removeComment"),
    ("get_columns", "getColumns"),
    ("get_column", "getColumn"),
    ("create_column", "addColumn"),
    ("update_column", "updateColumn"),
    ("delete_column", "removeColumn"),
    ("reorder_columns", "changeColumnPosition"),
    ("get_board", "getBoard"),
    ("get_categories", "getAllCategories"),
    ("create_category", "createCategory"),
    ("get_category", "getCategory"),
    ("update_category", "updateCategory"),
    ("delete_category", "removeCategory"),
    ("get_swimlanes", "getAllSwimlanes"),
    ("get_active_swimlanes", "getActiveSwimlanes"),
    ("get_swimlane", "getSwimlane"),
    ("get_swimlane_by_id", "getSwimlaneById"),
    ("get_swimlane_by_name", "getSwimlaneByName"),
    ("change_swimlane_position", "changeSwimlanePosition"),
    ("create_swimlane", "addSwimlane"),
    ("update_swimlane", "updateSwimlane"),
    ("remove_swimlane", "removeSwimlane"),
    ("disable_swimlane", "disableSwimlane"),
    ("enable_swimlane", "enableSwimlane"),
    ("get_task_metadata", "getTaskMetadata"),
    ("get_task_metadata_by_name", "getTaskMetadataByName"),
    ("save_task_metadata", "saveTaskMetadata"),
    ("remove_task_metadata", "removeTaskMetadata"),
    ("get_project_metadata", "getProjectMetadata"),
    ("get_project_metadata_by_name", "getProjectMetadataByName"),
    ("save_project_metadata", "saveProjectMetadata"),
    ("remove_project_metadata", "removeProjectMetadata"),
    ("create_group", "createGroup"),
    ("update_group", "updateGroup"),
    ("remove_group", "removeGroup"),
    ("get_group", "getGroup"),
    ("get_all_groups", "getAllGroups"),
    ("get_member_groups", "getMemberGroups"),
    ("get_group_members", "getGroupMembers"),
    ("add_group_member", "addGroupMember"),
    ("remove_group_member", "removeGroupMember"),
    ("is_group_member", "isGroupMember"),
    ("create_task_link", "createTaskLink"),
    ("update_task_link", "updateTaskLink"),
    ("get_task_link_by_id", "getTaskLinkById"),
    ("get_all_task_links", "getAllTaskLinks"),
    ("remove_task_link", "removeTaskLink"),
    ("get_all_links", "getAllLinks"),
    ("get_opposite_link_id", "getOppositeLinkId"),
    ("get_link_by_label", "getLinkByLabel"),
    ("get_link_by_id", "getLinkById"),
    ("create_link", "createLink"),
    ("update_link", "updateLink"),
    ("remove_link", "removeLink"),
    ("get_external_task_link_types", "getExternalTaskLinkTypes"),
    ("get_ext_link_provider_deps", "getExternalTaskLinkProviderDependencies"),
    ("create_external_task_link", "createExternalTaskLink"),
    ("update_external_task_link", "updateExternalTaskLink"),
    ("get_external_task_link_by_id", "getExternalTaskLinkById"),
    ("get_all_external_task_links", "getAllExternalTaskLinks"),
    ("remove_external_task_link", "removeExternalTaskLink"),
    ("create_project_file", "createProjectFile"),
    ("get_all_project_files", "getAllProjectFiles"),
    ("get_project_file", "getProjectFile"),
    ("download_project_file", "downloadProjectFile"),
    ("remove_project_file", "removeProjectFile"),
    ("remove_all_project_files", "removeAllProjectFiles"),
    ("create_task_file", "createTaskFile"),
    ("get_all_task_files", "getAllTaskFiles"),
    ("get_task_file", "getTaskFile"),
    ("download_task_file", "downloadTaskFile"),
    ("remove_task_file", "removeTaskFile"),
    ("remove_all_task_files", "removeAllTaskFiles"),
    ("get_project_users", "getProjectUsers"),
    ("get_assignable_users", "getAssignableUsers"),
    ("add_project_user", "addProjectUser"),
    ("add_project_group", "addProjectGroup"),
    ("remove_project_user", "removeProjectUser"),
    ("remove_project_group", "removeProjectGroup"),
    ("change_project_user_role", "changeProjectUserRole"),
    ("change_project_group_role", "changeProjectGroupRole"),
    ("get_project_user_role", "getProjectUserRole"),
    ("assign_user_to_project", "addProjectUser"),
    ("create_subtask", "createSubtask"),
    ("get_subtask", "getSubtask"),
    ("get_all_subtasks", "getAllSubtasks"),
    ("update_subtask", "updateSubtask"),
    ("remove_subtask", "removeSubtask"),
    ("has_subtask_timer", "hasSubtaskTimer"),
    ("set_subtask_start_time", "setSubtaskStartTime"),
    ("set_subtask_end_time", "setSubtaskEndTime"),
    ("get_subtask_time_spent", "getSubtaskTimeSpent"),
    ("get_all_tags", "getAllTags"),
    ("get_tags_by_project", "getTagsByProject"),
    ("create_tag", "createTag"),
    ("update_tag", "updateTag"),
    ("remove_tag", "removeTag"),
    ("set_task_tags", "setTaskTags"),
    ("get_task_tags", "getTaskTags"),
    ("get_version", "getVersion"),
    ("get_timezone", "getTimezone"),
    ("get_default_task_colors", "getDefaultTaskColors"),
    ("get_default_task_color", "getDefaultTaskColor"),
    ("get_color_list", "getColorList"),
    ("get_application_roles", "getApplicationRoles"),
    ("get_project_roles", "getProjectRoles"),
    ("get_available_actions", "getAvailableActions"),
    ("get_available_action_events", "getAvailableActionEvents"),
    ("get_compatible_action_events", "getCompatibleActionEvents"),
    ("get_actions", "getActions"),
    ("create_action", "createAction"),
    ("remove_action", "removeAction"),
];

type Responder = Box<dyn Fn(&str) -> Result<Value, KanboardError> + Send + Sync>;

struct RecordingApi {
    calls: Mutex<Vec<(String, Params)>>,
    respond: Responder,
}

impl RecordingApi {
    fn new() -> Self {
        Self::responding(default_response)
    }

    fn responding(
        respond: impl Fn(&str) -> Result<Value, KanboardError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    fn methods(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("calls")
            .iter()
            .map(|(method, _)| method.clone())
            .collect()
    }

    fn last_params(&self) -> Params {
        self.calls
            .lock()
            .expect("calls")
            .last()
            .map(|(_, params)| params.clone())
            .expect("at least one call")
    }
}

#[async_trait]
impl KanboardApi for RecordingApi {
    async fn call(&self, method: &str, params: Params) -> Result<Value, KanboardError> {
        self.calls
            .lock()
            .expect("calls")
            .push((method.to_string(), params));
        (self.respond)(method)
    }
}

fn default_response(method: &str) -> Result<Value, KanboardError> {
    Ok(match method {
        "getProjectByName" => json!({"id": "3", "name": "Alpha"}),
        "getTask" => json!({"id": "42", "project_id": "3", "title": "Ship"}),
        "getColumns" => json!([{"id": 1, "title": "Todo"}, {"id": 2, "title": "Done"}]),
        _ => json!(true),
    })
}

fn handler(api: &Arc<RecordingApi>) -> KanboardServerHandler {
    KanboardServerHandler::new(McpContext { api: api.clone() })
}

fn request(name: &str, arguments: Value) -> CallToolRequestParams {
    CallToolRequestParams {
        name: name.to_string(),
        arguments: arguments.as_object().cloned(),
        meta: None,
        task: None,
    }
}

fn text_payload(result: &CallToolResult) -> String {
    result
        .content
        .first()
        .expect("tool content")
        .as_text_content()
        .expect("text content")
        .text
        .clone()
}

fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

fn sample_value(name: &str, property: &Value) -> Value {
    match ArgKind::from_schema(property) {
        ArgKind::String if name == "column_name" => json!("Done"),
        ArgKind::String => json!("sample"),
        ArgKind::Integer => json!(3),
        ArgKind::Number => json!(1.5),
        ArgKind::Boolean => json!(true),
        ArgKind::Array => {
            let items = property.get("items").cloned().unwrap_or(Value::Null);
            json!([sample_value(name, &items)])
        }
        ArgKind::Object => json!({"key": "value"}),
        ArgKind::Any => json!("sample"),
    }
}

fn required_names(schema: &Value) -> Vec<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn required_arguments(schema: &Value) -> Map<String, Value> {
    required_names(schema)
        .into_iter()
        .map(|name| {
            let property = &schema["properties"][name.as_str()];
            let value = sample_value(&name, property);
            (name, value)
        })
        .collect()
}

/// Every declared argument, with enumerated ones set to an accepted value.
fn all_arguments(schema: &Value) -> Map<String, Value> {
    schema
        .get("properties")
        .and_then(Value::as_object)
        .map(|properties| {
            properties
                .iter()
                .map(|(name, property)| {
                    let value = match name.as_str() {
                        "visibility" => json!("app-manager"),
                        "role" => json!("project-manager"),
                        _ => sample_value(name, property),
                    };
                    (name.clone(), value)
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Outbound key for an argument, and whether its value is sent unchanged.
fn outbound_key(tool: &str, argument: &str) -> (String, bool) {
    let (key, verbatim) = match (tool, argument) {
        ("get_tasks" | "create_task", "project_name") => ("project_id", false),
        ("move_task", "column_name") => ("column_id", false),
        ("assign_task" | "set_task_due_date", "task_id") => ("id", true),
        ("assign_task", "user_id") => ("owner_id", true),
        ("set_task_due_date", "due_date") => ("date_due", true),
        ("update_category", "category_id") => ("id", true),
        ("get_ext_link_provider_deps", "provider_name") => ("providerName", true),
        (_, argument) => (argument, true),
    };
    (key.to_string(), verbatim)
}

fn schema_of(handler: &KanboardServerHandler, tool: &str) -> Value {
    handler.schemas.get(tool).cloned().expect("known tool")
}

#[test]
fn catalog_lists_every_tool_once() {
    let tools = KanboardTools::tools();
    assert_eq!(tools.len(), OUTBOUND.len());
    let names: HashSet<String> = tools.iter().map(|tool| tool.name.clone()).collect();
    assert_eq!(names.len(), tools.len());
    for (name, _) in OUTBOUND {
        assert!(names.contains(name), "missing tool {name}");
    }
    for tool in &tools {
        let described = tool.description.as_deref().unwrap_or_default();
        assert!(!described.is_empty(), "{} has no description", tool.name);
    }
    let api = Arc::new(RecordingApi::new());
    assert_eq!(handler(&api).tool_count(), OUTBOUND.len());
}

#[tokio::test]
async fn every_tool_issues_its_documented_method() {
    for (name, method) in OUTBOUND {
        let api = Arc::new(RecordingApi::new());
        let handler = handler(&api);
        let arguments = required_arguments(&schema_of(&handler, name));
        let result = handler.dispatch(request(name, Value::Object(arguments))).await;

        assert!(!is_error(&result), "{name}: {}", text_payload(&result));
        let expected_calls = match name {
            "get_tasks" | "create_task" => 2,
            "move_task" => 3,
            _ => 1,
        };
        let methods = api.methods();
        assert_eq!(methods.len(), expected_calls, "{name}: {methods:?}");
        assert_eq!(methods.last().map(String::as_str), Some(method), "{name}");
    }
}

#[tokio::test]
async fn every_provided_argument_is_forwarded() {
    for (name, method) in OUTBOUND {
        let api = Arc::new(RecordingApi::new());
        let handler = handler(&api);
        let arguments = all_arguments(&schema_of(&handler, name));
        let result = handler
            .dispatch(request(name, Value::Object(arguments.clone())))
            .await;

        assert!(!is_error(&result), "{name}: {}", text_payload(&result));
        assert_eq!(api.methods().last().map(String::as_str), Some(method));
        match api.last_params() {
            Params::None => assert!(arguments.is_empty(), "{name} dropped {arguments:?}"),
            Params::Positional(values) => {
                assert_eq!(values.len(), arguments.len(), "{name}: {values:?}")
            }
            Params::Named(sent) => {
                for (argument, value) in &arguments {
                    let (key, verbatim) = outbound_key(name, argument);
                    let forwarded = sent.get(&key);
                    assert!(forwarded.is_some(), "{name} dropped {argument}: {sent:?}");
                    if verbatim {
                        assert_eq!(forwarded, Some(value), "{name}.{argument}");
                    }
                }
            }
        }
    }
}

#[tokio::test]
async fn missing_required_argument_never_reaches_kanboard() {
    for (name, _) in OUTBOUND {
        let api = Arc::new(RecordingApi::new());
        let handler = handler(&api);
        let schema = schema_of(&handler, name);
        for missing in required_names(&schema) {
            let mut arguments = required_arguments(&schema);
            arguments.remove(&missing);
            let result = handler.dispatch(request(name, Value::Object(arguments))).await;

            assert!(is_error(&result), "{name} accepted a call without {missing}");
            let text = text_payload(&result);
            assert!(text.contains(&format!("'{missing}'")), "{name}: {text}");
        }
        assert!(api.methods().is_empty(), "{name} called {:?}", api.methods());
    }
}

#[tokio::test]
async fn unknown_tool_is_an_error_result() {
    let api = Arc::new(RecordingApi::new());
    let result = handler(&api).dispatch(request("drop_database", json!({}))).await;
    assert!(is_error(&result));
    assert_eq!(text_payload(&result), "Unknown tool: drop_database");
    assert!(api.methods().is_empty());
}

#[tokio::test]
async fn mistyped_argument_is_rejected() {
    let api = Arc::new(RecordingApi::new());
    let result = handler(&api)
        .dispatch(request("get_task", json!({"task_id": "forty-two"})))
        .await;
    assert!(is_error(&result));
    assert_eq!(
        text_payload(&result),
        "Invalid arguments for get_task: argument 'task_id' must be an integer, got string"
    );
    assert!(api.methods().is_empty());
}

#[tokio::test]
async fn numeric_strings_are_sent_as_integers() {
    let api = Arc::new(RecordingApi::new());
    let result = handler(&api)
        .dispatch(request("get_task", json!({"task_id": "42"})))
        .await;
    assert!(!is_error(&result));
    assert_eq!(
        serde_json::to_value(api.last_params()).expect("params"),
        json!({"task_id": 42})
    );
}

#[tokio::test]
async fn success_is_pretty_printed_json() {
    let api = Arc::new(RecordingApi::responding(|_| {
        Ok(json!({"id": "42", "title": "Ship"}))
    }));
    let result = handler(&api)
        .dispatch(request("get_task", json!({"task_id": 42})))
        .await;
    assert_eq!(
        text_payload(&result),
        "{\n  \"id\": \"42\",\n  \"title\": \"Ship\"\n}"
    );
}

#[tokio::test]
async fn create_task_sends_only_provided_fields() {
    let api = Arc::new(RecordingApi::new());
    let result = handler(&api)
        .dispatch(request(
            "create_task",
            json!({
                "project_name": "Alpha",
                "title": "Ship",
                "color_id": "green",
                "score": 0,
                "tags": ["release"],
                "owner_id": null
            }),
        ))
        .await;

    assert!(!is_error(&result), "{}", text_payload(&result));
    assert_eq!(api.methods(), vec!["getProjectByName", "createTask"]);
    assert_eq!(
        serde_json::to_value(api.last_params()).expect("params"),
        json!({
            "project_id": 3,
            "title": "Ship",
            "color_id": "green",
            "score": 0,
            "tags": ["release"]
        })
    );
}

#[tokio::test]
async fn get_tasks_asks_for_open_tasks() {
    let api = Arc::new(RecordingApi::new());
    handler(&api)
        .dispatch(request("get_tasks", json!({"project_name": "Alpha"})))
        .await;
    assert_eq!(
        serde_json::to_value(api.last_params()).expect("params"),
        json!({"project_id": 3, "status_id": 1})
    );
}

#[tokio::test]
async fn project_lookup_sentinels_stop_before_follow_up() {
    let sentinels = [
        (json!(false), "API returned false"),
        (json!(true), "API returned true"),
        (Value::Null, "API returned null"),
        (json!([]), "API returned empty array"),
        (json!({}), "API returned empty object"),
        (json!({"id": 0, "name": "Alpha"}), "record id is zero or empty"),
        (json!({"id": "", "name": "Alpha"}), "record id is zero or empty"),
    ];
    for tool in ["get_tasks", "create_task"] {
        for (sentinel, reason) in &sentinels {
            let reply = sentinel.clone();
            let api = Arc::new(RecordingApi::responding(move |_| Ok(reply.clone())));
            let result = handler(&api)
                .dispatch(request(
                    tool,
                    json!({"project_name": "Alpha", "title": "Ship"}),
                ))
                .await;

            assert!(is_error(&result), "{tool} accepted {sentinel}");
            assert_eq!(
                text_payload(&result),
                format!("Project 'Alpha' not found: {reason}")
            );
            assert_eq!(api.methods(), vec!["getProjectByName"]);
        }
    }
}

#[tokio::test]
async fn move_task_resolves_column_by_title() {
    let api = Arc::new(RecordingApi::new());
    let result = handler(&api)
        .dispatch(request(
            "move_task",
            json!({"task_id": 42, "column_name": "Done"}),
        ))
        .await;

    assert!(!is_error(&result), "{}", text_payload(&result));
    assert_eq!(
        api.methods(),
        vec!["getTask", "getColumns", "moveTaskPosition"]
    );
    assert_eq!(
        serde_json::to_value(api.last_params()).expect("params"),
        json!({
            "project_id": 3,
            "task_id": 42,
            "column_id": 2,
            "position": 1,
            "swimlane_id": 0
        })
    );
}

#[tokio::test]
async fn move_task_keeps_explicit_position_and_swimlane() {
    let api = Arc::new(RecordingApi::new());
    handler(&api)
        .dispatch(request(
            "move_task",
            json!({"task_id": 42, "column_name": "done", "position": 4, "swimlane_id": 2}),
        ))
        .await;
    let params = api.last_params();
    assert_eq!(params.get("column_id"), Some(&json!(2)));
    assert_eq!(params.get("position"), Some(&json!(4)));
    assert_eq!(params.get("swimlane_id"), Some(&json!(2)));
}

#[tokio::test]
async fn move_task_to_unknown_column_is_not_found() {
    let api = Arc::new(RecordingApi::responding(|method| {
        Ok(match method {
            "getTask" => json!({"id": 42, "project_id": 3}),
            "getColumns" => json!([{"id": 1, "title": "Todo"}]),
            _ => json!(true),
        })
    }));
    let result = handler(&api)
        .dispatch(request(
            "move_task",
            json!({"task_id": 42, "column_name": "Done"}),
        ))
        .await;

    assert!(is_error(&result));
    let text = text_payload(&result);
    assert!(text.contains("'Done'"), "{text}");
    assert!(text.contains("task 42"), "{text}");
    assert_eq!(api.methods(), vec!["getTask", "getColumns"]);
}

#[tokio::test]
async fn remote_error_is_reported_with_action() {
    let api = Arc::new(RecordingApi::responding(|_| {
        Err(KanboardError::Remote {
            code: -32601,
            message: "Method not found".to_string(),
        })
    }));
    let result = handler(&api)
        .dispatch(request("get_task", json!({"task_id": 42})))
        .await;
    assert!(is_error(&result));
    assert_eq!(
        text_payload(&result),
        "Failed to get task details: kanboard API error: Method not found (Code: -32601)"
    );
}

#[tokio::test]
async fn http_status_error_carries_code() {
    let api = Arc::new(RecordingApi::responding(|_| {
        Err(KanboardError::HttpStatus {
            code: 500,
            status: "500 Internal Server Error".to_string(),
        })
    }));
    let result = handler(&api)
        .dispatch(request("get_all_projects", json!({})))
        .await;
    assert!(is_error(&result));
    assert!(text_payload(&result).contains("500"));
}

#[tokio::test]
async fn positional_tools_send_arrays() {
    let api = Arc::new(RecordingApi::new());
    let handler = handler(&api);
    handler
        .dispatch(request(
            "get_swimlane_by_name",
            json!({"project_id": 3, "name": "Backlog"}),
        ))
        .await;
    assert_eq!(
        api.last_params(),
        Params::positional(vec![json!(3), json!("Backlog")])
    );

    handler
        .dispatch(request(
            "create_task_file",
            json!({"project_id": 3, "task_id": 42, "filename": "a.txt", "blob": "aGk="}),
        ))
        .await;
    assert_eq!(
        api.last_params(),
        Params::positional(vec![json!(3), json!(42), json!("a.txt"), json!("aGk=")])
    );
}

#[tokio::test]
async fn renamed_keys_follow_kanboard_names() {
    let api = Arc::new(RecordingApi::new());
    let handler = handler(&api);
    handler
        .dispatch(request("assign_task", json!({"task_id": 42, "user_id": 7})))
        .await;
    assert_eq!(
        serde_json::to_value(api.last_params()).expect("params"),
        json!({"id": 42, "owner_id": 7})
    );

    handler
        .dispatch(request(
            "create_external_task_link",
            json!({"task_id": 42, "url": "https://x", "dependency": "related", "type": "weblink"}),
        ))
        .await;
    assert_eq!(api.last_params().get("type"), Some(&json!("weblink")));
    let schema = schema_of(&handler, "create_external_task_link");
    assert!(schema["properties"].get("type").is_some(), "{schema}");
    assert!(schema["properties"].get("link_type").is_none(), "{schema}");
}

#[tokio::test]
async fn metadata_values_are_forwarded_as_object() {
    let api = Arc::new(RecordingApi::new());
    let handler = handler(&api);
    let result = handler
        .dispatch(request(
            "save_task_metadata",
            json!({"task_id": 42, "values": {"sprint": "12"}}),
        ))
        .await;
    assert!(!is_error(&result), "{}", text_payload(&result));
    assert_eq!(
        api.last_params().get("values"),
        Some(&json!({"sprint": "12"}))
    );

    let result = handler
        .dispatch(request(
            "save_task_metadata",
            json!({"task_id": 42, "values": {"sprint": 12}}),
        ))
        .await;
    assert!(is_error(&result));
    assert_eq!(api.methods().len(), 1);
}

#[tokio::test]
async fn comment_visibility_is_checked_locally() {
    let api = Arc::new(RecordingApi::new());
    let handler = handler(&api);
    let result = handler
        .dispatch(request(
            "create_comment",
            json!({"task_id": 42, "user_id": 1, "content": "hi", "visibility": "everyone"}),
        ))
        .await;
    assert!(is_error(&result));
    assert!(text_payload(&result).contains("everyone"));
    assert!(api.methods().is_empty());

    let result = handler
        .dispatch(request(
            "create_comment",
            json!({"task_id": 42, "user_id": 1, "content": "hi", "visibility": "app-manager"}),
        ))
        .await;
    assert!(!is_error(&result));
    assert_eq!(
        api.last_params().get("visibility"),
        Some(&json!("app-manager"))
    );
}

#[tokio::test]
async fn project_role_defaults_and_is_checked() {
    let api = Arc::new(RecordingApi::new());
    let handler = handler(&api);
    handler
        .dispatch(request(
            "assign_user_to_project",
            json!({"project_id": 3, "user_id": 7}),
        ))
        .await;
    assert_eq!(
        serde_json::to_value(api.last_params()).expect("params"),
        json!({"project_id": 3, "user_id": 7, "role": "project-member"})
    );

    let result = handler
        .dispatch(request(
            "assign_user_to_project",
            json!({"project_id": 3, "user_id": 7, "role": "app-admin"}),
        ))
        .await;
    assert!(is_error(&result));
    assert_eq!(api.methods().len(), 1);
}

#[tokio::test]
async fn forbidden_project_assignment_hints_at_admin_role() {
    let api = Arc::new(RecordingApi::responding(|_| {
        Err(KanboardError::HttpStatus {
            code: 403,
            status: "403 Forbidden".to_string(),
        })
    }));
    let result = handler(&api)
        .dispatch(request(
            "assign_user_to_project",
            json!({"project_id": 3, "user_id": 7}),
        ))
        .await;
    assert!(is_error(&result));
    let text = text_payload(&result);
    assert!(text.contains("403"), "{text}");
    assert!(text.contains("app-admin"), "{text}");
}
