//! Name-to-id resolution on top of Kanboard's loosely typed lookups.
//!
//! Kanboard never raises an error for "no such record". Depending on the
//! method it answers `false`, `true`, `null`, `[]`, `{}` or an object whose id
//! is zero or empty. [`decode_record`] is the one place those shapes are
//! recognised.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::client::{KanboardApi, KanboardError};
use crate::rpc::{NamedParams, Params};

/// Default placement for a task moved by column name.
pub const DEFAULT_POSITION: i64 = 1;
pub const DEFAULT_SWIMLANE_ID: i64 = 0;

/// Non-record answers to a lookup call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    False,
    True,
    Null,
    EmptyArray,
    EmptyObject,
    MissingId,
    UnexpectedType(&'static str),
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentinel::False => write!(f, "API returned false"),
            Sentinel::True => write!(f, "API returned true"),
            Sentinel::Null => write!(f, "API returned null"),
            Sentinel::EmptyArray => write!(f, "API returned empty array"),
            Sentinel::EmptyObject => write!(f, "API returned empty object"),
            Sentinel::MissingId => write!(f, "record id is zero or empty"),
            Sentinel::UnexpectedType(kind) => write!(f, "API returned unexpected type {kind}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Project '{name}' not found: {reason}")]
    ProjectNotFound { name: String, reason: Sentinel },
    #[error("Task {task_id} not found: {reason}")]
    TaskNotFound { task_id: i64, reason: Sentinel },
    #[error("Task {task_id} has no project id")]
    TaskWithoutProject { task_id: i64 },
    #[error("Column '{column}' not found in project {project_id} of task {task_id}")]
    ColumnNotFound {
        column: String,
        task_id: i64,
        project_id: i64,
    },
    #[error("Failed to {action}: {source}")]
    Api {
        action: &'static str,
        #[source]
        source: KanboardError,
    },
}

impl LookupError {
    fn api(action: &'static str) -> impl FnOnce(KanboardError) -> LookupError {
        move |source| LookupError::Api { action, source }
    }
}

/// Accept `value` as a record only if it is an object with a usable id.
pub fn decode_record(value: Value) -> Result<Map<String, Value>, Sentinel> {
    let sentinel = match value {
        Value::Bool(false) => Sentinel::False,
        Value::Bool(true) => Sentinel::True,
        Value::Null => Sentinel::Null,
        Value::Array(items) if items.is_empty() => Sentinel::EmptyArray,
        Value::Array(_) => Sentinel::UnexpectedType("array"),
        Value::Number(_) => Sentinel::UnexpectedType("number"),
        Value::String(_) => Sentinel::UnexpectedType("string"),
        Value::Object(map) if map.is_empty() => Sentinel::EmptyObject,
        Value::Object(map) => {
            return match record_id(&map) {
                Some(_) => Ok(map),
                None => Err(Sentinel::MissingId),
            };
        }
    };
    if let Sentinel::UnexpectedType(kind) = sentinel {
        warn!(kind, "unrecognized not-found shape from kanboard");
    }
    Err(sentinel)
}

pub fn record_id(record: &Map<String, Value>) -> Option<i64> {
    record.get("id").and_then(id_value)
}

/// Kanboard sends ids as numbers or numeric strings. Zero means none.
pub fn id_value(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }?;
    (id > 0).then_some(id)
}

/// Match a column title exactly, then case-insensitively.
pub fn find_column_id(columns: &Value, title: &str) -> Option<i64> {
    let columns = columns.as_array()?;
    let title_of = |column: &Value| column.get("title").and_then(Value::as_str).map(str::to_string);
    let exact = columns
        .iter()
        .find(|column| title_of(column).as_deref() == Some(title));
    let wanted = title.trim().to_lowercase();
    let column = exact.or_else(|| {
        columns.iter().find(|column| {
            title_of(column)
                .map(|candidate| candidate.trim().to_lowercase() == wanted)
                .unwrap_or(false)
        })
    })?;
    column.get("id").and_then(id_value)
}

pub async fn resolve_project_id(api: &dyn KanboardApi, name: &str) -> Result<i64, LookupError> {
    let params = NamedParams::new().with("name", name);
    let value = api
        .call("getProjectByName", params.into())
        .await
        .map_err(LookupError::api("get project ID"))?;
    let record = decode_record(value).map_err(|reason| LookupError::ProjectNotFound {
        name: name.to_string(),
        reason,
    })?;
    let project_id = record_id(&record).ok_or_else(|| LookupError::ProjectNotFound {
        name: name.to_string(),
        reason: Sentinel::MissingId,
    })?;
    debug!(project = name, project_id, "resolved project");
    Ok(project_id)
}

/// Where a task lands when moved to a named column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnTarget {
    pub project_id: i64,
    pub column_id: i64,
}

pub async fn resolve_column(
    api: &dyn KanboardApi,
    task_id: i64,
    column_name: &str,
) -> Result<ColumnTarget, LookupError> {
    let task = api
        .call("getTask", NamedParams::new().with("task_id", task_id).into())
        .await
        .map_err(LookupError::api("get task details"))?;
    let task = decode_record(task).map_err(|reason| LookupError::TaskNotFound { task_id, reason })?;
    let project_id = task
        .get("project_id")
        .and_then(id_value)
        .ok_or(LookupError::TaskWithoutProject { task_id })?;

    let columns = api
        .call("getColumns", NamedParams::new().with("project_id", project_id).into())
        .await
        .map_err(LookupError::api("get columns"))?;
    let column_id =
        find_column_id(&columns, column_name).ok_or_else(|| LookupError::ColumnNotFound {
            column: column_name.to_string(),
            task_id,
            project_id,
        })?;
    debug!(task_id, project_id, column_id, column = column_name, "resolved column");
    Ok(ColumnTarget {
        project_id,
        column_id,
    })
}

/// Params for `moveTaskPosition` once the column is known.
pub fn move_params(
    target: ColumnTarget,
    task_id: i64,
    position: Option<i64>,
    swimlane_id: Option<i64>,
) -> Params {
    NamedParams::new()
        .with("project_id", target.project_id)
        .with("task_id", task_id)
        .with("column_id", target.column_id)
        .with("position", position.unwrap_or(DEFAULT_POSITION))
        .with("swimlane_id", swimlane_id.unwrap_or(DEFAULT_SWIMLANE_ID))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    struct ScriptedApi {
        responses: Mutex<Vec<Value>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        fn new(responses: Vec<Value>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().rev().collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn methods(&self) -> Vec<String> {
            self.calls.lock().expect("calls").clone()
        }
    }

    #[async_trait]
    impl KanboardApi for ScriptedApi {
        async fn call(&self, method: &str, _params: Params) -> Result<Value, KanboardError> {
            self.calls.lock().expect("calls").push(method.to_string());
            Ok(self
                .responses
                .lock()
                .expect("responses")
                .pop()
                .unwrap_or(Value::Null))
        }
    }

    #[test]
    fn sentinels_are_not_records() {
        let cases = [
            (json!(false), Sentinel::False),
            (json!(true), Sentinel::True),
            (Value::Null, Sentinel::Null),
            (json!([]), Sentinel::EmptyArray),
            (json!({}), Sentinel::EmptyObject),
            (json!({"id": 0, "name": "Alpha"}), Sentinel::MissingId),
            (json!({"id": "", "name": "Alpha"}), Sentinel::MissingId),
            (json!({"name": "Alpha"}), Sentinel::MissingId),
            (json!([{"id": 1}]), Sentinel::UnexpectedType("array")),
            (json!("Alpha"), Sentinel::UnexpectedType("string")),
            (json!(5), Sentinel::UnexpectedType("number")),
        ];
        for (value, expected) in cases {
            assert_eq!(decode_record(value.clone()), Err(expected), "value: {value}");
        }
    }

    #[test]
    fn string_and_numeric_ids_are_records() {
        let record = decode_record(json!({"id": "7", "name": "Alpha"})).expect("record");
        assert_eq!(record_id(&record), Some(7));
        let record = decode_record(json!({"id": 3})).expect("record");
        assert_eq!(record_id(&record), Some(3));
    }

    #[test]
    fn column_titles_match_exactly_then_loosely() {
        let columns = json!([
            {"id": "1", "title": "Todo"},
            {"id": 2, "title": "Done"},
            {"id": 3, "title": "done"}
        ]);
        assert_eq!(find_column_id(&columns, "Done"), Some(2));
        assert_eq!(find_column_id(&columns, "todo "), Some(1));
        assert_eq!(find_column_id(&columns, "Review"), None);
        assert_eq!(find_column_id(&json!(false), "Done"), None);
    }

    #[tokio::test]
    async fn project_lookup_stops_on_sentinel() {
        let api = ScriptedApi::new(vec![json!([])]);
        let err = resolve_project_id(&api, "Alpha").await.expect_err("not found");
        assert_eq!(err.to_string(), "Project 'Alpha' not found: API returned empty array");
        assert_eq!(api.methods(), vec!["getProjectByName"]);
    }

    #[tokio::test]
    async fn column_lookup_walks_task_then_columns() {
        let api = ScriptedApi::new(vec![
            json!({"id": "42", "project_id": "3"}),
            json!([{"id": 1, "title": "Todo"}, {"id": 2, "title": "Done"}]),
        ]);
        let target = resolve_column(&api, 42, "Done").await.expect("target");
        assert_eq!(
            target,
            ColumnTarget {
                project_id: 3,
                column_id: 2
            }
        );
        assert_eq!(api.methods(), vec!["getTask", "getColumns"]);
    }

    #[tokio::test]
    async fn missing_column_names_column_and_task() {
        let api = ScriptedApi::new(vec![
            json!({"id": 42, "project_id": 3}),
            json!([{"id": 1, "title": "Todo"}]),
        ]);
        let err = resolve_column(&api, 42, "Done").await.expect_err("missing");
        let message = err.to_string();
        assert!(message.contains("'Done'"), "{message}");
        assert!(message.contains("task 42"), "{message}");
    }

    #[tokio::test]
    async fn missing_task_skips_column_lookup() {
        let api = ScriptedApi::new(vec![Value::Null]);
        let err = resolve_column(&api, 42, "Done").await.expect_err("missing");
        assert_eq!(err.to_string(), "Task 42 not found: API returned null");
        assert_eq!(api.methods(), vec!["getTask"]);
    }

    #[test]
    fn move_params_default_position_and_swimlane() {
        let target = ColumnTarget {
            project_id: 3,
            column_id: 2,
        };
        let params = move_params(target, 42, None, None);
        assert_eq!(
            serde_json::to_value(&params).expect("serialize"),
            json!({"project_id": 3, "task_id": 42, "column_id": 2, "position": 1, "swimlane_id": 0})
        );
    }
}
