//! Argument checking against a tool's declared input schema.
//!
//! Runs before any handler so that a missing or mistyped argument never
//! reaches Kanboard. Integer and number arguments are accepted as numeric
//! strings too, which is how some agents send them.

use serde_json::{Map, Number, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("missing required argument '{0}'")]
    Missing(String),
    #[error("argument '{name}' must be {expected}, got {actual}")]
    InvalidType {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Any,
}

impl ArgKind {
    pub fn from_schema(property: &Value) -> Self {
        let declared = match property.get("type") {
            Some(Value::String(kind)) => Some(kind.as_str()),
            Some(Value::Array(kinds)) => kinds
                .iter()
                .filter_map(Value::as_str)
                .find(|kind| *kind != "null"),
            _ => None,
        };
        match declared {
            Some("string") => ArgKind::String,
            Some("integer") => ArgKind::Integer,
            Some("number") => ArgKind::Number,
            Some("boolean") => ArgKind::Boolean,
            Some("array") => ArgKind::Array,
            Some("object") => ArgKind::Object,
            _ => ArgKind::Any,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            ArgKind::String => "a string",
            ArgKind::Integer => "an integer",
            ArgKind::Number => "a number",
            ArgKind::Boolean => "a boolean",
            ArgKind::Array => "an array",
            ArgKind::Object => "an object",
            ArgKind::Any => "any value",
        }
    }
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check `arguments` against `schema` and return them with values coerced to
/// their declared kinds. Nulls count as absent.
pub fn prepare_arguments(
    schema: &Value,
    arguments: Map<String, Value>,
) -> Result<Map<String, Value>, ArgumentError> {
    let empty = Map::new();
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let mut prepared = Map::new();
    for (name, value) in arguments {
        if value.is_null() {
            continue;
        }
        let value = match properties.get(&name) {
            Some(property) => coerce(&name, property, value)?,
            None => value,
        };
        prepared.insert(name, value);
    }

    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for name in required.iter().filter_map(Value::as_str) {
        if !prepared.contains_key(name) {
            return Err(ArgumentError::Missing(name.to_string()));
        }
    }
    Ok(prepared)
}

fn coerce(name: &str, property: &Value, value: Value) -> Result<Value, ArgumentError> {
    let kind = ArgKind::from_schema(property);
    let invalid = |value: &Value| ArgumentError::InvalidType {
        name: name.to_string(),
        expected: kind.describe(),
        actual: json_kind(value),
    };
    match kind {
        ArgKind::Any => Ok(value),
        ArgKind::String => match value {
            Value::String(_) => Ok(value),
            other => Err(invalid(&other)),
        },
        ArgKind::Integer => integer(&value).ok_or_else(|| invalid(&value)),
        ArgKind::Number => number(&value).ok_or_else(|| invalid(&value)),
        ArgKind::Boolean => match value {
            Value::Bool(_) => Ok(value),
            Value::String(ref text) if text.trim() == "true" => Ok(Value::Bool(true)),
            Value::String(ref text) if text.trim() == "false" => Ok(Value::Bool(false)),
            other => Err(invalid(&other)),
        },
        ArgKind::Object => match value {
            Value::Object(_) => Ok(value),
            other => Err(invalid(&other)),
        },
        ArgKind::Array => match value {
            Value::Array(items) => {
                let item_schema = property.get("items").cloned().unwrap_or(Value::Null);
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| coerce(&format!("{name}[{index}]"), &item_schema, item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array)
            }
            other => Err(invalid(&other)),
        },
    }
}

fn integer(value: &Value) -> Option<Value> {
    match value {
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                return Some(value.clone());
            }
            let float = number.as_f64()?;
            if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
                Some(Value::from(float as i64))
            } else {
                None
            }
        }
        Value::String(text) => text.trim().parse::<i64>().ok().map(Value::from),
        _ => None,
    }
}

fn number(value: &Value) -> Option<Value> {
    match value {
        Value::Number(_) => Some(value.clone()),
        Value::String(text) => {
            let text = text.trim();
            if let Ok(int) = text.parse::<i64>() {
                return Some(Value::from(int));
            }
            text.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
        }
        _ => None,
    }
}
