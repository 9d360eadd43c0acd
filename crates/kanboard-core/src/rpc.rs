use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::KanboardError;

pub const JSONRPC_VERSION: &str = "2.0";
/// Every request travels alone, so the id is constant.
pub const REQUEST_ID: u64 = 1;

/// Parameter payload of a JSON-RPC call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Params {
    #[default]
    None,
    Named(Map<String, Value>),
    Positional(Vec<Value>),
}

impl Params {
    pub fn positional(values: Vec<Value>) -> Self {
        Params::Positional(values)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Params::None)
    }

    /// Value under `key` for named params.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Params::Named(map) => map.get(key),
            _ => None,
        }
    }
}

/// Builder for keyed parameters. Optional values are only written when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedParams(Map<String, Value>);

impl NamedParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn with_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }
}

impl From<NamedParams> for Params {
    fn from(params: NamedParams) -> Self {
        Params::Named(params.0)
    }
}

#[derive(Debug, Serialize)]
pub struct RequestEnvelope<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub id: u64,
    #[serde(skip_serializing_if = "params_absent")]
    pub params: &'a Params,
}

fn params_absent(params: &&Params) -> bool {
    params.is_none()
}

impl<'a> RequestEnvelope<'a> {
    pub fn new(method: &'a str, params: &'a Params) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            id: REQUEST_ID,
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<RemoteError>,
}

impl ResponseEnvelope {
    /// A populated `error` wins over any `result`.
    pub fn into_result(self) -> Result<Value, KanboardError> {
        match self.error {
            Some(error) => Err(KanboardError::Remote {
                code: error.code,
                message: error.message,
            }),
            None => Ok(self.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn named_params_skip_absent_optionals() {
        let params: Params = NamedParams::new()
            .with("task_id", 42)
            .with_opt("title", Some("Ship it"))
            .with_opt::<i64>("owner_id", None)
            .into();
        assert_eq!(
            serde_json::to_value(&params).expect("serialize"),
            json!({"task_id": 42, "title": "Ship it"})
        );
    }

    #[test]
    fn envelope_omits_missing_params() {
        let params = Params::None;
        let body = serde_json::to_value(RequestEnvelope::new("getVersion", &params)).expect("serialize");
        assert_eq!(body, json!({"jsonrpc": "2.0", "method": "getVersion", "id": 1}));
    }

    #[test]
    fn envelope_keeps_positional_params_in_order() {
        let params = Params::positional(vec![json!(3), json!("Backlog")]);
        let body = serde_json::to_value(RequestEnvelope::new("getSwimlaneByName", &params))
            .expect("serialize");
        assert_eq!(body["params"], json!([3, "Backlog"]));
    }

    #[test]
    fn error_envelope_ignores_result() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"id": 9},
            "error": {"code": -32601, "message": "Method not found"}
        }))
        .expect("decode");
        let err = envelope.into_result().expect_err("remote error");
        assert_eq!(
            err.to_string(),
            "kanboard API error: Method not found (Code: -32601)"
        );
    }

    #[test]
    fn null_error_is_success() {
        let envelope: ResponseEnvelope =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "result": false, "error": null}))
                .expect("decode");
        assert_eq!(envelope.into_result().expect("result"), json!(false));
    }
}
