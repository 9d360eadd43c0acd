use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{Auth, Settings};
use crate::rpc::{Params, RequestEnvelope, ResponseEnvelope};

pub const API_KEY_HEADER: &str = "X-API-Auth";

#[derive(Debug, Error)]
pub enum KanboardError {
    #[error("failed to send request: {0}")]
    Transport(String),
    #[error("API request failed with status code: {code}, Response: {status}")]
    HttpStatus { code: u16, status: String },
    #[error("failed to decode API response: {0}")]
    Decode(String),
    #[error("kanboard API error: {message} (Code: {code})")]
    Remote { code: i64, message: String },
}

impl KanboardError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            KanboardError::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// One JSON-RPC call against Kanboard. At most once, never retried.
#[async_trait]
pub trait KanboardApi: Send + Sync {
    async fn call(&self, method: &str, params: Params) -> Result<Value, KanboardError>;
}

pub struct KanboardClient {
    http: reqwest::Client,
    endpoint: String,
    auth: Auth,
}

impl KanboardClient {
    pub fn new(settings: &Settings) -> Result<Self, KanboardError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("kanboard-mcp/{}", crate::version()))
            .build()
            .map_err(|err| KanboardError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            auth: settings.auth(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn auth_scheme(&self) -> &'static str {
        self.auth.scheme()
    }
}

#[async_trait]
impl KanboardApi for KanboardClient {
    async fn call(&self, method: &str, params: Params) -> Result<Value, KanboardError> {
        let envelope = RequestEnvelope::new(method, &params);
        let request = self.http.post(&self.endpoint).json(&envelope);
        let request = match &self.auth {
            Auth::Basic { username, password } => request.basic_auth(username, Some(password)),
            Auth::ApiKey(key) => request.header(API_KEY_HEADER, key),
        };

        debug!(method, "calling kanboard");
        let response = request.send().await.map_err(|err| {
            warn!(method, error = %err, "kanboard unreachable");
            KanboardError::Transport(err.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(method, status = status.as_u16(), "kanboard returned non-200 status");
            return Err(KanboardError::HttpStatus {
                code: status.as_u16(),
                status: status.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| KanboardError::Transport(err.to_string()))?;
        let envelope: ResponseEnvelope = serde_json::from_slice(&body)
            .map_err(|err| KanboardError::Decode(err.to_string()))?;
        envelope.into_result()
    }
}
