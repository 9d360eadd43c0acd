use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

pub const ENDPOINT_ENV: &str = "KANBOARD_API_ENDPOINT";
pub const API_KEY_ENV: &str = "KANBOARD_API_KEY";
pub const USERNAME_ENV: &str = "KANBOARD_USERNAME";
pub const PASSWORD_ENV: &str = "KANBOARD_PASSWORD";
pub const CONFIG_PATH_ENV: &str = "KANBOARD_MCP_CONFIG";

pub const PLACEHOLDER_ENDPOINT: &str = "https://your-kanboard-url/jsonrpc.php";
pub const PLACEHOLDER_API_KEY: &str = "your-kanboard-api-key";
pub const PLACEHOLDER_USERNAME: &str = "your-kanboard-username";
pub const PLACEHOLDER_PASSWORD: &str = "your-kanboard-password";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One layer of connection settings (CLI, environment or config file).
/// Unset fields defer to the next layer.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KanboardConfig {
    /// JSON-RPC endpoint, usually ending in `/jsonrpc.php`.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl KanboardConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: env_value(ENDPOINT_ENV),
            api_key: env_value(API_KEY_ENV),
            username: env_value(USERNAME_ENV),
            password: env_value(PASSWORD_ENV),
        }
    }

    /// Keep every field set here and take the rest from `fallback`.
    pub fn or(self, fallback: KanboardConfig) -> Self {
        Self {
            endpoint: non_empty(self.endpoint).or_else(|| non_empty(fallback.endpoint)),
            api_key: non_empty(self.api_key).or_else(|| non_empty(fallback.api_key)),
            username: non_empty(self.username).or_else(|| non_empty(fallback.username)),
            password: non_empty(self.password).or_else(|| non_empty(fallback.password)),
        }
    }
}

impl fmt::Debug for KanboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KanboardConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_value(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

pub fn resolve_user_home_dir() -> Option<PathBuf> {
    env_value("HOME")
        .or_else(|| env_value("USERPROFILE"))
        .map(PathBuf::from)
}

pub fn default_config_path() -> Option<PathBuf> {
    resolve_user_home_dir().map(|home| home.join(".kanboard-mcp.toml"))
}

/// Config file named explicitly, by flag or by `KANBOARD_MCP_CONFIG`.
pub fn explicit_config_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| env_value(CONFIG_PATH_ENV).map(PathBuf::from))
}

pub fn load_config(path: &Path) -> Result<KanboardConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str::<KanboardConfig>(&text)?)
}

/// Best-effort read of `~/.kanboard-mcp.toml`.
pub fn load_default_config() -> Option<KanboardConfig> {
    let path = default_config_path()?;
    if !path.is_file() {
        return None;
    }
    match load_config(&path) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable config file");
            None
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    Basic { username: String, password: String },
    ApiKey(String),
}

impl Auth {
    pub fn scheme(&self) -> &'static str {
        match self {
            Auth::Basic { .. } => "basic",
            Auth::ApiKey(_) => "api-key",
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Auth::ApiKey(_) => f.debug_tuple("ApiKey").field(&"<redacted>").finish(),
        }
    }
}

/// Fully resolved connection settings, fixed for the life of the process.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub api_key: String,
    pub username: String,
    pub password: String,
}

impl Settings {
    pub fn resolve(config: KanboardConfig) -> Self {
        let config = config.or(KanboardConfig::default());
        Self {
            endpoint: config
                .endpoint
                .unwrap_or_else(|| PLACEHOLDER_ENDPOINT.to_string()),
            api_key: config
                .api_key
                .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string()),
            username: config
                .username
                .unwrap_or_else(|| PLACEHOLDER_USERNAME.to_string()),
            password: config
                .password
                .unwrap_or_else(|| PLACEHOLDER_PASSWORD.to_string()),
        }
    }

    /// Basic auth needs a real username and password; placeholders fall back to the API key.
    pub fn auth(&self) -> Auth {
        let username_set = !self.username.is_empty() && self.username != PLACEHOLDER_USERNAME;
        let password_set = !self.password.is_empty() && self.password != PLACEHOLDER_PASSWORD;
        if username_set && password_set {
            Auth::Basic {
                username: self.username.clone(),
                password: self.password.clone(),
            }
        } else {
            Auth::ApiKey(self.api_key.clone())
        }
    }

    pub fn uses_placeholder_endpoint(&self) -> bool {
        self.endpoint == PLACEHOLDER_ENDPOINT
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("endpoint", &self.endpoint)
            .field("auth", &self.auth())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(endpoint: Option<&str>, username: Option<&str>) -> KanboardConfig {
        KanboardConfig {
            endpoint: endpoint.map(str::to_string),
            username: username.map(str::to_string),
            ..KanboardConfig::default()
        }
    }

    #[test]
    fn or_prefers_first_layer_and_skips_blank_values() {
        let merged = layer(Some("  "), Some("alice")).or(layer(Some("http://kb/jsonrpc.php"), Some("bob")));
        assert_eq!(merged.endpoint.as_deref(), Some("http://kb/jsonrpc.php"));
        assert_eq!(merged.username.as_deref(), Some("alice"));
    }

    #[test]
    fn resolve_fills_placeholders() {
        let settings = Settings::resolve(KanboardConfig::default());
        assert_eq!(settings.endpoint, PLACEHOLDER_ENDPOINT);
        assert_eq!(settings.api_key, PLACEHOLDER_API_KEY);
        assert!(settings.uses_placeholder_endpoint());
        assert_eq!(settings.auth(), Auth::ApiKey(PLACEHOLDER_API_KEY.to_string()));
    }

    #[test]
    fn basic_auth_requires_both_real_credentials() {
        let mut settings = Settings::resolve(KanboardConfig {
            username: Some("admin".into()),
            ..KanboardConfig::default()
        });
        assert_eq!(settings.auth().scheme(), "api-key");

        settings.password = "secret".into();
        assert_eq!(
            settings.auth(),
            Auth::Basic {
                username: "admin".into(),
                password: "secret".into()
            }
        );
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let settings = Settings::resolve(KanboardConfig {
            api_key: Some("token-123".into()),
            password: Some("hunter2".into()),
            username: Some("admin".into()),
            ..KanboardConfig::default()
        });
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("token-123"));
        assert!(rendered.contains("admin"));
    }
}
