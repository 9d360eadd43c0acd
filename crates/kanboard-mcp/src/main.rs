mod tools;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;
use rust_mcp_sdk::schema::{
    Implementation, InitializeResult, ProtocolVersion, ServerCapabilities, ServerCapabilitiesTools,
};
use rust_mcp_sdk::{
    mcp_server::{server_runtime, McpServerOptions},
    McpServer, StdioTransport, ToMcpServerHandler, TransportOptions,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kanboard_core::client::KanboardClient;
use kanboard_core::config::{
    explicit_config_path, load_config, load_default_config, KanboardConfig, Settings,
};

use crate::tools::{KanboardServerHandler, McpContext};

const LOG_ENV: &str = "KANBOARD_MCP_LOG";
const DEFAULT_LOG_FILTER: &str = "kanboard_mcp=info,kanboard_core=info";

#[derive(Parser)]
#[command(name = "kanboard-mcp", version)]
struct Args {
    /// Kanboard JSON-RPC endpoint. Overrides KANBOARD_API_ENDPOINT.
    #[arg(long)]
    endpoint: Option<String>,
    /// TOML file with endpoint, api_key, username and password.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// stdout is the MCP channel, so logs go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_settings(args: &Args) -> anyhow::Result<Settings> {
    let file = match explicit_config_path(args.config.as_deref()) {
        Some(path) => load_config(&path)
            .with_context(|| format!("reading config file {}", path.display()))?,
        None => load_default_config().unwrap_or_default(),
    };
    let flags = KanboardConfig {
        endpoint: args.endpoint.clone(),
        ..Default::default()
    };
    Ok(Settings::resolve(flags.or(KanboardConfig::from_env()).or(file)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let settings = resolve_settings(&args)?;
    if settings.uses_placeholder_endpoint() {
        warn!(
            endpoint = %settings.endpoint,
            "no Kanboard endpoint configured; set KANBOARD_API_ENDPOINT"
        );
    }
    let client = KanboardClient::new(&settings).context("building HTTP client")?;
    info!(
        endpoint = client.endpoint(),
        auth = client.auth_scheme(),
        "starting kanboard MCP server"
    );

    let server_details = InitializeResult {
        server_info: Implementation {
            name: "kanboard".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            title: Some("Kanboard MCP Server".into()),
            description: Some("MCP tools for the Kanboard JSON-RPC API".into()),
            icons: vec![],
            website_url: None,
        },
        capabilities: ServerCapabilities {
            tools: Some(ServerCapabilitiesTools { list_changed: None }),
            ..Default::default()
        },
        meta: None,
        instructions: Some(
            "Kanboard project management tools. Most tools take numeric ids; \
             get_tasks, create_task and move_task accept project and column names."
                .into(),
        ),
        protocol_version: ProtocolVersion::V2025_11_25.into(),
    };

    let transport = StdioTransport::new(TransportOptions::default())
        .map_err(|err| anyhow!("stdio transport: {err}"))?;
    let handler = KanboardServerHandler::new(McpContext {
        api: Arc::new(client),
    });
    info!(tools = handler.tool_count(), "tool catalog ready");

    let server = server_runtime::create_server(McpServerOptions {
        server_details,
        transport,
        handler: handler.to_mcp_server_handler(),
        task_store: None,
        client_task_store: None,
    });

    server
        .start()
        .await
        .map_err(|err| anyhow!("MCP server stopped: {err}"))
}
