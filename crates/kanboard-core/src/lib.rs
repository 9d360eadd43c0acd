//! Kanboard JSON-RPC plumbing shared by the MCP server.

pub mod args;
pub mod client;
pub mod config;
pub mod lookup;
pub mod rpc;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
