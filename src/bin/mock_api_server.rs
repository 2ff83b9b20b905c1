//! Mock API Server
//!
//! Serves canned JSON for `/health` and `/users`, and echoes every other
//! GET target and every POST body.
//!
//! Usage: `mock_api_server [PORT] [--host HOST]` (port defaults to 3000).

use anyhow::Result;
use clap::Parser;

use mock_servers::{api, server, Cli, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::for_api(Cli::parse());

    server::init_tracing();
    server::run("API", config, api::create_router()).await?;

    Ok(())
}
