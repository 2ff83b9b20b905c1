//! Mock Web Server
//!
//! Answers every GET with an HTML page listing the requested target and the
//! headers received.
//!
//! Usage: `mock_web_server [PORT] [--host HOST]` (port defaults to 8000).

use anyhow::Result;
use clap::Parser;

use mock_servers::{server, web, Cli, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::for_web(Cli::parse());

    server::init_tracing();
    server::run("web", config, web::create_router()).await?;

    Ok(())
}
