//! Configuration Module
//!
//! Handles parsing the command line into a server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Default port of the mock API server.
pub const DEFAULT_API_PORT: u16 = 3000;

/// Default port of the mock web server.
pub const DEFAULT_WEB_PORT: u16 = 8000;

/// Command line arguments shared by both mock servers.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Port to listen on
    pub port: Option<u16>,

    /// Address to bind to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
}

/// Server configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface the listener binds to
    pub host: IpAddr,
    /// HTTP server port
    pub port: u16,
}

impl ServerConfig {
    /// Creates a config on all interfaces with the given port.
    pub fn new(port: u16) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port,
        }
    }

    /// Builds the config from parsed arguments, falling back to
    /// `default_port` when no port was given.
    pub fn from_cli(cli: Cli, default_port: u16) -> Self {
        Self {
            host: cli.host,
            port: cli.port.unwrap_or(default_port),
        }
    }

    /// Config for the mock API server, defaulting to port 3000.
    pub fn for_api(cli: Cli) -> Self {
        Self::from_cli(cli, DEFAULT_API_PORT)
    }

    /// Config for the mock web server, defaulting to port 8000.
    pub fn for_web(cli: Cli) -> Self {
        Self::from_cli(cli, DEFAULT_WEB_PORT)
    }

    /// Address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
