//! Mock Servers - Canned HTTP servers for local testing
//!
//! Provides a mock JSON API server and a mock web server that reflects each
//! request back as an HTML page.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod web;

pub use config::{Cli, ServerConfig, DEFAULT_API_PORT, DEFAULT_WEB_PORT};
pub use error::{MockError, ServerError};
