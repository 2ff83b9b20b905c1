//! API Module
//!
//! Handlers and routing for the mock JSON API server.
//!
//! # Endpoints
//! - `GET /health` - Health check
//! - `GET /users` - Fixed user listing
//! - `GET <any>` - Echoes the request target
//! - `POST <any>` - Echoes the request target and body

pub mod endpoint;
pub mod handlers;
pub mod routes;


pub use endpoint::ApiEndpoint;
pub use handlers::*;
pub use routes::create_router;
