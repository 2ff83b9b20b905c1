//! Web Routes
//!
//! Configures the Axum router for the mock web server.

use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::page_handler;

/// Creates the mock web router, sending every target to the page handler.
pub fn create_router() -> Router {
    Router::new()
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
}
