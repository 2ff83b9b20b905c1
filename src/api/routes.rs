//! API Routes
//!
//! Configures the Axum router for the mock API server.

use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::dispatch_handler;

/// Creates the mock API router.
///
/// All requests go to a single fallback handler, which classifies the
/// target itself. Requests are traced through `tower_http`.
pub fn create_router() -> Router {
    Router::new()
        .fallback(dispatch_handler)
        .layer(TraceLayer::new_for_http())
}
