//! Web Handlers
//!
//! Request handler for the mock web server.

use axum::{
    http::{HeaderMap, Method, Uri},
    response::Html,
};
use tracing::{debug, warn};

use super::page::render_page;
use crate::error::{MockError, Result};
use crate::server::request_target;

/// Methods the mock web server answers.
pub const ALLOWED_METHODS: &str = "GET";

/// Handler for every request to the mock web server.
///
/// GET requests get a page showing the target and the received headers.
pub async fn page_handler(method: Method, uri: Uri, headers: HeaderMap) -> Result<Html<String>> {
    let target = request_target(&uri);

    if method != Method::GET {
        warn!("Rejected {} request to {}", method, target);
        return Err(MockError::MethodNotAllowed {
            method,
            allow: ALLOWED_METHODS,
        });
    }

    debug!("Rendering page for {} with {} headers", target, headers.len());
    Ok(Html(render_page(target, &headers)))
}
