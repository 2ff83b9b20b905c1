//! API Handlers
//!
//! HTTP request handlers for the mock API server.
//!
//! Every request lands in [`dispatch_handler`], which picks the response by
//! method and [`ApiEndpoint`].

use axum::{
    body::Bytes,
    http::{header, HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use super::endpoint::ApiEndpoint;
use crate::error::{MockError, Result};
use crate::models::{HealthResponse, MessageResponse, PostEchoResponse, UsersResponse};
use crate::server::request_target;

/// Methods the mock API answers.
pub const ALLOWED_METHODS: &str = "GET, POST";

/// Entry point for every request to the mock API.
pub async fn dispatch_handler(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response> {
    let target = request_target(&uri);

    match method {
        Method::GET => Ok(get_handler(target).into_response()),
        Method::POST => match post_echo_handler(target, &headers, &body) {
            Ok(response) => Ok(Json(response).into_response()),
            Err(err) => {
                warn!("Rejected POST to {}: {}", target, err);
                Err(err)
            }
        },
        method => {
            warn!("Rejected {} request to {}", method, target);
            Err(MockError::MethodNotAllowed {
                method,
                allow: ALLOWED_METHODS,
            })
        }
    }
}

/// Handler for GET requests.
///
/// `/health` and `/users` return canned payloads, any other target is
/// echoed back in a message.
pub fn get_handler(target: &str) -> Response {
    let endpoint = ApiEndpoint::classify(target);
    debug!("GET {} classified as {:?}", target, endpoint);

    match endpoint {
        ApiEndpoint::Health => Json(HealthResponse::ok()).into_response(),
        ApiEndpoint::Users => Json(UsersResponse::fixture()).into_response(),
        ApiEndpoint::Other => Json(MessageResponse::endpoint_hit(target)).into_response(),
    }
}

/// Handler for POST requests to any target.
///
/// The body must be framed by a Content-Length header and decode as UTF-8.
pub fn post_echo_handler(
    target: &str,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<PostEchoResponse> {
    let declared = declared_length(headers)?;
    if declared != body.len() {
        return Err(MockError::BodyLengthMismatch {
            declared,
            received: body.len(),
        });
    }

    let data = std::str::from_utf8(body).map_err(|_| MockError::InvalidUtf8)?;
    debug!("POST {} echoing {} bytes", target, declared);

    Ok(PostEchoResponse::new(target, data))
}

/// Parses the Content-Length header.
fn declared_length(headers: &HeaderMap) -> Result<usize> {
    let value = headers
        .get(header::CONTENT_LENGTH)
        .ok_or(MockError::MissingContentLength)?;

    let text = String::from_utf8_lossy(value.as_bytes());
    text.trim()
        .parse::<usize>()
        .map_err(|_| MockError::InvalidContentLength(text.into_owned()))
}
