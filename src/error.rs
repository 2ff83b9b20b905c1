//! Error types for the mock servers
//!
//! Provides unified error handling using thiserror.

use std::io;
use std::net::SocketAddr;

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Mock Error Enum ==
/// Per-request failure, rendered as a JSON error body.
#[derive(Error, Debug)]
pub enum MockError {
    /// POST without a Content-Length header
    #[error("Missing Content-Length header")]
    MissingContentLength,

    /// Content-Length present but not a non-negative integer
    #[error("Invalid Content-Length header: {0}")]
    InvalidContentLength(String),

    /// Received body does not match the declared Content-Length
    #[error("Body length {received} does not match Content-Length {declared}")]
    BodyLengthMismatch { declared: usize, received: usize },

    /// POST body bytes are not UTF-8
    #[error("Request body is not valid UTF-8")]
    InvalidUtf8,

    /// Method outside the server's contract
    #[error("Method not allowed: {method}")]
    MethodNotAllowed {
        method: Method,
        allow: &'static str,
    },
}

impl MockError {
    /// Status code the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            MockError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string()));

        match self {
            MockError::MethodNotAllowed { allow, .. } => {
                (status, [(header::ALLOW, allow)], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}

// == Server Error Enum ==
/// Failure while starting or running a listener.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Listener could not be bound, e.g. the port is already in use
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// Accept loop terminated with an I/O error
    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, MockError>;
