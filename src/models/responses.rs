//! Response DTOs for the mock API server
//!
//! Defines the structure of outgoing JSON response bodies.

use serde::Serialize;

/// Response body for `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Health status, always "ok"
    pub status: String,
}

impl HealthResponse {
    /// Creates the canned healthy response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// A single user record in the canned user listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Response body for `GET /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

impl UsersResponse {
    /// The fixed user listing, Alice then Bob
    pub fn fixture() -> Self {
        Self {
            users: vec![User::new(1, "Alice"), User::new(2, "Bob")],
        }
    }
}

/// Response body for GET requests to any other path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Creates the catch-all response echoing the request target
    pub fn endpoint_hit(path: &str) -> Self {
        Self {
            message: format!("API endpoint hit: {}", path),
        }
    }
}

/// Response body for POST requests to any path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostEchoResponse {
    /// Message naming the request target
    pub message: String,
    /// The request body decoded as text
    pub data: String,
}

impl PostEchoResponse {
    /// Creates a new PostEchoResponse
    pub fn new(path: &str, data: impl Into<String>) -> Self {
        Self {
            message: format!("Received POST data on {}", path),
            data: data.into(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
