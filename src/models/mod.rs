//! Response models for the mock API server
//!
//! This module defines the DTOs (Data Transfer Objects) serialized into
//! HTTP response bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    ErrorResponse, HealthResponse, MessageResponse, PostEchoResponse, User, UsersResponse,
};
