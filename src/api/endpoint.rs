//! Endpoint Classification
//!
//! Maps a request target onto the small set of paths the mock API knows.

/// Known API paths plus the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    /// `/health`
    Health,
    /// `/users`
    Users,
    /// Anything else
    Other,
}

impl ApiEndpoint {
    /// Classifies a request target by exact comparison.
    ///
    /// The target includes the query string, so `/health?verbose=1` is
    /// [`ApiEndpoint::Other`].
    pub fn classify(target: &str) -> Self {
        match target {
            "/health" => ApiEndpoint::Health,
            "/users" => ApiEndpoint::Users,
            _ => ApiEndpoint::Other,
        }
    }
}
