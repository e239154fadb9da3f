//! Error types for the cloud music API client.

use thiserror::Error;

/// Errors that can occur when talking to the music API server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-200 `code` in its JSON response body.
    ///
    /// Common codes:
    /// - `301`  — not logged in / cookie expired
    /// - `400`  — malformed parameters
    /// - `502`  — wrong password or account
    /// - `-460` — cheating detected (request too frequent)
    #[error("API error (code {code}): {message}")]
    Api {
        /// Status code from the response envelope (not the HTTP status).
        code: i64,
        /// Human-readable error message from the server.
        message: String,
    },

    /// A required endpoint parameter was absent or empty.
    ///
    /// Reported before any request is sent.
    #[error("missing required parameter `{0}`")]
    MissingParam(&'static str),

    /// File I/O error (config or session read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode a JSON document or response field.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors (e.g. missing config directory).
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    /// Whether the server rejected the call because the session is missing or expired.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { code: 301, .. })
    }
}

/// Convenience alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
