//! Error types for the assistant.

/// Error from a text generation request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AssistError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// The prompt was rejected by the service's safety filters.
    #[error("prompt blocked: {0}")]
    Blocked(String),

    /// The service answered without any text.
    #[error("empty response from text generation service")]
    EmptyResponse,

    /// No API key is configured.
    #[error("API key not configured")]
    MissingApiKey,
}
