use thiserror::Error;

/// Errors coming from the workload analytics service.
#[derive(Debug, Error)]
pub enum LogError {
    /// Transport-level failure: connect, timeout, TLS, body read.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Analytics service responded with status {status}: {message}")]
    Api { status: u16, message: String },
}

impl LogError {
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            "<empty response>".to_string()
        } else {
            trimmed.to_string()
        };
        LogError::Api { status, message }
    }
}
