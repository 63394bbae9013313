use serde::Deserialize;
use thiserror::Error;

/// All errors coming from the job service HTTP layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: connect, timeout, TLS, body read.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Job service responded with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode job service response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service returned a response with no job entries.
    #[error("Job service response contained no job entries")]
    EmptyJobList,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
    message: Option<String>,
}

impl ClientError {
    /// Build an API error from a non-success response, picking up the
    /// service's error code and message when the body carries them.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => match (parsed.error_code, parsed.message) {
                (Some(code), Some(message)) => format!("{code}: {message}"),
                (None, Some(message)) => message,
                (Some(code), None) => code,
                (None, None) => "request failed".to_string(),
            },
            Err(_) => {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "<empty response>".to_string()
                } else {
                    trimmed.to_string()
                }
            }
        };
        ClientError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_is_decoded() {
        let err = ClientError::from_response(
            403,
            r#"{"errorCode": "PERMISSION_DENIED", "message": "cluster not visible"}"#,
        );
        assert_eq!(
            err.to_string(),
            "Job service responded with status 403: PERMISSION_DENIED: cluster not visible"
        );
    }

    #[test]
    fn opaque_error_body_is_passed_through() {
        let err = ClientError::from_response(502, "bad gateway");
        assert_eq!(
            err.to_string(),
            "Job service responded with status 502: bad gateway"
        );
    }

    #[test]
    fn empty_error_body_is_flagged() {
        let err = ClientError::from_response(500, "   ");
        assert!(err.to_string().contains("<empty response>"));
    }
}
