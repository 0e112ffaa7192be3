use thiserror::Error;

/// Request Failure: network error, non-2xx status or malformed payload.
///
/// The variants only carry diagnostics for the failure sink; callers treat
/// every variant the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Attachment error: {0}")]
    Attachment(String),
}

impl From<gloo_net::Error> for RequestError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => RequestError::Decode(e.to_string()),
            other => RequestError::Network(other.to_string()),
        }
    }
}

impl From<serde_qs::Error> for RequestError {
    fn from(e: serde_qs::Error) -> Self {
        RequestError::Encode(e.to_string())
    }
}
