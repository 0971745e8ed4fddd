use taskrank_core::ValidationError;
use thiserror::Error;

/// Failures that only show up after a round-trip was issued.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteError {
    #[error("timeout of {millis}ms exceeded")]
    Timeout { millis: u64 },

    /// Non-2xx response. `detail` is the server's own message, if it sent one.
    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("{0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Text shown to the user: server `detail` verbatim when present,
    /// otherwise the transport's description.
    pub fn message(&self) -> String {
        match self {
            RemoteError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", .0.message())]
    Remote(#[from] RemoteError),
}
