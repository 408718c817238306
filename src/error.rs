use thiserror::Error;

/// Everything that can go wrong talking to the dialogue/memory service.
///
/// None of these ever escape the fallback entry points of
/// [`MemoryClient`](crate::MemoryClient); they are only surfaced by the
/// `try_*` variants and inside [`Delivery::Dropped`](crate::Delivery).
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Deserialize(String),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    #[error("Unexpected fault: {0}")]
    Fault(String),
}

impl ClientError {
    /// Connection-level failures and 5xx responses may succeed on another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Transport(_) => true,
            ClientError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Response body captured alongside the failure, if there was one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ClientError::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
