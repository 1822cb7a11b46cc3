//! Client-side error taxonomy

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Rejected locally; no request was sent
    #[error("{0}")]
    Validation(String),

    /// The backend refused the bearer token. The session has been cleared.
    #[error("Your session has expired, please sign in again")]
    Unauthorized,

    /// The request never produced a response (network, CORS, timeout)
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-success status. `message` is the backend's own wording.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A success response whose body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ClientError::Validation(msg.into())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }

    /// No request reached the backend
    pub fn is_local(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}
