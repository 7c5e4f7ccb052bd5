use thiserror::Error;

/// Failures of a backend round trip.
///
/// Only [`ApiError::Backend`] carries text meant for the user; every other
/// variant is surfaced with a generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided message, if the backend reported one.
    pub fn reported_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
