use crate::errors::categories::{ConfigurationError, TransportError, ValidationError};
use thiserror::Error;

pub type OpenAIResult<T> = Result<T, OpenAIError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpenAIError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status. `raw_content` is the body as received.
    #[error("Request error: {status_code} - {message}")]
    Status {
        status_code: u16,
        message: String,
        raw_content: String,
        error_type: Option<String>,
        error_code: Option<String>,
        retry_after_secs: Option<u64>,
    },

    #[error("Decode error: {message}")]
    Decode { message: String, raw_content: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Request cancelled")]
    Cancelled,

    /// The operation behind a call panicked instead of returning.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OpenAIError {
    /// Hint for callers that implement their own retry policy. The client never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            OpenAIError::Transport(_) => true,
            OpenAIError::Status { status_code, .. } => {
                matches!(status_code, 408 | 409 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            OpenAIError::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            OpenAIError::Status { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    /// Body text for status and decode errors, `None` otherwise.
    pub fn raw_content(&self) -> Option<&str> {
        match self {
            OpenAIError::Status { raw_content, .. } | OpenAIError::Decode { raw_content, .. } => {
                Some(raw_content)
            }
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, OpenAIError::Cancelled)
    }
}

impl From<reqwest::Error> for OpenAIError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenAIError::Transport(TransportError::Timeout(err.to_string()))
        } else if err.is_connect() {
            OpenAIError::Transport(TransportError::ConnectionFailed(err.to_string()))
        } else if err.is_body() || err.is_decode() {
            OpenAIError::Transport(TransportError::Body(err.to_string()))
        } else {
            OpenAIError::Transport(TransportError::RequestFailed(err.to_string()))
        }
    }
}

impl From<url::ParseError> for OpenAIError {
    fn from(err: url::ParseError) -> Self {
        OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
