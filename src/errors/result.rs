use crate::errors::OpenAIError;
use serde::{Deserialize, Serialize};

/// Coarse classification for callers that only need to branch on a few well-known cases.
/// Anything finer requires matching on the raw content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ResponseErrorKind {
    InvalidApiKey,
    NetworkError,
    ModelNotFound,
    #[default]
    Unknown,
}

impl ResponseErrorKind {
    pub fn classify(error: &OpenAIError) -> Self {
        match error {
            OpenAIError::Transport(_) => ResponseErrorKind::NetworkError,
            OpenAIError::Status {
                status_code,
                message,
                error_code,
                ..
            } => match error_code.as_deref() {
                Some("invalid_api_key") => ResponseErrorKind::InvalidApiKey,
                Some("model_not_found") => ResponseErrorKind::ModelNotFound,
                _ if *status_code == 401 => ResponseErrorKind::InvalidApiKey,
                _ if *status_code == 404 && message.to_lowercase().contains("model") => {
                    ResponseErrorKind::ModelNotFound
                }
                _ => ResponseErrorKind::Unknown,
            },
            _ => ResponseErrorKind::Unknown,
        }
    }
}

/// Error payload handed to the caller of a finished call.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResult {
    pub raw_content: String,
    pub was_error: bool,
    pub kind: ResponseErrorKind,
    pub error: OpenAIError,
}

impl From<OpenAIError> for ErrorResult {
    fn from(error: OpenAIError) -> Self {
        let raw_content = match error.raw_content() {
            Some(body) => body.to_string(),
            None => error.to_string(),
        };

        Self {
            raw_content,
            was_error: true,
            kind: ResponseErrorKind::classify(&error),
            error,
        }
    }
}

impl std::fmt::Display for ErrorResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.error)
    }
}

impl std::error::Error for ErrorResult {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
