use crate::errors::OpenAIError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct OpenAIErrorResponse {
    pub error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OpenAIErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub param: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Builds a status error from a non-2xx response, keeping the body verbatim.
    pub fn from_response(status_code: u16, headers: &http::HeaderMap, body: &[u8]) -> OpenAIError {
        let raw_content = String::from_utf8_lossy(body).into_owned();
        let detail = Self::parse_error_response(&raw_content).map(|r| r.error);

        let message = detail
            .as_ref()
            .map(|d| d.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));

        OpenAIError::Status {
            status_code,
            message,
            raw_content,
            error_type: detail.as_ref().and_then(|d| d.error_type.clone()),
            error_code: detail.and_then(|d| d.code),
            retry_after_secs: Self::extract_retry_after(headers),
        }
    }

    /// Extracts retry-after header value in seconds
    pub fn extract_retry_after(headers: &http::HeaderMap) -> Option<u64> {
        headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse().ok())
    }

    pub fn parse_error_response(body: &str) -> Option<OpenAIErrorResponse> {
        serde_json::from_str(body).ok()
    }
}
