//! Error envelopes as the API returns them

use serde_json::json;

/// `{"error": {...}}` envelope with the given fields; `param` is always null.
pub fn error_envelope(message: &str, error_type: &str, code: Option<&str>) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "type": error_type,
            "param": null,
            "code": code
        }
    })
}

pub fn error_401_invalid_api_key() -> serde_json::Value {
    error_envelope(
        "Incorrect API key provided: sk-test. You can find your API key in your account settings.",
        "invalid_request_error",
        Some("invalid_api_key"),
    )
}

pub fn error_404_model_not_found() -> serde_json::Value {
    error_envelope(
        "The model `gpt-9` does not exist or you do not have access to it.",
        "invalid_request_error",
        Some("model_not_found"),
    )
}

pub fn error_429_rate_limit() -> serde_json::Value {
    error_envelope(
        "Rate limit reached for default-text-davinci-003 on requests per min. Limit: 60 / min.",
        "requests",
        Some("rate_limit_exceeded"),
    )
}

/// 500 envelope without a code
pub fn error_500_internal_server_error() -> serde_json::Value {
    error_envelope(
        "The server had an error while processing your request.",
        "server_error",
        None,
    )
}
