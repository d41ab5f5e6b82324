use crate::types::serde_helpers::lenient;
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Per-call options. Nothing here outlives the call it is passed to.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Replaces the configured base URL for this call only, e.g. to go through a proxy.
    /// Empty strings are ignored.
    pub url_override: Option<String>,
    pub timeout: Option<Duration>,
    pub headers: Option<HeaderMap>,
    pub cancellation: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url_override(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.url_override = (!url.trim().is_empty()).then_some(url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// The override to use, if one was given and is non-empty.
    pub fn effective_url_override(&self) -> Option<&str> {
        self.url_override
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Token accounting shared by completion, chat and edit responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    #[serde(deserialize_with = "lenient")]
    pub prompt_tokens: u32,
    #[serde(deserialize_with = "lenient")]
    pub completion_tokens: u32,
    #[serde(deserialize_with = "lenient")]
    pub total_tokens: u32,
}

impl Usage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

/// `{id, object, deleted}` as returned by every delete endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletionStatus {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient")]
    pub deleted: bool,
}

/// Why the model stopped generating. Kept as a string on the wire; parse on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    FunctionCall,
    #[default]
    Null,
}

impl FinishReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Stop => "stop",
            FinishReason::Length => "length",
            FinishReason::ContentFilter => "content_filter",
            FinishReason::FunctionCall => "function_call",
            FinishReason::Null => "null",
        }
    }

    /// Unknown or empty values map to `Null`.
    pub fn parse(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FinishReason {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stop" => Ok(FinishReason::Stop),
            "length" => Ok(FinishReason::Length),
            "content_filter" => Ok(FinishReason::ContentFilter),
            "function_call" | "tool_calls" => Ok(FinishReason::FunctionCall),
            "" | "null" => Ok(FinishReason::Null),
            _ => Err(()),
        }
    }
}
