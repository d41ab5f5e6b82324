use crate::errors::{OpenAIError, OpenAIResult};
use crate::transport::{sse, HttpResponse};
use serde::de::DeserializeOwned;

/// Turns successful response bodies into typed values.
///
/// Decoding failures keep the raw body so callers can still inspect what the server sent.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse<T: DeserializeOwned>(response: &HttpResponse) -> OpenAIResult<T> {
        Self::parse_json(&response.body)
    }

    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> OpenAIResult<T> {
        serde_json::from_slice(data).map_err(|e| OpenAIError::Decode {
            message: format!("Failed to deserialize response: {}", e),
            raw_content: String::from_utf8_lossy(data).into_owned(),
        })
    }

    /// Body as text, for endpoints that answer with plain content.
    pub fn parse_text(response: &HttpResponse) -> String {
        String::from_utf8_lossy(&response.body).into_owned()
    }

    /// Decodes a fully buffered `text/event-stream` body into its chunks.
    pub fn parse_event_stream<T: DeserializeOwned>(response: &HttpResponse) -> OpenAIResult<Vec<T>> {
        sse::parse_events(&response.body)
            .iter()
            .map(|event| event.parse())
            .collect()
    }
}
