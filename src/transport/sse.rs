use crate::errors::OpenAIResult;
use crate::transport::ResponseParser;
use serde::de::DeserializeOwned;

const DONE_MARKER: &str = "[DONE]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub event_type: Option<String>,
    pub data: String,
    pub id: Option<String>,
}

impl SseEvent {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        let mut event_type = None;
        let mut data_lines = Vec::new();
        let mut id = None;

        for line in text.lines() {
            if line.is_empty() || line.starts_with(':') {
                continue;
            }

            if let Some(stripped) = line.strip_prefix("event:") {
                event_type = Some(stripped.trim().to_string());
            } else if let Some(stripped) = line.strip_prefix("data:") {
                data_lines.push(stripped.trim());
            } else if let Some(stripped) = line.strip_prefix("id:") {
                id = Some(stripped.trim().to_string());
            }
        }

        Self {
            event_type,
            data: data_lines.join("\n"),
            id,
        }
    }

    pub fn is_done(&self) -> bool {
        self.data == DONE_MARKER
    }

    pub fn parse<T: DeserializeOwned>(&self) -> OpenAIResult<T> {
        ResponseParser::parse_json(self.data.as_bytes())
    }
}

/// Splits a complete event-stream body into events.
///
/// Events without data are dropped and everything after `[DONE]` is ignored.
pub(crate) fn parse_events(body: &[u8]) -> Vec<SseEvent> {
    let text = String::from_utf8_lossy(body).replace("\r\n", "\n");

    text.split("\n\n")
        .map(|chunk| SseEvent::from_bytes(chunk.as_bytes()))
        .filter(|event| !event.data.is_empty())
        .take_while(|event| !event.is_done())
        .collect()
}
