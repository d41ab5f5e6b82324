//! Audio fixtures

use serde_json::json;

/// Sample transcription response
pub fn transcription_response() -> serde_json::Value {
    json!({
        "text": "Imagine the wildest idea that you've ever had, and you're curious about how it might scale."
    })
}

/// Sample translation response
pub fn translation_response() -> serde_json::Value {
    json!({
        "text": "Hello, my name is Wolfgang and I come from Germany."
    })
}

/// Sample SRT output for `response_format=srt`
pub fn transcription_srt() -> &'static str {
    "1\n00:00:00,000 --> 00:00:02,000\nHello there.\n"
}

/// Minimal WAV header used as upload payload
pub fn sample_wav() -> bytes::Bytes {
    bytes::Bytes::from_static(b"RIFF\x24\x00\x00\x00WAVEfmt ")
}
