use crate::types::lenient;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioResponseFormat {
    Json,
    Text,
    Srt,
    #[serde(rename = "verbose_json")]
    VerboseJson,
    Vtt,
}

impl AudioResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioResponseFormat::Json => "json",
            AudioResponseFormat::Text => "text",
            AudioResponseFormat::Srt => "srt",
            AudioResponseFormat::VerboseJson => "verbose_json",
            AudioResponseFormat::Vtt => "vtt",
        }
    }

    /// `text`, `srt` and `vtt` answer with a plain body instead of a JSON object.
    pub fn is_json(&self) -> bool {
        matches!(self, AudioResponseFormat::Json | AudioResponseFormat::VerboseJson)
    }
}

#[derive(Debug, Clone)]
pub struct AudioTranscriptionRequest {
    pub file: Bytes,
    pub filename: String,
    pub model: String,
    pub language: Option<String>,
    pub prompt: Option<String>,
    pub response_format: Option<AudioResponseFormat>,
    pub temperature: Option<f32>,
}

impl AudioTranscriptionRequest {
    pub fn new(file: Bytes, filename: impl Into<String>) -> Self {
        Self {
            file,
            filename: filename.into(),
            model: "whisper-1".to_string(),
            language: None,
            prompt: None,
            response_format: None,
            temperature: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_response_format(mut self, format: AudioResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// Translates speech into English.
#[derive(Debug, Clone)]
pub struct AudioTranslationRequest {
    pub file: Bytes,
    pub filename: String,
    pub model: String,
    pub prompt: Option<String>,
    pub response_format: Option<AudioResponseFormat>,
    pub temperature: Option<f32>,
}

impl AudioTranslationRequest {
    pub fn new(file: Bytes, filename: impl Into<String>) -> Self {
        Self {
            file,
            filename: filename.into(),
            model: "whisper-1".to_string(),
            prompt: None,
            response_format: None,
            temperature: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioTranscriptionResponse {
    #[serde(deserialize_with = "lenient")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioTranslationResponse {
    #[serde(deserialize_with = "lenient")]
    pub text: String,
}
