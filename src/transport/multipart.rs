use crate::errors::{OpenAIError, OpenAIResult};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};

/// Multipart/form-data request body, kept as named parts until the transport encodes it.
///
/// Encoding, boundary choice and header escaping are left to `reqwest::multipart`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<MultipartPart>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPart {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

impl MultipartPart {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// The part body as text, for text fields.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart {
            name: name.to_string(),
            filename: None,
            content_type: None,
            data: Bytes::from(value.into()),
        });
        self
    }

    /// Adds a text field only when a value is present.
    pub fn text_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.text(name, value.to_string()),
            None => self,
        }
    }

    /// Adds a file field; the part content type is derived from the file extension.
    pub fn file(mut self, name: &str, filename: &str, data: Bytes) -> Self {
        self.parts.push(MultipartPart {
            name: name.to_string(),
            filename: Some(filename.to_string()),
            content_type: Some(content_type_for(filename)),
            data,
        });
        self
    }

    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    pub fn part(&self, name: &str) -> Option<&MultipartPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Text value of the first field called `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.part(name).and_then(MultipartPart::text)
    }

    /// Converts into a `reqwest` form, ready to be attached to a request.
    pub fn into_form(self) -> OpenAIResult<Form> {
        self.parts.into_iter().try_fold(Form::new(), |form, part| {
            let mut body = Part::bytes(part.data.to_vec());
            if let Some(filename) = part.filename {
                body = body.file_name(filename);
            }
            if let Some(content_type) = &part.content_type {
                body = body.mime_str(content_type).map_err(|e| {
                    OpenAIError::Serialization(format!("Failed to set MIME type: {}", e))
                })?;
            }
            Ok(form.part(part.name, body))
        })
    }
}

fn content_type_for(filename: &str) -> String {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => mime::IMAGE_PNG.to_string(),
        "jpg" | "jpeg" => mime::IMAGE_JPEG.to_string(),
        "json" => mime::APPLICATION_JSON.to_string(),
        "jsonl" => "application/jsonl".to_string(),
        "txt" => mime::TEXT_PLAIN.to_string(),
        "mp3" | "mpga" | "mpeg" => "audio/mpeg".to_string(),
        "mp4" | "m4a" => "audio/mp4".to_string(),
        "wav" => "audio/wav".to_string(),
        "webm" => "audio/webm".to_string(),
        _ => mime::APPLICATION_OCTET_STREAM.to_string(),
    }
}
