use crate::errors::{OpenAIError, OpenAIResult};
use crate::types::{lenient, lenient_vec};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    Size256,
    #[serde(rename = "512x512")]
    Size512,
    #[serde(rename = "1024x1024")]
    Size1024,
    #[serde(rename = "1792x1024")]
    Size1792x1024,
    #[serde(rename = "1024x1792")]
    Size1024x1792,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Size256 => "256x256",
            ImageSize::Size512 => "512x512",
            ImageSize::Size1024 => "1024x1024",
            ImageSize::Size1792x1024 => "1792x1024",
            ImageSize::Size1024x1792 => "1024x1792",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Standard,
    Hd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Vivid,
    Natural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseFormat {
    Url,
    B64Json,
}

impl ImageResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageResponseFormat::Url => "url",
            ImageResponseFormat::B64Json => "b64_json",
        }
    }
}

/// Body of `POST /v1/images/generations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageRequest {
    pub prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<ImageQuality>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ImageResponseFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_response_format(mut self, format: ImageResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    pub fn with_quality(mut self, quality: ImageQuality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_style(mut self, style: ImageStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// Sent as multipart form data; `image` and `mask` must be PNG.
#[derive(Debug, Clone, Default)]
pub struct ImageEditRequest {
    pub image: Bytes,
    pub image_name: String,
    pub prompt: String,
    pub mask: Option<Bytes>,
    pub model: Option<String>,
    pub n: Option<u32>,
    pub size: Option<ImageSize>,
    pub response_format: Option<ImageResponseFormat>,
    pub user: Option<String>,
}

impl ImageEditRequest {
    pub fn new(image: Bytes, image_name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            image,
            image_name: image_name.into(),
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_mask(mut self, mask: Bytes) -> Self {
        self.mask = Some(mask);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageVariationRequest {
    pub image: Bytes,
    pub image_name: String,
    pub model: Option<String>,
    pub n: Option<u32>,
    pub size: Option<ImageSize>,
    pub response_format: Option<ImageResponseFormat>,
    pub user: Option<String>,
}

impl ImageVariationRequest {
    pub fn new(image: Bytes, image_name: impl Into<String>) -> Self {
        Self {
            image,
            image_name: image_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageData {
    #[serde(deserialize_with = "lenient")]
    pub url: String,
    #[serde(deserialize_with = "lenient")]
    pub b64_json: String,
    #[serde(deserialize_with = "lenient")]
    pub revised_prompt: String,
}

impl ImageData {
    /// Decodes the `b64_json` payload into raw image bytes.
    pub fn decode_b64(&self) -> OpenAIResult<Vec<u8>> {
        STANDARD
            .decode(self.b64_json.as_bytes())
            .map_err(|e| OpenAIError::Decode {
                message: format!("Invalid b64_json payload: {}", e),
                raw_content: self.b64_json.clone(),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageResponse {
    #[serde(deserialize_with = "lenient")]
    pub created: i64,
    #[serde(deserialize_with = "lenient_vec")]
    pub data: Vec<ImageData>,
}

impl ImageResponse {
    pub fn urls(&self) -> Vec<&str> {
        self.data
            .iter()
            .map(|d| d.url.as_str())
            .filter(|url| !url.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageEditResponse {
    #[serde(flatten)]
    pub image: ImageResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageVariationResponse {
    #[serde(flatten)]
    pub image: ImageResponse,
}
