use crate::types::{lenient, lenient_vec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddingsRequest {
    pub model: String,
    pub input: EmbeddingInput,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Multiple(Vec<String>),
    Tokens(Vec<i32>),
}

impl EmbeddingInput {
    pub fn is_empty(&self) -> bool {
        match self {
            EmbeddingInput::Single(text) => text.is_empty(),
            EmbeddingInput::Multiple(texts) => texts.is_empty() || texts.iter().any(String::is_empty),
            EmbeddingInput::Tokens(tokens) => tokens.is_empty(),
        }
    }
}

impl EmbeddingsRequest {
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: EmbeddingInput::Single(input.into()),
            dimensions: None,
            user: None,
        }
    }

    pub fn with_multiple(model: impl Into<String>, inputs: Vec<String>) -> Self {
        Self {
            input: EmbeddingInput::Multiple(inputs),
            ..Self::new(model, String::new())
        }
    }

    pub fn with_dimensions(mut self, dims: u32) -> Self {
        self.dimensions = Some(dims);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingsUsage {
    #[serde(deserialize_with = "lenient")]
    pub prompt_tokens: u32,
    #[serde(deserialize_with = "lenient")]
    pub total_tokens: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingsData {
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient")]
    pub index: u32,
    #[serde(deserialize_with = "lenient_vec")]
    pub embedding: Vec<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingsResponse {
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub data: Vec<EmbeddingsData>,
    #[serde(deserialize_with = "lenient")]
    pub model: String,
    #[serde(deserialize_with = "lenient")]
    pub usage: EmbeddingsUsage,
}
