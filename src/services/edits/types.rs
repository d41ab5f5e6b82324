use crate::services::completions::BaseChoice;
use crate::types::{lenient, lenient_vec, Usage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    pub model: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub input: String,
    pub instruction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl EditRequest {
    pub fn new(
        model: impl Into<String>,
        input: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
            instruction: instruction.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditResponse {
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient")]
    pub created: i64,
    #[serde(deserialize_with = "lenient_vec")]
    pub choices: Vec<BaseChoice>,
    #[serde(deserialize_with = "lenient")]
    pub usage: Usage,
}
