use crate::types::{lenient, lenient_vec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permission {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient")]
    pub created: i64,
    #[serde(deserialize_with = "lenient")]
    pub allow_create_engine: bool,
    #[serde(deserialize_with = "lenient")]
    pub allow_sampling: bool,
    #[serde(deserialize_with = "lenient")]
    pub allow_logprobs: bool,
    #[serde(deserialize_with = "lenient")]
    pub allow_search_indices: bool,
    #[serde(deserialize_with = "lenient")]
    pub allow_view: bool,
    #[serde(deserialize_with = "lenient")]
    pub allow_fine_tuning: bool,
    #[serde(deserialize_with = "lenient")]
    pub organization: String,
    #[serde(deserialize_with = "lenient")]
    pub group: String,
    #[serde(deserialize_with = "lenient")]
    pub is_blocking: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAIModel {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient")]
    pub created: i64,
    #[serde(deserialize_with = "lenient")]
    pub owned_by: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub permission: Vec<Permission>,
    #[serde(deserialize_with = "lenient")]
    pub root: String,
    #[serde(deserialize_with = "lenient")]
    pub parent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListModelsResponse {
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub data: Vec<OpenAIModel>,
}

/// `GET /v1/models/{id}` answers with a single model object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieveModelResponse {
    #[serde(flatten)]
    pub model: OpenAIModel,
}
