use crate::services::files::OpenAIFile;
use crate::types::{lenient, lenient_vec, DeletionStatus};
use serde::{Deserialize, Serialize};

/// Body of `POST /v1/fine-tunes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FineTuneRequest {
    pub training_file: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_epochs: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_rate_multiplier: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_loss_weight: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_classification_metrics: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_n_classes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_positive_class: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classification_betas: Vec<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl FineTuneRequest {
    pub fn new(training_file: impl Into<String>) -> Self {
        Self {
            training_file: training_file.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_n_epochs(mut self, n_epochs: u32) -> Self {
        self.n_epochs = Some(n_epochs);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAIEvent {
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient")]
    pub created_at: i64,
    #[serde(deserialize_with = "lenient")]
    pub level: String,
    #[serde(deserialize_with = "lenient")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparams {
    #[serde(deserialize_with = "lenient")]
    pub batch_size: i32,
    #[serde(deserialize_with = "lenient")]
    pub learning_rate_multiplier: f32,
    #[serde(deserialize_with = "lenient")]
    pub n_epochs: i32,
    #[serde(deserialize_with = "lenient")]
    pub prompt_loss_weight: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseFineTuneResponse {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient")]
    pub model: String,
    #[serde(deserialize_with = "lenient")]
    pub created_at: i64,
    #[serde(deserialize_with = "lenient")]
    pub fine_tuned_model: String,
    #[serde(deserialize_with = "lenient")]
    pub hyperparams: Hyperparams,
    #[serde(deserialize_with = "lenient")]
    pub organization_id: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub result_files: Vec<OpenAIFile>,
    #[serde(deserialize_with = "lenient")]
    pub status: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub validation_files: Vec<OpenAIFile>,
    #[serde(deserialize_with = "lenient_vec")]
    pub training_files: Vec<OpenAIFile>,
    #[serde(deserialize_with = "lenient")]
    pub updated_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuneResponse {
    #[serde(flatten)]
    pub base: BaseFineTuneResponse,
    #[serde(deserialize_with = "lenient_vec")]
    pub events: Vec<OpenAIEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFineTuneResponse {
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub data: Vec<BaseFineTuneResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuneEventsResponse {
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub data: Vec<OpenAIEvent>,
}

pub type DeleteFineTuneResponse = DeletionStatus;
