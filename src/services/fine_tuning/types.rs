use crate::types::{lenient, lenient_vec};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_PAGE_LIMIT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FineTuningJobStatus {
    ValidatingFiles,
    Queued,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl FromStr for FineTuningJobStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "validating_files" => Ok(Self::ValidatingFiles),
            "queued" => Ok(Self::Queued),
            "running" => Ok(Self::Running),
            "succeeded" => Ok(Self::Succeeded),
            "failed" => Ok(Self::Failed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

/// Cursor pagination for job and event listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FineTuningQueryParameters {
    /// Id of the last object from the previous page. Omitted from the query when empty.
    pub after: String,
    pub limit: u32,
}

impl Default for FineTuningQueryParameters {
    fn default() -> Self {
        Self {
            after: String::new(),
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl FineTuningQueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = after.into();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineTuningJobRequest {
    pub model: String,
    pub training_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperparameters: Option<Hyperparameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl FineTuningJobRequest {
    pub fn new(model: impl Into<String>, training_file: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            training_file: training_file.into(),
            validation_file: None,
            hyperparameters: None,
            suffix: None,
        }
    }

    pub fn with_validation_file(mut self, validation_file: impl Into<String>) -> Self {
        self.validation_file = Some(validation_file.into());
        self
    }

    pub fn with_hyperparameters(mut self, hyperparameters: Hyperparameters) -> Self {
        self.hyperparameters = Some(hyperparameters);
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperparameters {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub n_epochs: Option<HyperparameterValue>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub batch_size: Option<HyperparameterValue>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub learning_rate_multiplier: Option<HyperparameterValue>,
}

/// Either `"auto"` or an explicit number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HyperparameterValue {
    Number(f64),
    Auto(String),
}

impl HyperparameterValue {
    pub fn auto() -> Self {
        HyperparameterValue::Auto("auto".to_string())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            HyperparameterValue::Number(n) => Some(*n),
            HyperparameterValue::Auto(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuningJobError {
    #[serde(deserialize_with = "lenient")]
    pub code: String,
    #[serde(deserialize_with = "lenient")]
    pub message: String,
    #[serde(deserialize_with = "lenient")]
    pub param: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuningJobObject {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient")]
    pub created_at: i64,
    #[serde(deserialize_with = "lenient")]
    pub finished_at: i64,
    #[serde(deserialize_with = "lenient")]
    pub model: String,
    #[serde(deserialize_with = "lenient")]
    pub fine_tuned_model: String,
    #[serde(deserialize_with = "lenient")]
    pub organization_id: String,
    #[serde(deserialize_with = "lenient")]
    pub status: String,
    #[serde(deserialize_with = "lenient")]
    pub hyperparameters: Hyperparameters,
    #[serde(deserialize_with = "lenient")]
    pub training_file: String,
    #[serde(deserialize_with = "lenient")]
    pub validation_file: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub result_files: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub trained_tokens: u64,
    #[serde(deserialize_with = "lenient")]
    pub error: Option<FineTuningJobError>,
}

impl FineTuningJobObject {
    /// Parsed job status, `None` for values this client does not know.
    pub fn status(&self) -> Option<FineTuningJobStatus> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFineTuningJobsResponse {
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub data: Vec<FineTuningJobObject>,
    #[serde(deserialize_with = "lenient")]
    pub has_more: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuningJobEvent {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient")]
    pub created_at: i64,
    #[serde(deserialize_with = "lenient")]
    pub level: String,
    #[serde(deserialize_with = "lenient")]
    pub message: String,
    #[serde(deserialize_with = "lenient", rename = "type")]
    pub event_type: String,
    #[serde(deserialize_with = "lenient")]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineTuningJobEventsResponse {
    #[serde(deserialize_with = "lenient")]
    pub object: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub data: Vec<FineTuningJobEvent>,
    #[serde(deserialize_with = "lenient")]
    pub has_more: bool,
}
