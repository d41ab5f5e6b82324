use crate::types::{lenient, lenient_vec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationsRequest {
    pub input: ModerationInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModerationInput {
    Single(String),
    Multiple(Vec<String>),
}

impl ModerationsRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: ModerationInput::Single(input.into()),
            model: None,
        }
    }

    pub fn multiple(inputs: Vec<String>) -> Self {
        Self {
            input: ModerationInput::Multiple(inputs),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationCategories {
    #[serde(deserialize_with = "lenient")]
    pub hate: bool,
    #[serde(deserialize_with = "lenient", rename = "hate/threatening")]
    pub hate_threatening: bool,
    #[serde(deserialize_with = "lenient")]
    pub harassment: bool,
    #[serde(deserialize_with = "lenient", rename = "harassment/threatening")]
    pub harassment_threatening: bool,
    #[serde(deserialize_with = "lenient", rename = "self-harm")]
    pub self_harm: bool,
    #[serde(deserialize_with = "lenient", rename = "self-harm/intent")]
    pub self_harm_intent: bool,
    #[serde(deserialize_with = "lenient", rename = "self-harm/instructions")]
    pub self_harm_instructions: bool,
    #[serde(deserialize_with = "lenient")]
    pub sexual: bool,
    #[serde(deserialize_with = "lenient", rename = "sexual/minors")]
    pub sexual_minors: bool,
    #[serde(deserialize_with = "lenient")]
    pub violence: bool,
    #[serde(deserialize_with = "lenient", rename = "violence/graphic")]
    pub violence_graphic: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationScores {
    #[serde(deserialize_with = "lenient")]
    pub hate: f64,
    #[serde(deserialize_with = "lenient", rename = "hate/threatening")]
    pub hate_threatening: f64,
    #[serde(deserialize_with = "lenient")]
    pub harassment: f64,
    #[serde(deserialize_with = "lenient", rename = "harassment/threatening")]
    pub harassment_threatening: f64,
    #[serde(deserialize_with = "lenient", rename = "self-harm")]
    pub self_harm: f64,
    #[serde(deserialize_with = "lenient", rename = "self-harm/intent")]
    pub self_harm_intent: f64,
    #[serde(deserialize_with = "lenient", rename = "self-harm/instructions")]
    pub self_harm_instructions: f64,
    #[serde(deserialize_with = "lenient")]
    pub sexual: f64,
    #[serde(deserialize_with = "lenient", rename = "sexual/minors")]
    pub sexual_minors: f64,
    #[serde(deserialize_with = "lenient")]
    pub violence: f64,
    #[serde(deserialize_with = "lenient", rename = "violence/graphic")]
    pub violence_graphic: f64,
}

impl ModerationScores {
    /// Highest score across all categories.
    pub fn max(&self) -> f64 {
        [
            self.hate,
            self.hate_threatening,
            self.harassment,
            self.harassment_threatening,
            self.self_harm,
            self.self_harm_intent,
            self.self_harm_instructions,
            self.sexual,
            self.sexual_minors,
            self.violence,
            self.violence_graphic,
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationResults {
    #[serde(deserialize_with = "lenient")]
    pub categories: ModerationCategories,
    #[serde(deserialize_with = "lenient")]
    pub category_scores: ModerationScores,
    #[serde(deserialize_with = "lenient")]
    pub flagged: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationsResponse {
    #[serde(deserialize_with = "lenient")]
    pub id: String,
    #[serde(deserialize_with = "lenient")]
    pub model: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub results: Vec<ModerationResults>,
}

impl ModerationsResponse {
    pub fn any_flagged(&self) -> bool {
        self.results.iter().any(|r| r.flagged)
    }
}
