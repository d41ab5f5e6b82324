use crate::errors::{ConfigurationError, OpenAIError, OpenAIResult};
use http::header::{HeaderValue, AUTHORIZATION};
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

pub const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// Credentials for a single call: API key plus optional organization.
#[derive(Clone)]
pub struct Auth {
    api_key: SecretString,
    organization_id: Option<String>,
}

impl Auth {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            organization_id: None,
        }
    }

    pub fn from_secret(api_key: SecretString) -> Self {
        Self {
            api_key,
            organization_id: None,
        }
    }

    /// Reads `OPENAI_API_KEY` and, if present, `OPENAI_ORGANIZATION_ID`.
    pub fn from_env() -> OpenAIResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            OpenAIError::Configuration(ConfigurationError::MissingApiKey(
                "OPENAI_API_KEY environment variable not found".to_string(),
            ))
        })?;

        let mut auth = Self::new(api_key);
        if let Ok(org_id) = std::env::var("OPENAI_ORGANIZATION_ID") {
            if !org_id.is_empty() {
                auth.organization_id = Some(org_id);
            }
        }
        Ok(auth)
    }

    pub fn with_organization(mut self, org_id: impl Into<String>) -> Self {
        let org_id = org_id.into();
        self.organization_id = (!org_id.is_empty()).then_some(org_id);
        self
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    pub fn validate(&self) -> OpenAIResult<()> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(OpenAIError::Configuration(ConfigurationError::MissingApiKey(
                "API key is empty".to_string(),
            )));
        }
        Ok(())
    }

    /// Writes `Authorization: Bearer <key>` and, when set, `OpenAI-Organization`.
    pub fn apply(&self, headers: &mut HeaderMap) -> OpenAIResult<()> {
        self.validate()?;

        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret())).map_err(
                |_| {
                    OpenAIError::Configuration(ConfigurationError::InvalidHeader(
                        "API key contains characters not allowed in a header".to_string(),
                    ))
                },
            )?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        if let Some(org_id) = &self.organization_id {
            let value = HeaderValue::from_str(org_id).map_err(|_| {
                OpenAIError::Configuration(ConfigurationError::InvalidHeader(
                    "Invalid organization ID format".to_string(),
                ))
            })?;
            headers.insert(ORGANIZATION_HEADER, value);
        }

        Ok(())
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("api_key", &"[REDACTED]")
            .field("organization_id", &self.organization_id)
            .finish()
    }
}
