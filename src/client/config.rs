use crate::errors::{ConfigurationError, OpenAIError, OpenAIResult};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Provider-wide settings. Immutable once the client is built; per-call changes such as a
/// URL override go through `RequestOptions`.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub max_connections: usize,
    pub proxy: Option<Url>,
    pub user_agent: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            max_connections: default_max_connections(),
            proxy: None,
            user_agent: default_user_agent(),
        }
    }
}

impl OpenAIConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new OpenAIConfig from environment variables
    ///
    /// Reads the following environment variables:
    /// - OPENAI_BASE_URL (optional, defaults to https://api.openai.com)
    /// - OPENAI_TIMEOUT_SECS (optional, defaults to 60)
    /// - OPENAI_PROXY (optional)
    pub fn from_env() -> OpenAIResult<Self> {
        let mut config = Self::new();

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = Url::parse(&base_url).map_err(|e| {
                OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(format!(
                    "Invalid OPENAI_BASE_URL: {}",
                    e
                )))
            })?;
        }

        if let Ok(timeout) = std::env::var("OPENAI_TIMEOUT_SECS") {
            let secs: u64 = timeout.trim().parse().map_err(|_| {
                OpenAIError::Configuration(ConfigurationError::InvalidTimeout(format!(
                    "OPENAI_TIMEOUT_SECS is not a whole number of seconds: {}",
                    timeout
                )))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(proxy) = std::env::var("OPENAI_PROXY") {
            config.proxy = Some(Url::parse(&proxy)?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> OpenAIResult<()> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(
                format!("unsupported scheme: {}", self.base_url.scheme()),
            )));
        }

        if self.timeout.is_zero() {
            return Err(OpenAIError::Configuration(ConfigurationError::InvalidTimeout(
                "Timeout must be greater than 0".to_string(),
            )));
        }

        Ok(())
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_max_connections() -> usize {
    100
}

fn default_user_agent() -> String {
    format!("openai-client-core/{}", env!("CARGO_PKG_VERSION"))
}
