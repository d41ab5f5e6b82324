use crate::client::{OpenAIClient, OpenAIClientImpl, OpenAIConfig};
use crate::errors::OpenAIResult;
use crate::observability::RequestHooks;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

#[derive(Default)]
pub struct OpenAIClientBuilder {
    config: Option<OpenAIConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    hooks: Option<Arc<dyn RequestHooks>>,
}

impl OpenAIClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from `OpenAIConfig::from_env()`.
    pub fn from_env() -> OpenAIResult<Self> {
        Ok(Self::new().with_config(OpenAIConfig::from_env()?))
    }

    pub fn with_config(mut self, config: OpenAIConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replaces the reqwest transport entirely. Hooks are not applied to a custom transport.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn RequestHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn build(self) -> OpenAIResult<Arc<dyn OpenAIClient>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let mut transport = ReqwestTransport::new(&config)?;
                if let Some(hooks) = self.hooks {
                    transport = transport.with_hooks(hooks);
                }
                Arc::new(transport)
            }
        };

        tracing::debug!(base_url = %config.base_url, "built OpenAI client");
        Ok(Arc::new(OpenAIClientImpl::new(config, transport)))
    }
}
