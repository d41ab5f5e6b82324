use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::models::{ListModelsResponse, RetrieveModelResponse};
use crate::services::validation::require_path_segment;
use crate::transport::{HttpTransport, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ModelService: Send + Sync {
    async fn list(&self, auth: &Auth, options: &RequestOptions) -> OpenAIResult<ListModelsResponse>;

    async fn retrieve(
        &self,
        model_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<RetrieveModelResponse>;
}

pub struct ModelServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl ModelServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ModelService for ModelServiceImpl {
    async fn list(&self, auth: &Auth, options: &RequestOptions) -> OpenAIResult<ListModelsResponse> {
        let request = RequestBuilder::get("/v1/models")
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn retrieve(
        &self,
        model_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<RetrieveModelResponse> {
        require_path_segment("model", model_id)?;

        let request = RequestBuilder::get(format!("/v1/models/{}", model_id))
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }
}
