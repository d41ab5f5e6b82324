use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::embeddings::{EmbeddingsRequest, EmbeddingsRequestValidator, EmbeddingsResponse};
use crate::transport::{HttpTransport, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait EmbeddingsService: Send + Sync {
    async fn create(
        &self,
        request: EmbeddingsRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<EmbeddingsResponse>;
}

pub struct EmbeddingsServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl EmbeddingsServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl EmbeddingsService for EmbeddingsServiceImpl {
    async fn create(
        &self,
        request: EmbeddingsRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<EmbeddingsResponse> {
        EmbeddingsRequestValidator::validate(&request)?;

        let http_request = RequestBuilder::post("/v1/embeddings")
            .auth(auth)?
            .json(&request)?
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }
}
