use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::completions::{
    CompletionRequest, CompletionRequestValidator, CompletionResponse, CompletionStreamResponse,
};
use crate::transport::{HttpTransport, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn create(
        &self,
        request: CompletionRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<CompletionResponse>;

    /// Sends the request with `stream: true` and returns every chunk once the stream ends.
    async fn create_stream(
        &self,
        request: CompletionRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<Vec<CompletionStreamResponse>>;
}

pub struct CompletionServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl CompletionServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl CompletionService for CompletionServiceImpl {
    async fn create(
        &self,
        mut request: CompletionRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<CompletionResponse> {
        CompletionRequestValidator::validate(&request)?;
        request.stream = false;

        let http_request = RequestBuilder::post("/v1/completions")
            .auth(auth)?
            .json(&request)?
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }

    async fn create_stream(
        &self,
        mut request: CompletionRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<Vec<CompletionStreamResponse>> {
        CompletionRequestValidator::validate(&request)?;
        request.stream = true;

        let http_request = RequestBuilder::post("/v1/completions")
            .auth(auth)?
            .header("Accept", "text/event-stream")?
            .json(&request)?
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse_event_stream(&response)
    }
}
