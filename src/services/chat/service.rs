use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::chat::{
    ChatCompletionRequest, ChatCompletionResponse, ChatCompletionStreamResponse,
    ChatRequestValidator,
};
use crate::transport::{HttpTransport, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait ChatService: Send + Sync {
    async fn create(
        &self,
        request: ChatCompletionRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ChatCompletionResponse>;

    /// Sends the request with `stream: true` and returns every chunk once the stream ends.
    async fn create_stream(
        &self,
        request: ChatCompletionRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<Vec<ChatCompletionStreamResponse>>;
}

pub struct ChatServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl ChatServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    #[instrument(skip_all, fields(model = %request.model))]
    async fn create(
        &self,
        mut request: ChatCompletionRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ChatCompletionResponse> {
        ChatRequestValidator::validate(&request)?;
        request.stream = false;

        let http_request = RequestBuilder::post("/v1/chat/completions")
            .auth(auth)?
            .json(&request)?
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }

    #[instrument(skip_all, fields(model = %request.model))]
    async fn create_stream(
        &self,
        mut request: ChatCompletionRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<Vec<ChatCompletionStreamResponse>> {
        ChatRequestValidator::validate(&request)?;
        request.stream = true;

        let http_request = RequestBuilder::post("/v1/chat/completions")
            .auth(auth)?
            .header("Accept", "text/event-stream")?
            .json(&request)?
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        let chunks = ResponseParser::parse_event_stream(&response)?;
        tracing::debug!(chunks = chunks.len(), "Stream finished");
        Ok(chunks)
    }
}
