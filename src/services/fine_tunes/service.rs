use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::fine_tunes::{
    DeleteFineTuneResponse, FineTuneEventsResponse, FineTuneRequest, FineTuneRequestValidator,
    FineTuneResponse, ListFineTuneResponse,
};
use crate::services::validation::require_path_segment;
use crate::transport::{HttpTransport, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

/// Legacy `/v1/fine-tunes` endpoints.
#[async_trait]
pub trait FineTuneService: Send + Sync {
    async fn create(
        &self,
        request: FineTuneRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuneResponse>;

    async fn list(&self, auth: &Auth, options: &RequestOptions)
        -> OpenAIResult<ListFineTuneResponse>;

    async fn retrieve(
        &self,
        fine_tune_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuneResponse>;

    async fn cancel(
        &self,
        fine_tune_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuneResponse>;

    async fn events(
        &self,
        fine_tune_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuneEventsResponse>;

    /// Deletes a fine-tuned model.
    async fn delete_model(
        &self,
        model: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<DeleteFineTuneResponse>;
}

pub struct FineTuneServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl FineTuneServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl FineTuneService for FineTuneServiceImpl {
    async fn create(
        &self,
        request: FineTuneRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuneResponse> {
        FineTuneRequestValidator::validate(&request)?;

        let http_request = RequestBuilder::post("/v1/fine-tunes")
            .auth(auth)?
            .json(&request)?
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }

    async fn list(
        &self,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ListFineTuneResponse> {
        let request = RequestBuilder::get("/v1/fine-tunes")
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn retrieve(
        &self,
        fine_tune_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuneResponse> {
        require_path_segment("fine_tune_id", fine_tune_id)?;

        let request = RequestBuilder::get(format!("/v1/fine-tunes/{}", fine_tune_id))
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn cancel(
        &self,
        fine_tune_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuneResponse> {
        require_path_segment("fine_tune_id", fine_tune_id)?;

        let request = RequestBuilder::post(format!("/v1/fine-tunes/{}/cancel", fine_tune_id))
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn events(
        &self,
        fine_tune_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuneEventsResponse> {
        require_path_segment("fine_tune_id", fine_tune_id)?;

        let request = RequestBuilder::get(format!("/v1/fine-tunes/{}/events", fine_tune_id))
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn delete_model(
        &self,
        model: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<DeleteFineTuneResponse> {
        require_path_segment("model", model)?;

        let request = RequestBuilder::delete(format!("/v1/models/{}", model))
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }
}
