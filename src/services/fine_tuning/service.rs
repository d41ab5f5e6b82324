use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::fine_tuning::{
    FineTuningJobEventsResponse, FineTuningJobObject, FineTuningJobRequest,
    FineTuningQueryParameters, FineTuningRequestValidator, ListFineTuningJobsResponse,
};
use crate::services::validation::require_path_segment;
use crate::transport::{HttpTransport, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

const JOBS_PATH: &str = "/v1/fine_tuning/jobs";

#[async_trait]
pub trait FineTuningService: Send + Sync {
    async fn list(
        &self,
        params: &FineTuningQueryParameters,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ListFineTuningJobsResponse>;

    async fn create(
        &self,
        request: FineTuningJobRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuningJobObject>;

    async fn retrieve(
        &self,
        job_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuningJobObject>;

    async fn cancel(
        &self,
        job_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuningJobObject>;

    async fn events(
        &self,
        job_id: &str,
        params: &FineTuningQueryParameters,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuningJobEventsResponse>;
}

pub struct FineTuningServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl FineTuningServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    fn paged(path: String, params: &FineTuningQueryParameters) -> OpenAIResult<RequestBuilder> {
        FineTuningRequestValidator::validate_query(params)?;
        Ok(RequestBuilder::get(path)
            .query_opt("after", Some(&params.after))
            .query("limit", params.limit))
    }
}

#[async_trait]
impl FineTuningService for FineTuningServiceImpl {
    async fn list(
        &self,
        params: &FineTuningQueryParameters,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ListFineTuningJobsResponse> {
        let request = Self::paged(JOBS_PATH.to_string(), params)?
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn create(
        &self,
        request: FineTuningJobRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuningJobObject> {
        FineTuningRequestValidator::validate(&request)?;

        let http_request = RequestBuilder::post(JOBS_PATH)
            .auth(auth)?
            .json(&request)?
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }

    async fn retrieve(
        &self,
        job_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuningJobObject> {
        require_path_segment("job_id", job_id)?;

        let request = RequestBuilder::get(format!("{}/{}", JOBS_PATH, job_id))
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn cancel(
        &self,
        job_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuningJobObject> {
        require_path_segment("job_id", job_id)?;

        let request = RequestBuilder::post(format!("{}/{}/cancel", JOBS_PATH, job_id))
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn events(
        &self,
        job_id: &str,
        params: &FineTuningQueryParameters,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<FineTuningJobEventsResponse> {
        require_path_segment("job_id", job_id)?;

        let request = Self::paged(format!("{}/{}/events", JOBS_PATH, job_id), params)?
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }
}
