use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::edits::{EditRequest, EditRequestValidator, EditResponse};
use crate::transport::{HttpTransport, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait EditService: Send + Sync {
    async fn create(
        &self,
        request: EditRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<EditResponse>;
}

pub struct EditServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl EditServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl EditService for EditServiceImpl {
    async fn create(
        &self,
        request: EditRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<EditResponse> {
        EditRequestValidator::validate(&request)?;

        let http_request = RequestBuilder::post("/v1/edits")
            .auth(auth)?
            .json(&request)?
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }
}
