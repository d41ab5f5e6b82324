use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::moderations::{
    ModerationRequestValidator, ModerationsRequest, ModerationsResponse,
};
use crate::transport::{HttpTransport, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ModerationService: Send + Sync {
    async fn create(
        &self,
        request: ModerationsRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ModerationsResponse>;
}

pub struct ModerationServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl ModerationServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ModerationService for ModerationServiceImpl {
    async fn create(
        &self,
        request: ModerationsRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ModerationsResponse> {
        ModerationRequestValidator::validate(&request)?;

        let http_request = RequestBuilder::post("/v1/moderations")
            .auth(auth)?
            .json(&request)?
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }
}
