use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::images::{
    ImageEditRequest, ImageEditResponse, ImageRequest, ImageRequestValidator, ImageResponse,
    ImageVariationRequest, ImageVariationResponse,
};
use crate::transport::{HttpTransport, MultipartForm, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ImageService: Send + Sync {
    async fn generate(
        &self,
        request: ImageRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ImageResponse>;

    async fn edit(
        &self,
        request: ImageEditRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ImageEditResponse>;

    async fn variation(
        &self,
        request: ImageVariationRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ImageVariationResponse>;
}

pub struct ImageServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl ImageServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ImageService for ImageServiceImpl {
    async fn generate(
        &self,
        request: ImageRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ImageResponse> {
        ImageRequestValidator::validate_generation(&request)?;

        let http_request = RequestBuilder::post("/v1/images/generations")
            .auth(auth)?
            .json(&request)?
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }

    async fn edit(
        &self,
        request: ImageEditRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ImageEditResponse> {
        ImageRequestValidator::validate_edit(&request)?;

        let mut form = MultipartForm::new()
            .file("image", &request.image_name, request.image)
            .text("prompt", request.prompt);
        if let Some(mask) = request.mask {
            form = form.file("mask", "mask.png", mask);
        }
        let form = form
            .text_opt("model", request.model)
            .text_opt("n", request.n)
            .text_opt("size", request.size.map(|s| s.as_str()))
            .text_opt("response_format", request.response_format.map(|f| f.as_str()))
            .text_opt("user", request.user);

        let http_request = RequestBuilder::post("/v1/images/edits")
            .auth(auth)?
            .multipart(form)
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }

    async fn variation(
        &self,
        request: ImageVariationRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<ImageVariationResponse> {
        ImageRequestValidator::validate_variation(&request)?;

        let form = MultipartForm::new()
            .file("image", &request.image_name, request.image)
            .text_opt("model", request.model)
            .text_opt("n", request.n)
            .text_opt("size", request.size.map(|s| s.as_str()))
            .text_opt("response_format", request.response_format.map(|f| f.as_str()))
            .text_opt("user", request.user);

        let http_request = RequestBuilder::post("/v1/images/variations")
            .auth(auth)?
            .multipart(form)
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }
}
