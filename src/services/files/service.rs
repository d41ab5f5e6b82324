use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::files::{
    DeleteFileResponse, FileRequestValidator, ListFilesResponse, RetrieveFileContentResponse,
    RetrieveFileResponse, UploadFileRequest, UploadFileResponse,
};
use crate::transport::{HttpTransport, MultipartForm, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait FileService: Send + Sync {
    async fn list(&self, auth: &Auth, options: &RequestOptions) -> OpenAIResult<ListFilesResponse>;

    async fn upload(
        &self,
        request: UploadFileRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<UploadFileResponse>;

    async fn delete(
        &self,
        file_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<DeleteFileResponse>;

    async fn retrieve(
        &self,
        file_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<RetrieveFileResponse>;

    async fn content(
        &self,
        file_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<RetrieveFileContentResponse>;
}

pub struct FileServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl FileServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    async fn list(&self, auth: &Auth, options: &RequestOptions) -> OpenAIResult<ListFilesResponse> {
        let request = RequestBuilder::get("/v1/files")
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn upload(
        &self,
        request: UploadFileRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<UploadFileResponse> {
        FileRequestValidator::validate(&request)?;

        let form = MultipartForm::new()
            .text("purpose", request.purpose.as_str())
            .file("file", &request.filename, request.file);

        let http_request = RequestBuilder::post("/v1/files")
            .auth(auth)?
            .multipart(form)
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        ResponseParser::parse(&response)
    }

    async fn delete(
        &self,
        file_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<DeleteFileResponse> {
        FileRequestValidator::validate_file_id(file_id)?;

        let request = RequestBuilder::delete(format!("/v1/files/{}", file_id))
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn retrieve(
        &self,
        file_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<RetrieveFileResponse> {
        FileRequestValidator::validate_file_id(file_id)?;

        let request = RequestBuilder::get(format!("/v1/files/{}", file_id))
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        ResponseParser::parse(&response)
    }

    async fn content(
        &self,
        file_id: &str,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<RetrieveFileContentResponse> {
        FileRequestValidator::validate_file_id(file_id)?;

        let request = RequestBuilder::get(format!("/v1/files/{}/content", file_id))
            .auth(auth)?
            .options(options)
            .build();

        let response = self.transport.send(request).await?;
        Ok(RetrieveFileContentResponse {
            content: ResponseParser::parse_text(&response),
        })
    }
}
