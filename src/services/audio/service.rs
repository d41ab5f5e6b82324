use crate::auth::Auth;
use crate::errors::OpenAIResult;
use crate::services::audio::{
    AudioRequestValidator, AudioResponseFormat, AudioTranscriptionRequest,
    AudioTranscriptionResponse, AudioTranslationRequest, AudioTranslationResponse,
};
use crate::transport::{HttpResponse, HttpTransport, MultipartForm, RequestBuilder, ResponseParser};
use crate::types::RequestOptions;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait AudioService: Send + Sync {
    async fn transcribe(
        &self,
        request: AudioTranscriptionRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<AudioTranscriptionResponse>;

    async fn translate(
        &self,
        request: AudioTranslationRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<AudioTranslationResponse>;
}

pub struct AudioServiceImpl {
    transport: Arc<dyn HttpTransport>,
}

impl AudioServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

/// Plain-text formats carry the transcript as the whole body.
fn text_of(response: &HttpResponse, format: Option<AudioResponseFormat>) -> OpenAIResult<String> {
    match format {
        Some(format) if !format.is_json() => Ok(ResponseParser::parse_text(response)),
        _ => {
            let parsed: AudioTranscriptionResponse = ResponseParser::parse(response)?;
            Ok(parsed.text)
        }
    }
}

#[async_trait]
impl AudioService for AudioServiceImpl {
    async fn transcribe(
        &self,
        request: AudioTranscriptionRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<AudioTranscriptionResponse> {
        AudioRequestValidator::validate_transcription(&request)?;
        let format = request.response_format;

        let form = MultipartForm::new()
            .file("file", &request.filename, request.file)
            .text("model", request.model)
            .text_opt("language", request.language)
            .text_opt("prompt", request.prompt)
            .text_opt("response_format", format.map(|f| f.as_str()))
            .text_opt("temperature", request.temperature);

        let http_request = RequestBuilder::post("/v1/audio/transcriptions")
            .auth(auth)?
            .multipart(form)
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        Ok(AudioTranscriptionResponse {
            text: text_of(&response, format)?,
        })
    }

    async fn translate(
        &self,
        request: AudioTranslationRequest,
        auth: &Auth,
        options: &RequestOptions,
    ) -> OpenAIResult<AudioTranslationResponse> {
        AudioRequestValidator::validate_translation(&request)?;
        let format = request.response_format;

        let form = MultipartForm::new()
            .file("file", &request.filename, request.file)
            .text("model", request.model)
            .text_opt("prompt", request.prompt)
            .text_opt("response_format", format.map(|f| f.as_str()))
            .text_opt("temperature", request.temperature);

        let http_request = RequestBuilder::post("/v1/audio/translations")
            .auth(auth)?
            .multipart(form)
            .options(options)
            .build();

        let response = self.transport.send(http_request).await?;
        Ok(AudioTranslationResponse {
            text: text_of(&response, format)?,
        })
    }
}
