use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::audio::{AudioTranscriptionRequest, AudioTranslationRequest};
use crate::services::validation::{check_range, require_non_empty};

pub struct AudioRequestValidator;

impl AudioRequestValidator {
    pub fn validate_transcription(request: &AudioTranscriptionRequest) -> OpenAIResult<()> {
        validate_upload(&request.file, &request.filename, &request.model)?;
        check_range("temperature", request.temperature, 0.0, 1.0)
    }

    pub fn validate_translation(request: &AudioTranslationRequest) -> OpenAIResult<()> {
        validate_upload(&request.file, &request.filename, &request.model)?;
        check_range("temperature", request.temperature, 0.0, 1.0)
    }
}

fn validate_upload(file: &[u8], filename: &str, model: &str) -> OpenAIResult<()> {
    if file.is_empty() {
        return Err(OpenAIError::Validation(
            ValidationError::MissingRequiredField("file".to_string()),
        ));
    }
    require_non_empty("filename", filename)?;
    require_non_empty("model", model)
}
