use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::files::UploadFileRequest;
use crate::services::validation::{require_non_empty, require_path_segment};

pub struct FileRequestValidator;

impl FileRequestValidator {
    const MAX_FILE_SIZE: u64 = 512 * 1024 * 1024;

    pub fn validate(request: &UploadFileRequest) -> OpenAIResult<()> {
        require_non_empty("filename", &request.filename)?;

        if request.file.is_empty() {
            return Err(OpenAIError::Validation(ValidationError::InvalidParameter {
                parameter: "file".to_string(),
                reason: "file cannot be empty".to_string(),
            }));
        }

        let file_size = request.file.len() as u64;
        if file_size > Self::MAX_FILE_SIZE {
            return Err(OpenAIError::Validation(ValidationError::ValueOutOfRange {
                field: "file".to_string(),
                min: "1".to_string(),
                max: Self::MAX_FILE_SIZE.to_string(),
                value: file_size.to_string(),
            }));
        }

        Ok(())
    }

    pub fn validate_file_id(file_id: &str) -> OpenAIResult<()> {
        require_path_segment("file_id", file_id)
    }
}
