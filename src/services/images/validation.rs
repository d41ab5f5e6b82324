use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::images::{ImageEditRequest, ImageRequest, ImageVariationRequest};
use crate::services::validation::{check_range, require_non_empty};
use bytes::Bytes;

pub struct ImageRequestValidator;

impl ImageRequestValidator {
    pub fn validate_generation(request: &ImageRequest) -> OpenAIResult<()> {
        require_non_empty("prompt", &request.prompt)?;
        check_range("n", request.n, 1, 10)
    }

    pub fn validate_edit(request: &ImageEditRequest) -> OpenAIResult<()> {
        require_image("image", &request.image)?;
        require_non_empty("image_name", &request.image_name)?;
        require_non_empty("prompt", &request.prompt)?;
        check_range("n", request.n, 1, 10)
    }

    pub fn validate_variation(request: &ImageVariationRequest) -> OpenAIResult<()> {
        require_image("image", &request.image)?;
        require_non_empty("image_name", &request.image_name)?;
        check_range("n", request.n, 1, 10)
    }
}

fn require_image(field: &str, data: &Bytes) -> OpenAIResult<()> {
    if data.is_empty() {
        return Err(OpenAIError::Validation(ValidationError::MissingRequiredField(
            field.to_string(),
        )));
    }
    Ok(())
}
