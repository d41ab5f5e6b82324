use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::embeddings::EmbeddingsRequest;
use crate::services::validation::require_non_empty;

pub struct EmbeddingsRequestValidator;

impl EmbeddingsRequestValidator {
    pub fn validate(request: &EmbeddingsRequest) -> OpenAIResult<()> {
        require_non_empty("model", &request.model)?;

        if request.input.is_empty() {
            return Err(OpenAIError::Validation(
                ValidationError::MissingRequiredField("input".to_string()),
            ));
        }

        if let Some(dimensions) = request.dimensions {
            if dimensions == 0 {
                return Err(OpenAIError::Validation(ValidationError::InvalidParameter {
                    parameter: "dimensions".to_string(),
                    reason: "must be greater than 0".to_string(),
                }));
            }
        }

        Ok(())
    }
}
