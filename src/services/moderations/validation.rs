use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::moderations::{ModerationInput, ModerationsRequest};

pub struct ModerationRequestValidator;

impl ModerationRequestValidator {
    pub fn validate(request: &ModerationsRequest) -> OpenAIResult<()> {
        let empty = match &request.input {
            ModerationInput::Single(text) => text.trim().is_empty(),
            ModerationInput::Multiple(texts) => texts.is_empty(),
        };

        if empty {
            return Err(OpenAIError::Validation(ValidationError::MissingRequiredField(
                "input".to_string(),
            )));
        }

        Ok(())
    }
}
