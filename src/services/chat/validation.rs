use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::chat::{ChatCompletionRequest, Role};
use crate::services::validation::{check_range, check_sampling, require_non_empty};

pub struct ChatRequestValidator;

impl ChatRequestValidator {
    pub fn validate(request: &ChatCompletionRequest) -> OpenAIResult<()> {
        if request.messages.is_empty() {
            return Err(OpenAIError::Validation(
                ValidationError::MissingRequiredField("messages".to_string()),
            ));
        }

        require_non_empty("model", &request.model)?;

        for message in &request.messages {
            if message.role == Role::Function && message.name.as_deref().map_or(true, str::is_empty)
            {
                return Err(OpenAIError::Validation(ValidationError::InvalidParameter {
                    parameter: "messages".to_string(),
                    reason: "function messages require a name".to_string(),
                }));
            }
        }

        for function in &request.functions {
            require_non_empty("functions.name", &function.name)?;
        }

        check_sampling(
            request.temperature,
            request.top_p,
            request.presence_penalty,
            request.frequency_penalty,
        )?;
        check_range("n", request.n, 1, 128)?;
        check_range("stop", Some(request.stop.len()), 0, 4)
    }
}
