use crate::errors::OpenAIResult;
use crate::services::completions::CompletionRequest;
use crate::services::validation::{check_range, check_sampling, require_non_empty};

pub struct CompletionRequestValidator;

impl CompletionRequestValidator {
    pub fn validate(request: &CompletionRequest) -> OpenAIResult<()> {
        require_non_empty("model", &request.model)?;
        check_sampling(
            request.temperature,
            request.top_p,
            request.presence_penalty,
            request.frequency_penalty,
        )?;
        check_range("n", request.n, 1, 128)?;
        check_range("logprobs", request.logprobs, 0, 5)?;
        check_range("stop", Some(request.stop.len()), 0, 4)
    }
}
