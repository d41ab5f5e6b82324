use crate::errors::OpenAIResult;
use crate::services::edits::EditRequest;
use crate::services::validation::{check_range, require_non_empty};

pub struct EditRequestValidator;

impl EditRequestValidator {
    pub fn validate(request: &EditRequest) -> OpenAIResult<()> {
        require_non_empty("model", &request.model)?;
        require_non_empty("instruction", &request.instruction)?;
        check_range("temperature", request.temperature, 0.0, 2.0)?;
        check_range("top_p", request.top_p, 0.0, 1.0)?;
        check_range("n", request.n, 1, 20)
    }
}
