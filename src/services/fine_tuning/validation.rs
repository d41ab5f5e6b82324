use crate::errors::OpenAIResult;
use crate::services::fine_tuning::{FineTuningJobRequest, FineTuningQueryParameters};
use crate::services::validation::{check_range, require_non_empty};

pub struct FineTuningRequestValidator;

impl FineTuningRequestValidator {
    pub fn validate(request: &FineTuningJobRequest) -> OpenAIResult<()> {
        require_non_empty("model", &request.model)?;
        require_non_empty("training_file", &request.training_file)?;

        if let Some(suffix) = &request.suffix {
            check_range("suffix", Some(suffix.len()), 1, 40)?;
        }

        Ok(())
    }

    pub fn validate_query(params: &FineTuningQueryParameters) -> OpenAIResult<()> {
        check_range("limit", Some(params.limit), 1, 100)
    }
}
