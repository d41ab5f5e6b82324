use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::fine_tunes::FineTuneRequest;
use crate::services::validation::{check_range, require_non_empty};

pub struct FineTuneRequestValidator;

impl FineTuneRequestValidator {
    pub fn validate(request: &FineTuneRequest) -> OpenAIResult<()> {
        require_non_empty("training_file", &request.training_file)?;
        check_range("n_epochs", request.n_epochs, 1, 50)?;

        if request.compute_classification_metrics == Some(true)
            && request.classification_n_classes.is_none()
        {
            return Err(OpenAIError::Validation(ValidationError::InvalidParameter {
                parameter: "classification_n_classes".to_string(),
                reason: "required when compute_classification_metrics is set".to_string(),
            }));
        }

        Ok(())
    }
}
