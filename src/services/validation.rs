//! Checks shared by the per-family request validators.

use crate::errors::{OpenAIError, OpenAIResult, ValidationError};

pub(crate) fn require_non_empty(field: &str, value: &str) -> OpenAIResult<()> {
    if value.trim().is_empty() {
        return Err(OpenAIError::Validation(ValidationError::MissingRequiredField(
            field.to_string(),
        )));
    }
    Ok(())
}

/// An id that is interpolated into a URL path must stay a single segment.
pub(crate) fn require_path_segment(field: &str, value: &str) -> OpenAIResult<()> {
    require_non_empty(field, value)?;
    if matches!(value, "." | "..") || value.contains(['/', '?', '#', '%', '\\']) {
        return Err(OpenAIError::Validation(ValidationError::InvalidParameter {
            parameter: field.to_string(),
            reason: format!("not a valid identifier: {:?}", value),
        }));
    }
    Ok(())
}

pub(crate) fn check_range<T>(field: &str, value: Option<T>, min: T, max: T) -> OpenAIResult<()>
where
    T: PartialOrd + ToString + Copy,
{
    match value {
        // Negated so NaN counts as out of range.
        Some(value) if !(value >= min && value <= max) => {
            Err(OpenAIError::Validation(ValidationError::ValueOutOfRange {
                field: field.to_string(),
                min: min.to_string(),
                max: max.to_string(),
                value: value.to_string(),
            }))
        }
        _ => Ok(()),
    }
}

/// Ranges common to the text generation endpoints.
pub(crate) fn check_sampling(
    temperature: Option<f32>,
    top_p: Option<f32>,
    presence_penalty: Option<f32>,
    frequency_penalty: Option<f32>,
) -> OpenAIResult<()> {
    check_range("temperature", temperature, 0.0, 2.0)?;
    check_range("top_p", top_p, 0.0, 1.0)?;
    check_range("presence_penalty", presence_penalty, -2.0, 2.0)?;
    check_range("frequency_penalty", frequency_penalty, -2.0, 2.0)
}
