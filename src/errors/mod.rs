mod categories;
mod error;
mod mapping;
mod result;

pub use categories::{ConfigurationError, TransportError, ValidationError};
pub use error::{OpenAIError, OpenAIResult};
pub use mapping::{ErrorMapper, OpenAIErrorDetail, OpenAIErrorResponse};
pub use result::{ErrorResult, ResponseErrorKind};
