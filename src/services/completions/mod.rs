mod service;
mod types;
mod validation;


pub use service::{CompletionService, CompletionServiceImpl};
pub use types::{
    BaseChoice, Choice, CompletionRequest, CompletionResponse, CompletionResponseBase,
    CompletionStreamResponse, LogProbs,
};
pub use validation::CompletionRequestValidator;
